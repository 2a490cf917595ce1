//! Yerushalmi Daf Yomi lookup: page for a date, cycle info, and schedules.
//!
//! All functions accept civil dates (or dates already resolved to a
//! [`JewishDate`]) and a Hebrew calendar. `Ok(None)` means the date has no
//! assigned page.

use tracing::info;
use yomi_time::{CivilDate, HebrewCalendar, JewishDate};

use crate::cycle::{cycle_origin, ensure_not_before_epoch};
use crate::daf_types::{CycleOrigin, Daf, DayReading};
use crate::error::DafError;
use crate::page::map_offset_to_daf;

/// Page assigned to an already-resolved date.
pub fn daf_for_jewish_date<C: HebrewCalendar + ?Sized>(
    calendar: &C,
    date: &JewishDate,
) -> Result<Option<Daf>, DafError> {
    match cycle_origin(calendar, date)? {
        Some(origin) => map_offset_to_daf(origin.offset).map(Some),
        None => Ok(None),
    }
}

/// Page assigned to a civil date.
///
/// Dates before the epoch fail with [`DafError::OutOfRange`] without being
/// handed to the calendar.
pub fn yerushalmi_daf_for_date<C: HebrewCalendar + ?Sized>(
    calendar: &C,
    date: CivilDate,
) -> Result<Option<Daf>, DafError> {
    ensure_not_before_epoch(date)?;
    let resolved = JewishDate::resolve(calendar, date)?;
    daf_for_jewish_date(calendar, &resolved)
}

/// Cycle number, bounds, and offset for a civil date.
pub fn cycle_info_for_date<C: HebrewCalendar + ?Sized>(
    calendar: &C,
    date: CivilDate,
) -> Result<Option<CycleOrigin>, DafError> {
    ensure_not_before_epoch(date)?;
    let resolved = JewishDate::resolve(calendar, date)?;
    cycle_origin(calendar, &resolved)
}

/// Pages for `days` consecutive dates starting at `start`.
pub fn daf_schedule<C: HebrewCalendar + ?Sized>(
    calendar: &C,
    start: CivilDate,
    days: u32,
) -> Result<Vec<DayReading>, DafError> {
    info!(%start, days, "building schedule");
    (0..days as i64)
        .map(|i| -> Result<DayReading, DafError> {
            let date = start.add_days(i);
            Ok(DayReading {
                date,
                daf: yerushalmi_daf_for_date(calendar, date)?,
            })
        })
        .collect()
}
