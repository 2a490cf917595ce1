//! Cycle boundary search.
//!
//! Each cycle is `WHOLE_SHAS_PAGES` reading-days long. Excluded holy days
//! inside a cycle push its end forward by one calendar day each, so the
//! boundaries are found by walking forward from the epoch.

use tracing::debug;
use yomi_time::{CivilDate, HebrewCalendar, JewishDate, TimeError};

use crate::daf_types::CycleOrigin;
use crate::error::DafError;
use crate::masechta::WHOLE_SHAS_PAGES;
use crate::special_days::{count_special_days, is_excluded};

/// First day of the first Yerushalmi Daf Yomi cycle (15 Shevat 5740).
pub const YERUSHALMI_EPOCH: CivilDate = CivilDate::constant(1980, 2, 2);

pub(crate) fn ensure_not_before_epoch(date: CivilDate) -> Result<(), DafError> {
    if date < YERUSHALMI_EPOCH {
        return Err(DafError::OutOfRange {
            date,
            epoch: YERUSHALMI_EPOCH,
        });
    }
    Ok(())
}

/// Start of the cycle after the one starting at `start`.
///
/// The extension is repeated until it stops growing, so an excluded day
/// that lands in the extension itself is also skipped.
pub fn next_cycle_start<C: HebrewCalendar + ?Sized>(
    calendar: &C,
    start: CivilDate,
) -> Result<CivilDate, TimeError> {
    let nominal = start.add_days(WHOLE_SHAS_PAGES as i64);
    let mut skipped = 0;
    loop {
        let end = nominal.add_days(skipped as i64);
        let counted = count_special_days(calendar, start, end)?;
        if counted == skipped {
            return Ok(end);
        }
        skipped = counted;
    }
}

/// Locate a date within its cycle.
///
/// Returns `Ok(None)` when the date is an excluded holy day, and
/// [`DafError::OutOfRange`] for dates before [`YERUSHALMI_EPOCH`]. A date
/// that is itself a cycle boundary starts the new cycle at offset 0.
pub fn cycle_origin<C: HebrewCalendar + ?Sized>(
    calendar: &C,
    target: &JewishDate,
) -> Result<Option<CycleOrigin>, DafError> {
    if is_excluded(target.holy_day) {
        debug!(date = %target.civil, "no reading on excluded holy day");
        return Ok(None);
    }
    let date = target.civil;
    ensure_not_before_epoch(date)?;

    let mut cycle = 0;
    let mut next = YERUSHALMI_EPOCH;
    let start = loop {
        let prev = next;
        cycle += 1;
        next = next_cycle_start(calendar, prev)?;
        debug!(cycle, %prev, %next, "cycle boundary");
        if next > date {
            break prev;
        }
    };

    let raw = date.days_since(start);
    let skipped = count_special_days(calendar, start, date)? as i64;
    let adjusted = raw - skipped;
    let offset = u32::try_from(adjusted)
        .ok()
        .filter(|&o| o < WHOLE_SHAS_PAGES)
        .ok_or(DafError::TableExhausted { offset: adjusted })?;

    debug!(cycle, %start, raw, skipped, offset, "cycle origin");
    Ok(Some(CycleOrigin {
        cycle,
        start,
        next_start: next,
        offset,
    }))
}
