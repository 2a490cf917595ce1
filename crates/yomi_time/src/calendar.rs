//! Hebrew calendar capability and its arithmetic implementation.
//!
//! Calculations that need Hebrew dates or holy days take a
//! `&impl HebrewCalendar` (or `&dyn HebrewCalendar`) rather than calling the
//! arithmetic directly, so another calendar source can be substituted.

use crate::civil::{CivilDate, Weekday};
use crate::error::TimeError;
use crate::hebrew::HebrewDate;
use crate::holy_day::{HolyDay, holy_day_for};

/// Conversions between civil and Hebrew dates plus holy-day lookup.
pub trait HebrewCalendar {
    /// Hebrew date of a civil date.
    fn to_hebrew(&self, date: CivilDate) -> Result<HebrewDate, TimeError>;

    /// Civil date of a Hebrew date.
    fn to_civil(&self, date: HebrewDate) -> CivilDate;

    /// Holy day (if any) that a civil date falls on.
    fn holy_day(&self, date: CivilDate) -> Option<HolyDay>;
}

/// The fixed arithmetic Hebrew calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArithmeticCalendar;

impl HebrewCalendar for ArithmeticCalendar {
    fn to_hebrew(&self, date: CivilDate) -> Result<HebrewDate, TimeError> {
        HebrewDate::from_jdn(date.jdn())
    }

    fn to_civil(&self, date: HebrewDate) -> CivilDate {
        CivilDate::from_jdn(date.to_jdn())
    }

    fn holy_day(&self, date: CivilDate) -> Option<HolyDay> {
        let hebrew = self.to_hebrew(date).ok()?;
        holy_day_for(hebrew, date.weekday())
    }
}

/// A civil date resolved against a Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JewishDate {
    /// Gregorian date.
    pub civil: CivilDate,
    /// Hebrew date of the same day.
    pub hebrew: HebrewDate,
    /// Holy day falling on this date, if any.
    pub holy_day: Option<HolyDay>,
}

impl JewishDate {
    /// Resolve a civil date.
    pub fn resolve<C: HebrewCalendar + ?Sized>(
        calendar: &C,
        civil: CivilDate,
    ) -> Result<Self, TimeError> {
        Ok(Self {
            civil,
            hebrew: calendar.to_hebrew(civil)?,
            holy_day: calendar.holy_day(civil),
        })
    }

    /// Resolve a Hebrew date.
    pub fn from_hebrew<C: HebrewCalendar + ?Sized>(calendar: &C, hebrew: HebrewDate) -> Self {
        let civil = calendar.to_civil(hebrew);
        Self {
            civil,
            hebrew,
            holy_day: calendar.holy_day(civil),
        }
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.civil.weekday()
    }
}
