//! Gregorian calendar date without time of day.
//!
//! Provides `CivilDate`, the date type accepted by every calculation in the
//! workspace. Dates are compared and differenced through their Julian Day
//! Number.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{civil_to_jdn, days_in_civil_month, jdn_to_civil, weekday_index};

/// Gregorian calendar date.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Create a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !is_valid(year, month, day) {
            return Err(TimeError::InvalidCivilDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Date for use in constants. Panics (at compile time in a `const`) on an
    /// invalid date.
    pub const fn constant(year: i32, month: u32, day: u32) -> Self {
        assert!(is_valid(year, month, day), "invalid civil date");
        Self { year, month, day }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// Date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_civil(jdn);
        Self { year, month, day }
    }

    /// Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        civil_to_jdn(self.year, self.month, self.day)
    }

    /// Date `days` later (earlier if negative).
    pub fn add_days(self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }

    /// Whole days from `earlier` to `self` (negative if `earlier` is later).
    pub fn days_since(self, earlier: CivilDate) -> i64 {
        self.jdn() - earlier.jdn()
    }

    /// Day of the week.
    pub fn weekday(self) -> Weekday {
        ALL_WEEKDAYS[weekday_index(self.jdn()) as usize]
    }
}

const fn is_valid(year: i32, month: u32, day: u32) -> bool {
    day >= 1 && day <= days_in_civil_month(year, month)
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`. A trailing `T...` time component is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = s.split('T').next().unwrap_or(s);
        let parts: Vec<&str> = date.split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|e| TimeError::Parse(format!("year '{}': {e}", parts[0])))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| TimeError::Parse(format!("month '{}': {e}", parts[1])))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|e| TimeError::Parse(format!("day '{}': {e}", parts[2])))?;
        Self::new(year, month, day)
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Shabbos,
}

/// All weekdays in order (index 0 = Sunday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Shabbos,
];

impl Weekday {
    /// English name ("Shabbos" for Saturday).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Shabbos => "Shabbos",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_february_30() {
        assert!(CivilDate::new(2024, 2, 30).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2023, 2, 29).is_err());
    }

    #[test]
    fn constant_matches_new() {
        const LEAP_DAY: CivilDate = CivilDate::constant(2024, 2, 29);
        assert_eq!(LEAP_DAY, CivilDate::new(2024, 2, 29).unwrap());
        assert_eq!((LEAP_DAY.year(), LEAP_DAY.month(), LEAP_DAY.day()), (2024, 2, 29));
    }

    #[test]
    #[should_panic(expected = "invalid civil date")]
    fn constant_rejects_invalid_date() {
        let _ = CivilDate::constant(2023, 2, 29);
    }

    #[test]
    fn rejects_month_zero_and_13() {
        assert!(CivilDate::new(2024, 0, 1).is_err());
        assert!(CivilDate::new(2024, 13, 1).is_err());
    }

    #[test]
    fn add_days_crosses_year() {
        let d = CivilDate::new(2023, 12, 31).unwrap();
        assert_eq!(d.add_days(1), CivilDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.add_days(-365), CivilDate::new(2022, 12, 31).unwrap());
    }

    #[test]
    fn days_since_is_signed() {
        let a = CivilDate::new(1980, 2, 2).unwrap();
        let b = CivilDate::new(1980, 3, 2).unwrap();
        assert_eq!(b.days_since(a), 29);
        assert_eq!(a.days_since(b), -29);
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CivilDate::new(2022, 12, 31).unwrap();
        let b = CivilDate::new(2023, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn weekday_of_epoch() {
        let d = CivilDate::new(1980, 2, 2).unwrap();
        assert_eq!(d.weekday(), Weekday::Shabbos);
    }

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "2024-01-01".parse().unwrap();
        assert_eq!(d, CivilDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.to_string(), "2024-01-01");
        let with_time: CivilDate = "2024-03-20T12:00:00Z".parse().unwrap();
        assert_eq!(with_time.to_string(), "2024-03-20");
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("2024/01/01".parse::<CivilDate>(), Err(TimeError::Parse(_))));
        assert!(matches!("2024-xx-01".parse::<CivilDate>(), Err(TimeError::Parse(_))));
        assert!(matches!(
            "2024-02-31".parse::<CivilDate>(),
            Err(TimeError::InvalidCivilDate { .. })
        ));
    }
}
