//! Error types for calendar construction and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil/Hebrew date construction or parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month or day outside the Gregorian calendar.
    InvalidCivilDate { year: i32, month: u32, day: u32 },
    /// Year, month or day outside the Hebrew calendar.
    InvalidHebrewDate { year: i32, month: u32, day: u32 },
    /// Text could not be parsed as a date.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCivilDate { year, month, day } => {
                write!(f, "invalid civil date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidHebrewDate { year, month, day } => {
                write!(f, "invalid Hebrew date: year {year}, month {month}, day {day}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_civil() {
        let e = TimeError::InvalidCivilDate {
            year: 2023,
            month: 2,
            day: 30,
        };
        assert_eq!(e.to_string(), "invalid civil date: 2023-02-30");
    }

    #[test]
    fn display_hebrew() {
        let e = TimeError::InvalidHebrewDate {
            year: 5783,
            month: 13,
            day: 1,
        };
        assert_eq!(e.to_string(), "invalid Hebrew date: year 5783, month 13, day 1");
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_impl<T: Send + Sync + Error>() {}
        assert_impl::<TimeError>();
    }
}
