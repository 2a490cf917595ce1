//! Civil and Hebrew calendar support for the yomi daf calculator.
//!
//! This crate provides:
//! - Julian Day Number conversions for the proleptic Gregorian calendar
//! - A validated `CivilDate` with day arithmetic and weekday lookup
//! - The arithmetic Hebrew calendar (`HebrewDate`, month and year lengths)
//! - Holy-day classification, including fast-day postponements
//! - The `HebrewCalendar` capability trait and `ArithmeticCalendar`

pub mod calendar;
pub mod civil;
pub mod error;
pub mod hebrew;
pub mod holy_day;
pub mod julian;

pub use calendar::{ArithmeticCalendar, HebrewCalendar, JewishDate};
pub use civil::{ALL_WEEKDAYS, CivilDate, Weekday};
pub use error::TimeError;
pub use hebrew::{
    ALL_HEBREW_MONTHS, HEBREW_EPOCH_JDN, HebrewDate, HebrewMonth, days_in_hebrew_month,
    days_in_hebrew_year, is_hebrew_leap, months_in_year, new_year_jdn,
};
pub use holy_day::{HolyDay, holy_day_for};
pub use julian::{J2000_JDN, civil_to_jdn, jdn_to_civil, weekday_index};
