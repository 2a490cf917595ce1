//! Arithmetic Hebrew calendar.
//!
//! Years are counted from the creation epoch (AM). New year is placed by the
//! molad of Tishrei with the four postponement rules; the year-length
//! correction keeps every year at 353-355 or 383-385 days.
//!
//! Months are numbered Nisan = 1 .. Adar = 12, Adar II = 13, while the year
//! itself begins with Tishrei (7). In a leap year `Adar` is Adar I.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;

/// Julian Day Number of the Hebrew epoch, 1 Tishrei AM 1.
pub const HEBREW_EPOCH_JDN: i64 = 347_998;

/// Parts (chalakim) in an hour.
const PARTS_PER_HOUR: i64 = 1080;

/// Parts in a day.
const PARTS_PER_DAY: i64 = 24 * PARTS_PER_HOUR;

/// Hebrew months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum HebrewMonth {
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
    Tishrei,
    Cheshvan,
    Kislev,
    Teves,
    Shevat,
    Adar,
    AdarII,
}

/// All months by number (index 0 = Nisan = month 1).
pub const ALL_HEBREW_MONTHS: [HebrewMonth; 13] = [
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Teves,
    HebrewMonth::Shevat,
    HebrewMonth::Adar,
    HebrewMonth::AdarII,
];

/// Months of a common year in the order they occur, Tishrei first.
const COMMON_YEAR_ORDER: [HebrewMonth; 12] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Teves,
    HebrewMonth::Shevat,
    HebrewMonth::Adar,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

/// Months of a leap year in the order they occur, Tishrei first.
const LEAP_YEAR_ORDER: [HebrewMonth; 13] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Teves,
    HebrewMonth::Shevat,
    HebrewMonth::Adar,
    HebrewMonth::AdarII,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

impl HebrewMonth {
    /// 1-based month number (Nisan = 1 .. Adar II = 13).
    pub const fn number(self) -> u32 {
        match self {
            Self::Nisan => 1,
            Self::Iyar => 2,
            Self::Sivan => 3,
            Self::Tammuz => 4,
            Self::Av => 5,
            Self::Elul => 6,
            Self::Tishrei => 7,
            Self::Cheshvan => 8,
            Self::Kislev => 9,
            Self::Teves => 10,
            Self::Shevat => 11,
            Self::Adar => 12,
            Self::AdarII => 13,
        }
    }

    /// Month for a 1-based number.
    pub fn from_number(n: u32) -> Option<Self> {
        if (1..=13).contains(&n) {
            Some(ALL_HEBREW_MONTHS[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Transliterated name. `Adar` is reported as "Adar I" in leap years.
    pub fn name(self, leap: bool) -> &'static str {
        match self {
            Self::Nisan => "Nisan",
            Self::Iyar => "Iyar",
            Self::Sivan => "Sivan",
            Self::Tammuz => "Tammuz",
            Self::Av => "Av",
            Self::Elul => "Elul",
            Self::Tishrei => "Tishrei",
            Self::Cheshvan => "Cheshvan",
            Self::Kislev => "Kislev",
            Self::Teves => "Teves",
            Self::Shevat => "Shevat",
            Self::Adar if leap => "Adar I",
            Self::Adar => "Adar",
            Self::AdarII => "Adar II",
        }
    }
}

/// Whether `year` has thirteen months (years 3, 6, 8, 11, 14, 17, 19 of
/// the 19-year cycle).
pub fn is_hebrew_leap(year: i32) -> bool {
    (7 * year as i64 + 1).rem_euclid(19) < 7
}

/// Months in `year` in calendar order starting from Tishrei.
pub fn months_in_year(year: i32) -> &'static [HebrewMonth] {
    if is_hebrew_leap(year) {
        &LEAP_YEAR_ORDER
    } else {
        &COMMON_YEAR_ORDER
    }
}

/// Days from the epoch to the new year of `year`, with the lo-ADU
/// postponement applied.
fn elapsed_days(year: i32) -> i64 {
    let months_elapsed = (235 * year as i64 - 234).div_euclid(19);
    let parts_elapsed = 12_084 + 13_753 * months_elapsed;
    let days = 29 * months_elapsed + parts_elapsed.div_euclid(PARTS_PER_DAY);
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Extra delay keeping year lengths legal (GaTaRaD and BeTUTaKPaT).
fn year_length_correction(year: i32) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Julian Day Number of 1 Tishrei of `year`.
pub fn new_year_jdn(year: i32) -> i64 {
    HEBREW_EPOCH_JDN + elapsed_days(year) + year_length_correction(year)
}

/// Number of days in `year` (353-355 or 383-385).
pub fn days_in_hebrew_year(year: i32) -> i64 {
    new_year_jdn(year + 1) - new_year_jdn(year)
}

/// Whether Cheshvan has 30 days in `year`.
pub fn is_long_cheshvan(year: i32) -> bool {
    matches!(days_in_hebrew_year(year), 355 | 385)
}

/// Whether Kislev has 29 days in `year`.
pub fn is_short_kislev(year: i32) -> bool {
    matches!(days_in_hebrew_year(year), 353 | 383)
}

/// Number of days in `month` of `year`.
pub fn days_in_hebrew_month(year: i32, month: HebrewMonth) -> u32 {
    match month {
        HebrewMonth::Iyar
        | HebrewMonth::Tammuz
        | HebrewMonth::Elul
        | HebrewMonth::Teves
        | HebrewMonth::AdarII => 29,
        HebrewMonth::Adar if !is_hebrew_leap(year) => 29,
        HebrewMonth::Cheshvan if !is_long_cheshvan(year) => 29,
        HebrewMonth::Kislev if is_short_kislev(year) => 29,
        _ => 30,
    }
}

/// Hebrew calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u32,
}

impl HebrewDate {
    /// Create a validated date from an explicit `(year, month, day)` triple.
    pub fn new(year: i32, month: HebrewMonth, day: u32) -> Result<Self, TimeError> {
        let invalid = TimeError::InvalidHebrewDate {
            year,
            month: month.number(),
            day,
        };
        if year < 1 {
            return Err(invalid);
        }
        if month == HebrewMonth::AdarII && !is_hebrew_leap(year) {
            return Err(invalid);
        }
        if day == 0 || day > days_in_hebrew_month(year, month) {
            return Err(invalid);
        }
        Ok(Self { year, month, day })
    }

    /// Same month and day in another year, as a new value.
    pub fn with_year(self, year: i32) -> Result<Self, TimeError> {
        Self::new(year, self.month, self.day)
    }

    /// Hebrew year (AM).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Hebrew month.
    pub fn month(self) -> HebrewMonth {
        self.month
    }

    /// Day of the month (1..=30).
    pub fn day(self) -> u32 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn to_jdn(self) -> i64 {
        let before: i64 = months_in_year(self.year)
            .iter()
            .take_while(|&&m| m != self.month)
            .map(|&m| days_in_hebrew_month(self.year, m) as i64)
            .sum();
        new_year_jdn(self.year) + before + self.day as i64 - 1
    }

    /// Hebrew date for a Julian Day Number on or after the Hebrew epoch.
    pub fn from_jdn(jdn: i64) -> Result<Self, TimeError> {
        // Mean year = 35975351 / 98496 days.
        let approx = ((jdn - HEBREW_EPOCH_JDN) * 98_496).div_euclid(35_975_351) + 1;
        let mut year = (approx - 1) as i32;
        while new_year_jdn(year + 1) <= jdn {
            year += 1;
        }
        if year < 1 {
            let (y, m, d) = crate::julian::jdn_to_civil(jdn);
            return Err(TimeError::InvalidCivilDate {
                year: y,
                month: m,
                day: d,
            });
        }

        let mut remaining = jdn - new_year_jdn(year);
        for &month in months_in_year(year) {
            let len = days_in_hebrew_month(year, month) as i64;
            if remaining < len {
                return Ok(Self {
                    year,
                    month,
                    day: (remaining + 1) as u32,
                });
            }
            remaining -= len;
        }
        unreachable!("month walk covers every day of the year")
    }

    /// Whether this date falls in a leap year.
    pub fn is_leap_year(self) -> bool {
        is_hebrew_leap(self.year)
    }
}

impl Display for HebrewDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.day,
            self.month.name(self.is_leap_year()),
            self.year
        )
    }
}
