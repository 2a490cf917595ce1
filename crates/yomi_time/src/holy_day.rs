//! Named holy days and fasts of the Hebrew calendar.
//!
//! Multi-day festivals (Sukkos, Pesach, Chanukah) report the same variant on
//! every day. Fasts that would fall on Shabbos are moved: Gedalyah, 17 Tammuz
//! and Tisha B'Av to Sunday, the Fast of Esther back to Thursday.

use crate::civil::Weekday;
use crate::hebrew::{HebrewDate, HebrewMonth, is_short_kislev};

/// Holy days recognised by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum HolyDay {
    RoshHashanah,
    FastOfGedalyah,
    YomKippur,
    Sukkos,
    SheminiAtzeres,
    Chanukah,
    TenthOfTeves,
    TuBiShvat,
    FastOfEsther,
    Purim,
    ShushanPurim,
    Pesach,
    Shavuos,
    SeventeenthOfTammuz,
    TishaBav,
}

impl HolyDay {
    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RoshHashanah => "Rosh Hashanah",
            Self::FastOfGedalyah => "Fast of Gedalyah",
            Self::YomKippur => "Yom Kippur",
            Self::Sukkos => "Sukkos",
            Self::SheminiAtzeres => "Shemini Atzeres",
            Self::Chanukah => "Chanukah",
            Self::TenthOfTeves => "Asarah B'Teves",
            Self::TuBiShvat => "Tu B'Shvat",
            Self::FastOfEsther => "Fast of Esther",
            Self::Purim => "Purim",
            Self::ShushanPurim => "Shushan Purim",
            Self::Pesach => "Pesach",
            Self::Shavuos => "Shavuos",
            Self::SeventeenthOfTammuz => "Seventeenth of Tammuz",
            Self::TishaBav => "Tisha B'Av",
        }
    }
}

/// Classify a Hebrew date that falls on `weekday`.
pub fn holy_day_for(date: HebrewDate, weekday: Weekday) -> Option<HolyDay> {
    let day = date.day();
    let shabbos = weekday == Weekday::Shabbos;
    let sunday = weekday == Weekday::Sunday;
    // Purim month is Adar II in a leap year.
    let purim_month = if date.is_leap_year() {
        HebrewMonth::AdarII
    } else {
        HebrewMonth::Adar
    };

    match date.month() {
        HebrewMonth::Tishrei => match day {
            1 | 2 => Some(HolyDay::RoshHashanah),
            3 if !shabbos => Some(HolyDay::FastOfGedalyah),
            4 if sunday => Some(HolyDay::FastOfGedalyah),
            10 => Some(HolyDay::YomKippur),
            15..=21 => Some(HolyDay::Sukkos),
            22 => Some(HolyDay::SheminiAtzeres),
            _ => None,
        },
        HebrewMonth::Kislev if day >= 25 => Some(HolyDay::Chanukah),
        HebrewMonth::Teves => {
            let last_chanukah_day = if is_short_kislev(date.year()) { 3 } else { 2 };
            match day {
                d if d <= last_chanukah_day => Some(HolyDay::Chanukah),
                10 => Some(HolyDay::TenthOfTeves),
                _ => None,
            }
        }
        HebrewMonth::Shevat if day == 15 => Some(HolyDay::TuBiShvat),
        m if m == purim_month => match day {
            11 if weekday == Weekday::Thursday => Some(HolyDay::FastOfEsther),
            13 if !shabbos => Some(HolyDay::FastOfEsther),
            14 => Some(HolyDay::Purim),
            15 => Some(HolyDay::ShushanPurim),
            _ => None,
        },
        HebrewMonth::Nisan if (15..=21).contains(&day) => Some(HolyDay::Pesach),
        HebrewMonth::Sivan if day == 6 => Some(HolyDay::Shavuos),
        HebrewMonth::Tammuz => match day {
            17 if !shabbos => Some(HolyDay::SeventeenthOfTammuz),
            18 if sunday => Some(HolyDay::SeventeenthOfTammuz),
            _ => None,
        },
        HebrewMonth::Av => match day {
            9 if !shabbos => Some(HolyDay::TishaBav),
            10 if sunday => Some(HolyDay::TishaBav),
            _ => None,
        },
        _ => None,
    }
}
