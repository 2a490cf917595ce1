//! Holy days on which no page is studied.
//!
//! Yom Kippur and Tisha B'Av take up a calendar day without taking up a
//! reading-day. Each year's instance is built fresh from its Hebrew triple;
//! nothing is cached between calls.

use tracing::trace;
use yomi_time::{CivilDate, HebrewCalendar, HebrewDate, HebrewMonth, HolyDay, TimeError};

/// The two holy days without an assigned page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExcludedDay {
    /// 10 Tishrei.
    YomKippur,
    /// 9 Av, held on 10 Av when the 9th is Shabbos.
    TishaBav,
}

/// Both excluded days.
pub const ALL_EXCLUDED_DAYS: [ExcludedDay; 2] = [ExcludedDay::YomKippur, ExcludedDay::TishaBav];

impl ExcludedDay {
    /// The matching calendar holy day.
    pub const fn holy_day(self) -> HolyDay {
        match self {
            Self::YomKippur => HolyDay::YomKippur,
            Self::TishaBav => HolyDay::TishaBav,
        }
    }

    /// Excluded day named by a holy day, if it is one.
    pub fn from_holy_day(day: HolyDay) -> Option<Self> {
        match day {
            HolyDay::YomKippur => Some(Self::YomKippur),
            HolyDay::TishaBav => Some(Self::TishaBav),
            _ => None,
        }
    }

    /// Nominal Hebrew date in `year`.
    pub fn hebrew_date(self, year: i32) -> Result<HebrewDate, TimeError> {
        match self {
            Self::YomKippur => HebrewDate::new(year, HebrewMonth::Tishrei, 10),
            Self::TishaBav => HebrewDate::new(year, HebrewMonth::Av, 9),
        }
    }

    /// Civil date on which this day is observed in Hebrew `year`.
    ///
    /// The nominal date is used when the calendar names it as this holy
    /// day; otherwise the following day is tried, which covers a fast moved
    /// off Shabbos. `None` if the calendar names neither.
    pub fn instance<C: HebrewCalendar + ?Sized>(
        self,
        calendar: &C,
        year: i32,
    ) -> Result<Option<CivilDate>, TimeError> {
        let nominal = calendar.to_civil(self.hebrew_date(year)?);
        let observed = [nominal, nominal.add_days(1)]
            .into_iter()
            .find(|&d| calendar.holy_day(d) == Some(self.holy_day()));
        Ok(observed)
    }
}

/// Whether a holy day is one of the excluded days.
pub fn is_excluded(day: Option<HolyDay>) -> bool {
    day.and_then(ExcludedDay::from_holy_day).is_some()
}

/// Count excluded-day instances in the closed range `[start, end]`.
///
/// Every Hebrew year from that of `start` through that of `end` is checked
/// once per excluded day, so no instance is counted twice. An empty range
/// counts zero.
pub fn count_special_days<C: HebrewCalendar + ?Sized>(
    calendar: &C,
    start: CivilDate,
    end: CivilDate,
) -> Result<u32, TimeError> {
    if end < start {
        return Ok(0);
    }
    let first_year = calendar.to_hebrew(start)?.year();
    let last_year = calendar.to_hebrew(end)?.year();

    let mut count = 0;
    for year in first_year..=last_year {
        for day in ALL_EXCLUDED_DAYS {
            if let Some(date) = day.instance(calendar, year)? {
                if (start..=end).contains(&date) {
                    trace!(?day, %date, year, "excluded day in range");
                    count += 1;
                }
            }
        }
    }
    Ok(count)
}
