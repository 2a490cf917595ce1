//! Property tests for cycle search and page mapping.
//!
//! Uses the arithmetic calendar plus a calendar that reports no holy days,
//! which makes every cycle exactly `WHOLE_SHAS_PAGES` days long.

use yomi_daf::{
    ALL_EXCLUDED_DAYS, Daf, MASECHTA_COUNT, Masechta, PAGES_PER_MASECHTA, WHOLE_SHAS_PAGES,
    YERUSHALMI_EPOCH, count_special_days, cycle_info_for_date, daf_schedule, is_excluded,
    next_cycle_start, yerushalmi_daf_for_date,
};
use yomi_time::{
    ArithmeticCalendar, CivilDate, HebrewCalendar, HebrewDate, HolyDay, TimeError,
};

/// Arithmetic calendar with holy-day lookup switched off.
struct NoHolyDays;

impl HebrewCalendar for NoHolyDays {
    fn to_hebrew(&self, date: CivilDate) -> Result<HebrewDate, TimeError> {
        ArithmeticCalendar.to_hebrew(date)
    }

    fn to_civil(&self, date: HebrewDate) -> CivilDate {
        ArithmeticCalendar.to_civil(date)
    }

    fn holy_day(&self, _date: CivilDate) -> Option<HolyDay> {
        None
    }
}

#[test]
fn table_sum_invariant() {
    assert_eq!(PAGES_PER_MASECHTA.iter().sum::<u32>(), WHOLE_SHAS_PAGES);
    assert_eq!(PAGES_PER_MASECHTA.len(), MASECHTA_COUNT);
}

#[test]
fn without_holy_days_cycle_is_nominal_length() {
    let cal = NoHolyDays;
    let second_start = YERUSHALMI_EPOCH.add_days(WHOLE_SHAS_PAGES as i64);
    assert_eq!(
        yerushalmi_daf_for_date(&cal, second_start).unwrap(),
        Some(Daf {
            masechta: Masechta::Berachos,
            page: 1
        })
    );
    let info = cycle_info_for_date(&cal, second_start).unwrap().unwrap();
    assert_eq!(info.cycle, 2);
    assert_eq!(info.start, second_start);

    let last = yerushalmi_daf_for_date(&cal, second_start.add_days(-1))
        .unwrap()
        .unwrap();
    assert_eq!(last.volume_index(), MASECHTA_COUNT - 1);
    let before_last: u32 = PAGES_PER_MASECHTA[..MASECHTA_COUNT - 1].iter().sum();
    assert_eq!(last.page, WHOLE_SHAS_PAGES - 1 - before_last + 1);
}

#[test]
fn without_holy_days_nothing_is_counted() {
    let end = YERUSHALMI_EPOCH.add_days(10 * 365);
    assert_eq!(count_special_days(&NoHolyDays, YERUSHALMI_EPOCH, end).unwrap(), 0);
}

#[test]
fn every_excluded_day_has_no_reading() {
    let cal = ArithmeticCalendar;
    for year in 5741..5800 {
        for day in ALL_EXCLUDED_DAYS {
            let date = day.instance(&cal, year).unwrap().unwrap();
            assert_eq!(
                yerushalmi_daf_for_date(&cal, date).unwrap(),
                None,
                "{day:?} {year} ({date})"
            );
        }
    }
}

#[test]
fn every_cycle_start_is_berachos_1() {
    let cal = ArithmeticCalendar;
    let mut date = YERUSHALMI_EPOCH;
    for cycle in 1..=12 {
        let info = cycle_info_for_date(&cal, date).unwrap().unwrap();
        assert_eq!(info.cycle, cycle);
        assert_eq!(info.start, date);
        assert_eq!(
            yerushalmi_daf_for_date(&cal, date).unwrap(),
            Some(Daf {
                masechta: Masechta::Berachos,
                page: 1
            })
        );
        assert!(info.next_start > info.start);
        date = info.next_start;
    }
}

/// Every cycle through 2300 holds exactly one reading-day per page and ends
/// on Niddah 13, including cycles whose extension runs into a holy day.
#[test]
fn every_cycle_through_2300_is_complete() {
    let cal = ArithmeticCalendar;
    let end = CivilDate::new(2300, 12, 31).unwrap();
    let last_page = Daf {
        masechta: Masechta::Niddah,
        page: Masechta::Niddah.pages(),
    };

    let mut start = YERUSHALMI_EPOCH;
    while start <= end {
        let next = next_cycle_start(&cal, start).unwrap();
        let reading_days = (0..next.days_since(start))
            .filter(|&i| !is_excluded(cal.holy_day(start.add_days(i))))
            .count() as u32;
        assert_eq!(reading_days, WHOLE_SHAS_PAGES, "cycle starting {start}");
        assert!(!is_excluded(cal.holy_day(next)), "cycle starts on a holy day: {next}");

        let mut last = next.add_days(-1);
        while is_excluded(cal.holy_day(last)) {
            last = last.add_days(-1);
        }
        assert_eq!(
            yerushalmi_daf_for_date(&cal, last).unwrap(),
            Some(last_page),
            "last reading day {last}"
        );
        start = next;
    }
}

#[test]
fn deterministic() {
    let cal = ArithmeticCalendar;
    let date = CivilDate::new(2031, 1, 7).unwrap();
    let a = yerushalmi_daf_for_date(&cal, date).unwrap();
    let b = yerushalmi_daf_for_date(&cal, date).unwrap();
    assert_eq!(a, b);
}

/// Over a whole cycle, each reading-day advances the offset by exactly one
/// and the schedule covers every page once.
#[test]
fn offsets_increase_within_a_cycle() {
    let cal = ArithmeticCalendar;
    let start = CivilDate::new(2022, 11, 14).unwrap();
    let info = cycle_info_for_date(&cal, start).unwrap().unwrap();
    let len = info.next_start.days_since(info.start) as u32;

    let mut expected = 0;
    for day in daf_schedule(&cal, start, len).unwrap() {
        let Some(_) = day.daf else { continue };
        let origin = cycle_info_for_date(&cal, day.date).unwrap().unwrap();
        assert_eq!(origin.start, start);
        assert_eq!(origin.offset, expected, "{}", day.date);
        expected += 1;
    }
    assert_eq!(expected, WHOLE_SHAS_PAGES);
}

#[test]
fn page_always_inside_its_tractate() {
    let cal = ArithmeticCalendar;
    for day in daf_schedule(&cal, CivilDate::new(2001, 1, 1).unwrap(), 800).unwrap() {
        if let Some(daf) = day.daf {
            assert!(daf.page >= 1 && daf.page <= daf.masechta.pages());
        }
    }
}
