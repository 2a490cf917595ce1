//! Julian Day Number arithmetic for the proleptic Gregorian calendar.
//!
//! Day numbers are integers counted from noon UT on 4714 BCE Nov 24
//! (Gregorian). Only whole days matter here, so there is no time of day.

/// Julian Day Number of 2000-Jan-01.
pub const J2000_JDN: i64 = 2_451_545;

/// Days in a week.
pub const DAYS_PER_WEEK: i64 = 7;

/// Convert a Gregorian calendar date to its Julian Day Number.
pub fn civil_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Convert a Julian Day Number back to a Gregorian `(year, month, day)`.
pub fn jdn_to_civil(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}

/// Whether a Gregorian year is a leap year.
pub const fn is_gregorian_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a Gregorian month, or 0 for a month outside 1..=12.
pub const fn days_in_civil_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_gregorian_leap(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// 0-based weekday of a Julian Day Number (0 = Sunday .. 6 = Saturday).
pub fn weekday_index(jdn: i64) -> u8 {
    (jdn + 1).rem_euclid(DAYS_PER_WEEK) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day_number() {
        assert_eq!(civil_to_jdn(2000, 1, 1), J2000_JDN);
    }

    #[test]
    fn epoch_1980_day_number() {
        assert_eq!(civil_to_jdn(1980, 2, 2), 2_444_272);
    }

    #[test]
    fn roundtrip_across_leap_day() {
        for jdn in 2_451_580..2_451_640 {
            let (y, m, d) = jdn_to_civil(jdn);
            assert_eq!(civil_to_jdn(y, m, d), jdn);
        }
        assert_eq!(jdn_to_civil(civil_to_jdn(2000, 2, 29)), (2000, 2, 29));
    }

    #[test]
    fn j2000_is_saturday() {
        assert_eq!(weekday_index(J2000_JDN), 6);
    }

    #[test]
    fn leap_rules() {
        assert!(is_gregorian_leap(2000));
        assert!(is_gregorian_leap(2024));
        assert!(!is_gregorian_leap(1900));
        assert!(!is_gregorian_leap(2023));
    }

    #[test]
    fn february_length() {
        assert_eq!(days_in_civil_month(2024, 2), 29);
        assert_eq!(days_in_civil_month(2023, 2), 28);
        assert_eq!(days_in_civil_month(2023, 13), 0);
    }
}
