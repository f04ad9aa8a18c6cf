//! UTC calendar arithmetic over microsecond timestamps.
//!
//! Year and month positions are found by walking forward from the genesis
//! boundary (2024-01-01 00:00 UTC), accumulating 365/366-day years and
//! table-length months. The walk trades a small constant cost for
//! simplicity across leap years; callers bound their inputs to the
//! schedule horizon so it never runs long.

use crate::constants::{
    EPOCH_WEEKDAY_OFFSET, GENESIS_TIMESTAMP, GENESIS_YEAR, ONE_DAY,
};
use crate::error::VestingError;

const COMMON_YEAR: i64 = 365 * ONE_DAY;
const LEAP_YEAR: i64 = 366 * ONE_DAY;

/// Gregorian rule: divisible by 4, not by 100 unless by 400.
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Full duration of `year`.
pub fn year_duration(year: i64) -> i64 {
    if is_leap_year(year) {
        LEAP_YEAR
    } else {
        COMMON_YEAR
    }
}

/// Year containing `t` and the timestamp of its first instant.
pub fn year_boundary(t: i64) -> Result<(i64, i64), VestingError> {
    if t < GENESIS_TIMESTAMP {
        return Err(VestingError::TimeBeforeGenesis);
    }
    let mut year = GENESIS_YEAR;
    let mut acc = GENESIS_TIMESTAMP;
    loop {
        let next = acc + year_duration(year);
        if next > t {
            return Ok((year, acc));
        }
        year += 1;
        acc = next;
    }
}

/// Day of week for `t`, 0 = Sunday.
pub fn weekday(t: i64) -> i64 {
    (t.div_euclid(ONE_DAY) + EPOCH_WEEKDAY_OFFSET).rem_euclid(7)
}

/// Number of days in `month` (1-12) of `year`.
pub fn month_length(year: i64, month: i64) -> Result<i64, VestingError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => Ok(if is_leap_year(year) { 29 } else { 28 }),
        _ => Err(VestingError::FieldOutOfRange),
    }
}

/// Year and month (1-12) containing `t`, with the timestamp of the
/// month's first instant.
pub fn month_boundary(t: i64) -> Result<(i64, i64, i64), VestingError> {
    let (year, mut acc) = year_boundary(t)?;
    for month in 1..=12 {
        let next = acc + month_length(year, month)? * ONE_DAY;
        if next > t {
            return Ok((year, month, acc));
        }
        acc = next;
    }
    // The year walk already placed t inside this year.
    Err(VestingError::TimeBeforeGenesis)
}

/// Accumulated duration of the months of `year` strictly before `month`.
pub fn month_acc_duration(year: i64, month: i64) -> Result<i64, VestingError> {
    let mut acc = 0;
    for m in 1..month {
        acc += month_length(year, m)? * ONE_DAY;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(days: i64) -> i64 {
        GENESIS_TIMESTAMP + days * ONE_DAY
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2028));
    }

    #[test]
    fn year_boundary_walk() {
        assert_eq!(year_boundary(GENESIS_TIMESTAMP).unwrap(), (2024, GENESIS_TIMESTAMP));
        // 2024 is a leap year: the last microsecond of it still maps to 2024.
        assert_eq!(year_boundary(d(366) - 1).unwrap(), (2024, GENESIS_TIMESTAMP));
        assert_eq!(year_boundary(d(366)).unwrap(), (2025, d(366)));
        assert_eq!(year_boundary(d(366 + 365)).unwrap(), (2026, d(366 + 365)));
    }

    #[test]
    fn year_boundary_rejects_pre_genesis() {
        assert!(matches!(
            year_boundary(GENESIS_TIMESTAMP - 1),
            Err(VestingError::TimeBeforeGenesis)
        ));
    }

    #[test]
    fn weekday_anchors() {
        // 2024-01-01 was a Monday.
        assert_eq!(weekday(GENESIS_TIMESTAMP), 1);
        // 2024-01-06 was a Saturday, 2024-01-07 a Sunday.
        assert_eq!(weekday(d(5)), 6);
        assert_eq!(weekday(d(6)), 0);
        // Time of day does not change the weekday.
        assert_eq!(weekday(d(6) + ONE_DAY - 1), 0);
    }

    #[test]
    fn month_length_table() {
        assert_eq!(month_length(2024, 2).unwrap(), 29);
        assert_eq!(month_length(2025, 2).unwrap(), 28);
        assert_eq!(month_length(2024, 1).unwrap(), 31);
        assert_eq!(month_length(2024, 4).unwrap(), 30);
        assert_eq!(month_length(2024, 7).unwrap(), 31);
        assert_eq!(month_length(2024, 8).unwrap(), 31);
        assert_eq!(month_length(2024, 9).unwrap(), 30);
        assert_eq!(month_length(2024, 12).unwrap(), 31);
        assert!(month_length(2024, 13).is_err());
    }

    #[test]
    fn month_boundary_walk() {
        // Mid-February 2024.
        assert_eq!(month_boundary(d(31) + 3 * ONE_DAY).unwrap(), (2024, 2, d(31)));
        // Exactly at the March boundary (Jan 31 + Feb 29 = 60 days).
        assert_eq!(month_boundary(d(60)).unwrap(), (2024, 3, d(60)));
        assert_eq!(month_boundary(d(60) - 1).unwrap(), (2024, 2, d(31)));
        // February 2025 starts 31 days into the non-leap year.
        assert_eq!(month_boundary(d(366 + 31)).unwrap(), (2025, 2, d(366 + 31)));
    }

    #[test]
    fn month_acc_durations() {
        assert_eq!(month_acc_duration(2024, 1).unwrap(), 0);
        assert_eq!(month_acc_duration(2024, 2).unwrap(), 31 * ONE_DAY);
        assert_eq!(month_acc_duration(2024, 3).unwrap(), 60 * ONE_DAY);
        assert_eq!(month_acc_duration(2025, 3).unwrap(), 59 * ONE_DAY);
        assert_eq!(month_acc_duration(2024, 13).unwrap(), 366 * ONE_DAY);
    }
}
