//! Calendar month arithmetic

use chrono::{Datelike, NaiveDate};

/// Whole calendar months elapsed from `start` to `end`
///
/// A month only counts once the day-of-month of `end` has reached the
/// day-of-month of `start`, the way an age in months is counted: Jan 31 to
/// Feb 28 is zero months, Jan 31 to Mar 31 is two. An `end` before `start`
/// yields zero.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }

    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }

    months.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_zero() {
        let d = date(2024, 2, 29);
        assert_eq!(months_between(d, d), 0);
    }

    #[test]
    fn test_end_before_start_clamps_to_zero() {
        assert_eq!(months_between(date(2025, 5, 1), date(2024, 5, 1)), 0);
    }

    #[test]
    fn test_counts_only_completed_months() {
        let start = date(2024, 1, 15);
        assert_eq!(months_between(start, date(2024, 2, 14)), 0);
        assert_eq!(months_between(start, date(2024, 2, 15)), 1);
        assert_eq!(months_between(start, date(2024, 3, 16)), 2);
    }

    #[test]
    fn test_short_month_does_not_complete() {
        let start = date(2024, 1, 31);
        assert_eq!(months_between(start, date(2024, 2, 29)), 0);
        assert_eq!(months_between(start, date(2024, 3, 30)), 1);
        assert_eq!(months_between(start, date(2024, 3, 31)), 2);
    }

    #[test]
    fn test_across_years() {
        assert_eq!(months_between(date(2023, 11, 10), date(2025, 1, 10)), 14);
        assert_eq!(months_between(date(2023, 11, 10), date(2025, 1, 9)), 13);
    }

    #[test]
    fn test_monotonic_in_end_date() {
        let start = date(2024, 1, 31);
        let mut previous = 0;
        let mut end = date(2023, 12, 1);
        while end < date(2026, 1, 1) {
            let months = months_between(start, end);
            assert!(months >= previous, "decreased at {}", end);
            previous = months;
            end = end.succ_opt().unwrap();
        }
        assert_eq!(previous, 23);
    }
}
