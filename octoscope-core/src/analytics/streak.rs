//! Longest consecutive-day commit streak.

use chrono::{Datelike, NaiveDate};

/// Length of the longest run of consecutive calendar days that each have at
/// least one commit.
///
/// The input carries one entry per commit, so duplicate days are expected: a
/// repeated day neither breaks nor extends the run. Day deltas use absolute
/// day numbers, so the arithmetic stays exact across month, year, and leap
/// boundaries. Returns 0 only for empty input.
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut days: Vec<i32> = dates.iter().map(|d| d.num_days_from_ce()).collect();
    days.sort_unstable();

    let mut current = 1u32;
    let mut longest = 1u32;
    for pair in days.windows(2) {
        match pair[1] - pair[0] {
            // Same day seen again (another commit)
            0 => {}
            1 => {
                current += 1;
                longest = longest.max(current);
            }
            _ => current = 1,
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(specs: &[&str]) -> Vec<NaiveDate> {
        specs
            .iter()
            .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(longest_streak(&[]), 0);
    }

    #[test]
    fn test_single_day() {
        assert_eq!(longest_streak(&dates(&["2024-01-01"])), 1);
    }

    #[test]
    fn test_run_with_gap() {
        let input = dates(&["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-05"]);
        assert_eq!(longest_streak(&input), 3);
    }

    #[test]
    fn test_duplicate_day_neither_breaks_nor_extends() {
        let input = dates(&["2024-01-01", "2024-01-01", "2024-01-02"]);
        assert_eq!(longest_streak(&input), 2);
    }

    #[test]
    fn test_unsorted_input() {
        let input = dates(&["2024-01-05", "2024-01-02", "2024-01-01", "2024-01-03"]);
        assert_eq!(longest_streak(&input), 3);
    }

    #[test]
    fn test_streak_spans_month_boundary() {
        let input = dates(&["2024-01-31", "2024-02-01"]);
        assert_eq!(longest_streak(&input), 2);
    }

    #[test]
    fn test_streak_spans_leap_day() {
        let input = dates(&["2024-02-28", "2024-02-29", "2024-03-01"]);
        assert_eq!(longest_streak(&input), 3);
    }

    #[test]
    fn test_streak_spans_year_boundary() {
        let input = dates(&["2023-12-30", "2023-12-31", "2024-01-01"]);
        assert_eq!(longest_streak(&input), 3);
    }

    #[test]
    fn test_streak_bounded_by_distinct_days() {
        let input = dates(&[
            "2024-01-01",
            "2024-01-01",
            "2024-01-02",
            "2024-01-04",
            "2024-01-04",
        ]);
        let streak = longest_streak(&input);
        assert!(streak >= 1);
        assert!(streak <= 3, "streak {streak} exceeds distinct-day count");
        assert_eq!(streak, 2);
    }
}
