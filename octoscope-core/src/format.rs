//! Formatting helpers shared across frontends.

use chrono::{DateTime, Utc};

/// Format a timestamp as relative time (e.g., "3d ago").
///
/// Repository update times can be years old, so anything past a month falls
/// back to an absolute date.
pub fn format_relative_time(ts: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(ts);

    if duration.num_seconds() < 0 {
        "just now".to_string()
    } else if duration.num_seconds() < 60 {
        format!("{}s ago", duration.num_seconds())
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_days() < 7 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_weeks() < 5 {
        format!("{}w ago", duration.num_weeks())
    } else {
        ts.format("%b %d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_recent_timestamps_are_relative() {
        let now = Utc::now();
        assert_eq!(format_relative_time(now - Duration::seconds(30)), "30s ago");
        assert_eq!(format_relative_time(now - Duration::minutes(5)), "5m ago");
        assert_eq!(format_relative_time(now - Duration::hours(3)), "3h ago");
        assert_eq!(format_relative_time(now - Duration::days(2)), "2d ago");
        assert_eq!(format_relative_time(now - Duration::weeks(2)), "2w ago");
    }

    #[test]
    fn test_old_timestamps_are_absolute() {
        let now = Utc::now();
        let formatted = format_relative_time(now - Duration::days(400));
        assert!(!formatted.ends_with("ago"), "got {formatted:?}");
    }

    #[test]
    fn test_future_timestamps() {
        let now = Utc::now();
        assert_eq!(format_relative_time(now + Duration::minutes(5)), "just now");
    }
}
