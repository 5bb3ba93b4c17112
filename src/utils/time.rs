//! Time utilities

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current wall-clock time at the given offset
pub fn now_local(offset: FixedOffset) -> NaiveDateTime {
    to_local(now_utc(), offset)
}

/// Convert a UTC instant to wall-clock time at the given offset
pub fn to_local(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDateTime {
    instant.with_timezone(&offset).naive_local()
}

/// Format a duration as a human-readable string
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();

    if total_seconds < 0 {
        return "0s".to_string();
    }

    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();

    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}

/// Time left until `target`, or `None` when it already passed
pub fn time_until(target: NaiveDateTime, now: NaiveDateTime) -> Option<Duration> {
    (target > now).then(|| target - now)
}

/// Short countdown text for a number of days
pub fn format_days(days: i64) -> String {
    match days {
        i64::MIN..=0 => "today".to_string(),
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    }
}
