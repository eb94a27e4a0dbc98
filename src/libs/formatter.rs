//! Time formatting helpers for task exports.
//!
//! Tasks carry their start and end as "HH:MM" wall-clock strings with no
//! date attached. The duration shown in exports is derived from those two
//! values on a fixed reference day and is never stored.
//!
//! ## Format
//!
//! - 1 hour 30 minutes → `"1h 30m"`
//! - 45 minutes → `"45m"`
//! - missing, unparseable or non-positive spans → `"0m"`
//!
//! ```rust
//! use taskify::libs::formatter::task_duration;
//!
//! assert_eq!(task_duration(Some("09:00"), Some("10:30")), "1h 30m");
//! assert_eq!(task_duration(Some("09:00"), None), "0m");
//! ```

use chrono::{Duration, NaiveTime};

/// Duration string used when no positive span can be computed.
pub const ZERO_DURATION: &str = "0m";

/// Parses an "HH:MM" wall-clock value.
///
/// Only the first two colon-separated components are read, so "09:00:30"
/// parses as 09:00. Out-of-range hours or minutes yield `None`.
pub fn parse_wall_clock(value: &str) -> Option<NaiveTime> {
    let mut parts = value.split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Formats a duration as `"{h}h {m}m"`, or `"{m}m"` under one hour.
///
/// Negative durations are clamped to zero.
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_minutes().max(0);
    let (hours, mins) = (total / 60, total % 60);
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Derives the display duration of a task from its start and end times.
pub fn task_duration(start_time: Option<&str>, end_time: Option<&str>) -> String {
    let start = start_time.and_then(parse_wall_clock);
    let end = end_time.and_then(parse_wall_clock);
    match (start, end) {
        (Some(start), Some(end)) if end > start => format_duration(&(end - start)),
        _ => ZERO_DURATION.to_string(),
    }
}
