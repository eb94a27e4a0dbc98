#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime};
    use taskify::libs::formatter::{format_duration, parse_wall_clock, task_duration};

    #[test]
    fn test_task_duration_hours_and_minutes() {
        assert_eq!(task_duration(Some("09:00"), Some("10:30")), "1h 30m");
        assert_eq!(task_duration(Some("08:15"), Some("17:15")), "9h 0m");
    }

    #[test]
    fn test_task_duration_minutes_only() {
        assert_eq!(task_duration(Some("09:00"), Some("09:45")), "45m");
        assert_eq!(task_duration(Some("09:00"), Some("09:01")), "1m");
    }

    #[test]
    fn test_task_duration_end_not_after_start() {
        assert_eq!(task_duration(Some("10:00"), Some("09:00")), "0m");
        assert_eq!(task_duration(Some("10:00"), Some("10:00")), "0m");
    }

    #[test]
    fn test_task_duration_missing_or_invalid() {
        assert_eq!(task_duration(Some("09:00"), None), "0m");
        assert_eq!(task_duration(None, Some("10:00")), "0m");
        assert_eq!(task_duration(None, None), "0m");
        assert_eq!(task_duration(Some("nine"), Some("10:00")), "0m");
        assert_eq!(task_duration(Some("09:00"), Some("25:00")), "0m");
        assert_eq!(task_duration(Some("0900"), Some("10:00")), "0m");
    }

    #[test]
    fn test_parse_wall_clock() {
        assert_eq!(parse_wall_clock("9:05"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_wall_clock("09:00:30"), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(parse_wall_clock(" 23 : 59 "), NaiveTime::from_hms_opt(23, 59, 0));
        assert_eq!(parse_wall_clock("12:60"), None);
        assert_eq!(parse_wall_clock(""), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::zero()), "0m");
        assert_eq!(format_duration(&Duration::minutes(59)), "59m");
        assert_eq!(format_duration(&Duration::minutes(60)), "1h 0m");
        assert_eq!(format_duration(&Duration::minutes(125)), "2h 5m");
        assert_eq!(format_duration(&Duration::minutes(-30)), "0m");
    }
}
