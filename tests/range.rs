#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use taskify::db::storage::MemoryStorage;
    use taskify::db::tasks::Tasks;
    use taskify::libs::range::{aggregate, resolve, DatePredicate};
    use taskify::libs::task::{Task, TaskId};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn now() -> NaiveDate {
        day("2024-06-15")
    }

    fn matching(predicate: &DatePredicate, days: &[&str]) -> Vec<String> {
        days.iter().filter(|d| predicate.matches(day(d))).map(|d| d.to_string()).collect()
    }

    const CANDIDATES: [&str; 9] = [
        "2024-05-31",
        "2024-06-01",
        "2024-06-08",
        "2024-06-09",
        "2024-06-10",
        "2024-06-14",
        "2024-06-15",
        "2024-06-16",
        "2024-07-01",
    ];

    #[test]
    fn test_today_matches_only_now() {
        let predicate = resolve("today", None, None, now());
        assert_eq!(matching(&predicate, &CANDIDATES), vec!["2024-06-15"]);
    }

    #[test]
    fn test_tomorrow_matches_only_next_day() {
        let predicate = resolve("tomorrow", None, None, now());
        assert_eq!(matching(&predicate, &CANDIDATES), vec!["2024-06-16"]);
    }

    #[test]
    fn test_tomorrow_crosses_month_boundary() {
        let predicate = resolve("tomorrow", None, None, day("2024-06-30"));
        assert!(predicate.matches(day("2024-07-01")));
    }

    #[test]
    fn test_week_covers_last_seven_days() {
        let predicate = resolve("week", None, None, now());
        assert_eq!(
            matching(&predicate, &CANDIDATES),
            vec!["2024-06-09", "2024-06-10", "2024-06-14", "2024-06-15"]
        );
        assert!(!predicate.matches(day("2024-06-08")));
        assert!(!predicate.matches(day("2024-06-16")));
    }

    #[test]
    fn test_month_is_calendar_month() {
        let predicate = resolve("month", None, None, now());
        assert_eq!(
            matching(&predicate, &CANDIDATES),
            vec!["2024-06-01", "2024-06-08", "2024-06-09", "2024-06-10", "2024-06-14", "2024-06-15", "2024-06-16"]
        );
        assert!(predicate.matches(day("2024-06-30")));
        assert!(!predicate.matches(day("2023-06-15")));
    }

    #[test]
    fn test_custom_is_inclusive() {
        let predicate = resolve("custom", Some("2024-06-01"), Some("2024-06-10"), now());
        assert_eq!(
            matching(&predicate, &CANDIDATES),
            vec!["2024-06-01", "2024-06-08", "2024-06-09", "2024-06-10"]
        );
    }

    #[test]
    fn test_custom_needs_both_bounds() {
        assert_eq!(resolve("custom", Some("2024-06-01"), None, now()), DatePredicate::Nothing);
        assert_eq!(resolve("custom", None, Some("2024-06-10"), now()), DatePredicate::Nothing);
        assert_eq!(resolve("custom", Some("garbage"), Some("2024-06-10"), now()), DatePredicate::Nothing);
    }

    #[test]
    fn test_unknown_mode_matches_nothing() {
        for mode in ["", "year", "TODAY", "yesterday"] {
            let predicate = resolve(mode, Some("2024-06-01"), Some("2024-06-30"), now());
            assert!(matching(&predicate, &CANDIDATES).is_empty(), "mode {:?}", mode);
        }
    }

    fn task(date: &str, id: &str) -> Task {
        let mut task = Task::new(date);
        task.id = Some(TaskId::from(id));
        task
    }

    fn seeded() -> Tasks<MemoryStorage> {
        let tasks = Tasks::with_storage(MemoryStorage::new());
        for (date, id) in [
            ("2024-06-14", "a1"),
            ("2024-06-14", "a2"),
            ("2024-06-15", "b1"),
            ("2024-06-15", "b2"),
            ("2024-06-15", "b3"),
            ("2024-06-01", "c1"),
            ("2024-05-31", "d1"),
        ] {
            tasks.insert(task(date, id)).unwrap();
        }
        tasks
    }

    fn ids(tasks: &[Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.as_ref().unwrap().to_string()).collect()
    }

    #[test]
    fn test_aggregate_includes_every_matching_task_once() {
        let tasks = seeded();
        let result = aggregate(&tasks, &resolve("week", None, None, now())).unwrap();

        let got: HashSet<String> = ids(&result).into_iter().collect();
        let want: HashSet<String> = ["a1", "a2", "b1", "b2", "b3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(got, want);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_aggregate_keeps_partition_order() {
        let tasks = seeded();
        let result = ids(&aggregate(&tasks, &resolve("month", None, None, now())).unwrap());

        let position = |id: &str| result.iter().position(|x| x == id).unwrap();
        assert!(position("a1") < position("a2"));
        assert!(position("b1") < position("b2"));
        assert!(position("b2") < position("b3"));
        assert!(!result.contains(&"d1".to_string()));
    }

    #[test]
    fn test_aggregate_empty_for_nothing_and_skips_odd_keys() {
        let storage = MemoryStorage::new();
        storage.insert_raw("backup", "[{\"id\": 1, \"date\": \"2024-06-15\"}]");
        storage.insert_raw("2024-06-15", "corrupt");
        let tasks = Tasks::with_storage(storage);

        assert!(aggregate(&tasks, &DatePredicate::Nothing).unwrap().is_empty());
        assert!(aggregate(&tasks, &resolve("today", None, None, now())).unwrap().is_empty());
    }
}
