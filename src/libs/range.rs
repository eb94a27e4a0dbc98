//! Date range queries over the partition store.
//!
//! A range mode (`today`, `tomorrow`, `week`, `month`, `custom`) is resolved
//! against an injected "now" into a [`DatePredicate`], which the aggregator
//! then applies to every partition key. All comparisons are made on calendar
//! days; no timezone conversion happens anywhere.

use crate::db::storage::PartitionStorage;
use crate::db::tasks::{parse_partition_key, Tasks};
use crate::libs::error::TaskResult;
use crate::libs::task::Task;
use chrono::{Datelike, Duration, NaiveDate};

/// Set of calendar days a range query accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePredicate {
    /// Exactly one day.
    On(NaiveDate),
    /// Every day between the two bounds, both included.
    Between(NaiveDate, NaiveDate),
    /// Every day of the given month.
    Month { year: i32, month: u32 },
    /// No day at all.
    Nothing,
}

impl DatePredicate {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            DatePredicate::On(day) => date == day,
            DatePredicate::Between(start, end) => start <= date && date <= end,
            DatePredicate::Month { year, month } => date.year() == year && date.month() == month,
            DatePredicate::Nothing => false,
        }
    }
}

/// Resolves a range mode into a predicate relative to `now`.
///
/// Unknown modes are not an error: they resolve to [`DatePredicate::Nothing`].
/// `custom` needs both `from` and `to` as `YYYY-MM-DD`; if either is missing
/// or unparseable it also matches nothing.
pub fn resolve(mode: &str, from: Option<&str>, to: Option<&str>, now: NaiveDate) -> DatePredicate {
    match mode {
        "today" => DatePredicate::On(now),
        "tomorrow" => DatePredicate::On(now + Duration::days(1)),
        "week" => DatePredicate::Between(now - Duration::days(6), now),
        "month" => DatePredicate::Month {
            year: now.year(),
            month: now.month(),
        },
        "custom" => match (from.and_then(parse_bound), to.and_then(parse_bound)) {
            (Some(start), Some(end)) => DatePredicate::Between(start, end),
            _ => DatePredicate::Nothing,
        },
        _ => DatePredicate::Nothing,
    }
}

fn parse_bound(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Collects the tasks of every partition whose date satisfies `predicate`.
///
/// Partitions are visited in ascending date order and each contributes its
/// tasks in insertion order. Keys that are not dates are skipped.
pub fn aggregate<S: PartitionStorage>(tasks: &Tasks<S>, predicate: &DatePredicate) -> TaskResult<Vec<Task>> {
    if *predicate == DatePredicate::Nothing {
        return Ok(Vec::new());
    }

    let mut partitions: Vec<(NaiveDate, String)> = tasks
        .list_partition_keys()?
        .into_iter()
        .filter_map(|key| parse_partition_key(&key).map(|date| (date, key)))
        .filter(|(date, _)| predicate.matches(*date))
        .collect();
    partitions.sort();

    let mut result = Vec::new();
    for (_, key) in &partitions {
        result.extend(tasks.read(key));
    }

    tracing::debug!(?predicate, partitions = partitions.len(), tasks = result.len(), "range aggregated");
    Ok(result)
}
