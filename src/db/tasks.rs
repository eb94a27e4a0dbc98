use super::storage::{FileStorage, PartitionStorage};
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::{Task, TaskId, TaskPatch};
use chrono::{Local, NaiveDate};
use parking_lot::Mutex;
use serde_json::Value;
use std::path::PathBuf;

pub const PARTITION_KEY_FORMAT: &str = "%Y-%m-%d";

/// Parses a canonical `YYYY-MM-DD` partition key.
///
/// Non-padded forms such as `2024-6-5` are rejected so that one calendar
/// date always maps to exactly one partition.
pub fn parse_partition_key(key: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, PARTITION_KEY_FORMAT).ok()?;
    (date.format(PARTITION_KEY_FORMAT).to_string() == key).then_some(date)
}

/// Date-partitioned task store.
///
/// Every mutation reads the whole partition, changes it in memory and writes
/// it back in full. The internal lock only keeps this store's own steps from
/// interleaving; separate processes (or separate `Tasks` values) writing the
/// same date race and the last writer wins.
pub struct Tasks<S: PartitionStorage = FileStorage> {
    storage: S,
    lock: Mutex<()>,
}

impl Tasks<FileStorage> {
    pub fn open(dir: impl Into<PathBuf>) -> TaskResult<Self> {
        Ok(Self::with_storage(FileStorage::new(dir)?))
    }
}

impl<S: PartitionStorage> Tasks<S> {
    pub fn with_storage(storage: S) -> Self {
        Tasks {
            storage,
            lock: Mutex::new(()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the tasks stored for `date` in insertion order.
    ///
    /// A missing partition, an unreadable one, and one whose content is not
    /// a JSON task array all read as empty.
    pub fn read(&self, date: &str) -> Vec<Task> {
        if parse_partition_key(date).is_none() {
            tracing::debug!(date, "ignoring read of invalid partition key");
            return Vec::new();
        }

        let contents = match self.storage.load(date) {
            Ok(Some(contents)) => contents,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(date, error = %e, "failed to read partition, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!(date, error = %e, "corrupt partition, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replaces the whole partition for `date` with `tasks`.
    pub fn write(&self, date: &str, tasks: &[Task]) -> TaskResult<()> {
        if parse_partition_key(date).is_none() {
            return Err(TaskError::invalid_date(date));
        }
        let contents = serde_json::to_string_pretty(tasks)?;
        self.storage.save(date, &contents)?;
        tracing::debug!(date, count = tasks.len(), "partition written");
        Ok(())
    }

    /// Appends `task` to the partition named by its `date`, assigning an id if it has none.
    ///
    /// The stored `date` is the trimmed key. An explicit id already present in
    /// the partition is rejected.
    pub fn insert(&self, mut task: Task) -> TaskResult<Task> {
        let date = match task.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => return Err(TaskError::missing_date()),
        };
        if parse_partition_key(&date).is_none() {
            return Err(TaskError::invalid_date(&date));
        }
        task.date = Some(date.clone());

        let _guard = self.lock.lock();
        let mut tasks = self.read(&date);
        match &task.id {
            Some(id) if tasks.iter().any(|existing| existing.has_id(&id.to_string())) => {
                return Err(TaskError::duplicate_id(&date, &id.to_string()));
            }
            Some(_) => {}
            None => task.id = Some(next_id(&tasks)),
        }
        tasks.push(task.clone());
        self.write(&date, &tasks)?;

        tracing::info!(date = %date, id = ?task.id, "task created");
        Ok(task)
    }

    /// Shallow-merges `patch` onto the task `id` in partition `date`.
    ///
    /// The task stays in the `date` partition even when the patch carries a
    /// different `date` value; tasks are never moved between partitions.
    pub fn update(&self, date: &str, id: &str, patch: &TaskPatch) -> TaskResult<Task> {
        let _guard = self.lock.lock();
        let mut tasks = self.read(date);
        let index = tasks.iter().position(|task| task.has_id(id)).ok_or_else(|| TaskError::NotFound {
            date: date.to_string(),
            id: id.to_string(),
        })?;

        let merged = merge(&tasks[index], patch)?;
        if merged.date.as_deref() != Some(date) {
            tracing::warn!(date, id, new_date = ?merged.date, "task date changed but task stays in its partition");
        }
        tasks[index] = merged.clone();
        self.write(date, &tasks)?;

        tracing::info!(date, id, "task updated");
        Ok(merged)
    }

    /// Drops every task with `id` from partition `date`. Removing an absent id is not an error.
    ///
    /// A non-canonical `date` names no partition, so there is nothing to remove
    /// and nothing is written.
    pub fn remove(&self, date: &str, id: &str) -> TaskResult<()> {
        if parse_partition_key(date).is_none() {
            tracing::debug!(date, id, "ignoring remove from invalid partition key");
            return Ok(());
        }

        let _guard = self.lock.lock();
        let mut tasks = self.read(date);
        let before = tasks.len();
        tasks.retain(|task| !task.has_id(id));
        self.write(date, &tasks)?;

        tracing::info!(date, id, removed = before - tasks.len(), "task deleted");
        Ok(())
    }

    pub fn list_partition_keys(&self) -> TaskResult<Vec<String>> {
        Ok(self.storage.keys()?)
    }
}

fn next_id(tasks: &[Task]) -> TaskId {
    let mut candidate = Local::now().timestamp_millis();
    while tasks.iter().any(|task| task.has_id(&candidate.to_string())) {
        candidate += 1;
    }
    TaskId::Number(candidate)
}

fn merge(task: &Task, patch: &TaskPatch) -> TaskResult<Task> {
    let mut value = serde_json::to_value(task)?;
    if let Value::Object(fields) = &mut value {
        for (key, patch_value) in patch {
            // ids are immutable once assigned
            if key == "id" {
                continue;
            }
            fields.insert(key.clone(), patch_value.clone());
        }
    }
    serde_json::from_value(value).map_err(|e| TaskError::Validation(format!("invalid task payload: {}", e)))
}
