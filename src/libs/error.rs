//! Error type shared by the task store, the range queries and the export path.
//!
//! Callers at the edges (commands, HTTP handlers) decide how each variant is
//! surfaced: validation and lookup failures are client errors, storage and
//! encoding failures are server errors. Corrupt partition content never
//! reaches this type; the store recovers it as an empty partition.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// The request is missing a required field or carries an unusable value.
    #[error("{0}")]
    Validation(String),

    /// No task with the given id exists in the partition for `date`.
    #[error("Task not found")]
    NotFound { date: String, id: String },

    /// Persisting or listing partitions failed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A task could not be converted to or from JSON.
    #[error("encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl TaskError {
    pub fn missing_date() -> Self {
        TaskError::Validation("date is required".to_string())
    }

    pub fn invalid_date(date: &str) -> Self {
        TaskError::Validation(format!("invalid date `{}`, expected YYYY-MM-DD", date))
    }

    pub fn duplicate_id(date: &str, id: &str) -> Self {
        TaskError::Validation(format!("task `{}` already exists on {}", id, date))
    }

    /// Whether the failure was caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, TaskError::Validation(_) | TaskError::NotFound { .. })
    }
}

pub type TaskResult<T> = Result<T, TaskError>;
