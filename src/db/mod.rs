//! Persistence layer for taskify.
//!
//! Tasks are grouped into one partition per calendar date. Each partition is
//! stored as a pretty-printed JSON array under its `YYYY-MM-DD` key and is
//! rewritten in full on every change.
//!
//! ## Modules
//!
//! - [`storage`]: the [`storage::PartitionStorage`] trait plus the file and
//!   in-memory backends
//! - [`tasks`]: the [`tasks::Tasks`] store with read/write/insert/update/remove
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskify::db::tasks::Tasks;
//! use taskify::libs::task::Task;
//!
//! let tasks = Tasks::open("/tmp/taskify")?;
//! let stored = tasks.insert(Task::new("2024-06-15").with_status("pending"))?;
//! assert_eq!(tasks.read("2024-06-15"), vec![stored]);
//! # Ok::<(), taskify::libs::error::TaskError>(())
//! ```

pub mod storage;
pub mod tasks;
