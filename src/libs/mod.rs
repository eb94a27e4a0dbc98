//! Core library modules for taskify.
//!
//! ## Modules
//!
//! - **Domain**: [`task`] records, [`range`] resolution and aggregation
//! - **Presentation**: [`formatter`] durations, [`export`] spreadsheets,
//!   [`view`] console tables
//! - **Infrastructure**: [`config`], [`data_storage`], [`error`],
//!   [`logging`], [`messages`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskify::db::tasks::Tasks;
//! use taskify::libs::range::{aggregate, resolve};
//! use chrono::Local;
//!
//! let tasks = Tasks::open("/tmp/taskify")?;
//! let week = resolve("week", None, None, Local::now().date_naive());
//! let recent = aggregate(&tasks, &week)?;
//! # Ok::<(), taskify::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod range;
pub mod task;
pub mod view;
