//! # Taskify - date-partitioned personal task tracker
//!
//! Records tasks per calendar date, answers range queries such as "this
//! week" or "this month", and exports the results to spreadsheets with
//! computed durations and status colors.
//!
//! ## Features
//!
//! - **Task Store**: one JSON partition per date, created on first write
//! - **Range Queries**: `today`, `tomorrow`, `week`, `month` and `custom`
//! - **Export**: Excel with status fills, plus CSV and JSON
//! - **HTTP API**: JSON endpoints and a static front end via `taskify serve`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskify::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
