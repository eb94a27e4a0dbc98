//! Export command: writes a date range of tasks to a file.
//!
//! The file is named `{operator}_{DD}_{MM}_{YYYY}.{ext}` after today's date
//! unless `--output` is given. The operator name comes from `--name`, then
//! the configuration, then the default.

use super::{filter::RangeArgs, open_tasks};
use crate::{
    libs::{
        config::{normalize_operator_name, Config, DEFAULT_OPERATOR_NAME},
        export::{ExportFormat, Exporter},
        messages::Message,
        range::{aggregate, resolve},
    },
    msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    range: RangeArgs,

    #[arg(long, value_enum, default_value = "excel")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Operator name used in the generated file name
    #[arg(short, long)]
    name: Option<String>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let operator_name = args
        .name
        .or(config.operator_name)
        .map(|name| normalize_operator_name(&name))
        .unwrap_or_else(|| DEFAULT_OPERATOR_NAME.to_string());

    let today = Local::now().date_naive();
    let range = &args.range;
    let predicate = resolve(&range.mode, range.from.as_deref(), range.to.as_deref(), today);
    let tasks = aggregate(&open_tasks()?, &predicate)?;
    if tasks.is_empty() {
        msg_warning!(Message::ExportEmpty(range.mode.clone()));
    }

    let exporter = Exporter::new(&operator_name);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(exporter.file_name(args.format, today)));
    exporter.save(args.format, &tasks, &output)?;

    msg_success!(Message::ExportCompleted(output.display().to_string()));
    Ok(())
}
