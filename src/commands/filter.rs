use super::open_tasks;
use crate::{
    libs::{
        messages::Message,
        range::{aggregate, resolve},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Range selection shared by `filter` and `export`.
#[derive(Debug, Args)]
pub struct RangeArgs {
    /// today, tomorrow, week, month or custom
    #[arg(default_value = "today")]
    pub mode: String,

    /// First day of a custom range (YYYY-MM-DD)
    #[arg(short, long)]
    pub from: Option<String>,

    /// Last day of a custom range (YYYY-MM-DD)
    #[arg(short, long)]
    pub to: Option<String>,
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    #[command(flatten)]
    range: RangeArgs,

    /// Print raw JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: FilterArgs) -> Result<()> {
    let range = &args.range;
    let predicate = resolve(&range.mode, range.from.as_deref(), range.to.as_deref(), Local::now().date_naive());
    let tasks = aggregate(&open_tasks()?, &predicate)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else if tasks.is_empty() {
        msg_info!(Message::TasksNotFoundForRange(range.mode.clone()));
    } else {
        msg_print!(Message::TasksRangeHeader(range.mode.clone(), tasks.len()), true);
        View::tasks(&tasks);
    }
    Ok(())
}
