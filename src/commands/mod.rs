pub mod export;
pub mod filter;
pub mod init;
pub mod serve;
pub mod task;

use crate::db::tasks::{Tasks, PARTITION_KEY_FORMAT};
use crate::libs::config::Config;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start the HTTP server")]
    Serve(serve::ServeArgs),
    #[command(about = "Create task")]
    Add(task::AddArgs),
    #[command(about = "Display tasks for a given date")]
    Show(task::ShowArgs),
    #[command(about = "Update fields of a task")]
    Update(task::UpdateArgs),
    #[command(about = "Delete a task")]
    Delete(task::DeleteArgs),
    #[command(about = "Display tasks for a date range")]
    Filter(filter::FilterArgs),
    #[command(about = "Export a date range to a spreadsheet")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Add(args) => task::add(args),
            Commands::Show(args) => task::show(args),
            Commands::Update(args) => task::update(args),
            Commands::Delete(args) => task::delete(args),
            Commands::Filter(args) => filter::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Opens the file-backed task store configured for this installation.
pub(crate) fn open_tasks() -> Result<Tasks> {
    let config = Config::read()?;
    Ok(Tasks::open(config.partitions_dir()?)?)
}

/// Accepts `today`, `tomorrow` or a `YYYY-MM-DD` date and returns the partition key.
pub(crate) fn parse_date(date_str: &str) -> Result<String> {
    let today = Local::now().date_naive();
    let date = match date_str.to_lowercase().as_str() {
        "today" => today,
        "tomorrow" => today + chrono::Duration::days(1),
        _ => NaiveDate::parse_from_str(date_str, PARTITION_KEY_FORMAT)?,
    };
    Ok(date.format(PARTITION_KEY_FORMAT).to_string())
}
