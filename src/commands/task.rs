use super::{open_tasks, parse_date};
use crate::{
    libs::{
        messages::Message,
        task::{Task, TaskId, TaskPatch},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use serde_json::Value;

/// Fields shared by `add` and `update`.
#[derive(Debug, Args)]
pub struct TaskFields {
    #[arg(short, long)]
    client: Option<String>,

    #[arg(short, long)]
    project: Option<String>,

    #[arg(short = 'D', long)]
    description: Option<String>,

    /// Start time as HH:MM
    #[arg(short, long)]
    start: Option<String>,

    /// End time as HH:MM
    #[arg(short, long)]
    end: Option<String>,

    /// completed, inprogress, pending, blocked or any other label
    #[arg(long)]
    status: Option<String>,
}

impl TaskFields {
    fn into_patch(self) -> TaskPatch {
        let mut patch = TaskPatch::new();
        let fields = [
            ("clientName", self.client),
            ("projectName", self.project),
            ("description", self.description),
            ("startTime", self.start),
            ("endTime", self.end),
            ("status", self.status),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                patch.insert(key.to_string(), Value::String(value));
            }
        }
        patch
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Date of the task: today, tomorrow or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Explicit id; generated from the current time when omitted
    #[arg(long)]
    id: Option<String>,

    #[command(flatten)]
    fields: TaskFields,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// today, tomorrow or YYYY-MM-DD
    #[arg(default_value = "today")]
    date: String,

    /// Print raw JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Date partition of the task: today, tomorrow or YYYY-MM-DD
    date: String,

    id: String,

    #[command(flatten)]
    fields: TaskFields,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Date partition of the task: today, tomorrow or YYYY-MM-DD
    date: String,

    id: String,
}

pub fn add(args: AddArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let mut task: Task = serde_json::from_value(Value::Object(args.fields.into_patch()))?;
    task.date = Some(date);
    task.id = args.id.as_deref().map(TaskId::from);

    let stored = open_tasks()?.insert(task)?;
    let id = stored.id.as_ref().map(ToString::to_string).unwrap_or_default();
    msg_success!(Message::TaskCreated(id, stored.date.clone().unwrap_or_default()));
    Ok(())
}

pub fn show(args: ShowArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let tasks = open_tasks()?.read(&date);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else if tasks.is_empty() {
        msg_info!(Message::TasksNotFoundForDate(date));
    } else {
        msg_print!(Message::TasksHeader(date), true);
        View::tasks(&tasks);
    }
    Ok(())
}

pub fn update(args: UpdateArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let patch = args.fields.into_patch();
    if patch.is_empty() {
        msg_info!(Message::NothingToUpdate);
        return Ok(());
    }

    open_tasks()?.update(&date, &args.id, &patch)?;
    msg_success!(Message::TaskUpdated(args.id));
    Ok(())
}

pub fn delete(args: DeleteArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    open_tasks()?.remove(&date, &args.id)?;
    msg_success!(Message::TaskDeleted(args.id));
    Ok(())
}
