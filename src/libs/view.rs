use super::formatter::task_duration;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints tasks as a console table with their derived durations.
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        table.add_row(row!["ID", "DATE", "CLIENT", "PROJECT", "START", "END", "DURATION", "DESCRIPTION", "STATUS"]);
        for task in tasks {
            let id = task.id.as_ref().map(ToString::to_string).unwrap_or_default();
            let duration = task_duration(task.start_time.as_deref(), task.end_time.as_deref());
            table.add_row(row![
                id,
                text(&task.date),
                text(&task.client_name),
                text(&task.project_name),
                text(&task.start_time),
                text(&task.end_time),
                duration,
                text(&task.description),
                text(&task.status)
            ]);
        }
        table.printstd();
    }
}
