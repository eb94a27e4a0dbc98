//! Display implementation for taskify messages.
//!
//! All user-facing console text is defined here, in one place, so commands
//! only ever refer to [`Message`] variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, date) => format!("Task {} created for {}", id, date),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TasksNotFoundForDate(date) => format!("No tasks found for {}", date),
            Message::TasksNotFoundForRange(mode) => format!("No tasks found for range '{}'", mode),
            Message::TasksHeader(date) => format!("Tasks for {}:", date),
            Message::TasksRangeHeader(mode, count) => format!("{} task(s) in range '{}':", count, mode),
            Message::NothingToUpdate => "Nothing to update, pass at least one field".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportEmpty(mode) => format!("Range '{}' is empty, exporting headers only", mode),

            // === SERVER MESSAGES ===
            Message::ServerStarted(url) => format!("Server running on {}", url),
            Message::OperatorName(name) => format!("Exports will be named after {}", name),
            Message::StaticDirMissing(dir) => format!("Static directory {} does not exist, serving the API only", dir),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigWizardHeader => "Taskify configuration".to_string(),
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::PromptOperatorName => "Enter your name".to_string(),
            Message::PromptPort => "HTTP port".to_string(),
            Message::PromptDataDir => "Task data directory".to_string(),
            Message::PromptStaticDir => "Static files directory".to_string(),
        };

        write!(f, "{}", text)
    }
}
