//! Display implementation for daytask messages.
//!
//! All user-facing text lives here, in one `match`, so wording stays
//! consistent between the one-shot commands and the interactive shell.
//! Bucket names arrive lowercase and are capitalized for display.

use super::types::Message;
use crate::libs::bucket::capitalize;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded { bucket, id, name } => format!("Added task {} to {}: {}", id, capitalize(bucket), name),
            Message::TaskRenamed { bucket, id } => format!("Task {} in {} renamed", id, capitalize(bucket)),
            Message::TaskMarkedDone { bucket, id } => format!("Task {} in {} marked as done", id, capitalize(bucket)),
            Message::TaskMarkedPending { bucket, id } => format!("Task {} in {} marked as pending", id, capitalize(bucket)),
            Message::TaskNotFoundWithId { bucket, id } => format!("No task with ID {} in {}.", id, capitalize(bucket)),
            Message::BucketCreated(bucket) => format!("Created new bucket {}", capitalize(bucket)),
            Message::BucketEmpty(bucket) => format!("No tasks in {}.", capitalize(bucket)),
            Message::NoTasks => "No tasks yet.".to_string(),

            // === FILE MESSAGES ===
            Message::TasksSaved(path) => format!("Saved to {}", path),
            Message::TasksLoaded(path) => format!("Loaded from {}", path),
            Message::TasksImported(path) => format!("Imported tasks from {}", path),
            Message::ImportFailed(path) => format!("Import from {} was not completed", path),
            Message::ExportFailed(path) => format!("Export to {} was not completed", path),
            Message::TaskFileNotFound(path) => format!("File not found: {}", path),
            Message::TasksSaveFailed(error) => format!("Failed to save file: {}", error),
            Message::TasksLoadFailed(error) => format!("Failed to load file: {}", error),
            Message::AutosaveFailed(error) => format!("Autosave failed: {}", error),
            Message::WorkingFile(path) => format!("Working file: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleTasks => "Tasks".to_string(),

            // === SHELL MESSAGES ===
            Message::InvalidCommand => "Invalid command".to_string(),
            Message::InvalidDay(day) => format!("'{}' is not a day of the week or 'general'", day),
            Message::ShellGoodbye => "Bye!".to_string(),

            // === PROMPTS ===
            Message::PromptCommand => "Enter command".to_string(),
            Message::PromptDay => "Enter day (blank for general)".to_string(),
            Message::PromptTaskIndex => "Enter task index".to_string(),
            Message::PromptTaskName => "Enter task".to_string(),
            Message::PromptFilename(default) => format!("Enter filename (default: {})", default),
            Message::PromptTasksFile => "Path of the tasks file".to_string(),
            Message::PromptDefaultDay => "Default day for new tasks (blank for general)".to_string(),
            Message::PromptConfirmDeleteConfig => "Remove the daytask configuration?".to_string(),
        };

        write!(f, "{}", text)
    }
}
