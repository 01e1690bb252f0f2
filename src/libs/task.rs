//! Task records kept inside a bucket.
//!
//! A task is deliberately small: a session-local id, free text and a
//! two-valued status. Ids are only meaningful inside one bucket for the
//! lifetime of the current session; they are not written to disk in the
//! canonical file format.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Completion state of a task.
///
/// Serialized as `"Pending"` / `"Done"`, which is also the text shown in
/// listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Done => "Done",
        }
    }

    /// Parses a stored status string, ignoring case.
    ///
    /// Returns `None` for anything that is not `pending` or `done`, leaving
    /// the fallback decision to the caller.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pending" => Some(TaskStatus::Pending),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Session-local id, unique within its bucket.
    pub id: u32,
    pub name: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: u32, name: &str, status: TaskStatus) -> Self {
        Task {
            id,
            name: name.to_string(),
            status,
        }
    }
}

impl Display for Task {
    /// Renders the listing line `<id>: <name> - <status>`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.id, self.name, self.status)
    }
}
