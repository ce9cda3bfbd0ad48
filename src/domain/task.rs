//! Task domain model
//!
//! A task is a description with a completion flag. Three kinds exist:
//! plain to-dos, deadline-bound tasks, and time-ranged events. The kind
//! carries the temporal fields; everything else is shared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag plus kind-specific temporal fields
///
/// Deadline and event times are kept as the text the user typed
/// ("friday", "2pm"); no date parsing is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { from: String, to: String },
}

impl TaskKind {
    /// Single-letter marker shown in listings
    pub fn marker(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

/// A tracked unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Kind tag and temporal fields; flattened so the tag leads each record
    #[serde(flatten)]
    pub kind: TaskKind,

    /// What needs doing; never empty for a constructed task
    pub description: String,

    /// Completion flag
    #[serde(default)]
    pub done: bool,

    /// When the task was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not-yet-done task
    pub fn new(kind: TaskKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            done: false,
            created_at: Utc::now(),
        }
    }

    /// Creates a plain to-do
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(TaskKind::Todo, description)
    }

    /// Creates a deadline-bound task
    pub fn deadline(description: impl Into<String>, by: impl Into<String>) -> Self {
        Self::new(TaskKind::Deadline { by: by.into() }, description)
    }

    /// Creates a time-ranged event
    pub fn event(
        description: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::new(
            TaskKind::Event {
                from: from.into(),
                to: to.into(),
            },
            description,
        )
    }

    /// Marks the task as done
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the task as not done
    pub fn unmark_done(&mut self) {
        self.done = false;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let done = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.marker(), done, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { from, to } => write!(f, " (from: {} to: {})", from, to),
        }
    }
}
