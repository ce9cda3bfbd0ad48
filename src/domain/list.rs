//! Ordered task collection
//!
//! Owns its tasks outright; insertion order is what gives a task its
//! user-visible 1-based index. The off-by-one translation and the bounds
//! check live here so callers never touch raw positions.

use super::error::CommandError;
use super::task::Task;

/// Task-type tag handed to the factory by command classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKeyword {
    Todo,
    Deadline,
    Event,
}

impl TaskKeyword {
    fn as_str(&self) -> &'static str {
        match self {
            TaskKeyword::Todo => "todo",
            TaskKeyword::Deadline => "deadline",
            TaskKeyword::Event => "event",
        }
    }
}

/// An ordered, mutable collection of tasks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a list from already-loaded tasks, preserving their order
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }

    /// Returns the number of tasks
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no tasks are tracked
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all tasks in order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.0.iter()
    }

    /// Returns the tasks as a slice, in order
    pub fn tasks(&self) -> &[Task] {
        &self.0
    }

    /// Builds a task from a raw command line and its leading keyword.
    ///
    /// Splits happen on the first occurrence of each delimiter token only,
    /// so a description containing the literal text `/by`, `/from` or `/to`
    /// gets truncated there. Accepted limitation.
    pub fn build_task(line: &str, keyword: TaskKeyword) -> Result<Task, CommandError> {
        let rest = line
            .trim_start()
            .strip_prefix(keyword.as_str())
            .unwrap_or("");

        match keyword {
            TaskKeyword::Todo => {
                let description = rest.trim();
                if description.is_empty() {
                    return Err(CommandError::MissingDescription);
                }
                Ok(Task::todo(description))
            }
            TaskKeyword::Deadline => {
                if rest.trim().is_empty() {
                    return Err(CommandError::MissingDescription);
                }
                let (description, by) =
                    split_first(rest, "/by").ok_or(CommandError::MissingDeadline)?;
                // A bare trailing `/by` counts as no deadline at all.
                if by.is_empty() {
                    return Err(CommandError::MissingDeadline);
                }
                if description.is_empty() {
                    return Err(CommandError::MissingDescription);
                }
                Ok(Task::deadline(description, by))
            }
            TaskKeyword::Event => {
                if rest.trim().is_empty() {
                    return Err(CommandError::MissingDescription);
                }
                let (description, span) =
                    split_first(rest, "/from").ok_or(CommandError::MissingEventSpan)?;
                let (from, to) = split_first(span, "/to").ok_or(CommandError::MissingEventSpan)?;
                // Same for a bare trailing `/to`.
                if to.is_empty() {
                    return Err(CommandError::MissingEventSpan);
                }
                if description.is_empty() {
                    return Err(CommandError::MissingDescription);
                }
                Ok(Task::event(description, from, to))
            }
        }
    }

    /// Appends a task to the end of the list
    pub fn add(&mut self, task: Task) {
        self.0.push(task);
    }

    /// Removes and returns the task at the 1-based index
    pub fn remove(&mut self, index: usize) -> Result<Task, CommandError> {
        let position = self.position(index)?;
        Ok(self.0.remove(position))
    }

    /// Marks the task at the 1-based index as done, returning it
    pub fn mark_done(&mut self, index: usize) -> Result<&Task, CommandError> {
        let position = self.position(index)?;
        let task = &mut self.0[position];
        task.mark_done();
        Ok(task)
    }

    /// Marks the task at the 1-based index as not done, returning it
    pub fn unmark_done(&mut self, index: usize) -> Result<&Task, CommandError> {
        let position = self.position(index)?;
        let task = &mut self.0[position];
        task.unmark_done();
        Ok(task)
    }

    /// Returns a new list holding every task whose description contains
    /// `query`, in original relative order. Case-sensitive exact substring
    /// match; the source list is untouched.
    pub fn filter(&self, query: &str) -> TaskList {
        TaskList(
            self.0
                .iter()
                .filter(|task| task.description.contains(query))
                .cloned()
                .collect(),
        )
    }

    /// Renders the numbered listing, or a placeholder when empty
    pub fn render(&self) -> String {
        if self.0.is_empty() {
            return "Nothing to show.".to_string();
        }
        self.0
            .iter()
            .enumerate()
            .map(|(i, task)| format!("{}. {}", i + 1, task))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Count with its noun ("1 task", "3 tasks"), for response messages
    pub fn count_label(&self) -> String {
        format!(
            "{} task{}",
            self.0.len(),
            if self.0.len() == 1 { "" } else { "s" }
        )
    }

    /// Translates a 1-based user index into an internal position
    fn position(&self, index: usize) -> Result<usize, CommandError> {
        if (1..=self.0.len()).contains(&index) {
            Ok(index - 1)
        } else {
            Err(CommandError::TaskNotFound)
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Splits on the first occurrence of `token`, trimming both sides
fn split_first<'a>(text: &'a str, token: &str) -> Option<(&'a str, &'a str)> {
    let (head, tail) = text.split_once(token)?;
    Some((head.trim(), tail.trim()))
}
