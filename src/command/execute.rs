//! Command execution
//!
//! Each verb runs to completion here: field extraction, collection
//! mutation, and the persistence snapshot, flattened into one response
//! string. Expected failures never escape as errors; a failed save leaves
//! the in-memory mutation standing and appends a warning instead.

use crate::domain::{CommandError, TaskKeyword, TaskList};
use crate::storage::TaskStore;

use super::parser::CommandKind;

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for the front end to display
    pub message: String,
    /// True when the driving loop should stop
    pub exit: bool,
}

impl Outcome {
    /// A plain response that keeps the loop running
    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: false,
        }
    }
}

/// Executes a classified command against the task list and its store.
///
/// The raw line is read again for field and index extraction; the
/// classifier only looked at the leading keyword.
pub fn execute(kind: CommandKind, tasks: &mut TaskList, store: &TaskStore, line: &str) -> Outcome {
    match run(kind, tasks, store, line) {
        Ok(outcome) => outcome,
        Err(err) => Outcome::reply(err.to_string()),
    }
}

fn run(
    kind: CommandKind,
    tasks: &mut TaskList,
    store: &TaskStore,
    line: &str,
) -> Result<Outcome, CommandError> {
    match kind {
        CommandKind::Todo => add_task(tasks, store, line, TaskKeyword::Todo),
        CommandKind::Deadline => add_task(tasks, store, line, TaskKeyword::Deadline),
        CommandKind::Event => add_task(tasks, store, line, TaskKeyword::Event),
        CommandKind::List => Ok(Outcome::reply(tasks.render())),
        CommandKind::Mark => toggle(tasks, store, line, true),
        CommandKind::Unmark => toggle(tasks, store, line, false),
        CommandKind::Delete => delete(tasks, store, line),
        CommandKind::Find => find(tasks, line),
        CommandKind::Bye => Ok(Outcome {
            message: "Bye. See you next time!".to_string(),
            exit: true,
        }),
    }
}

fn add_task(
    tasks: &mut TaskList,
    store: &TaskStore,
    line: &str,
    keyword: TaskKeyword,
) -> Result<Outcome, CommandError> {
    let task = TaskList::build_task(line, keyword)?;
    let rendered = task.to_string();
    tasks.add(task);

    let mut message = format!("Added: {}\nNow tracking {}.", rendered, tasks.count_label());
    append_save_warning(&mut message, tasks, store);
    Ok(Outcome::reply(message))
}

fn toggle(
    tasks: &mut TaskList,
    store: &TaskStore,
    line: &str,
    done: bool,
) -> Result<Outcome, CommandError> {
    let index = parse_index(line)?;
    let rendered = if done {
        format!("Marked as done: {}", tasks.mark_done(index)?)
    } else {
        format!("Marked as not done: {}", tasks.unmark_done(index)?)
    };

    let mut message = rendered;
    append_save_warning(&mut message, tasks, store);
    Ok(Outcome::reply(message))
}

fn delete(tasks: &mut TaskList, store: &TaskStore, line: &str) -> Result<Outcome, CommandError> {
    let index = parse_index(line)?;
    let removed = tasks.remove(index)?;

    let mut message = format!("Removed: {}\nNow tracking {}.", removed, tasks.count_label());
    append_save_warning(&mut message, tasks, store);
    Ok(Outcome::reply(message))
}

fn find(tasks: &TaskList, line: &str) -> Result<Outcome, CommandError> {
    let query = line.trim_start().strip_prefix("find").unwrap_or("").trim();
    Ok(Outcome::reply(tasks.filter(query).render()))
}

/// Parses the trailing token as a 1-based index.
///
/// A non-numeric token gets the same user-facing error as an out-of-range
/// one; the user is told the task does not exist either way.
fn parse_index(line: &str) -> Result<usize, CommandError> {
    line.split_whitespace()
        .last()
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or(CommandError::TaskNotFound)
}

fn append_save_warning(message: &mut String, tasks: &TaskList, store: &TaskStore) {
    if let Err(err) = store.save(tasks) {
        message.push_str(&format!("\nWarning: could not save tasks: {:#}", err));
    }
}
