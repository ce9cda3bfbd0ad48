//! Command classification
//!
//! Turns a raw input line into a command kind by looking at the first
//! whitespace-delimited token only. Field and index extraction are
//! deferred to execution, so a missing `/by` or a bad index never changes
//! how a line classifies.

use crate::domain::CommandError;

/// One variant per user-facing verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Todo,
    Deadline,
    Event,
    List,
    Mark,
    Unmark,
    Delete,
    Find,
    Bye,
}

/// Classifies a raw line into a command kind.
///
/// Pure function of the input: keywords are case-sensitive and no state is
/// kept between calls.
pub fn classify(line: &str) -> Result<CommandKind, CommandError> {
    match line.split_whitespace().next().unwrap_or("") {
        "todo" => Ok(CommandKind::Todo),
        "deadline" => Ok(CommandKind::Deadline),
        "event" => Ok(CommandKind::Event),
        "list" => Ok(CommandKind::List),
        "mark" => Ok(CommandKind::Mark),
        "unmark" => Ok(CommandKind::Unmark),
        "delete" => Ok(CommandKind::Delete),
        "find" => Ok(CommandKind::Find),
        "bye" => Ok(CommandKind::Bye),
        _ => Err(CommandError::UnknownCommand),
    }
}
