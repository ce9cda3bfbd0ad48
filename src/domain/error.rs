//! User-facing command failures
//!
//! One variant per failure mode the interactive loop can recover from.
//! The `#[error]` string is the exact text shown to the user.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("I don't know that command. Try: todo, deadline, event, list, mark, unmark, delete, find, bye")]
    UnknownCommand,

    #[error("The task needs a description")]
    MissingDescription,

    #[error("A deadline needs a /by time")]
    MissingDeadline,

    #[error("An event needs /from and /to times")]
    MissingEventSpan,

    #[error("That task does not exist")]
    TaskNotFound,
}
