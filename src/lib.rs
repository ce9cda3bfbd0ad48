//! Docket - a conversational personal task tracker
//!
//! Short free-form commands (`todo read book`,
//! `deadline submit report /by friday`, `event sync /from 2pm /to 3pm`,
//! `list`, `mark 1`, `find book`, `bye`) are classified by their leading
//! keyword and executed against an ordered in-memory task list. After
//! every successful mutation the whole list is snapshotted to disk, so
//! tasks survive across sessions.

pub mod cli;
pub mod command;
pub mod domain;
pub mod session;
pub mod storage;

pub use command::Outcome;
pub use domain::{CommandError, Task, TaskKind, TaskList};
pub use session::Session;
