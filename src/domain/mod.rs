//! Domain models
//!
//! Core task and collection logic without any I/O concerns.

mod error;
mod list;
mod task;

pub use error::CommandError;
pub use list::{TaskKeyword, TaskList};
pub use task::{Task, TaskKind};
