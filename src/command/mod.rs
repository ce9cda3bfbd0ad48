//! Command classification and execution
//!
//! A raw input line is classified by its leading keyword, then the
//! resulting command kind is executed against the task list and its store.

mod execute;
mod parser;

pub use execute::{execute, Outcome};
pub use parser::{classify, CommandKind};
