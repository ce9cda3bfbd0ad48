//! # Command-Line Interface
//!
//! Argument parsing and the console loop. The loop stays thin: it reads a
//! line, hands it to [`crate::Session::execute`], prints the response, and
//! stops when the exit flag comes back.
//!
//! Call [`run()`] to parse arguments and start the loop.

mod app;

pub use app::{run, Cli};
