//! # Storage Layer
//!
//! Durable storage for the task list.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | JSONL (one JSON per line) | platform data dir, `tasks.jsonl` |
//! | Config | TOML | platform config dir, `config.toml` |
//!
//! Saves are full snapshots: temp file + atomic rename, with an exclusive
//! file lock (`fs2`) held while writing. Loads tolerate a missing or
//! partially corrupt file; the contract is "fewer or zero tasks", never a
//! startup crash.

mod config;
mod jsonl;

pub use config::Config;
pub use jsonl::TaskStore;
