//! Main CLI application structure

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::session::Session;
use crate::storage::{Config, TaskStore};

#[derive(Parser)]
#[command(name = "docket")]
#[command(author, version, about = "A conversational personal task tracker")]
pub struct Cli {
    /// Task file to use instead of the configured or default location
    #[arg(long, short = 'f', env = "DOCKET_FILE")]
    pub file: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let data_file = config.resolve_data_file(cli.file);
    verbose(cli.verbose, &format!("Task file: {}", data_file.display()));

    let mut session = Session::open(TaskStore::new(data_file));
    if let Some(warning) = session.take_load_warning() {
        eprintln!("{}", warning);
    }
    verbose(
        cli.verbose,
        &format!("Loaded {} task(s)", session.tasks().len()),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", session.greeting())?;
    out.flush()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let outcome = session.execute(&line);
        writeln!(out, "{}", outcome.message)?;
        out.flush()?;
        if outcome.exit {
            break;
        }
    }

    Ok(())
}

fn verbose(enabled: bool, message: &str) {
    if enabled {
        eprintln!("[verbose] {}", message);
    }
}
