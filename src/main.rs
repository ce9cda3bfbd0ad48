//! Docket - a conversational personal task tracker

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = docket::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
