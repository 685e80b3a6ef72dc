//! Configen CLI entry point.
//!
//! Parses arguments, runs the generate command, and maps errors to exit codes.

use configen::cli::{Cli, parse_failure_code};
use configen::{commands, exit_codes};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_failure_code(&err) as u8);
        }
    };

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
