//! CLI argument parsing for configen.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! orchestration lives in the `commands` module.

use crate::exit_codes;
use crate::format::Format;
use clap::Parser;
use std::path::PathBuf;

/// Configen: merge a directory tree of JSON and YAML config files into one config.
///
/// Files in the given folder are merged at the top level; every subfolder
/// becomes a key holding the merged config of that subfolder.
#[derive(Parser, Debug)]
#[command(name = "configen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file or a folder of config files.
    pub path: PathBuf,

    /// Where to save the merged config. Printed to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Regex patterns; matching file and folder names are skipped.
    #[arg(short, long, num_args = 0..)]
    pub ignored: Vec<String>,

    /// Regex patterns; when given, only matching file names are loaded.
    #[arg(short, long, num_args = 0..)]
    pub keep: Vec<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "INFO")]
    pub verbose: String,

    /// JSON object merged over the result (top-level keys only).
    #[arg(short, long)]
    pub append: Option<String>,

    /// Formats to read, in merge order. Defaults to every known format.
    #[arg(short, long, value_enum, num_args = 1..)]
    pub read: Vec<Format>,

    /// Record the loaded path under the `config_path` key.
    #[arg(long)]
    pub add_path: bool,
}

impl Cli {
    /// Parse command-line arguments from the environment.
    ///
    /// Failures are returned rather than exiting, so the caller controls the
    /// exit code (see [`parse_failure_code`]).
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Formats to read; every known format when `--read` was not given.
    pub fn read_formats(&self) -> Vec<Format> {
        if self.read.is_empty() {
            Format::ALL.to_vec()
        } else {
            self.read.clone()
        }
    }
}

/// Exit code for a clap parse result that did not produce a [`Cli`].
///
/// `--help` and `--version` succeed; every real parse failure is a user
/// error, never clap's own code 2.
pub fn parse_failure_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        exit_codes::USER_ERROR
    } else {
        exit_codes::SUCCESS
    }
}
