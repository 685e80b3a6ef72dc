//! Command implementation for configen.
//!
//! Turns parsed CLI arguments into [`GenerateOptions`], builds the merged
//! config and either writes it to `--output` or prints it to stdout.

mod generate;


pub use generate::{GenerateOptions, generate};

use crate::cli::Cli;
use crate::error::{ConfigenError, Result};
use crate::logging;
use crate::writer;
use std::io::Write;

/// Run the CLI: set up logging, build the config, emit it.
pub fn dispatch(cli: Cli) -> Result<()> {
    let level = logging::parse_level(&cli.verbose)?;
    logging::init(level);

    let options = GenerateOptions::from_cli(&cli)?;
    let config = generate(&options)?;

    match &options.output {
        Some(path) => {
            let written = writer::write(path, &config, options.output_format)?;
            tracing::info!(path = %written.display(), "saved merged config");
        }
        None => {
            let encoded = options.output_format.encode(&config)?;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(encoded.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| ConfigenError::io("<stdout>", e))?;
        }
    }

    Ok(())
}
