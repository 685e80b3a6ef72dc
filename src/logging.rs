//! Tracing subscriber setup for the CLI.
//!
//! `RUST_LOG` always takes precedence; otherwise the `--verbose` level is
//! used. Logs go to stderr so stdout stays clean for the printed config.

use crate::error::{ConfigenError, Result};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Parse a log level name.
///
/// Accepts the tracing level names in any case, plus `warning` and
/// `critical` as aliases for `warn` and `error`.
pub fn parse_level(name: &str) -> Result<Level> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" | "critical" => Ok(Level::ERROR),
        other => Err(ConfigenError::UserError(format!(
            "unknown log level '{}': expected one of trace, debug, info, warn, error",
            other
        ))),
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
