//! Error types for configen.
//!
//! Uses thiserror for derive macros. Nothing here is recovered internally:
//! the first error aborts the whole load or write and surfaces at the CLI.

use crate::exit_codes;
use crate::format::Format;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for configen operations.
///
/// Each variant maps to its own exit code (see [`exit_codes`]).
#[derive(Error, Debug)]
pub enum ConfigenError {
    /// The requested path does not exist.
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A file (or in-memory input) is not valid syntax for its format.
    #[error("failed to parse '{path}': {message}")]
    MalformedInput { path: String, message: String },

    /// A value could not be encoded in the target format.
    #[error("cannot encode value as {format}: {message}")]
    UnsupportedValue { format: Format, message: String },

    /// Reading or writing the filesystem failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A mapping was required but something else was supplied.
    #[error("{0}")]
    ConfigType(String),

    /// Invalid arguments: bad regex, unusable path, unknown log level.
    #[error("{0}")]
    UserError(String),
}

impl ConfigenError {
    /// Wrap an `io::Error` with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigenError::Io {
            path: path.into(),
            source,
        }
    }

    /// Like [`ConfigenError::io`], but a missing path becomes `NotFound`.
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigenError::NotFound(path.to_path_buf())
        } else {
            ConfigenError::io(path, source)
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigenError::UserError(_) => exit_codes::USER_ERROR,
            ConfigenError::NotFound(_) => exit_codes::NOT_FOUND,
            ConfigenError::MalformedInput { .. } => exit_codes::MALFORMED_INPUT,
            ConfigenError::UnsupportedValue { .. } => exit_codes::UNSUPPORTED_VALUE,
            ConfigenError::Io { .. } => exit_codes::IO_FAILURE,
            ConfigenError::ConfigType(_) => exit_codes::CONFIG_TYPE,
        }
    }
}

/// Result type alias for configen operations.
pub type Result<T> = std::result::Result<T, ConfigenError>;
