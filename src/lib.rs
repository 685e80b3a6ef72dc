//! Configen: merge hierarchical JSON and YAML configuration trees.
//!
//! A directory of config files is loaded into a single [`config::Config`]:
//! files merge at the current level, subdirectories nest under their name.
//! The result can be written back out as JSON or YAML.

pub mod cli;
pub mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod fs;
pub mod loader;
pub mod logging;
pub mod merge;
pub mod writer;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use convert::convert;
pub use error::{ConfigenError, Result};
pub use format::{Format, normalize_extension};
pub use loader::{Filters, Loader, Source};
pub use merge::merge;
pub use writer::write;
