//! Tree loading: turn a file, a directory tree or an inline config into a
//! single merged [`Config`].
//!
//! Directory trees are walked depth-first in name order. Files of the active
//! format merge into the current level; each subdirectory's result is merged
//! under a key named after the subdirectory.

pub mod filter;

#[cfg(test)]
mod tests;

pub use filter::{Filters, PatternSet, Skip};

use crate::config::Config;
use crate::error::{ConfigenError, Result};
use crate::format::Format;
use crate::merge::{merge, merge_into};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reserved key holding the loaded path when `add_path` is enabled.
///
/// Overwrites any existing key of the same name.
pub const CONFIG_PATH_KEY: &str = "config_path";

/// Something a config can be loaded from.
#[derive(Debug, Clone)]
pub enum Source {
    /// A config file or a directory of config files.
    Path(PathBuf),
    /// A config already in memory; returned unchanged.
    Inline(Config),
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

impl From<&str> for Source {
    fn from(path: &str) -> Self {
        Source::Path(PathBuf::from(path))
    }
}

impl From<Config> for Source {
    fn from(config: Config) -> Self {
        Source::Inline(config)
    }
}

/// Loads configs of one format from files and directory trees.
///
/// A loader holds no state between calls; every [`Loader::load`] builds a
/// fresh config.
#[derive(Debug)]
pub struct Loader {
    format: Format,
    filters: Filters,
    add_path: bool,
}

impl Loader {
    /// Create a loader for `format` with no filters.
    pub fn new(format: Format) -> Self {
        Self {
            format,
            filters: Filters::default(),
            add_path: false,
        }
    }

    /// Use these Keep/Ignore filters during directory walks.
    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Record the loaded path under [`CONFIG_PATH_KEY`].
    pub fn with_add_path(mut self, add_path: bool) -> Self {
        self.add_path = add_path;
        self
    }

    /// Load a config from `source`.
    ///
    /// - An inline config is returned unchanged.
    /// - A file with a recognized extension is decoded on its own, using the
    ///   format of its extension.
    /// - A directory is walked (see the module docs).
    ///
    /// # Errors
    ///
    /// * `NotFound` - the path does not exist
    /// * `Io` - the path exists but cannot be inspected or read
    /// * `MalformedInput` - a file in the tree failed to decode
    /// * `ConfigType` - a file's root is not a mapping
    /// * `UserError` - the path is a file with an unrecognized extension
    pub fn load(&self, source: impl Into<Source>) -> Result<Config> {
        let path = match source.into() {
            Source::Inline(config) => {
                info!(keys = config.len(), "loading inline config");
                return Ok(config);
            }
            Source::Path(path) => path,
        };

        let metadata = fs::metadata(&path).map_err(|e| ConfigenError::from_io(&path, e))?;

        let mut config = if metadata.is_dir() {
            info!(path = %path.display(), format = %self.format, "loading directory");
            let walked = self.load_dir(&path)?;
            unwrap_own_name(walked, &path)
        } else {
            let format = Format::from_path(&path).ok_or_else(|| {
                ConfigenError::UserError(format!(
                    "'{}' is neither a directory nor a .json/.yml/.yaml file",
                    path.display()
                ))
            })?;
            info!(path = %path.display(), format = %format, "loading single file");
            format.read_file(&path)?
        };

        if self.add_path {
            config.insert(
                CONFIG_PATH_KEY.to_string(),
                Value::String(path.display().to_string()),
            );
        }

        Ok(config)
    }

    /// Merge every admitted entry of `dir` into a fresh accumulator.
    fn load_dir(&self, dir: &Path) -> Result<Config> {
        let mut acc = Config::new();

        for entry in sorted_entries(dir)? {
            let name = entry_name(&entry);

            if entry.is_dir() {
                if let Err(skip) = self.filters.check_dir(&name) {
                    debug!(path = %entry.display(), reason = ?skip, "skipping directory");
                    continue;
                }

                // An admitted directory always gets its key, `{}` if nothing in it loaded.
                let nested = self.load_dir(&entry)?;
                let mut wrapped = Config::new();
                wrapped.insert(name, Value::Object(nested));
                merge_into(&mut acc, wrapped);
            } else {
                if !self.format.matches_path(&entry) {
                    debug!(path = %entry.display(), format = %self.format, "not a config file for this format");
                    continue;
                }
                if let Err(skip) = self.filters.check_file(&name) {
                    debug!(path = %entry.display(), reason = ?skip, "skipping file");
                    continue;
                }

                info!(path = %entry.display(), "reading");
                let content = self.format.read_file(&entry)?;
                acc = merge(acc, content);
            }
        }

        Ok(acc)
    }
}

/// List the direct entries of `dir`, sorted by file name.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir).map_err(|e| ConfigenError::io(dir, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ConfigenError::io(dir, e))?;
        entries.push(entry.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(entries)
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// If the walk produced exactly one key named after the loaded directory
/// itself, return that key's mapping instead of the wrapper.
fn unwrap_own_name(mut config: Config, dir: &Path) -> Config {
    let Some(own_name) = own_name(dir) else {
        return config;
    };

    if config.len() == 1
        && config.get(&own_name).is_some_and(Value::is_object)
        && let Some(Value::Object(inner)) = config.remove(&own_name)
    {
        debug!(key = %own_name, "unwrapping top-level key named after the directory");
        return inner;
    }
    config
}

/// Base name of a directory path; resolves `.` and trailing `..` components.
fn own_name(dir: &Path) -> Option<String> {
    match dir.file_name() {
        Some(name) => Some(name.to_string_lossy().into_owned()),
        None => dir
            .canonicalize()
            .ok()
            .and_then(|abs| abs.file_name().map(|n| n.to_string_lossy().into_owned())),
    }
}
