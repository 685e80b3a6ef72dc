//! Config file formats.
//!
//! The set of formats is closed: [`Format`] is matched exhaustively wherever
//! format-specific behavior is needed (extension, decode, encode).

mod codec;


pub use codec::JSON_INDENT;

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// A supported config file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Format {
    /// JSON (`.json`).
    Json,
    /// YAML (`.yml`, also `.yaml`).
    #[value(alias = "yml")]
    Yaml,
}

impl Format {
    /// Every known format, in default read order.
    pub const ALL: [Format; 2] = [Format::Json, Format::Yaml];

    /// Short lowercase name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Canonical file extension (no leading dot), used when normalizing
    /// output paths.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yml",
        }
    }

    /// All file extensions recognized as this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Json => &["json"],
            Format::Yaml => &["yml", "yaml"],
        }
    }

    /// Look up a format by file extension. Matching is exact (case-sensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext))
    }

    /// Detect the format of a path from its final extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether the path's final extension is one of this format's extensions.
    pub fn matches_path(&self, path: &Path) -> bool {
        Self::from_path(path) == Some(*self)
    }

    /// Ensure `path` ends in one of this format's extensions, appending the
    /// canonical extension otherwise.
    pub fn normalize_path(&self, path: &Path) -> PathBuf {
        if self.matches_path(path) {
            path.to_path_buf()
        } else {
            normalize_extension(path, self.extension())
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Append `.{expected_ext}` to `path` unless its final extension already
/// equals `expected_ext`.
///
/// This never strips or swaps an existing extension: `config.tmp` becomes
/// `config.tmp.json`, and `config.tmp.json` is left as is.
pub fn normalize_extension(path: &Path, expected_ext: &str) -> PathBuf {
    let current = path.extension().and_then(|ext| ext.to_str());
    if current == Some(expected_ext) {
        return path.to_path_buf();
    }

    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(".");
    raw.push(expected_ext);
    PathBuf::from(raw)
}
