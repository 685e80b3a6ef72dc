//! Build the merged config for a CLI invocation.

use crate::cli::Cli;
use crate::config::{Config, parse_inline_json};
use crate::error::Result;
use crate::format::Format;
use crate::loader::{Filters, Loader};
use crate::merge::merge_into;
use std::path::PathBuf;
use tracing::{info, warn};

/// Validated options for one generate run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// File or directory to load.
    pub path: PathBuf,
    /// Where to write the result; stdout when `None`.
    pub output: Option<PathBuf>,
    pub output_format: Format,
    /// Formats walked for a directory, in merge order.
    pub read: Vec<Format>,
    pub filters: Filters,
    /// Top-level keys written over the merged result.
    pub append: Config,
    pub add_path: bool,
}

impl GenerateOptions {
    /// Build options from parsed CLI arguments.
    ///
    /// Fails on an invalid regex (`UserError`), malformed `--append` JSON
    /// (`MalformedInput`) or an `--append` value that is not an object
    /// (`ConfigType`).
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let filters = Filters::new(&cli.keep, &cli.ignored)?;
        let append = match &cli.append {
            Some(raw) => parse_inline_json(raw)?,
            None => Config::new(),
        };

        Ok(Self {
            path: cli.path.clone(),
            output: cli.output.clone(),
            output_format: cli.format,
            read: cli.read_formats(),
            filters,
            append,
            add_path: cli.add_path,
        })
    }

    /// Options for loading `path` with every format and no filters.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            output: None,
            output_format: Format::Json,
            read: Format::ALL.to_vec(),
            filters: Filters::default(),
            append: Config::new(),
            add_path: false,
        }
    }

    /// Formats to load with. A file is loaded once, in its own format; a
    /// directory (or a missing path, which fails in the loader) uses `read`.
    fn load_formats(&self) -> Vec<Format> {
        if self.path.is_file()
            && let Some(format) = Format::from_path(&self.path)
        {
            return vec![format];
        }
        self.read.clone()
    }
}

/// Load and merge `options.path` once per format, then apply `append`.
pub fn generate(options: &GenerateOptions) -> Result<Config> {
    let mut merged = Config::new();

    for format in options.load_formats() {
        let loader = Loader::new(format)
            .with_filters(options.filters.clone())
            .with_add_path(options.add_path);
        let config = loader.load(options.path.as_path())?;
        info!(format = %format, keys = config.len(), "loaded");
        merge_into(&mut merged, config);
    }

    if !options.append.is_empty() {
        let replaced: Vec<&str> = options
            .append
            .keys()
            .filter(|key| merged.contains_key(*key))
            .map(String::as_str)
            .collect();
        if !replaced.is_empty() {
            warn!(keys = ?replaced, "append overrides existing keys");
        }
        merged.extend(options.append.clone());
    }

    Ok(merged)
}
