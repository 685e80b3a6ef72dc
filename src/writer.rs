//! Write configs to disk.

use crate::error::Result;
use crate::format::Format;
use crate::fs::atomic_write_file;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Encode `config` as `format` and write it to `path`.
///
/// The format's extension is appended to `path` when missing; the path
/// actually written is returned. Encoding happens before any file is
/// touched, so an `UnsupportedValue` error leaves the filesystem unchanged.
pub fn write<T: Serialize + ?Sized>(path: &Path, config: &T, format: Format) -> Result<PathBuf> {
    let target = format.normalize_path(path);
    let encoded = format.encode(config)?;

    atomic_write_file(&target, &encoded)?;
    info!(path = %target.display(), format = %format, bytes = encoded.len(), "wrote config");

    Ok(target)
}
