//! Atomic file writes.
//!
//! Output files are written to a temporary sibling, synced, and renamed over
//! the target. A failure at any step removes the temporary file, so the
//! target is either left untouched or holds the complete new content.
//!
//! Source and destination share a directory, so the rename never crosses a
//! filesystem boundary. `std::fs::rename` replaces an existing target on both
//! POSIX and Windows.

use crate::error::{ConfigenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating missing parent directories.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(ConfigenError::Io)` - On directory creation, write, sync or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| ConfigenError::io(parent, e))?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary sibling of `target`: `.{filename}.{pid}.tmp`.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let filename = target.file_name().ok_or_else(|| {
        ConfigenError::UserError(format!(
            "cannot write to '{}': path has no file name",
            target.display()
        ))
    })?;

    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(filename);
    temp_name.push(format!(".{}.tmp", std::process::id()));

    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ConfigenError::io(path, e))?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            ConfigenError::io(path, e)
        })
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        ConfigenError::io(target, e)
    })?;

    // Persist the directory entry as well.
    #[cfg(unix)]
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}
