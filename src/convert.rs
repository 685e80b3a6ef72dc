//! Convert configs between formats.

use crate::error::Result;
use crate::format::Format;
use crate::loader::{Loader, Source};
use crate::writer;
use std::path::{Path, PathBuf};
use tracing::info;

/// Load `source` as `source_format` and write it as `target_format`.
///
/// A path source has the source extension appended when missing before it
/// is loaded; an inline source is written as is. The target path is
/// normalized to the target extension. Returns the path written.
pub fn convert(
    source_format: Format,
    source: impl Into<Source>,
    target_format: Format,
    target_path: &Path,
) -> Result<PathBuf> {
    let source = match source.into() {
        Source::Path(path) => Source::Path(source_format.normalize_path(&path)),
        inline => inline,
    };
    if let Source::Path(path) = &source {
        info!(from = %path.display(), source = %source_format, target = %target_format, "converting");
    }

    let config = Loader::new(source_format).load(source)?;
    writer::write(target_path, &config, target_format)
}
