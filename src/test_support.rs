use std::path::Path;
use tempfile::TempDir;

/// Create a temp directory populated with `files`, given as
/// `(relative path, contents)` pairs. Parent directories are created.
pub(crate) fn create_config_tree(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_files(temp_dir.path(), files);
    temp_dir
}

/// Write `files` under `root`, creating parent directories as needed.
pub(crate) fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (relative, contents) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("failed to create {}: {}", parent.display(), e));
        }
        std::fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
    }
}

/// Build a [`crate::config::Config`] from a `serde_json::json!` literal.
pub(crate) fn config_from(value: serde_json::Value) -> crate::config::Config {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}
