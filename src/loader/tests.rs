//! Tests for tree loading.

use super::*;
use crate::test_support::{config_from, create_config_tree, write_files};
use serde_json::json;

fn json_loader() -> Loader {
    Loader::new(Format::Json)
}

#[test]
fn test_subdirectory_nests_under_its_name() {
    let temp_dir = create_config_tree(&[
        ("root/top.json", r#"{"a": 1}"#),
        ("root/sub/leaf.json", r#"{"b": 2}"#),
    ]);

    let config = json_loader().load(temp_dir.path().join("root")).unwrap();
    assert_eq!(config, config_from(json!({"a": 1, "sub": {"b": 2}})));
}

#[test]
fn test_deep_nesting() {
    let temp_dir = create_config_tree(&[
        ("a/b/c/leaf.json", r#"{"depth": 3}"#),
        ("a/b/mid.json", r#"{"depth": 2}"#),
    ]);

    let config = json_loader().load(temp_dir.path()).unwrap();
    assert_eq!(
        config,
        config_from(json!({"a": {"b": {"depth": 2, "c": {"depth": 3}}}}))
    );
}

#[test]
fn test_files_in_same_directory_merge_deeply() {
    let temp_dir = create_config_tree(&[
        ("db.json", r#"{"db": {"host": "localhost", "port": 5432}}"#),
        ("db_override.json", r#"{"db": {"port": 6543}, "debug": true}"#),
    ]);

    let config = json_loader().load(temp_dir.path()).unwrap();
    assert_eq!(
        config,
        config_from(json!({"db": {"host": "localhost", "port": 6543}, "debug": true}))
    );
}

#[test]
fn test_sorted_order_decides_conflicts() {
    // Written in reverse so creation order cannot leak into the result.
    let temp_dir = create_config_tree(&[
        ("02-late.json", r#"{"level": "late"}"#),
        ("01-early.json", r#"{"level": "early", "only_early": 1}"#),
    ]);

    let config = json_loader().load(temp_dir.path()).unwrap();
    assert_eq!(config["level"], json!("late"));
    assert_eq!(config["only_early"], json!(1));
}

#[test]
fn test_loading_twice_is_identical() {
    let temp_dir = create_config_tree(&[
        ("b.json", r#"{"k": "b", "list": [1]}"#),
        ("a.json", r#"{"k": "a", "list": [2, 3]}"#),
        ("nested/x.json", r#"{"x": 1}"#),
        ("nested/y.json", r#"{"x": 2}"#),
    ]);

    let loader = json_loader();
    let first = loader.load(temp_dir.path()).unwrap();
    let second = loader.load(temp_dir.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        Format::Json.encode(&first).unwrap(),
        Format::Json.encode(&second).unwrap()
    );
}

#[test]
fn test_subdirectory_merges_with_file_defined_key() {
    let temp_dir = create_config_tree(&[
        ("base.json", r#"{"service": {"name": "api", "port": 80}}"#),
        ("service/port.json", r#"{"port": 8080}"#),
    ]);

    let config = json_loader().load(temp_dir.path()).unwrap();
    assert_eq!(
        config,
        config_from(json!({"service": {"name": "api", "port": 8080}}))
    );
}

#[test]
fn test_ignore_pattern_excludes_file() {
    let temp_dir = create_config_tree(&[("a.json", r#"{"a": 1}"#), ("b.json", r#"{"b": 2}"#)]);

    let filters = Filters::new(&[] as &[&str], &["b.*"]).unwrap();
    let config = json_loader()
        .with_filters(filters)
        .load(temp_dir.path())
        .unwrap();
    assert_eq!(config, config_from(json!({"a": 1})));
}

#[test]
fn test_keep_and_ignore_together() {
    let temp_dir = create_config_tree(&[("a.json", r#"{"a": 1}"#), ("b.json", r#"{"b": 2}"#)]);

    let filters = Filters::new(&["a.*"], &["b.*"]).unwrap();
    let config = json_loader()
        .with_filters(filters)
        .load(temp_dir.path())
        .unwrap();
    assert_eq!(config, config_from(json!({"a": 1})));
}

#[test]
fn test_keep_alone_selects_matching_files() {
    let temp_dir = create_config_tree(&[("a.json", r#"{"a": 1}"#), ("b.json", r#"{"b": 2}"#)]);

    let filters = Filters::new(&["b.*"], &[]).unwrap();
    let config = json_loader()
        .with_filters(filters)
        .load(temp_dir.path())
        .unwrap();
    assert_eq!(config, config_from(json!({"b": 2})));
}

#[test]
fn test_keep_does_not_block_subdirectories() {
    let temp_dir = create_config_tree(&[
        ("main.json", r#"{"main": true}"#),
        ("other.json", r#"{"other": true}"#),
        ("nested/main.json", r#"{"nested": true}"#),
        ("nested/skip.json", r#"{"skip": true}"#),
    ]);

    let filters = Filters::new(&["^main"], &[]).unwrap();
    let config = json_loader()
        .with_filters(filters)
        .load(temp_dir.path())
        .unwrap();
    assert_eq!(
        config,
        config_from(json!({"main": true, "nested": {"nested": true}}))
    );
}

#[test]
fn test_ignore_pattern_excludes_directory() {
    let temp_dir = create_config_tree(&[
        ("app.json", r#"{"app": 1}"#),
        ("secrets/keys.json", r#"{"key": "hunter2"}"#),
    ]);

    let filters = Filters::new(&[] as &[&str], &["^secrets$"]).unwrap();
    let config = json_loader()
        .with_filters(filters)
        .load(temp_dir.path())
        .unwrap();
    assert_eq!(config, config_from(json!({"app": 1})));
}

#[test]
fn test_ignore_pattern_matches_name_not_full_path() {
    let temp_dir = create_config_tree(&[("conf/a.json", r#"{"a": 1}"#)]);

    // "conf" appears in the full path but not in the file name.
    let filters = Filters::new(&[] as &[&str], &["conf"]).unwrap();
    let config = json_loader()
        .with_filters(filters)
        .load(temp_dir.path().join("conf"))
        .unwrap();
    assert_eq!(config, config_from(json!({"a": 1})));
}

#[test]
fn test_other_formats_and_files_are_skipped() {
    let temp_dir = create_config_tree(&[
        ("app.json", r#"{"from": "json"}"#),
        ("app.yml", "from: yml\n"),
        ("extra.yaml", "extra: true\n"),
        ("README.md", "# not config"),
        ("notes.txt", "{\"ignored\": true}"),
    ]);

    let json = json_loader().load(temp_dir.path()).unwrap();
    assert_eq!(json, config_from(json!({"from": "json"})));

    let yaml = Loader::new(Format::Yaml).load(temp_dir.path()).unwrap();
    assert_eq!(yaml, config_from(json!({"from": "yml", "extra": true})));
}

#[test]
fn test_empty_directory_yields_empty_mapping() {
    let temp_dir = create_config_tree(&[]);

    let config = json_loader().load(temp_dir.path()).unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_subdirectory_without_config_keeps_its_key() {
    let temp_dir = create_config_tree(&[("top.json", r#"{"a": 1}"#)]);
    std::fs::create_dir(temp_dir.path().join("empty")).unwrap();
    write_files(temp_dir.path(), &[("sub/leaf.yml", "b: 2\n")]);

    let config = json_loader().load(temp_dir.path()).unwrap();
    assert_eq!(config, config_from(json!({"a": 1, "empty": {}, "sub": {}})));
}

#[test]
fn test_subdirectory_with_all_files_filtered_keeps_its_key() {
    let temp_dir = create_config_tree(&[
        ("app.json", r#"{"app": 1}"#),
        ("db/secret.json", r#"{"password": "x"}"#),
    ]);

    let filters = Filters::new(&[] as &[&str], &["^secret"]).unwrap();
    let config = json_loader()
        .with_filters(filters)
        .load(temp_dir.path())
        .unwrap();
    assert_eq!(config, config_from(json!({"app": 1, "db": {}})));
}

#[test]
fn test_all_files_filtered_yields_empty_mapping() {
    let temp_dir = create_config_tree(&[("a.json", r#"{"a": 1}"#)]);

    let filters = Filters::new(&[] as &[&str], &["json"]).unwrap();
    let config = json_loader()
        .with_filters(filters)
        .load(temp_dir.path())
        .unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_single_file_mode() {
    let temp_dir = create_config_tree(&[("settings.json", r#"{"a": {"b": 1}}"#)]);

    let config = json_loader()
        .load(temp_dir.path().join("settings.json"))
        .unwrap();
    assert_eq!(config, config_from(json!({"a": {"b": 1}})));
}

#[test]
fn test_single_file_uses_its_own_format() {
    let temp_dir = create_config_tree(&[("settings.yaml", "a:\n  b: 1\n")]);

    let config = json_loader()
        .load(temp_dir.path().join("settings.yaml"))
        .unwrap();
    assert_eq!(config, config_from(json!({"a": {"b": 1}})));
}

#[test]
fn test_single_file_with_unknown_extension_is_user_error() {
    let temp_dir = create_config_tree(&[("settings.toml", "a = 1\n")]);

    let err = json_loader()
        .load(temp_dir.path().join("settings.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigenError::UserError(_)));
}

#[test]
fn test_inline_config_passes_through() {
    let inline = config_from(json!({"name": "inline", "nested": {"k": [1, 2]}}));
    let config = json_loader()
        .with_add_path(true)
        .load(inline.clone())
        .unwrap();
    assert_eq!(config, inline);
}

#[test]
fn test_missing_path_is_not_found() {
    let temp_dir = create_config_tree(&[]);
    let missing = temp_dir.path().join("missing");

    let err = json_loader().load(missing.clone()).unwrap_err();
    match err {
        ConfigenError::NotFound(path) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_uninspectable_path_is_io_error() {
    let temp_dir = create_config_tree(&[("a.json", r#"{"a": 1}"#)]);
    // A path through a regular file fails with ENOTDIR, not ENOENT.
    let blocked = temp_dir.path().join("a.json").join("child");

    let err = json_loader().load(blocked.clone()).unwrap_err();
    match err {
        ConfigenError::Io { path, .. } => assert_eq!(path, blocked),
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_aborts_whole_load() {
    let temp_dir = create_config_tree(&[
        ("a.json", r#"{"a": 1}"#),
        ("b.json", "{invalid"),
        ("c.json", r#"{"c": 3}"#),
    ]);

    let err = json_loader().load(temp_dir.path()).unwrap_err();
    match err {
        ConfigenError::MalformedInput { path, .. } => assert!(path.ends_with("b.json")),
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_in_subdirectory_reports_its_path() {
    let temp_dir = create_config_tree(&[
        ("ok.yml", "ok: true\n"),
        ("nested/deeper/bad.yml", "key: [unclosed\n"),
    ]);

    let err = Loader::new(Format::Yaml)
        .load(temp_dir.path())
        .unwrap_err();
    match err {
        ConfigenError::MalformedInput { path, .. } => {
            assert!(path.contains("deeper"));
            assert!(path.ends_with("bad.yml"));
        }
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}

#[test]
fn test_non_mapping_file_is_config_type_error() {
    let temp_dir = create_config_tree(&[("list.json", "[1, 2, 3]")]);

    let err = json_loader().load(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigenError::ConfigType(_)));
}

#[test]
fn test_own_name_key_is_unwrapped() {
    let temp_dir = create_config_tree(&[("conf/conf/app.json", r#"{"app": 1}"#)]);

    let config = json_loader().load(temp_dir.path().join("conf")).unwrap();
    assert_eq!(config, config_from(json!({"app": 1})));
}

#[test]
fn test_own_name_key_kept_when_siblings_exist() {
    let temp_dir = create_config_tree(&[
        ("conf/conf/app.json", r#"{"app": 1}"#),
        ("conf/top.json", r#"{"top": 2}"#),
    ]);

    let config = json_loader().load(temp_dir.path().join("conf")).unwrap();
    assert_eq!(
        config,
        config_from(json!({"conf": {"app": 1}, "top": 2}))
    );
}

#[test]
fn test_unwrap_applies_to_top_level_only() {
    let temp_dir = create_config_tree(&[("root/sub/sub/leaf.json", r#"{"leaf": 1}"#)]);

    let config = json_loader().load(temp_dir.path().join("root")).unwrap();
    assert_eq!(
        config,
        config_from(json!({"sub": {"sub": {"leaf": 1}}}))
    );
}

#[test]
fn test_add_path_records_loaded_path() {
    let temp_dir = create_config_tree(&[("root/a.json", r#"{"a": 1}"#)]);
    let root = temp_dir.path().join("root");

    let config = json_loader().with_add_path(true).load(root.clone()).unwrap();
    assert_eq!(config["a"], json!(1));
    assert_eq!(
        config[CONFIG_PATH_KEY],
        json!(root.display().to_string())
    );
}

#[test]
fn test_add_path_overwrites_existing_key() {
    let temp_dir = create_config_tree(&[("a.json", r#"{"config_path": "user value"}"#)]);
    let file = temp_dir.path().join("a.json");

    let config = json_loader().with_add_path(true).load(file.clone()).unwrap();
    assert_eq!(config.len(), 1);
    assert_eq!(
        config[CONFIG_PATH_KEY],
        json!(file.display().to_string())
    );
}

#[test]
fn test_source_conversions() {
    assert!(matches!(Source::from("conf"), Source::Path(_)));
    assert!(matches!(
        Source::from(Path::new("conf")),
        Source::Path(_)
    ));
    assert!(matches!(Source::from(Config::new()), Source::Inline(_)));
}
