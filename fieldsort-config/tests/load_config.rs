use std::fs;

use fieldsort_config::{
    ConfigLoadError, ConfigLoader, ConfigSource, FieldsortConfig,
};
use fieldsort_core::SortDirection;
use tempfile::tempdir;

fn bare_loader(root: &std::path::Path) -> ConfigLoader {
    ConfigLoader::default()
        .with_root(root)
        .with_env_path(None)
        .with_env_json(None)
}

#[test]
fn defaults_when_nothing_is_configured() {
    let dir = tempdir().expect("tempdir");
    let load = bare_loader(dir.path()).load().expect("load");
    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config, FieldsortConfig::default());
}

#[test]
fn default_candidate_file_is_discovered() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("config")).expect("mkdir");
    let path = dir.path().join("config/fieldsort.toml");
    fs::write(&path, "[sorter]\ndefault_direction = \"descending\"\n")
        .expect("write");

    let load = bare_loader(dir.path()).load().expect("load");
    assert_eq!(load.source, ConfigSource::File(path));
    assert_eq!(
        load.config.sorter.default_direction,
        SortDirection::Descending
    );
}

#[test]
fn earlier_candidates_win() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("fieldsort.toml"),
        "[logging]\nfilter = \"info\"\n",
    )
    .expect("write toml");
    fs::write(
        dir.path().join("fieldsort.json"),
        r#"{"logging": {"filter": "trace"}}"#,
    )
    .expect("write json");

    let load = bare_loader(dir.path()).load().expect("load");
    assert_eq!(load.config.logging.filter, "info");
}

#[test]
fn inline_json_beats_candidate_files() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("fieldsort.toml"), "[sorter]\n")
        .expect("write");

    let load = bare_loader(dir.path())
        .with_env_json(Some(r#"{"sorter": {"parallel_threshold": 8}}"#.into()))
        .load()
        .expect("load");
    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.sorter.parallel_threshold, 8);
}

#[test]
fn env_path_beats_inline_json_and_explicit_path_beats_both() {
    let dir = tempdir().expect("tempdir");
    let env_file = dir.path().join("from-env.json");
    fs::write(&env_file, r#"{"sorter": {"parallel_threshold": 2}}"#)
        .expect("write");
    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "[sorter]\nparallel_threshold = 3\n").expect("write");

    let loader = bare_loader(dir.path())
        .with_env_path(Some(env_file.clone()))
        .with_env_json(Some(r#"{"sorter": {"parallel_threshold": 1}}"#.into()));
    let load = loader.load().expect("load");
    assert_eq!(load.source, ConfigSource::EnvPath(env_file));
    assert_eq!(load.config.sorter.parallel_threshold, 2);

    let load = loader.with_explicit_path(&explicit).load().expect("load");
    assert_eq!(load.source, ConfigSource::Explicit(explicit));
    assert_eq!(load.config.sorter.parallel_threshold, 3);
}

#[test]
fn invalid_values_are_rejected_after_parsing() {
    let dir = tempdir().expect("tempdir");
    let err = bare_loader(dir.path())
        .with_env_json(Some(r#"{"sorter": {"parallel_threshold": 0}}"#.into()))
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::ZeroParallelThreshold));
}

#[test]
fn unreadable_files_report_their_path() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("nope.toml");
    let err = bare_loader(dir.path())
        .with_explicit_path(&missing)
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Source(_)));
    assert!(err.to_string().contains("nope.toml"));
}
