//! Tests for TUI config loading.

use std::io::Write;
use std::path::Path;
use strictly_rewind::{TuiConfig, DEFAULT_CONFIG_PATH};

#[test]
fn test_defaults() {
    let config = TuiConfig::default();
    assert_eq!(config.log_file(), Path::new("strictly_rewind.log"));
    assert_eq!(config.log_filter(), "info");
    assert!(*config.highlight_last_move());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "highlight_last_move = false").unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();
    assert!(!*config.highlight_last_move());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_file_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_file = \"/tmp/rewind.log\"\nlog_filter = \"debug\"\nhighlight_last_move = true"
    )
    .unwrap();

    let config = TuiConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.log_file(), Path::new("/tmp/rewind.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TuiConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "highlight_last_move = \"sometimes\"").unwrap();

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_absent_default_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TuiConfig::from_optional_file(dir.path().join(DEFAULT_CONFIG_PATH)).unwrap();
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_present_default_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_PATH);
    std::fs::write(&path, "log_filter = \"trace\"\nhighlight_last_move = false\n").unwrap();

    let config = TuiConfig::from_optional_file(&path).unwrap();
    assert_eq!(config.log_filter(), "trace");
    assert!(!*config.highlight_last_move());
    assert_eq!(config.log_file(), Path::new("strictly_rewind.log"));
}

#[test]
fn test_load_without_path_falls_back_to_defaults() {
    // The package root carries no strictly_rewind.toml.
    assert!(!Path::new(DEFAULT_CONFIG_PATH).exists());
    assert_eq!(TuiConfig::load(None).unwrap(), TuiConfig::default());
}
