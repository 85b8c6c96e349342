//! Tests for frontend configuration loading.

use std::io::Write;
use std::path::PathBuf;
use strictly_games::AppConfig;

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_file = "/tmp/ttt.log"
log_filter = "debug,strictly_tictactoe=trace"
show_hints = false
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "debug,strictly_tictactoe=trace");
    assert!(!*config.show_hints());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(*config.show_hints());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_hints = \"sometimes\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"), "{err}");
}

#[test]
fn test_unreadable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::from_file(dir.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"), "{err}");
}
