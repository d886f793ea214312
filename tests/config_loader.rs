use stacknav::config::{Config, ConfigError, LayoutChoice};
use stacknav::nav::{ClearMode, LayoutMode};
use std::path::Path;

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.layout.mode, LayoutChoice::Auto);
    assert_eq!(config.layout.auto_expanded_min_width, 100);
    assert_eq!(config.layout.reset_stack_on_tab_switch, None);
    assert_eq!(config.navigation.clear_mode, ClearMode::Reset);
    assert_eq!(config.navigation.path_log_capacity, 50);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_empty_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.layout.mode, LayoutChoice::Auto);
}

#[test]
fn test_parse_valid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[layout]
mode = "expanded"
reset_stack_on_tab_switch = true

[navigation]
clear_mode = "remove_last"
path_log_capacity = 5

[logging]
level = "debug"
file = "/tmp/stacknav-test.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.layout.mode, LayoutChoice::Expanded);
    assert_eq!(config.navigation.clear_mode, ClearMode::RemoveLast);
    assert_eq!(config.navigation.path_log_capacity, 5);
    assert_eq!(config.logging.level, "debug");

    let settings = config.navigator_settings(Some(40));
    assert_eq!(settings.layout, LayoutMode::Expanded);
    assert!(settings.reset_stack_on_tab_switch);
}

#[test]
fn test_parse_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[layout\nmode = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got: {err}");
}

#[test]
fn test_unknown_layout_mode_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[layout]\nmode = \"sideways\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_fails_zero_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[layout]\nauto_expanded_min_width = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("auto_expanded_min_width"), "got: {err}");
}

#[test]
fn test_validation_fails_zero_log_capacity() {
    let mut config = Config::default();
    config.navigation.path_log_capacity = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn test_config_roundtrip() {
    let mut config = Config::default();
    config.layout.mode = LayoutChoice::Compact;
    config.navigation.clear_mode = ClearMode::RemoveLast;

    let serialized = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&serialized).unwrap();
    assert_eq!(parsed.layout.mode, LayoutChoice::Compact);
    assert_eq!(parsed.navigation.clear_mode, ClearMode::RemoveLast);
}
