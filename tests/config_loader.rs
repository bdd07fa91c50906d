mod common;

use common::{slot_numbers, temp_file};
use slotkeeper::config::{Config, ConfigError, SlotPreset};
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.slots.is_empty());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("slotkeeper/config.toml"));
}

#[test]
fn test_default_log_file_under_app_dir() {
    let path = Config::default().logging.file_path();
    assert!(path.ends_with("slotkeeper/slotkeeper.log"));
}

#[test]
fn test_empty_file_yields_defaults() {
    let (_dir, path) = temp_file("config.toml", "");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_parses() {
    let (_dir, path) = temp_file(
        "config.toml",
        r#"
[ui]
tick_rate_ms = 100

[logging]
level = "debug"
file = "/tmp/slotkeeper-test.log"

[[slots]]
slot_no = 102
ev_charging = true

[[slots]]
slot_no = 101
covered = true
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.slots[0],
        SlotPreset {
            slot_no: 102,
            covered: false,
            ev_charging: true,
        }
    );

    let registry = config.build_registry().unwrap();
    let slots = registry.list();
    assert_eq!(slot_numbers(&slots), vec![101, 102]);
    assert!(slots[0].covered);
    assert!(slots[1].ev_charging);
    assert!(slots.iter().all(|slot| !slot.occupied));
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load_from(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[ui\ntick_rate_ms = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_non_positive_preset_fails_validation() {
    let (_dir, path) = temp_file("config.toml", "[[slots]]\nslot_no = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("Preset slot number 0"));
}

#[test]
fn test_tick_rate_too_slow_fails_validation() {
    let (_dir, path) = temp_file("config.toml", "[ui]\ntick_rate_ms = 60000\n");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
