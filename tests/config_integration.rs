//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::path::PathBuf;

use liminal::config::AppConfig;
use serial_test::serial;

fn temp_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("liminal-config-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("LIM_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("LIM_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_numbers() {
    std::env::set_var("LIM_CURSOR__SIZE", "150");
    std::env::set_var("LIM_ANIMATION__SEED", "77");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.cursor.size, 150.0);
    assert_eq!(config.animation.seed, Some(77));
    std::env::remove_var("LIM_CURSOR__SIZE");
    std::env::remove_var("LIM_ANIMATION__SEED");
}

#[test]
#[serial]
fn test_shipped_defaults_match_code_defaults() {
    std::env::remove_var("LIM_WINDOW__TITLE");
    let loaded = AppConfig::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config")).unwrap();
    let defaults = AppConfig::default();
    assert_eq!(loaded.window.title, defaults.window.title);
    assert_eq!(loaded.trail.capacity, defaults.trail.capacity);
    assert_eq!(loaded.trail.decay, defaults.trail.decay);
    assert_eq!(loaded.cursor.size, defaults.cursor.size);
    assert_eq!(loaded.ui.expand_delay_ms, defaults.ui.expand_delay_ms);
    assert_eq!(loaded.ui.collapse_delay_ms, defaults.ui.collapse_delay_ms);
    assert_eq!(loaded.camera.easing, defaults.camera.easing);
}

#[test]
#[serial]
fn test_user_config_overrides_default() {
    let dir = temp_config_dir("user");
    std::fs::write(dir.join("default.toml"), "[window]\ntitle = \"Base\"\nwidth = 640\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[window]\ntitle = \"Mine\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.title, "Mine");
    assert_eq!(config.window.width, 640);
    // Untouched sections keep their defaults
    assert_eq!(config.trail.capacity, 10);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("/nonexistent/liminal/config").unwrap();
    assert_eq!(config.window.width, 1280);
    assert!(config.ui.sound);
}

#[test]
#[serial]
fn test_bad_value_is_config_error() {
    let dir = temp_config_dir("bad");
    std::fs::write(dir.join("default.toml"), "[window]\nwidth = \"wide\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error:"));

    std::fs::remove_dir_all(&dir).ok();
}
