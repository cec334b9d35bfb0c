//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;

use serial_test::serial;
use tesseract4d::config::AppConfig;
use tesseract4d_core::ProjectionMode;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("T4D_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("T4D_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_object() {
    std::env::set_var("T4D_OBJECT__CAMERA_DISTANCE", "4.5");
    std::env::set_var("T4D_OBJECT__PROJECTION", "orthographic");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("T4D_OBJECT__CAMERA_DISTANCE");
    std::env::remove_var("T4D_OBJECT__PROJECTION");

    assert_eq!(config.object.camera_distance, 4.5);
    assert_eq!(config.object.projection, ProjectionMode::Orthographic);
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let from_file = AppConfig::load_from("config").unwrap();
    let builtin = AppConfig::default();

    assert_eq!(from_file.window.title, builtin.window.title);
    assert_eq!(from_file.object.camera_distance, builtin.object.camera_distance);
    assert_eq!(from_file.object.rotation_speed, builtin.object.rotation_speed);
    assert_eq!(from_file.input.bindings, builtin.input.bindings);
    assert_eq!(from_file.input.reset_control, builtin.input.reset_control);
    assert_eq!(from_file.rendering.line_color, builtin.rendering.line_color);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = std::env::temp_dir().join(format!("t4d-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("default.toml"), "[object]\nrotation_speed = 0.02\ncamera_distance = 3.0\n").unwrap();
    fs::write(dir.join("user.toml"), "[object]\nrotation_speed = 0.05\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.object.rotation_speed, 0.05);
    assert_eq!(config.object.camera_distance, 3.0);
}

#[test]
#[serial]
fn test_bad_value_is_an_error() {
    std::env::set_var("T4D_WINDOW__WIDTH", "wide");
    let result = AppConfig::load();
    std::env::remove_var("T4D_WINDOW__WIDTH");

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
