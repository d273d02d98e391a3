//! Tests for CLI argument handling against the built binary.
//!
//! Only error paths are exercised: they exit before the terminal UI starts.

mod common;

use common::temp_config;
use std::process::Command;

fn country_picker_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_country-picker"))
}

#[test]
fn test_help_lists_flags() {
    let output = country_picker_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--country"));
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--no-fetch"));
    assert!(stdout.contains("Country selected at startup"));
}

#[test]
fn test_unknown_country_is_usage_error() {
    let output = country_picker_cmd()
        .args(["--country", "US"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown country code 'US'"));
}

#[test]
fn test_missing_explicit_config_exits_with_error() {
    let output = country_picker_cmd()
        .args(["--config", "/nonexistent/country-picker.toml"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read config file"));
}

#[test]
fn test_invalid_base_url_override_exits_with_error() {
    let (_dir, path) = temp_config("");
    let output = country_picker_cmd()
        .arg("--config")
        .arg(&path)
        .args(["--base-url", "ftp://example.com"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}
