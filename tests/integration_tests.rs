//! Integration tests for the weekpeak CLI

use std::process::Command;

/// Test that the CLI shows help with the coordinate format hint
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("weekpeak"));
    assert!(stdout.contains("Latitude, Longitude"));
}

/// Test that running without coordinates is a usage error
#[test]
fn test_cli_requires_coordinates() {
    let output = Command::new("cargo")
        .args(["run", "--"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage") || stderr.contains("required"));
}

/// Malformed coordinate input fails before any request is made
#[test]
fn test_malformed_coordinates_error() {
    let output = Command::new("cargo")
        .env("OPENWEATHERMAP_API_KEY", "test_api_key_for_integration")
        .args(["run", "--", "51.5074"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter a valid latitude/longitude in the correct format"));
}

/// Non-numeric tokens fail before any request is made
#[test]
fn test_non_numeric_coordinates_error() {
    let output = Command::new("cargo")
        .env("OPENWEATHERMAP_API_KEY", "test_api_key_for_integration")
        .args(["run", "--", "north, west"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter a valid latitude/longitude in the correct format"));
}

/// A missing API key is reported as a configuration problem
#[test]
fn test_missing_api_key_error() {
    let output = Command::new("cargo")
        .env_remove("OPENWEATHERMAP_API_KEY")
        .env_remove("WEEKPEAK_WEATHER__API_KEY")
        .args([
            "run",
            "--",
            "--config",
            "does-not-exist.toml",
            "51.5074, -0.1278",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("API key"));
}

/// An unreachable API surfaces a network error, not a panic
#[test]
fn test_unreachable_api_reports_network_error() {
    let output = Command::new("cargo")
        .env("OPENWEATHERMAP_API_KEY", "test_api_key_for_integration")
        .env("WEEKPEAK_WEATHER__BASE_URL", "http://127.0.0.1:9")
        .args(["run", "--", "51.5074, -0.1278"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Network error"));
}
