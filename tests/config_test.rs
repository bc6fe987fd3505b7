//! Integration tests for Settings loading with layered precedence.
//!
//! Environment overrides are fed through an explicit map so tests never
//! depend on (or mutate) the process environment.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use rwalk::application::{ApplicationError, DEFAULT_ITERATIONS};
use rwalk::config::Settings;
use rwalk::domain::{Point, PointFormat};

fn write_settings(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("rwalk.toml");
    fs::write(&path, content).unwrap();
    path
}

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn given_settings_file_when_load_then_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(
        &dir,
        r#"
iterations = 42
format = "canonical"
seed = 7
start = "1,-1"
"#,
    );

    let settings = Settings::load_with_env(Some(&path), env(&[])).expect("load settings");

    assert_eq!(
        settings,
        Settings {
            iterations: 42,
            format: PointFormat::Canonical,
            seed: Some(7),
            start: Point::new(1, -1),
        }
    );
}

#[test]
fn given_partial_settings_file_when_load_then_rest_stays_default() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, "seed = 3\n");

    let settings = Settings::load_with_env(Some(&path), env(&[])).unwrap();

    assert_eq!(settings.seed, Some(3));
    assert_eq!(settings.iterations, DEFAULT_ITERATIONS);
    assert_eq!(settings.format, PointFormat::Bare);
    assert_eq!(settings.start, Point::origin());
}

#[test]
fn given_env_vars_when_load_then_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, "iterations = 42\nformat = \"canonical\"\n");

    let settings = Settings::load_with_env(
        Some(&path),
        env(&[
            ("RWALK_ITERATIONS", "5"),
            ("RWALK_FORMAT", "bare"),
            ("RWALK_START", "(2,2)"),
        ]),
    )
    .unwrap();

    assert_eq!(settings.iterations, 5);
    assert_eq!(settings.format, PointFormat::Bare);
    assert_eq!(settings.start, Point::splat(2));
}

#[test]
fn given_negative_env_iterations_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, "");

    let result = Settings::load_with_env(Some(&path), env(&[("RWALK_ITERATIONS", "-3")]));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_missing_explicit_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = Settings::load_with_env(Some(&missing), env(&[]));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_file_when_load_then_config_error_names_file() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, "iterations = \"many\"\n");

    let err = Settings::load_with_env(Some(&path), env(&[])).unwrap_err();

    assert!(err.to_string().contains("rwalk.toml"), "{err}");
}
