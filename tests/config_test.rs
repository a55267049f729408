//! Config file loading tests.

#![cfg(feature = "config")]

use std::fs;

use breakpoints::{Config, Error, Rule, resolve_condition};
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn test_load_toml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "breakpoints.toml",
        "[breakpoints]\nmobile = 0\ntablet = 768\ndesktop = 1024\nwide = 1440\n",
    );

    let config = Config::load(&path).expect("Failed to load config");
    let table = &config.breakpoints;

    assert_eq!(
        table.names().collect::<Vec<_>>(),
        ["mobile", "tablet", "desktop", "wide"]
    );
    assert_eq!(
        resolve_condition(table, "tablet", Rule::Only, None).unwrap(),
        "(min-width: 768px) and (max-width: 1023px)"
    );
    assert_eq!(
        resolve_condition(table, "wide", Rule::Down, Some("tablet")).unwrap_err().to_string(),
        "the breakpoint of value 1440px is the highest, did you mean to use `up`?"
    );
}

#[test]
fn test_load_json() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "theme.JSON",
        r#"{"breakpoints": {"xs": 0, "sm": 576, "md": 768}}"#,
    );

    let config = Config::load(&path).expect("Failed to load config");
    assert_eq!(config.breakpoints.get("sm"), Some(576));
    assert_eq!(
        resolve_condition(&config.breakpoints, "xs", Rule::Down, None).unwrap(),
        "(max-width: 575px)"
    );
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nope.toml");

    match Config::load(&path) {
        Err(Error::ReadConfig { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ReadConfig, got {:?}", other),
    }
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "breakpoints.yaml", "breakpoints:\n  sm: 0\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::UnsupportedConfig(_))
    ));
}

#[test]
fn test_invalid_toml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "breakpoints.toml", "[breakpoints]\nsm = \"small\"\n");

    assert!(matches!(Config::load(&path), Err(Error::Toml(_))));
}
