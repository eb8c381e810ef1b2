//! Configuration loading and validation tests.

use exprpad::config::Config;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/exprpad.toml")).unwrap();
    assert_eq!(config.service.base_url, "https://backend-56pg.onrender.com");
    assert_eq!(config.defaults.timeout_seconds, 30);
    assert_eq!(config.defaults.connect_timeout_seconds, 5);
}

#[test]
fn file_overrides_the_service_url() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[service]
base_url = "http://127.0.0.1:5000"

[defaults]
timeout_seconds = 10
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.service.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.defaults.timeout_seconds, 10);
    // Unspecified fields keep their defaults.
    assert_eq!(config.defaults.connect_timeout_seconds, 5);
}

#[test]
fn partial_file_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.service.base_url, "https://backend-56pg.onrender.com");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[service\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn non_http_base_url_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[service]
base_url = "ftp://example.com"
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("must start with http"));
}

#[test]
fn empty_base_url_fails_validation() {
    let mut config = Config::default();
    config.service.base_url = "  ".to_string();
    assert!(config.validate().is_err());
}
