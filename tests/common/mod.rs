//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use exprpad::config::Config;

/// Build a config pointed at an arbitrary base URL, with short timeouts
/// so failure tests finish quickly.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.service.base_url = base_url.to_string();
    config.defaults.timeout_seconds = 5;
    config.defaults.connect_timeout_seconds = 2;
    config
}
