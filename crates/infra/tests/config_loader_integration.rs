//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;
use std::time::Duration;

use authing_domain::constants::DEFAULT_HOST;
use authing_domain::AuthingError;
use authing_infra::config;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "user_pool_id": "pool-json",
        "secret": "secret-json",
        "host": "https://private.example.com/",
        "timeout_secs": 12
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(&path).ok();

    let config = result.expect("Failed to load config from JSON file");
    assert_eq!(config.user_pool_id, "pool-json");
    assert_eq!(config.secret, "secret-json");
    assert_eq!(config.host, "https://private.example.com");
    assert_eq!(config.timeout(), Duration::from_secs(12));
}

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("authing.toml");
    std::fs::write(&path, "user_pool_id = \"pool-toml\"\nsecret = \"secret-toml\"\n")
        .expect("Failed to write config");

    let config = config::load_from_file(Some(path)).expect("Failed to load config from TOML file");
    assert_eq!(config.user_pool_id, "pool-toml");
    assert_eq!(config.host, DEFAULT_HOST);
}

#[test]
fn test_load_config_rejects_empty_secret() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("authing.json");
    std::fs::write(&path, r#"{"user_pool_id": "pool", "secret": ""}"#).expect("write");

    let err = config::load_from_file(Some(path)).unwrap_err();
    assert!(matches!(err, AuthingError::Config(ref msg) if msg.contains("secret")));
}

#[test]
fn test_load_config_missing_required_field() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("authing.json");
    std::fs::write(&path, r#"{"user_pool_id": "pool"}"#).expect("write");

    let err = config::load_from_file(Some(path)).unwrap_err();
    assert!(matches!(err, AuthingError::Config(_)));
}

#[test]
fn test_load_config_invalid_toml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "user_pool_id = [unterminated").expect("write");

    let err = config::load_from_file(Some(path)).unwrap_err();
    assert!(matches!(err, AuthingError::Config(ref msg) if msg.contains("TOML")));
}
