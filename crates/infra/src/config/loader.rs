//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `AUTHING_USER_POOL_ID`: User pool (tenant) id, required
//! - `AUTHING_SECRET`: User pool secret, required
//! - `AUTHING_HOST`: Service base URL, defaults to `https://core.authing.cn`
//! - `AUTHING_TIMEOUT_SECS`: Request timeout in seconds, defaults to 30
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./authing.json` or `./authing.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. The same names next to the executable

use std::path::{Path, PathBuf};
use std::time::Duration;

use authing_domain::constants::{DEFAULT_HOST, DEFAULT_TIMEOUT_SECS};
use authing_domain::{AuthingError, ClientConfig, Result};

pub const ENV_USER_POOL_ID: &str = "AUTHING_USER_POOL_ID";
pub const ENV_SECRET: &str = "AUTHING_SECRET";
pub const ENV_HOST: &str = "AUTHING_HOST";
pub const ENV_TIMEOUT_SECS: &str = "AUTHING_TIMEOUT_SECS";

const CONFIG_FILE_NAMES: [&str; 4] = ["authing.json", "authing.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `AuthingError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing or empty
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `AuthingError::Config` if a required variable is missing or a
/// value is invalid.
pub fn load_from_env() -> Result<ClientConfig> {
    let user_pool_id = env_var(ENV_USER_POOL_ID)?;
    let secret = env_var(ENV_SECRET)?;
    let host = std::env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let timeout_secs = match std::env::var(ENV_TIMEOUT_SECS) {
        Ok(raw) => raw.parse::<u64>().map_err(|e| {
            AuthingError::Config(format!("Invalid {ENV_TIMEOUT_SECS}: {e}"))
        })?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    let config = ClientConfig::new(user_pool_id, secret)
        .with_host(host)
        .with_timeout(Duration::from_secs(timeout_secs));
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations via
/// [`probe_config_paths`]. The format follows the file extension.
///
/// # Errors
/// Returns `AuthingError::Config` if the file is missing, unreadable, of an
/// unsupported format, or does not describe a valid configuration.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AuthingError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AuthingError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AuthingError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AuthingError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AuthingError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(AuthingError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Candidate config files under `dir` and its two nearest ancestors
fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    for base in dir.ancestors().take(3) {
        candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| base.join(name)));
    }
    candidates
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        AuthingError::Config(format!("Missing required environment variable: {}", key))
    })
}
