//! Client configuration structures

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HOST, DEFAULT_TIMEOUT_SECS};
use crate::errors::{AuthingError, Result};

/// Connection settings for one user pool (tenant)
///
/// Config files may give the request timeout as `timeout_ms` or
/// `timeout_secs`; `timeout_ms` wins when both are present.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "ClientConfigFile")]
pub struct ClientConfig {
    pub user_pool_id: String,
    pub secret: String,
    pub host: String,
    pub timeout_ms: u64,
}

/// On-disk shape of [`ClientConfig`]
#[derive(Deserialize)]
struct ClientConfigFile {
    user_pool_id: String,
    secret: String,
    #[serde(default = "default_host")]
    host: String,
    #[serde(default)]
    timeout_ms: Option<u64>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl From<ClientConfigFile> for ClientConfig {
    fn from(file: ClientConfigFile) -> Self {
        let timeout_ms = file
            .timeout_ms
            .or_else(|| file.timeout_secs.map(|secs| secs.saturating_mul(1000)))
            .unwrap_or_else(default_timeout_ms);
        Self {
            user_pool_id: file.user_pool_id,
            secret: file.secret,
            host: normalize_host(file.host),
            timeout_ms,
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_SECS * 1000
}

fn normalize_host(host: String) -> String {
    host.trim_end_matches('/').to_string()
}

impl ClientConfig {
    /// Config pointing at the public Authing host
    pub fn new(user_pool_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            user_pool_id: user_pool_id.into(),
            secret: secret.into(),
            host: default_host(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Point the client at a private deployment; a trailing slash is dropped
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = normalize_host(host.into());
        self
    }

    /// Request timeout, kept at millisecond precision; anything shorter than
    /// a millisecond but non-zero becomes one millisecond
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.timeout_ms = if millis == 0 && !timeout.is_zero() { 1 } else { millis };
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Reject configurations the service could never accept
    ///
    /// # Errors
    /// Returns `AuthingError::Config` when the user pool id, secret or host
    /// is empty, or when the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.user_pool_id.trim().is_empty() {
            return Err(AuthingError::Config("user_pool_id must not be empty".into()));
        }
        if self.secret.trim().is_empty() {
            return Err(AuthingError::Config("secret must not be empty".into()));
        }
        if self.host.trim().is_empty() {
            return Err(AuthingError::Config("host must not be empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(AuthingError::Config("timeout must be greater than zero".into()));
        }
        Ok(())
    }

    /// Absolute URL for a path on the configured host
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.host.trim_end_matches('/'), path)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("user_pool_id", &self.user_pool_id)
            .field("secret", &"<redacted>")
            .field("host", &self.host)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
