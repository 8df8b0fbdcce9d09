//! Error types used throughout the SDK

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the Authing SDK
///
/// Nothing is retried locally; every variant reaches the caller as soon as
/// it is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AuthingError {
    /// The request never produced a response (connect, TLS, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with an error envelope; displays the remote text verbatim
    #[error("{message}")]
    Remote {
        message: String,
        /// REST status code or GraphQL error code, when the envelope carried one
        code: Option<i64>,
    },

    /// The response body could not be decoded into the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthingError {
    /// Build a remote error without a status code
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote { message: message.into(), code: None }
    }

    /// Whether the failure was reported by the remote service
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// The bare message carried by the error, without the category prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Remote { message, .. } => message,
            Self::Network(msg) | Self::Decode(msg) | Self::Config(msg) | Self::Internal(msg) => msg,
        }
    }
}

impl From<serde_json::Error> for AuthingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, AuthingError>;
