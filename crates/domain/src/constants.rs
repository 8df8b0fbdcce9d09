//! Protocol constants
//!
//! Centralized location for paths, header names and fixed values shared by
//! the transport and operation layers.

use std::time::Duration;

// Endpoints
pub const DEFAULT_HOST: &str = "https://core.authing.cn";
pub const GRAPHQL_PATH: &str = "/graphql/v2";
pub const PASSWORD_CHECK_PATH: &str = "/api/v2/password/check";
pub const USERS_PATH: &str = "/api/v2/users";
pub const ORGS_PAGINATION_PATH: &str = "/api/v2/orgs/pagination";
pub const ORGS_EXPORT_PATH: &str = "/api/v2/orgs/export";
pub const VALIDATE_TOKEN_PATH: &str = "/api/v2/oidc/validate_token";
pub const OIDC_TOKEN_PATH: &str = "/oidc/token";

// Identification headers sent on every request
pub const HEADER_USERPOOL_ID: &str = "x-authing-userpool-id";
pub const HEADER_REQUEST_FROM: &str = "x-authing-request-from";
pub const HEADER_SDK_VERSION: &str = "x-authing-sdk-version";
pub const HEADER_APP_ID: &str = "x-authing-app-id";

pub const SDK_TYPE: &str = "sdk-rust";
pub const SDK_VERSION: &str = concat!("rust:", env!("CARGO_PKG_VERSION"));
pub const APP_ID: &str = "";

// Credential caching
pub const TOKEN_CACHE_KEY_PREFIX: &str = "token:";

/// Lifetime of a cached management token. Fixed; the remote `exp` claim is
/// only compared against it for diagnostics.
pub const CREDENTIAL_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// REST envelope
pub const REST_SUCCESS_CODE: i64 = 200;

/// Cache key under which a tenant's access token is stored
pub fn token_cache_key(user_pool_id: &str) -> String {
    format!("{TOKEN_CACHE_KEY_PREFIX}{user_pool_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_is_prefixed_with_tenant() {
        assert_eq!(token_cache_key("pool-1"), "token:pool-1");
    }

    #[test]
    fn sdk_version_carries_crate_version() {
        assert!(SDK_VERSION.starts_with("rust:"));
        assert!(SDK_VERSION.len() > "rust:".len());
    }
}
