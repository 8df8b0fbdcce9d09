//! Credential, login-status, email and password types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// Result of the `accessToken` credential exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessTokenGrant {
    pub access_token: Option<String>,
    /// Expiry as seconds since the UNIX epoch
    pub exp: Option<i64>,
    /// Issued-at as seconds since the UNIX epoch
    pub iat: Option<i64>,
}

/// Template used by `sendEmail`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailScene {
    #[serde(rename = "RESET_PASSWORD")]
    ResetPassword,
    #[serde(rename = "VERIFY_EMAIL")]
    VerifyEmail,
    #[serde(rename = "CHANGE_EMAIL")]
    ChangeEmail,
    #[serde(rename = "MFA_VERIFY")]
    MfaVerify,
}

impl_wire_enum_conversions!(EmailScene {
    ResetPassword => "RESET_PASSWORD",
    VerifyEmail => "VERIFY_EMAIL",
    ChangeEmail => "CHANGE_EMAIL",
    MfaVerify => "MFA_VERIFY",
});

/// Identity embedded in a login-status answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginStatusDetail {
    pub id: Option<String>,
    pub user_pool_id: Option<String>,
    pub arn: Option<String>,
}

/// Answer of `checkLoginStatus`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckLoginStatusResponse {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub status: Option<bool>,
    pub exp: Option<i64>,
    pub iat: Option<i64>,
    pub data: Option<LoginStatusDetail>,
}

/// Answer of the password policy check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordValidity {
    pub valid: bool,
    pub message: Option<String>,
}

/// Token submitted to the OIDC validation endpoint
///
/// Exactly one kind of token is validated per call.
#[derive(Clone, PartialEq, Eq)]
pub enum TokenToValidate {
    AccessToken(String),
    IdToken(String),
}

impl TokenToValidate {
    /// Query-string parameter name the endpoint expects
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::AccessToken(_) => "access_token",
            Self::IdToken(_) => "id_token",
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Self::AccessToken(token) | Self::IdToken(token) => token,
        }
    }
}

impl fmt::Debug for TokenToValidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
            Self::IdToken(_) => f.write_str("IdToken(<redacted>)"),
        }
    }
}

/// Programmatic access account key pair
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCredentialInput {
    pub access_key: String,
    pub secret_key: String,
}

impl fmt::Debug for ClientCredentialInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentialInput")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Arguments for the OIDC `client_credentials` grant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCredentialsRequest {
    pub scope: String,
    #[serde(rename = "client_credential_input")]
    pub credentials: ClientCredentialInput,
}

/// Token issued by the OIDC token endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientCredentialsToken {
    pub access_token: String,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
}
