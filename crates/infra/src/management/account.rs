//! Login status, email, password and token endpoints

use authing_domain::constants::{OIDC_TOKEN_PATH, PASSWORD_CHECK_PATH, VALIDATE_TOKEN_PATH};
use authing_domain::{
    AuthingError, CheckLoginStatusResponse, ClientCredentialsRequest, ClientCredentialsToken,
    CommonMessageAndCode, EmailScene, PasswordValidity, Result, TokenToValidate,
};
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use super::client::ManagementClient;
use super::documents;
use crate::transport::{variables_of, Variables};

/// Error body of the OIDC endpoints
#[derive(Deserialize)]
struct OidcError {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

impl ManagementClient {
    /// Send a templated email for `scene` to `email`.
    pub async fn send_email(&self, email: &str, scene: EmailScene) -> Result<CommonMessageAndCode> {
        let variables = variables_of(&json!({ "email": email, "scene": scene }))?;
        self.graphql(documents::SEND_EMAIL, variables, "sendEmail").await
    }

    /// Ask the service whether `token` belongs to a live session.
    pub async fn check_login_status_by_token(&self, token: &str) -> Result<CheckLoginStatusResponse> {
        let variables = variables_of(&json!({ "token": token }))?;
        self.graphql(documents::CHECK_LOGIN_STATUS, variables, "checkLoginStatus").await
    }

    /// Check a candidate password against the pool's password policy.
    pub async fn is_password_valid(&self, password: &str) -> Result<PasswordValidity> {
        let variables = variables_of(&json!({ "password": password }))?;
        self.rest(Method::POST, PASSWORD_CHECK_PATH, variables).await
    }

    /// Validate an OIDC access or id token and return its claims verbatim.
    ///
    /// The endpoint answers with the bare claims object rather than the
    /// usual `{ code, message, data }` envelope.
    pub async fn validate_token(&self, token: TokenToValidate) -> Result<Value> {
        let mut variables = Variables::new();
        variables.insert(token.param_name().to_string(), Value::String(token.token().to_string()));
        let raw = self.rest_raw(Method::GET, VALIDATE_TOKEN_PATH, variables).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Exchange a programmatic access key pair for an OIDC access token.
    pub async fn get_access_token_by_client_credentials(
        &self,
        request: ClientCredentialsRequest,
    ) -> Result<ClientCredentialsToken> {
        let credentials = &request.credentials;
        let fields = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.access_key.as_str()),
            ("client_secret", credentials.secret_key.as_str()),
            ("scope", request.scope.as_str()),
        ];

        let url = self.config().url(OIDC_TOKEN_PATH);
        let raw = self.transport().send_form(&url, &fields, None).await?;
        decode_oidc_token(&raw)
    }
}

fn decode_oidc_token(raw: &[u8]) -> Result<ClientCredentialsToken> {
    let value: Value = serde_json::from_slice(raw)?;

    if value.get("error").is_some() {
        let oidc: OidcError = serde_json::from_value(value)?;
        let err = AuthingError::remote(oidc.error_description.unwrap_or(oidc.error));
        warn!(error = %err, "client credentials grant rejected");
        return Err(err);
    }

    let token: ClientCredentialsToken = serde_json::from_value(value)?;
    if token.access_token.is_empty() {
        return Err(AuthingError::Decode("token response carries no access_token".into()));
    }
    Ok(token)
}
