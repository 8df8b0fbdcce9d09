//! Management token acquisition and caching

use std::sync::Arc;

use async_trait::async_trait;
use authing_common::{Clock, SystemClock, TtlCache};
use authing_domain::constants::{token_cache_key, CREDENTIAL_TTL, GRAPHQL_PATH};
use authing_domain::{AccessTokenGrant, AuthingError, Result};
use reqwest::Method;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::envelope::decode_graphql;
use crate::management::documents::ACCESS_TOKEN;
use crate::transport::{variables_of, Transport};

/// Token cache shared between providers; keyed by `token:<userPoolId>`.
pub type TokenCache<C = SystemClock> = TtlCache<String, String, C>;

/// Provides bearer tokens for management API calls.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Retrieve a bearer token to authorize management calls.
    async fn access_token(&self) -> Result<String>;
}

/// Exchanges the user pool secret for a token and caches it for
/// [`CREDENTIAL_TTL`].
///
/// Concurrent callers that miss the cache wait for a single exchange.
pub struct CredentialProvider<C: Clock = SystemClock> {
    transport: Transport,
    cache: Arc<TokenCache<C>>,
    refresh: Mutex<()>,
}

impl<C: Clock> CredentialProvider<C> {
    pub fn new(transport: Transport, cache: Arc<TokenCache<C>>) -> Self {
        Self { transport, cache, refresh: Mutex::new(()) }
    }

    pub fn cache(&self) -> &Arc<TokenCache<C>> {
        &self.cache
    }

    fn cache_key(&self) -> String {
        token_cache_key(&self.transport.config().user_pool_id)
    }

    async fn exchange(&self) -> Result<AccessTokenGrant> {
        let config = self.transport.config();
        let variables = variables_of(&json!({
            "userPoolId": config.user_pool_id,
            "secret": config.secret,
        }))?;

        let url = config.url(GRAPHQL_PATH);
        let raw =
            self.transport.send(Method::POST, &url, Some(ACCESS_TOKEN), &variables, None).await?;

        decode_graphql(&raw, "accessToken")
    }

    fn check_remote_expiry(&self, grant: &AccessTokenGrant) {
        let Some(exp) = grant.exp else {
            return;
        };
        let now = i64::try_from(self.cache.clock().secs_since_epoch()).unwrap_or(i64::MAX);
        let ttl = i64::try_from(CREDENTIAL_TTL.as_secs()).unwrap_or(i64::MAX);
        let remaining = exp.saturating_sub(now);
        if remaining < ttl {
            warn!(
                remaining_secs = remaining,
                cache_ttl_secs = ttl,
                "access token expires before the cached copy does"
            );
        }
    }
}

#[async_trait]
impl<C: Clock> AccessTokenProvider for CredentialProvider<C> {
    async fn access_token(&self) -> Result<String> {
        let key = self.cache_key();
        if let Some(token) = self.cache.get(&key) {
            debug!(user_pool_id = %self.transport.config().user_pool_id, "access token cache hit");
            return Ok(token);
        }

        let _guard = self.refresh.lock().await;
        if let Some(token) = self.cache.get(&key) {
            debug!("access token refreshed by a concurrent caller");
            return Ok(token);
        }

        debug!(user_pool_id = %self.transport.config().user_pool_id, "access token cache miss");
        let grant = self.exchange().await?;
        self.check_remote_expiry(&grant);

        let token = grant
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthingError::Decode("credential exchange returned no accessToken".into()))?;

        self.cache.set(key, token.clone(), CREDENTIAL_TTL);
        info!(user_pool_id = %self.transport.config().user_pool_id, "access token refreshed");

        Ok(token)
    }
}
