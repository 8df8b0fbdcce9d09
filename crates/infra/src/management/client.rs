//! Management client construction and shared request plumbing

use std::sync::Arc;

use authing_common::{Clock, SystemClock, TtlCache};
use authing_domain::constants::{GRAPHQL_PATH, SDK_VERSION};
use authing_domain::{AuthingError, ClientConfig, Result};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::{AccessTokenProvider, CredentialProvider, TokenCache};
use crate::envelope::{decode_graphql, decode_rest};
use crate::http::HttpClient;
use crate::transport::{Transport, Variables};

/// Rebuilds the token provider when the transport changes.
type ProviderFactory = Arc<dyn Fn(Transport) -> Arc<dyn AccessTokenProvider> + Send + Sync>;

/// Client for the Authing management API of one user pool
///
/// Cloning is cheap; clones share the HTTP client and the token provider.
/// The configuration is fixed once built; only the HTTP client can be
/// replaced, through [`ManagementClient::with_http_client`].
#[derive(Clone)]
pub struct ManagementClient {
    transport: Transport,
    provider: Arc<dyn AccessTokenProvider>,
    provider_factory: ProviderFactory,
}

impl ManagementClient {
    /// Build a client without contacting the service.
    ///
    /// # Errors
    /// Returns `AuthingError::Config` when the user pool id or secret is empty.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    /// Build a client and fetch the first access token eagerly, so bad
    /// credentials surface at construction time.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let client = Self::new(config)?;
        client.access_token().await?;
        Ok(client)
    }

    /// Start a builder with a private token cache on the system clock.
    pub fn builder(config: ClientConfig) -> ManagementClientBuilder<SystemClock> {
        ManagementClientBuilder {
            config,
            http: None,
            cache: Arc::new(TtlCache::new()),
            provider: None,
        }
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// Swap the HTTP client, keeping the configuration and token cache.
    ///
    /// A token cached before the swap is reused by requests made after it.
    #[must_use]
    pub fn with_http_client(self, http: HttpClient) -> Self {
        let transport = self.transport.with_http_client(http);
        let provider = (self.provider_factory)(transport.clone());
        Self { transport, provider, provider_factory: self.provider_factory }
    }

    /// Current management token, exchanging the secret if none is cached.
    pub async fn access_token(&self) -> Result<String> {
        self.provider.access_token().await
    }

    /// POST a GraphQL document and decode `data.<field>`.
    pub(crate) async fn graphql<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Variables,
        field: &str,
    ) -> Result<T> {
        let token = self.provider.access_token().await?;
        let url = self.config().url(GRAPHQL_PATH);
        debug!(field, "executing GraphQL operation");

        let raw = self
            .transport
            .send(Method::POST, &url, Some(document), &variables, Some(&token))
            .await?;
        decode_graphql(&raw, field)
    }

    /// Call a REST endpoint and return the raw body.
    pub(crate) async fn rest_raw(
        &self,
        method: Method,
        path: &str,
        variables: Variables,
    ) -> Result<Vec<u8>> {
        self.rest_raw_at(method, &self.config().url(path), variables).await
    }

    async fn rest_raw_at(&self, method: Method, url: &str, variables: Variables) -> Result<Vec<u8>> {
        let token = self.provider.access_token().await?;
        self.transport.send(method, url, None, &variables, Some(&token)).await
    }

    /// Call a REST resource at `path/<segment>`, percent-encoding the segment.
    pub(crate) async fn rest_resource<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        segment: &str,
        variables: Variables,
    ) -> Result<T> {
        let mut url = Url::parse(&self.config().url(path))
            .map_err(|e| AuthingError::Config(format!("Invalid host: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| AuthingError::Config("Host cannot carry a path".into()))?
            .push(segment);

        let raw = self.rest_raw_at(method, url.as_str(), variables).await?;
        decode_rest(&raw)
    }

    /// Call a REST endpoint and decode its `{ code, message, data }` envelope.
    pub(crate) async fn rest<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        variables: Variables,
    ) -> Result<T> {
        let raw = self.rest_raw(method, path, variables).await?;
        decode_rest(&raw)
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }
}

/// Builder for [`ManagementClient`].
pub struct ManagementClientBuilder<C: Clock = SystemClock> {
    config: ClientConfig,
    http: Option<HttpClient>,
    cache: Arc<TokenCache<C>>,
    provider: Option<Arc<dyn AccessTokenProvider>>,
}

impl<C: Clock> ManagementClientBuilder<C> {
    /// Use a preconfigured HTTP client instead of one built from the config.
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Share a token cache with other clients.
    pub fn cache<C2: Clock>(self, cache: Arc<TokenCache<C2>>) -> ManagementClientBuilder<C2> {
        ManagementClientBuilder {
            config: self.config,
            http: self.http,
            cache,
            provider: self.provider,
        }
    }

    /// Drive token expiry from a custom clock with a fresh cache.
    pub fn clock<C2: Clock>(self, clock: C2) -> ManagementClientBuilder<C2> {
        self.cache(Arc::new(TtlCache::with_clock(clock)))
    }

    /// Replace the caching credential exchange with another token source.
    pub fn access_token_provider(mut self, provider: Arc<dyn AccessTokenProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Validate the configuration and assemble the client; performs no I/O.
    ///
    /// # Errors
    /// Returns `AuthingError::Config` for an invalid configuration and
    /// `AuthingError::Internal` when the HTTP client cannot be built.
    pub fn build(self) -> Result<ManagementClient> {
        self.config.validate()?;

        let http = match self.http {
            Some(http) => http,
            None => HttpClient::builder()
                .timeout(self.config.timeout())
                .user_agent(format!("authing-sdk/{SDK_VERSION}"))
                .build()?,
        };

        let transport = Transport::new(http, Arc::new(self.config));
        let provider_factory: ProviderFactory = match self.provider {
            Some(provider) => Arc::new(move |_: Transport| Arc::clone(&provider)),
            None => {
                let cache = self.cache;
                Arc::new(move |transport: Transport| -> Arc<dyn AccessTokenProvider> {
                    Arc::new(CredentialProvider::new(transport, Arc::clone(&cache)))
                })
            }
        };
        let provider = provider_factory(transport.clone());

        Ok(ManagementClient { transport, provider, provider_factory })
    }
}
