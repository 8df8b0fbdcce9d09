use std::sync::Arc;

use async_trait::async_trait;
use authing_domain::{ClientConfig, Result};
use wiremock::MockServer;

use super::client::ManagementClient;
use crate::auth::AccessTokenProvider;

pub(crate) struct StaticToken;

#[async_trait]
impl AccessTokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String> {
        Ok("tok".into())
    }
}

/// Client pointed at the mock server that always presents `Bearer tok`
pub(crate) fn client(server: &MockServer) -> ManagementClient {
    ManagementClient::builder(ClientConfig::new("pool", "secret").with_host(server.uri()))
        .access_token_provider(Arc::new(StaticToken))
        .build()
        .unwrap()
}
