//! Shared helpers for the management client integration tests

use std::sync::Arc;

use authing_common::{MockClock, TtlCache};
use authing_domain::ClientConfig;
use authing_infra::ManagementClient;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const POOL_ID: &str = "pool-it";
pub const SECRET: &str = "secret-it";

pub fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(POOL_ID, SECRET).with_host(server.uri())
}

/// Client whose token expiry is driven by `clock`.
pub fn client_with_clock(server: &MockServer, clock: MockClock) -> ManagementClient {
    ManagementClient::builder(config(server))
        .cache(Arc::new(TtlCache::with_clock(clock)))
        .build()
        .expect("client should build")
}

/// Mount the credential exchange, answering with `token`.
///
/// Matches on the operation name so that it never shadows other GraphQL mocks.
pub async fn mount_token_exchange(server: &MockServer, token: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/graphql/v2"))
        .and(body_string_contains("query accessToken"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"accessToken": {"accessToken": token}}})),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Body of a successful `users` query with `count` generated users.
pub fn users_page(count: usize) -> Value {
    let list: Vec<Value> =
        (0..count).map(|i| json!({"id": format!("u{i}"), "username": format!("user{i}")})).collect();
    json!({"data": {"users": {"totalCount": count, "list": list}}})
}

/// Requests whose body contains the given GraphQL operation marker.
pub async fn requests_containing(server: &MockServer, marker: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|req| String::from_utf8_lossy(&req.body).contains(marker))
        .collect()
}
