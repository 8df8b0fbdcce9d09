//! Request construction for the Authing endpoints
//!
//! Attaches the identification headers, encodes variables for the chosen
//! method and, for authenticated calls, the bearer token. The body comes
//! back untouched; see [`crate::envelope`] for decoding.

use std::sync::Arc;

use authing_domain::constants::{
    APP_ID, HEADER_APP_ID, HEADER_REQUEST_FROM, HEADER_SDK_VERSION, HEADER_USERPOOL_ID, SDK_TYPE,
    SDK_VERSION,
};
use authing_domain::{AuthingError, ClientConfig, Result};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::HttpClient;

/// Operation variables as sent on the wire
pub type Variables = Map<String, Value>;

/// Serialize a request record into its variables object.
pub fn variables_of<T: Serialize>(request: &T) -> Result<Variables> {
    match serde_json::to_value(request)? {
        Value::Object(map) => Ok(map),
        other => Err(AuthingError::Internal(format!(
            "operation variables must serialize to an object, got {other}"
        ))),
    }
}

#[derive(Serialize)]
struct GraphqlBody<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "no_variables")]
    variables: &'a Variables,
}

fn no_variables(variables: &&Variables) -> bool {
    variables.is_empty()
}

/// HTTP transport bound to one tenant configuration
#[derive(Clone)]
pub struct Transport {
    http: HttpClient,
    config: Arc<ClientConfig>,
}

impl Transport {
    /// Bind an HTTP client to a tenant configuration.
    pub fn new(http: HttpClient, config: Arc<ClientConfig>) -> Self {
        Self { http, config }
    }

    /// Same tenant configuration over a different HTTP client.
    pub fn with_http_client(&self, http: HttpClient) -> Self {
        Self { http, config: Arc::clone(&self.config) }
    }

    /// Tenant configuration every request is scoped to.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a GraphQL or REST request and return the raw body.
    ///
    /// - `GET`: every variable becomes a query-string parameter.
    /// - other methods with `query`: JSON body `{ query, variables }`.
    /// - other methods without `query`: the variables object is the body.
    ///
    /// `bearer: None` sends the request unauthenticated; the credential
    /// exchange relies on that.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        query: Option<&str>,
        variables: &Variables,
        bearer: Option<&str>,
    ) -> Result<Vec<u8>> {
        let mut builder = self.http.request(method.clone(), url);

        builder = if method == Method::GET {
            if variables.is_empty() {
                builder
            } else {
                builder.query(&query_pairs(variables))
            }
        } else {
            match query {
                Some(document) => builder.json(&GraphqlBody { query: document, variables }),
                None => builder.json(variables),
            }
        };

        self.http.send(self.decorate(builder, bearer)).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn send_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
        bearer: Option<&str>,
    ) -> Result<Vec<u8>> {
        let builder = self.http.request(Method::POST, url).form(fields);
        self.http.send(self.decorate(builder, bearer)).await
    }

    fn decorate(&self, builder: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
        let builder = builder
            .header(HEADER_USERPOOL_ID, self.config.user_pool_id.as_str())
            .header(HEADER_REQUEST_FROM, SDK_TYPE)
            .header(HEADER_SDK_VERSION, SDK_VERSION)
            .header(HEADER_APP_ID, APP_ID);

        match bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Flatten variables into query-string pairs.
///
/// Strings are emitted verbatim, `null` as an empty value, anything else as
/// its JSON text.
fn query_pairs(variables: &Variables) -> Vec<(String, String)> {
    variables
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn transport(server: &MockServer) -> Transport {
        let config = ClientConfig::new("pool-1", "secret").with_host(server.uri());
        Transport::new(HttpClient::new().unwrap(), Arc::new(config))
    }

    fn vars(value: Value) -> Variables {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn flattens_scalars_for_query_string() {
        let pairs = query_pairs(&vars(json!({"page": 1, "name": "x", "deep": true, "ns": null})));
        assert!(pairs.contains(&("page".into(), "1".into())));
        assert!(pairs.contains(&("name".into(), "x".into())));
        assert!(pairs.contains(&("deep".into(), "true".into())));
        assert!(pairs.contains(&("ns".into(), String::new())));
    }

    #[test]
    fn variables_must_be_an_object() {
        assert!(variables_of(&json!({"a": 1})).is_ok());
        assert!(matches!(variables_of(&42), Err(AuthingError::Internal(_))));
    }

    #[tokio::test]
    async fn posts_graphql_body_with_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql/v2"))
            .and(header("x-authing-userpool-id", "pool-1"))
            .and(header("x-authing-request-from", SDK_TYPE))
            .and(header("x-authing-sdk-version", SDK_VERSION))
            .and(header("authorization", "Bearer tok"))
            .and(body_json(json!({"query": "query x", "variables": {"page": 1}})))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&server);
        let url = transport.config().url("/graphql/v2");
        let body = transport
            .send(Method::POST, &url, Some("query x"), &vars(json!({"page": 1})), Some("tok"))
            .await
            .unwrap();
        assert_eq!(body, b"{}");
    }

    #[tokio::test]
    async fn omits_empty_variables_and_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({"query": "query x"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&server);
        let url = transport.config().url("/graphql/v2");
        transport.send(Method::POST, &url, Some("query x"), &Variables::new(), None).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn get_sends_variables_as_query_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/orgs/pagination"))
            .and(query_param("page", "2"))
            .and(query_param("sortBy", "CREATEDAT_DESC"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&server);
        let url = transport.config().url("/api/v2/orgs/pagination");
        let variables = vars(json!({"page": 2, "sortBy": "CREATEDAT_DESC"}));
        transport.send(Method::GET, &url, None, &variables, Some("tok")).await.unwrap();
    }

    #[tokio::test]
    async fn rest_post_sends_bare_variables() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({"password": "p"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&server);
        let url = transport.config().url("/api/v2/password/check");
        transport
            .send(Method::POST, &url, None, &vars(json!({"password": "p"})), Some("tok"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn invalid_header_value_is_an_internal_error() {
        let server = MockServer::start().await;
        let config = ClientConfig::new("bad\npool", "secret").with_host(server.uri());
        let transport = Transport::new(HttpClient::new().unwrap(), Arc::new(config));

        let url = transport.config().url("/graphql/v2");
        let err = transport.send(Method::POST, &url, Some("q"), &Variables::new(), None).await;
        assert!(matches!(err, Err(AuthingError::Internal(_))), "got {err:?}");
    }
}
