//! Response envelope decoding
//!
//! The service answers in two shapes:
//! - GraphQL: `{ "data": {...}, "errors": [{ "message": { "message": "...", "code": 2004 } }] }`
//! - REST: `{ "code": 200, "message": "...", "data": ... }`
//!
//! Errors are always inspected before the payload is decoded into its typed
//! shape, so a remote failure is reported even when `data` is well-formed.

use authing_domain::constants::REST_SUCCESS_CODE;
use authing_domain::{AuthingError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Message carried by a GraphQL error entry.
///
/// Authing nests a `{ message, code }` object; plain-string messages from
/// generic GraphQL servers are accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphqlErrorMessage {
    /// `{ message, code }` object
    Detailed {
        #[serde(default)]
        message: String,
        #[serde(default)]
        code: Option<Value>,
    },
    /// Bare message string
    Plain(String),
}

/// One entry of the GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    #[serde(default)]
    pub message: Option<GraphqlErrorMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphqlError {
    fn into_authing(self) -> AuthingError {
        match self.message {
            Some(GraphqlErrorMessage::Detailed { message, code }) => {
                AuthingError::Remote { message, code: code.as_ref().and_then(code_as_i64) }
            }
            Some(GraphqlErrorMessage::Plain(message)) => AuthingError::remote(message),
            None => AuthingError::remote("remote service reported an error without a message"),
        }
    }
}

fn code_as_i64(code: &Value) -> Option<i64> {
    match code {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// GraphQL response envelope with a typed payload.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl<T> GraphqlResponse<T> {
    /// Turn the envelope into its payload, or the first reported error
    pub fn into_result(self) -> Result<Option<T>> {
        if let Some(first) = self.errors.and_then(|errors| errors.into_iter().next()) {
            let err = first.into_authing();
            warn!(error = %err, "GraphQL request failed remotely");
            return Err(err);
        }
        Ok(self.data)
    }
}

#[derive(Deserialize)]
struct ErrorsOnly {
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

/// Fail with the first entry of a non-empty `errors` array.
///
/// Only the `errors` field is inspected; `data` may have any shape.
pub fn check_graphql_errors(raw: &[u8]) -> Result<()> {
    let probe: ErrorsOnly = serde_json::from_slice(raw)?;
    GraphqlResponse::<()> { data: None, errors: probe.errors }.into_result().map(|_| ())
}

/// Check the errors, then decode `data.<field>` into `T`.
///
/// `field` may be a dotted path such as `role.users` for nested selections.
pub fn decode_graphql<T: DeserializeOwned>(raw: &[u8], field: &str) -> Result<T> {
    check_graphql_errors(raw)?;

    let envelope: GraphqlResponse<Value> = serde_json::from_slice(raw)?;
    let mut payload = envelope.into_result()?.unwrap_or(Value::Null);

    for segment in field.split('.') {
        payload = match payload {
            Value::Object(mut map) => map.remove(segment).unwrap_or(Value::Null),
            _ => Value::Null,
        };
        if payload.is_null() {
            return Err(AuthingError::Decode(format!("response is missing data.{field}")));
        }
    }

    serde_json::from_value(payload).map_err(|err| {
        AuthingError::Decode(format!("failed to decode data.{field}: {err}"))
    })
}

/// REST envelope with a typed payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RestResponse<T> {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Check `code`, then decode `data` into `T`.
pub fn decode_rest<T: DeserializeOwned>(raw: &[u8]) -> Result<T> {
    let envelope: RestResponse<Value> = serde_json::from_slice(raw)?;

    match envelope.code {
        Some(REST_SUCCESS_CODE) => {}
        Some(code) => {
            let err = AuthingError::Remote {
                message: envelope.message.unwrap_or_default(),
                code: Some(code),
            };
            warn!(code, error = %err, "REST request failed remotely");
            return Err(err);
        }
        None => {
            return Err(AuthingError::Decode("response envelope carries no code".into()));
        }
    }

    serde_json::from_value(envelope.data.unwrap_or(Value::Null))
        .map_err(|err| AuthingError::Decode(format!("failed to decode data: {err}")))
}
