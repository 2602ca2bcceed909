//! GraphQL over HTTP.
//!
//! Three of the supported providers speak GraphQL. Every call goes through
//! [`execute`], which sends the document with a variables map and decodes
//! the `{data, errors}` envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::host::http::ApiRequest;

// ============================================================================
// Request
// ============================================================================

/// A GraphQL document with its variables.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    /// The GraphQL document.
    pub query: String,
    /// Variables referenced by the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    /// Operation to run when the document has several.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphQlRequest {
    /// Creates a request without variables.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    /// Sets the variables map.
    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Sets the operation name.
    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}

// ============================================================================
// Envelope
// ============================================================================

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Value,
    #[serde(default)]
    errors: Option<Vec<ErrorItem>>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    #[serde(default)]
    message: Option<String>,
}

/// Decodes a GraphQL response body.
///
/// A non-empty `errors` array fails with [`FetchError::GraphQl`] carrying
/// the joined messages. A missing or null `data` decodes as `{}`.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        let message = errors
            .iter()
            .map(|e| e.message.as_deref().unwrap_or("unknown error"))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FetchError::GraphQl(message));
    }

    let data = if envelope.data.is_null() {
        Value::Object(Map::new())
    } else {
        envelope.data
    };
    Ok(serde_json::from_value(data)?)
}

// ============================================================================
// Execution
// ============================================================================

/// Posts `request` to `endpoint` with a bearer token and decodes `data`.
#[instrument(skip(ctx, token, request), fields(endpoint = %endpoint))]
pub async fn execute<T: DeserializeOwned>(
    ctx: &FetchContext,
    endpoint: &str,
    token: &str,
    request: &GraphQlRequest,
) -> Result<T, FetchError> {
    let body = serde_json::to_value(request)?;
    let response = ctx
        .http
        .send(ApiRequest::post_json(endpoint, body).bearer(token))
        .await?;

    debug!(status = response.status, "GraphQL response");

    let response = response.error_for_status()?;
    decode_envelope(&response.body)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cloudboard_core::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = GraphQlRequest::new("query { me { _id } }");
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"query": "query { me { _id } }"}));

        let request = GraphQlRequest::new("mutation($id: ObjectID!) { x(id: $id) }")
            .with_variables(json!({"id": "svc\"1"}))
            .with_operation_name("X");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["variables"]["id"], "svc\"1");
        assert_eq!(value["operationName"], "X");
    }

    #[test]
    fn test_decode_data() {
        let value: Value = decode_envelope(r#"{"data": {"me": {"_id": "u1"}}}"#).unwrap();
        assert_eq!(value["me"]["_id"], "u1");
    }

    #[test]
    fn test_decode_null_data_is_empty_object() {
        let value: Value = decode_envelope(r#"{"data": null}"#).unwrap();
        assert_eq!(value, json!({}));
        let value: Value = decode_envelope("{}").unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_decode_errors() {
        let err = decode_envelope::<Value>(
            r#"{"data": null, "errors": [{"message": "Not authorized"}, {"message": "again"}]}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert_eq!(err.to_string(), "GraphQL error: Not authorized; again");
    }

    #[test]
    fn test_decode_empty_errors_is_ok() {
        let value: Value = decode_envelope(r#"{"data": {"a": 1}, "errors": []}"#).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode_envelope::<Value>("<html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
