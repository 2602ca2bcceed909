//! HTTP host API with a bounded timeout per call.
//!
//! Adapters never talk to reqwest directly. They build an [`ApiRequest`] and
//! hand it to an [`HttpApi`] implementation from the fetch context, which
//! keeps them testable against a scripted double.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::FetchError;

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum length of an upstream error body kept in error messages.
pub const REASON_LIMIT: usize = 200;

/// User agent string for Cloudboard.
const USER_AGENT: &str = concat!("Cloudboard/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Request / Response
// ============================================================================

/// HTTP method used by adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// An outbound API call.
#[derive(Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Bearer token, sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    /// Extra headers.
    pub headers: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            bearer: None,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a POST request with a JSON body.
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            bearer: None,
            headers: Vec::new(),
            body: Some(body),
        }
    }

    /// Sets the bearer token.
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Adds a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// A fully read API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl ApiResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-success status into [`FetchError::Upstream`].
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(FetchError::Upstream {
            status: self.status,
            message: self.reason(),
        })
    }

    /// Body (truncated) or the canonical status reason when the body is blank.
    pub fn reason(&self) -> String {
        let body = self.body.trim();
        if body.is_empty() {
            return StatusCode::from_u16(self.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("unknown error")
                .to_string();
        }
        truncate_reason(body, REASON_LIMIT)
    }

    /// Parses the body as JSON; a blank body parses as `{}`.
    pub fn json_value(&self) -> Result<Value, FetchError> {
        if self.body.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&self.body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Parses the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_value(self.json_value()?)?)
    }
}

/// Trims `text` and cuts it to `limit` characters, appending `...` when cut.
pub fn truncate_reason(text: &str, limit: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

// ============================================================================
// HTTP API Trait
// ============================================================================

/// API for performing one bounded upstream call.
#[async_trait]
pub trait HttpApi: Send + Sync {
    /// Sends the request and reads the whole body.
    ///
    /// Implementations must cancel the call when it exceeds their bound and
    /// report [`FetchError::Timeout`], distinct from [`FetchError::Transport`].
    /// A non-success status is not an error at this level.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError>;
}

// ============================================================================
// HTTP Client
// ============================================================================

/// reqwest-backed [`HttpApi`] with a per-call timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let inner = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { inner, timeout })
    }

    /// Returns the per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HttpApi for HttpClient {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError> {
        let mut builder = match request.method {
            Method::Get => self.inner.get(&request.url),
            Method::Post => self.inner.post(&request.url),
        };

        builder = builder.header(header::ACCEPT, "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!("Sending request");

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        match tokio::time::timeout(self.timeout, exchange).await {
            Err(_) => {
                debug!(timeout = ?self.timeout, "Request timed out");
                Err(FetchError::Timeout(self.timeout))
            }
            Ok(Err(e)) => Err(FetchError::from_reqwest(&e, self.timeout)),
            Ok(Ok((status, body))) => {
                debug!(status = %status, len = body.len(), "Response received");
                Ok(ApiResponse::new(status.as_u16(), body))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cloudboard_core::ErrorKind;

    #[test]
    fn test_error_for_status_uses_body() {
        let err = ApiResponse::new(403, "forbidden: team scope")
            .error_for_status()
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert!(err.to_string().contains("forbidden: team scope"));
    }

    #[test]
    fn test_error_for_status_blank_body_uses_reason() {
        let response = ApiResponse::new(404, "  ");
        assert_eq!(response.reason(), "Not Found");
    }

    #[test]
    fn test_success_passes_through() {
        let response = ApiResponse::new(200, "{}").error_for_status().unwrap();
        assert!(response.is_success());
    }

    #[test]
    fn test_json_value_blank_body() {
        let value = ApiResponse::new(200, "").json_value().unwrap();
        assert!(value.as_object().is_some_and(serde_json::Map::is_empty));
    }

    #[test]
    fn test_json_value_invalid() {
        let err = ApiResponse::new(200, "<html>").json_value().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_truncate_reason() {
        assert_eq!(truncate_reason("  short ", 10), "short");
        assert_eq!(truncate_reason("abcdef", 3), "abc...");
        assert_eq!(truncate_reason("日本語テキスト", 3), "日本語...");
    }

    #[test]
    fn test_request_debug_redacts_token() {
        let request = ApiRequest::get("https://example.com").bearer("secret-token");
        let debug = format!("{request:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_client_keeps_timeout() {
        let client = HttpClient::with_timeout(Duration::from_secs(3)).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_unresponsive_server_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(stream);
        });

        let client = HttpClient::with_timeout(Duration::from_millis(200)).unwrap();
        let err = client
            .send(ApiRequest::get(format!("http://{addr}/v1/user")))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Timeout);
        server.abort();
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::with_timeout(Duration::from_secs(2)).unwrap();
        let err = client
            .send(ApiRequest::get(format!("http://{addr}/v1/user")))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
