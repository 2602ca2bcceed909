//! Fetch context providing access to host APIs.
//!
//! The fetch context is shared by every adapter call in a request or batch.
//! It owns the HTTP host API, so tests can swap in a scripted double.

use std::sync::Arc;
use std::time::Duration;

use crate::error::FetchError;
use crate::host::http::{HttpApi, HttpClient, DEFAULT_TIMEOUT_SECS};

// ============================================================================
// Fetch Settings
// ============================================================================

/// Settings for fetch operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// Bound on every single upstream call.
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetchSettings {
    /// Creates settings with custom timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// Fetch Context
// ============================================================================

/// Context provided to provider adapters.
pub struct FetchContext {
    /// HTTP host API.
    pub http: Arc<dyn HttpApi>,
    /// Fetch settings.
    pub settings: FetchSettings,
}

impl FetchContext {
    /// Creates a context backed by a real HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }

    /// Creates a context backed by a real HTTP client with custom settings.
    pub fn with_settings(settings: FetchSettings) -> Result<Self, FetchError> {
        Self::builder().settings(settings).build()
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> FetchContextBuilder {
        FetchContextBuilder::new()
    }

    /// Returns the effective timeout for upstream calls.
    pub fn timeout(&self) -> Duration {
        self.settings.timeout
    }
}

impl std::fmt::Debug for FetchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`FetchContext`].
#[derive(Default)]
pub struct FetchContextBuilder {
    http: Option<Arc<dyn HttpApi>>,
    settings: FetchSettings,
}

impl FetchContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom HTTP host API.
    pub fn http(mut self, http: Arc<dyn HttpApi>) -> Self {
        self.http = Some(http);
        self
    }

    /// Sets the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Sets the fetch settings.
    pub fn settings(mut self, settings: FetchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Builds the context.
    ///
    /// Without a custom HTTP API this creates an [`HttpClient`] bound to the
    /// configured timeout, which is the only way building can fail.
    pub fn build(self) -> Result<FetchContext, FetchError> {
        let http: Arc<dyn HttpApi> = match self.http {
            Some(http) => http,
            None => Arc::new(HttpClient::with_timeout(self.settings.timeout)?),
        };

        Ok(FetchContext {
            http,
            settings: self.settings,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::http::{ApiRequest, ApiResponse};
    use async_trait::async_trait;

    struct Canned;

    #[async_trait]
    impl HttpApi for Canned {
        async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, FetchError> {
            Ok(ApiResponse::new(200, "{}"))
        }
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(FetchSettings::default().timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_timeout() {
        let ctx = FetchContext::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        assert_eq!(ctx.timeout(), Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_builder_custom_http() {
        let ctx = FetchContext::builder()
            .http(Arc::new(Canned))
            .build()
            .unwrap();
        let response = ctx.http.send(ApiRequest::get("https://x.test")).await.unwrap();
        assert_eq!(response.status, 200);
    }
}
