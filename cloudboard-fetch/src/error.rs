//! Fetch error types.

use cloudboard_core::{CoreError, ErrorKind};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for a single upstream call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The call exceeded its time bound and was cancelled.
    #[error("Request timed out after {} seconds", .0.as_secs_f64())]
    Timeout(Duration),

    /// Network or connection failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Response body (truncated) or status reason.
        message: String,
    },

    /// GraphQL `errors` payload.
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// Upstream answered but yielded nothing usable.
    #[error("No data: {0}")]
    NoData(String),

    /// Response body was not valid JSON of the expected shape.
    #[error("Invalid JSON response: {0}")]
    Parse(String),

    /// The request could not be built (e.g. a token with invalid header bytes).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Every alternative context of a call failed.
    #[error("{reasons}")]
    AllFailed {
        /// Kind of the first failure.
        kind: ErrorKind,
        /// Combined, truncated failure reasons.
        reasons: String,
    },

    /// Descriptor-level error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FetchError {
    /// Returns the taxonomy kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Upstream { .. } | Self::GraphQl(_) | Self::NoData(_) => ErrorKind::Upstream,
            Self::Parse(_) => ErrorKind::Parse,
            Self::InvalidRequest(_) => ErrorKind::Validation,
            Self::AllFailed { kind, .. } => *kind,
            Self::Core(e) => e.kind(),
        }
    }

    /// Classifies a reqwest error; `timeout` is the bound that was configured.
    pub fn from_reqwest(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Returns the HTTP status for upstream status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
