//! Core error types for `Cloudboard`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Error Kind
// ============================================================================

/// Classification shared by every error the aggregation layer can surface.
///
/// Callers (the CLI, a web front end) branch on the kind rather than on the
/// concrete error enum of each crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or empty token, malformed descriptor. Never reaches upstream.
    Validation,
    /// A call exceeded its time bound.
    Timeout,
    /// Network or connection failure.
    Transport,
    /// Non-success HTTP status or a GraphQL `errors` payload.
    Upstream,
    /// Response body was not the JSON we required.
    Parse,
    /// The provider identifier did not resolve to an adapter.
    UnsupportedProvider,
}

impl ErrorKind {
    /// Returns a short label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Timeout => "timeout",
            Self::Transport => "transport",
            Self::Upstream => "upstream",
            Self::Parse => "parse",
            Self::UnsupportedProvider => "unsupported_provider",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Core Error
// ============================================================================

/// Core error type for `Cloudboard` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The account token was empty after normalization.
    #[error("Missing account token")]
    MissingToken,

    /// The account descriptor is malformed.
    #[error("Invalid account descriptor: {0}")]
    InvalidDescriptor(String),

    /// The provider identifier is not supported.
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Returns the taxonomy kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingToken | Self::InvalidDescriptor(_) => ErrorKind::Validation,
            Self::UnsupportedProvider(_) => ErrorKind::UnsupportedProvider,
            Self::Serialization(_) => ErrorKind::Parse,
        }
    }
}
