//! Batch result types.

use serde::{Deserialize, Serialize};

use super::snapshot::AccountSnapshot;
use crate::error::ErrorKind;

/// Outcome of one account in a batch, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// Account display name.
    pub name: String,
    /// Canonical provider id, or the normalized identifier when unresolved.
    pub provider: String,
    /// Whether the fetch succeeded.
    pub success: bool,
    /// Snapshot on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AccountSnapshot>,
    /// Remaining free quota in cents (0 for providers without one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<i64>,
    /// Human-readable error on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Error classification on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl BatchResult {
    /// Creates a successful result.
    pub fn success(
        name: impl Into<String>,
        provider: impl Into<String>,
        snapshot: AccountSnapshot,
        credit: i64,
    ) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            success: true,
            data: Some(snapshot),
            credit: Some(credit),
            error: None,
            error_kind: None,
        }
    }

    /// Creates a failed result.
    pub fn failure(
        name: impl Into<String>,
        provider: impl Into<String>,
        error: impl Into<String>,
        kind: ErrorKind,
    ) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            success: false,
            data: None,
            credit: None,
            error: Some(error.into()),
            error_kind: Some(kind),
        }
    }

    /// Returns the snapshot when the fetch succeeded.
    pub fn snapshot(&self) -> Option<&AccountSnapshot> {
        self.data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_json_shape() {
        let result = BatchResult::failure("acc", "vercel", "boom", ErrorKind::Upstream);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert_eq!(json["errorKind"], "upstream");
        assert!(json.get("data").is_none());
        assert!(json.get("credit").is_none());
    }

    #[test]
    fn test_success_json_shape() {
        let result = BatchResult::success("acc", "render", AccountSnapshot::default(), 0);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["credit"], 0);
        assert!(json.get("error").is_none());
        assert!(result.snapshot().is_some());
    }
}
