//! Account descriptor types.
//!
//! An [`AccountDescriptor`] is the generic input to the aggregation layer:
//! a display name, a (decrypted) API token and an optional provider id.

use serde::{Deserialize, Serialize};

use super::provider::ProviderKind;
use crate::error::CoreError;

/// Prefix some users paste along with their token.
const BEARER_PREFIX: &str = "bearer";

// ============================================================================
// Token Normalization
// ============================================================================

/// Normalizes an API token.
///
/// Trims surrounding whitespace and strips a case-insensitive `Bearer `
/// prefix (the prefix must be followed by whitespace).
///
/// # Example
///
/// ```
/// use cloudboard_core::normalize_token;
///
/// assert_eq!(normalize_token("  Bearer abc123 "), "abc123");
/// assert_eq!(normalize_token("abc123"), "abc123");
/// ```
pub fn normalize_token(raw: &str) -> String {
    let trimmed = raw.trim();

    let Some(head) = trimmed.get(..BEARER_PREFIX.len()) else {
        return trimmed.to_string();
    };
    let rest = &trimmed[BEARER_PREFIX.len()..];

    if head.eq_ignore_ascii_case(BEARER_PREFIX) && rest.starts_with(char::is_whitespace) {
        rest.trim().to_string()
    } else {
        trimmed.to_string()
    }
}

// ============================================================================
// Account Descriptor
// ============================================================================

/// A single account to fetch: `{name, token, provider}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDescriptor {
    /// Display name chosen by the user.
    #[serde(default)]
    pub name: String,
    /// Raw API token (may carry whitespace or a `Bearer ` prefix).
    #[serde(default)]
    pub token: String,
    /// Provider identifier; the primary provider when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl AccountDescriptor {
    /// Creates a descriptor for the primary provider.
    pub fn new(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
            provider: None,
        }
    }

    /// Sets the provider identifier.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Returns the trimmed, lower-cased provider identifier.
    ///
    /// A missing or blank identifier resolves to the primary provider.
    pub fn provider_id(&self) -> String {
        match self.provider.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_lowercase(),
            _ => ProviderKind::default().cli_name().to_string(),
        }
    }

    /// Returns the normalized token, failing fast when it is empty.
    pub fn require_token(&self) -> Result<String, CoreError> {
        let token = normalize_token(&self.token);
        if token.is_empty() {
            return Err(CoreError::MissingToken);
        }
        Ok(token)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token_strips_bearer_any_case() {
        assert_eq!(normalize_token("Bearer abc"), "abc");
        assert_eq!(normalize_token("  bearer   abc  "), "abc");
        assert_eq!(normalize_token("BEARER\tabc"), "abc");
    }

    #[test]
    fn test_normalize_token_keeps_glued_prefix() {
        assert_eq!(normalize_token("Bearerabc"), "Bearerabc");
        assert_eq!(normalize_token("bear"), "bear");
    }

    #[test]
    fn test_normalize_token_blank() {
        assert_eq!(normalize_token(""), "");
        assert_eq!(normalize_token("   "), "");
        assert_eq!(normalize_token("Bearer    "), "Bearer");
    }

    #[test]
    fn test_normalize_token_non_ascii() {
        assert_eq!(normalize_token("  ключ "), "ключ");
    }

    #[test]
    fn test_provider_id_defaults() {
        let desc = AccountDescriptor::new("a", "t");
        assert_eq!(desc.provider_id(), "zeabur");

        let desc = AccountDescriptor::new("a", "t").with_provider("   ");
        assert_eq!(desc.provider_id(), "zeabur");

        let desc = AccountDescriptor::new("a", "t").with_provider(" Hugging_Face ");
        assert_eq!(desc.provider_id(), "hugging_face");
    }

    #[test]
    fn test_require_token() {
        let desc = AccountDescriptor::new("a", " Bearer  ");
        assert!(matches!(desc.require_token(), Ok(t) if t == "Bearer"));

        let desc = AccountDescriptor::new("a", "  ");
        assert!(matches!(desc.require_token(), Err(CoreError::MissingToken)));
    }

    #[test]
    fn test_descriptor_deserialize_without_provider() {
        let desc: AccountDescriptor =
            serde_json::from_str(r#"{"name": "main", "token": "tok"}"#).unwrap();
        assert_eq!(desc.provider, None);
        assert_eq!(desc.provider_id(), "zeabur");
    }
}
