//! Provider-related types.
//!
//! This module contains types related to cloud hosting providers:
//! - [`ProviderKind`] - Enum of supported providers
//! - [`ProviderMetadata`] - Provider capabilities and display info

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Provider Kind
// ============================================================================

/// Supported cloud hosting provider kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Zeabur (primary provider, GraphQL with billing)
    #[default]
    Zeabur,
    /// Vercel
    Vercel,
    /// Hugging Face Hub
    HuggingFace,
    /// Render
    Render,
    /// Railway
    Railway,
    /// ClawCloud
    ClawCloud,
}

impl ProviderKind {
    /// Returns the display name for this provider.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Zeabur => "Zeabur",
            Self::Vercel => "Vercel",
            Self::HuggingFace => "Hugging Face",
            Self::Render => "Render",
            Self::Railway => "Railway",
            Self::ClawCloud => "ClawCloud",
        }
    }

    /// Returns all available provider kinds.
    pub fn all() -> &'static [ProviderKind] {
        &[
            Self::Zeabur,
            Self::Vercel,
            Self::HuggingFace,
            Self::Render,
            Self::Railway,
            Self::ClawCloud,
        ]
    }

    /// Returns the canonical identifier for this provider (lowercase, no spaces).
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::Zeabur => "zeabur",
            Self::Vercel => "vercel",
            Self::HuggingFace => "huggingface",
            Self::Render => "render",
            Self::Railway => "railway",
            Self::ClawCloud => "clawcloud",
        }
    }

    /// Returns true for the provider that exposes billing data.
    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Zeabur)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Provider Metadata
// ============================================================================

/// Metadata describing a provider's capabilities and display info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderMetadata {
    /// The provider this metadata describes.
    pub id: ProviderKind,
    /// Display name in UI.
    pub display_name: String,
    /// Canonical identifier.
    pub cli_name: String,
    /// Whether the provider exposes billing/usage data.
    pub supports_billing: bool,
    /// Whether this is considered the primary provider.
    pub is_primary_provider: bool,
    /// Label used for the project list (e.g., "Projects", "Repositories").
    pub projects_label: String,
    /// URL to the provider's dashboard.
    pub dashboard_url: Option<String>,
}

impl ProviderMetadata {
    /// Creates default metadata for a provider kind.
    pub fn for_provider(kind: ProviderKind) -> Self {
        Self {
            id: kind,
            display_name: kind.display_name().to_string(),
            cli_name: kind.cli_name().to_string(),
            supports_billing: false,
            is_primary_provider: kind.is_primary(),
            projects_label: "Projects".to_string(),
            dashboard_url: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
