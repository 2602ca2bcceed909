//! Provider descriptor system.
//!
//! A descriptor contains all the static configuration for a provider:
//! - Metadata (display name, labels, URLs)
//! - CLI configuration (canonical name and aliases)
//! - The adapter that fetches the canonical snapshot

use cloudboard_core::{ProviderKind, ProviderMetadata};
use cloudboard_fetch::ProviderAdapter;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Provider Descriptor
// ============================================================================

/// Complete descriptor for a provider.
pub struct ProviderDescriptor {
    /// Provider identifier.
    pub id: ProviderKind,
    /// Display metadata.
    pub metadata: ProviderMetadata,
    /// Identifier configuration.
    pub cli: CliConfig,
    /// Adapter translating the provider's API into a snapshot.
    pub adapter: Arc<dyn ProviderAdapter>,
}

impl ProviderDescriptor {
    /// Creates a new descriptor builder.
    pub fn builder(id: ProviderKind, adapter: Arc<dyn ProviderAdapter>) -> ProviderDescriptorBuilder {
        ProviderDescriptorBuilder::new(id, adapter)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        &self.metadata.display_name
    }

    /// Returns the canonical identifier.
    pub fn cli_name(&self) -> &str {
        self.cli.name
    }

    /// Returns the adapter.
    pub fn adapter(&self) -> &dyn ProviderAdapter {
        self.adapter.as_ref()
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("id", &self.id)
            .field("cli", &self.cli)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// CLI Config
// ============================================================================

/// Identifiers a provider answers to.
#[derive(Debug, Clone, Copy)]
pub struct CliConfig {
    /// Canonical identifier.
    pub name: &'static str,
    /// Alternative identifiers.
    pub aliases: &'static [&'static str],
}

impl CliConfig {
    /// Creates the config for a provider with no aliases.
    pub fn for_provider(kind: ProviderKind) -> Self {
        Self {
            name: kind.cli_name(),
            aliases: &[],
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for ProviderDescriptor.
pub struct ProviderDescriptorBuilder {
    id: ProviderKind,
    metadata: Option<ProviderMetadata>,
    cli: CliConfig,
    adapter: Arc<dyn ProviderAdapter>,
}

impl ProviderDescriptorBuilder {
    /// Creates a new builder for the given provider.
    pub fn new(id: ProviderKind, adapter: Arc<dyn ProviderAdapter>) -> Self {
        Self {
            id,
            metadata: None,
            cli: CliConfig::for_provider(id),
            adapter,
        }
    }

    /// Sets the metadata.
    pub fn metadata(mut self, metadata: ProviderMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Sets the aliases.
    pub fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.cli.aliases = aliases;
        self
    }

    /// Builds the descriptor.
    pub fn build(self) -> ProviderDescriptor {
        let mut metadata = self
            .metadata
            .unwrap_or_else(|| ProviderMetadata::for_provider(self.id));
        metadata.supports_billing = self.adapter.supports_billing();

        ProviderDescriptor {
            id: self.id,
            metadata,
            cli: self.cli,
            adapter: self.adapter,
        }
    }
}
