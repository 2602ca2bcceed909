//! Provider registry for managing all provider descriptors.
//!
//! The registry provides static access to all provider configurations
//! and is the central point for looking up providers by kind or identifier.

use cloudboard_core::ProviderKind;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::clawcloud::clawcloud_descriptor;
use crate::descriptor::ProviderDescriptor;
use crate::huggingface::huggingface_descriptor;
use crate::railway::railway_descriptor;
use crate::render::render_descriptor;
use crate::vercel::vercel_descriptor;
use crate::zeabur::zeabur_descriptor;

// ============================================================================
// Static Registry
// ============================================================================

/// Static storage for all provider descriptors.
static DESCRIPTORS: OnceLock<Vec<ProviderDescriptor>> = OnceLock::new();

/// Static storage for identifier to provider kind mapping.
static NAME_MAP: OnceLock<HashMap<String, ProviderKind>> = OnceLock::new();

/// Initializes all provider descriptors, primary provider first.
fn init_descriptors() -> Vec<ProviderDescriptor> {
    vec![
        zeabur_descriptor(),
        vercel_descriptor(),
        huggingface_descriptor(),
        render_descriptor(),
        railway_descriptor(),
        clawcloud_descriptor(),
    ]
}

/// Builds the identifier to provider kind mapping.
fn build_name_map(descriptors: &[ProviderDescriptor]) -> HashMap<String, ProviderKind> {
    let mut map = HashMap::new();

    for desc in descriptors {
        // Canonical name
        map.insert(desc.cli.name.to_string(), desc.id);

        // Aliases
        for alias in desc.cli.aliases {
            map.insert((*alias).to_string(), desc.id);
        }
    }

    map
}

/// Trims and lower-cases a provider identifier.
pub fn normalize_provider_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ============================================================================
// Provider Registry
// ============================================================================

/// Global registry of all provider descriptors.
///
/// The registry is initialized lazily on first access and is immutable
/// afterwards, so it can be shared by concurrent fetches without locks.
pub struct ProviderRegistry;

impl ProviderRegistry {
    /// Returns all provider descriptors.
    pub fn all() -> &'static [ProviderDescriptor] {
        DESCRIPTORS.get_or_init(init_descriptors)
    }

    /// Gets a provider descriptor by kind.
    pub fn get(id: ProviderKind) -> Option<&'static ProviderDescriptor> {
        Self::all().iter().find(|d| d.id == id)
    }

    /// Returns the identifier to provider kind mapping.
    pub fn name_map() -> &'static HashMap<String, ProviderKind> {
        NAME_MAP.get_or_init(|| build_name_map(Self::all()))
    }

    /// Looks up a provider by canonical id or alias, ignoring case and
    /// surrounding whitespace.
    pub fn get_by_name(name: &str) -> Option<&'static ProviderDescriptor> {
        let kind = Self::name_map().get(&normalize_provider_id(name))?;
        Self::get(*kind)
    }

    /// Returns the canonical id for `name`, or the normalized input when
    /// no provider answers to it.
    pub fn canonical_id(name: &str) -> String {
        Self::get_by_name(name).map_or_else(
            || normalize_provider_id(name),
            |desc| desc.cli_name().to_string(),
        )
    }

    /// Returns the number of registered providers.
    pub fn count() -> usize {
        Self::all().len()
    }

    /// Returns all provider kinds.
    pub fn kinds() -> Vec<ProviderKind> {
        Self::all().iter().map(|d| d.id).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_all_6_providers() {
        assert_eq!(ProviderRegistry::count(), 6, "Should have exactly 6 providers");
        assert_eq!(ProviderRegistry::kinds(), ProviderKind::all().to_vec());
    }

    #[test]
    fn test_registry_get_all_kinds() {
        for &kind in ProviderKind::all() {
            let desc = ProviderRegistry::get(kind);
            assert!(desc.is_some(), "Should find provider {kind:?}");
            let desc = desc.unwrap();
            assert_eq!(desc.id, kind);
            assert_eq!(desc.adapter().kind(), kind);
        }
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(ProviderRegistry::get_by_name("zeabur").unwrap().id, ProviderKind::Zeabur);
        assert_eq!(ProviderRegistry::get_by_name("  Vercel ").unwrap().id, ProviderKind::Vercel);
        assert_eq!(ProviderRegistry::get_by_name("RENDER").unwrap().id, ProviderKind::Render);
    }

    #[test]
    fn test_alias_lookup() {
        let hf = ProviderRegistry::get_by_name("hugging_face").unwrap();
        assert_eq!(hf.id, ProviderKind::HuggingFace);

        let claw = ProviderRegistry::get_by_name("Claw").unwrap();
        assert_eq!(claw.id, ProviderKind::ClawCloud);
    }

    #[test]
    fn test_unknown_name() {
        assert!(ProviderRegistry::get_by_name("heroku").is_none());
        assert!(ProviderRegistry::get_by_name("").is_none());
    }

    #[test]
    fn test_canonical_id() {
        assert_eq!(ProviderRegistry::canonical_id(" Hugging_Face "), "huggingface");
        assert_eq!(ProviderRegistry::canonical_id("claw"), "clawcloud");
        assert_eq!(ProviderRegistry::canonical_id(" Heroku "), "heroku");
    }

    #[test]
    fn test_only_primary_supports_billing() {
        for desc in ProviderRegistry::all() {
            assert_eq!(desc.metadata.supports_billing, desc.id.is_primary(), "{:?}", desc.id);
        }
    }

    #[test]
    fn test_names_unique() {
        let map = ProviderRegistry::name_map();
        let total: usize = ProviderRegistry::all()
            .iter()
            .map(|d| 1 + d.cli.aliases.len())
            .sum();
        assert_eq!(map.len(), total);
    }
}
