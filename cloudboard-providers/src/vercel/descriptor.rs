//! Vercel provider descriptor.

use cloudboard_core::{ProviderKind, ProviderMetadata};
use std::sync::Arc;

use super::adapter::VercelAdapter;
use crate::descriptor::ProviderDescriptor;

/// Creates the Vercel descriptor.
pub fn vercel_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::builder(ProviderKind::Vercel, Arc::new(VercelAdapter::new()))
        .metadata(ProviderMetadata {
            dashboard_url: Some("https://vercel.com/dashboard".to_string()),
            ..ProviderMetadata::for_provider(ProviderKind::Vercel)
        })
        .build()
}
