//! Render provider descriptor.

use cloudboard_core::{ProviderKind, ProviderMetadata};
use std::sync::Arc;

use super::adapter::RenderAdapter;
use crate::descriptor::ProviderDescriptor;

/// Creates the Render descriptor.
pub fn render_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::builder(ProviderKind::Render, Arc::new(RenderAdapter::new()))
        .metadata(ProviderMetadata {
            projects_label: "Services".to_string(),
            dashboard_url: Some("https://dashboard.render.com".to_string()),
            ..ProviderMetadata::for_provider(ProviderKind::Render)
        })
        .build()
}
