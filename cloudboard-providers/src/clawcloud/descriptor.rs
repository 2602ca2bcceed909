//! ClawCloud provider descriptor.

use cloudboard_core::{ProviderKind, ProviderMetadata};
use std::sync::Arc;

use super::adapter::ClawCloudAdapter;
use crate::descriptor::ProviderDescriptor;

/// Creates the ClawCloud descriptor.
pub fn clawcloud_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::builder(ProviderKind::ClawCloud, Arc::new(ClawCloudAdapter::new()))
        .metadata(ProviderMetadata {
            dashboard_url: Some("https://console.claw.cloud".to_string()),
            ..ProviderMetadata::for_provider(ProviderKind::ClawCloud)
        })
        .aliases(&["claw"])
        .build()
}
