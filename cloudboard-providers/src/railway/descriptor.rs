//! Railway provider descriptor.

use cloudboard_core::{ProviderKind, ProviderMetadata};
use std::sync::Arc;

use super::adapter::RailwayAdapter;
use crate::descriptor::ProviderDescriptor;

/// Creates the Railway descriptor.
pub fn railway_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::builder(ProviderKind::Railway, Arc::new(RailwayAdapter::new()))
        .metadata(ProviderMetadata {
            dashboard_url: Some("https://railway.app/dashboard".to_string()),
            ..ProviderMetadata::for_provider(ProviderKind::Railway)
        })
        .build()
}
