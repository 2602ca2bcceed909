//! Zeabur provider descriptor.

use cloudboard_core::{ProviderKind, ProviderMetadata};
use std::sync::Arc;

use super::adapter::ZeaburAdapter;
use crate::descriptor::ProviderDescriptor;

/// Creates the Zeabur descriptor.
pub fn zeabur_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::builder(ProviderKind::Zeabur, Arc::new(ZeaburAdapter::new()))
        .metadata(zeabur_metadata())
        .build()
}

fn zeabur_metadata() -> ProviderMetadata {
    ProviderMetadata {
        dashboard_url: Some("https://dash.zeabur.com".to_string()),
        ..ProviderMetadata::for_provider(ProviderKind::Zeabur)
    }
}
