//! Hugging Face provider descriptor.

use cloudboard_core::{ProviderKind, ProviderMetadata};
use std::sync::Arc;

use super::adapter::HuggingFaceAdapter;
use crate::descriptor::ProviderDescriptor;

/// Creates the Hugging Face descriptor.
pub fn huggingface_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::builder(ProviderKind::HuggingFace, Arc::new(HuggingFaceAdapter::new()))
        .metadata(ProviderMetadata {
            projects_label: "Repositories".to_string(),
            dashboard_url: Some("https://huggingface.co/settings/tokens".to_string()),
            ..ProviderMetadata::for_provider(ProviderKind::HuggingFace)
        })
        .aliases(&["hugging_face"])
        .build()
}
