//! ClawCloud adapter.

use async_trait::async_trait;
use cloudboard_core::{AccountSnapshot, ProviderKind};
use cloudboard_fetch::{FetchContext, ProviderAdapter, ProviderContext, ProviderError};
use tracing::{info, instrument};

use super::api;
use super::parser::build_snapshot;

/// Adapter for ClawCloud: one projects listing carrying the owner.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClawCloudAdapter;

impl ClawCloudAdapter {
    /// Creates a new adapter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProviderAdapter for ClawCloudAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ClawCloud
    }

    #[instrument(skip(self, ctx, token))]
    async fn fetch(&self, ctx: &FetchContext, token: &str) -> Result<AccountSnapshot, ProviderError> {
        let body = api::fetch_projects(ctx, token)
            .await
            .provider_context(self.kind(), "failed to fetch projects")?;

        let snapshot = build_snapshot(&body);
        info!(projects = snapshot.project_count(), "ClawCloud fetch complete");
        Ok(snapshot)
    }
}

// ============================================================================
// Tests
// ============================================================================
