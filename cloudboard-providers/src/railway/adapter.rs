//! Railway adapter.

use async_trait::async_trait;
use cloudboard_core::{AccountSnapshot, ProviderKind};
use cloudboard_fetch::{FetchContext, ProviderAdapter, ProviderContext, ProviderError};
use tracing::{info, instrument};

use super::api;
use super::parser::build_snapshot;

/// Adapter for Railway: a single viewer query.
#[derive(Debug, Default, Clone, Copy)]
pub struct RailwayAdapter;

impl RailwayAdapter {
    /// Creates a new adapter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProviderAdapter for RailwayAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Railway
    }

    #[instrument(skip(self, ctx, token))]
    async fn fetch(&self, ctx: &FetchContext, token: &str) -> Result<AccountSnapshot, ProviderError> {
        let viewer = api::fetch_viewer(ctx, token)
            .await
            .provider_context(self.kind(), "failed to fetch viewer")?;

        let snapshot = build_snapshot(viewer);
        info!(projects = snapshot.project_count(), "Railway fetch complete");
        Ok(snapshot)
    }
}

// ============================================================================
// Tests
// ============================================================================
