//! Render adapter.

use async_trait::async_trait;
use cloudboard_core::{AccountSnapshot, ProviderKind};
use cloudboard_fetch::{FetchContext, FetchError, ProviderAdapter, ProviderError};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::api;
use super::parser::{parse_owner, parse_services};

/// Adapter for Render: owners and services, fetched together.
///
/// Neither call is required. A failure of either one is logged and treated
/// as an empty list, so this adapter never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct RenderAdapter;

impl RenderAdapter {
    /// Creates a new adapter.
    pub fn new() -> Self {
        Self
    }
}

fn or_empty(what: &str, outcome: Result<Value, FetchError>) -> Value {
    outcome.unwrap_or_else(|e| {
        warn!(call = what, error = %e, "Render call failed, using empty list");
        Value::Array(Vec::new())
    })
}

#[async_trait]
impl ProviderAdapter for RenderAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Render
    }

    #[instrument(skip(self, ctx, token))]
    async fn fetch(&self, ctx: &FetchContext, token: &str) -> Result<AccountSnapshot, ProviderError> {
        let (owners, services) = tokio::join!(
            api::fetch_owners(ctx, token),
            api::fetch_services(ctx, token)
        );

        let user = parse_owner(&or_empty("owners", owners));
        let projects = parse_services(&or_empty("services", services));

        let snapshot = AccountSnapshot::new(user, projects);
        info!(projects = snapshot.project_count(), "Render fetch complete");
        Ok(snapshot)
    }
}

// ============================================================================
// Tests
// ============================================================================
