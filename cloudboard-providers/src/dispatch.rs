//! Account dispatch: descriptor in, snapshot out.
//!
//! The dispatcher validates the descriptor, picks the adapter from the
//! registry and, for providers with billing, attaches the month's usage.

use cloudboard_core::{AccountDescriptor, AccountSnapshot, CoreError, UsageSummary};
use cloudboard_fetch::{FetchContext, ProviderAdapter};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::error::ResolveError;
use crate::registry::ProviderRegistry;

/// Resolves account descriptors through the provider registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    ctx: Arc<FetchContext>,
}

impl Dispatcher {
    /// Creates a dispatcher sharing `ctx` across every fetch.
    pub fn new(ctx: Arc<FetchContext>) -> Self {
        Self { ctx }
    }

    /// Returns the shared fetch context.
    pub fn context(&self) -> &FetchContext {
        &self.ctx
    }

    /// Fetches the snapshot for one account.
    ///
    /// The token is checked before the provider, and both before any
    /// upstream call.
    #[instrument(skip(self, descriptor), fields(account = %descriptor.name))]
    pub async fn resolve(&self, descriptor: &AccountDescriptor) -> Result<AccountSnapshot, ResolveError> {
        let token = descriptor.require_token()?;
        let provider_id = descriptor.provider_id();
        let provider = ProviderRegistry::get_by_name(&provider_id)
            .ok_or(CoreError::UnsupportedProvider(provider_id))?;

        debug!(provider = %provider.id, "Dispatching");
        self.resolve_with(provider.adapter(), &token).await
    }

    /// Fetches with a given adapter and an already normalized token.
    pub async fn resolve_with(
        &self,
        adapter: &dyn ProviderAdapter,
        token: &str,
    ) -> Result<AccountSnapshot, ResolveError> {
        let mut snapshot = adapter.fetch(&self.ctx, token).await?;

        if adapter.supports_billing() {
            let usage = if snapshot.user.id.is_some() {
                adapter
                    .fetch_usage(&self.ctx, token, &snapshot)
                    .await
                    .unwrap_or_else(|e| {
                        warn!(error = %e, "Usage unavailable, reporting zero usage");
                        UsageSummary::zero()
                    })
            } else {
                UsageSummary::zero()
            };
            snapshot.apply_usage(usage);
        }

        Ok(snapshot)
    }
}

// ============================================================================
// Tests
// ============================================================================
