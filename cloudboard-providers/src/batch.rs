//! Batch orchestration over many accounts.

use cloudboard_core::{AccountDescriptor, BatchResult, ProviderKind, UsageSummary};
use futures::future::join_all;
use tracing::{debug, error, info, instrument};

use crate::dispatch::Dispatcher;
use crate::registry::ProviderRegistry;

/// Runs one fetch per account and reports every outcome.
#[derive(Debug, Clone)]
pub struct BatchOrchestrator {
    dispatcher: Dispatcher,
}

impl BatchOrchestrator {
    /// Creates an orchestrator over `dispatcher`.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Returns the underlying dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Resolves every descriptor concurrently.
    ///
    /// Returns one result per descriptor, in input order. A failing account
    /// never affects the others.
    #[instrument(skip(self, descriptors), fields(accounts = descriptors.len()))]
    pub async fn run_batch(&self, descriptors: &[AccountDescriptor]) -> Vec<BatchResult> {
        let results = join_all(descriptors.iter().map(|d| self.run_one(d))).await;

        let succeeded = results.iter().filter(|r| r.success).count();
        info!(succeeded, failed = results.len() - succeeded, "Batch complete");
        results
    }

    async fn run_one(&self, descriptor: &AccountDescriptor) -> BatchResult {
        let provider = ProviderRegistry::canonical_id(&descriptor.provider_id());

        match self.dispatcher.resolve(descriptor).await {
            Ok(snapshot) => {
                debug!(
                    account = %descriptor.name,
                    provider = %provider,
                    projects = snapshot.project_count(),
                    "Account fetched"
                );
                let credit = if provider == ProviderKind::default().cli_name() {
                    snapshot
                        .usage
                        .as_ref()
                        .map_or_else(|| UsageSummary::zero().credit_cents(), UsageSummary::credit_cents)
                } else {
                    0
                };
                BatchResult::success(&descriptor.name, provider, snapshot, credit)
            }
            Err(e) => {
                error!(
                    account = %descriptor.name,
                    provider = %provider,
                    error = %e,
                    "Account fetch failed"
                );
                BatchResult::failure(&descriptor.name, provider, e.to_string(), e.kind())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
