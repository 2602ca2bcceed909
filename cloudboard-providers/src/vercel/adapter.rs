//! Vercel adapter.

use async_trait::async_trait;
use cloudboard_core::{AccountSnapshot, ProjectIdAllocator, ProviderKind};
use cloudboard_fetch::{FetchContext, ProviderAdapter, ProviderContext, ProviderError};
use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

use super::api;
use super::parser::{parse_projects, parse_user, ProjectUnion};

/// Adapter for Vercel: the user record, then projects per team context.
///
/// A token can be scoped to a team, so the personal scope alone may list
/// nothing. Every context is queried and the results are unioned by
/// project id, later contexts winning.
#[derive(Debug, Default, Clone, Copy)]
pub struct VercelAdapter;

impl VercelAdapter {
    /// Creates a new adapter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProviderAdapter for VercelAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Vercel
    }

    #[instrument(skip(self, ctx, token))]
    async fn fetch(&self, ctx: &FetchContext, token: &str) -> Result<AccountSnapshot, ProviderError> {
        let body = api::fetch_user(ctx, token)
            .await
            .provider_context(self.kind(), "failed to fetch user info")?;
        let (user, contexts) = parse_user(&body);
        debug!(contexts = contexts.len(), "Querying team contexts");

        let outcomes = join_all(
            contexts
                .iter()
                .map(|team| api::fetch_projects(ctx, token, team.as_deref())),
        )
        .await;

        let mut ids = ProjectIdAllocator::new();
        let mut union = ProjectUnion::default();
        let mut last_error = None;
        for (team, outcome) in contexts.iter().zip(outcomes) {
            match outcome {
                Ok(body) => union.extend(parse_projects(&body, team.as_deref(), &mut ids)),
                Err(e) => {
                    warn!(team = ?team, error = %e, "Projects unavailable for team context");
                    last_error = Some(e);
                }
            }
        }

        if union.is_empty() {
            return Err(match last_error {
                Some(e) => ProviderError::new(self.kind(), "failed to fetch projects", e),
                None => ProviderError::no_data(self.kind(), "no projects returned"),
            });
        }

        let snapshot = AccountSnapshot::new(user, union.into_projects());
        info!(projects = snapshot.project_count(), "Vercel fetch complete");
        Ok(snapshot)
    }
}

// ============================================================================
// Tests
// ============================================================================
