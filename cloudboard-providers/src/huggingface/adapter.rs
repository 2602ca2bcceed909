//! Hugging Face adapter.

use async_trait::async_trait;
use cloudboard_core::{AccountSnapshot, ProviderKind};
use cloudboard_fetch::{
    collect_alternatives, FetchContext, ProviderAdapter, ProviderContext, ProviderError,
};
use futures::future::join_all;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::api::{self, RepoKind};
use super::parser::{build_projects, parse_whoami};

/// Adapter for Hugging Face: identity, then repo listings as projects.
///
/// Models, spaces and datasets are listed for every namespace the user can
/// see. A listing kind fails the fetch only when it failed in every
/// namespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct HuggingFaceAdapter;

impl HuggingFaceAdapter {
    /// Creates a new adapter.
    pub fn new() -> Self {
        Self
    }

    async fn list_kind(
        &self,
        ctx: &FetchContext,
        token: &str,
        kind: RepoKind,
        namespaces: &[Option<&str>],
    ) -> Result<Vec<Value>, ProviderError> {
        let outcomes = join_all(
            namespaces
                .iter()
                .map(|namespace| api::list_repos(ctx, token, kind, *namespace)),
        )
        .await;

        let alternatives = collect_alternatives(kind.path(), outcomes)
            .provider_context(self.kind(), &format!("failed to fetch {} list", kind.label()))?;
        Ok(alternatives.succeeded.into_iter().flatten().collect())
    }
}

#[async_trait]
impl ProviderAdapter for HuggingFaceAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::HuggingFace
    }

    #[instrument(skip(self, ctx, token))]
    async fn fetch(&self, ctx: &FetchContext, token: &str) -> Result<AccountSnapshot, ProviderError> {
        let body = api::whoami(ctx, token)
            .await
            .provider_context(self.kind(), "failed to fetch user info")?;
        let (user, namespaces) = parse_whoami(&body);

        // Without a namespace, list unscoped; private repos may be missing.
        let scopes: Vec<Option<&str>> = if namespaces.is_empty() {
            vec![None]
        } else {
            namespaces.iter().map(|ns| Some(ns.as_str())).collect()
        };
        debug!(namespaces = scopes.len(), "Listing repositories");

        let listings = join_all(
            RepoKind::ALL
                .iter()
                .map(|kind| self.list_kind(ctx, token, *kind, &scopes)),
        )
        .await;

        let mut by_kind = Vec::with_capacity(RepoKind::ALL.len());
        for (kind, listing) in RepoKind::ALL.into_iter().zip(listings) {
            by_kind.push((kind, listing?));
        }

        let snapshot = AccountSnapshot::new(user, build_projects(by_kind));
        info!(projects = snapshot.project_count(), "Hugging Face fetch complete");
        Ok(snapshot)
    }
}

// ============================================================================
// Tests
// ============================================================================
