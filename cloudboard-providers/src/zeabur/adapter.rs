//! Zeabur adapter.

use async_trait::async_trait;
use cloudboard_core::{AccountSnapshot, ProviderKind, UsageSummary};
use cloudboard_fetch::{FetchContext, ProviderAdapter, ProviderContext, ProviderError};
use tracing::{info, instrument, warn};

use super::{api, parser, usage};

/// Adapter for the primary provider: user, projects, AI Hub and billing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeaburAdapter;

impl ZeaburAdapter {
    /// Creates a new adapter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProviderAdapter for ZeaburAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Zeabur
    }

    #[instrument(skip(self, ctx, token))]
    async fn fetch(&self, ctx: &FetchContext, token: &str) -> Result<AccountSnapshot, ProviderError> {
        let (user, projects, aihub) = tokio::join!(
            api::fetch_me(ctx, token),
            api::fetch_projects(ctx, token),
            api::fetch_aihub(ctx, token),
        );

        let user = user.provider_context(self.kind(), "failed to fetch user info")?;
        let projects = projects.provider_context(self.kind(), "failed to fetch projects")?;
        let aihub = aihub.unwrap_or_else(|e| {
            warn!(error = %e, "AI Hub balance unavailable");
            None
        });

        let snapshot = parser::build_snapshot(user, projects, aihub);
        info!(projects = snapshot.project_count(), "Zeabur fetch complete");
        Ok(snapshot)
    }

    fn supports_billing(&self) -> bool {
        true
    }

    #[instrument(skip(self, ctx, token, snapshot))]
    async fn fetch_usage(
        &self,
        ctx: &FetchContext,
        token: &str,
        snapshot: &AccountSnapshot,
    ) -> Result<UsageSummary, ProviderError> {
        let Some(user_id) = snapshot.user.id.as_deref() else {
            return Ok(UsageSummary::zero());
        };
        usage::fetch_usage(ctx, token, user_id)
            .await
            .provider_context(self.kind(), "failed to fetch usage")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Reply, ScriptedHttp};
    use crate::zeabur::api::GRAPHQL_ENDPOINT;
    use cloudboard_core::ErrorKind;
    use cloudboard_fetch::Method;
    use serde_json::json;

    fn me() -> serde_json::Value {
        json!({"data": {"me": {"_id": "u1", "username": "neo", "email": "neo@example.com"}}})
    }

    fn projects() -> serde_json::Value {
        json!({"data": {"projects": {"edges": [
            {"node": {"_id": "p1", "name": "shop", "region": {"name": "Tokyo"}, "services": []}},
            {"node": {"_id": "p2", "name": "blog"}}
        ]}}})
    }

    #[tokio::test]
    async fn test_fetch_snapshot() {
        let (http, ctx) = ScriptedHttp::new()
            .post(GRAPHQL_ENDPOINT, "query Me", me())
            .post(GRAPHQL_ENDPOINT, "query Projects", projects())
            .post(
                GRAPHQL_ENDPOINT,
                "GetAIHubTenant",
                json!({"data": {"aihubTenant": {"balance": 12.5, "keys": [{"keyID": "k1", "alias": "dev", "cost": 0.3}]}}}),
            )
            .into_context();

        let snapshot = ZeaburAdapter.fetch(&ctx, "tok").await.unwrap();
        assert_eq!(snapshot.user.username.as_deref(), Some("neo"));
        assert_eq!(snapshot.projects.len(), 2);
        assert_eq!(snapshot.projects[1].region, "Unknown");
        let aihub = snapshot.aihub.unwrap();
        assert_eq!(aihub.balance, Some(12.5));
        assert_eq!(aihub.keys[0].key_id.as_deref(), Some("k1"));
        assert_eq!(http.requests().len(), 3);
        assert!(http.requests().iter().all(|r| r.bearer.as_deref() == Some("tok")));
    }

    #[tokio::test]
    async fn test_aihub_failure_is_swallowed() {
        let (_, ctx) = ScriptedHttp::new()
            .post(GRAPHQL_ENDPOINT, "query Me", me())
            .post(GRAPHQL_ENDPOINT, "query Projects", projects())
            .reply(Method::Post, GRAPHQL_ENDPOINT, Some("GetAIHubTenant"), Reply::Timeout)
            .into_context();

        let snapshot = ZeaburAdapter.fetch(&ctx, "tok").await.unwrap();
        assert!(snapshot.aihub.is_none());
        assert_eq!(snapshot.projects.len(), 2);
    }

    #[tokio::test]
    async fn test_projects_failure_fails_fetch() {
        let (_, ctx) = ScriptedHttp::new()
            .post(GRAPHQL_ENDPOINT, "query Me", me())
            .post(
                GRAPHQL_ENDPOINT,
                "query Projects",
                json!({"errors": [{"message": "Unauthorized"}]}),
            )
            .into_context();

        let err = ZeaburAdapter.fetch(&ctx, "tok").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert_eq!(
            err.to_string(),
            "Zeabur: failed to fetch projects: GraphQL error: Unauthorized"
        );
    }

    #[tokio::test]
    async fn test_user_timeout_fails_fetch() {
        let (_, ctx) = ScriptedHttp::new()
            .reply(Method::Post, GRAPHQL_ENDPOINT, Some("query Me"), Reply::Timeout)
            .post(GRAPHQL_ENDPOINT, "query Projects", projects())
            .into_context();

        let err = ZeaburAdapter.fetch(&ctx, "tok").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Timeout);
    }

    #[tokio::test]
    async fn test_fetch_usage() {
        let (http, ctx) = ScriptedHttp::new()
            .post(
                GRAPHQL_ENDPOINT,
                "GetHeaderMonthlyUsage",
                json!({"data": {"usages": {"data": [
                    {"id": "p1", "usageOfEntity": [1.0, 0.234]},
                    {"id": "p2", "usageOfEntity": [0.0]}
                ]}}}),
            )
            .into_context();

        let mut snapshot = AccountSnapshot::default();
        snapshot.user.id = Some("u1".into());
        let usage = ZeaburAdapter.fetch_usage(&ctx, "tok", &snapshot).await.unwrap();
        assert_eq!(usage.project_costs["p1"], 1.24);
        assert_eq!(usage.project_costs["p2"], 0.0);

        let body = http.requests()[0].body.clone().unwrap();
        assert_eq!(body["variables"]["userID"], "u1");
        assert_eq!(body["operationName"], "GetHeaderMonthlyUsage");
    }

    #[tokio::test]
    async fn test_fetch_usage_without_user_id() {
        let (http, ctx) = ScriptedHttp::new().into_context();
        let usage = ZeaburAdapter
            .fetch_usage(&ctx, "tok", &AccountSnapshot::default())
            .await
            .unwrap();
        assert_eq!(usage, UsageSummary::zero());
        assert!(http.requests().is_empty());
    }
}
