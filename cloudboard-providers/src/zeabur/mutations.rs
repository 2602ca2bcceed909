//! Zeabur service and project operations.
//!
//! Identifiers always travel as GraphQL variables.

use chrono::{DateTime, FixedOffset};
use cloudboard_core::{normalize_token, CoreError, ProviderKind};
use cloudboard_fetch::graphql::{self, GraphQlRequest};
use cloudboard_fetch::{FetchContext, FetchError, ProviderContext, ProviderError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{info, instrument};

use super::api::GRAPHQL_ENDPOINT;

/// Default number of log lines kept by [`runtime_logs`].
pub const DEFAULT_LOG_LIMIT: usize = 200;

const SUSPEND_SERVICE: &str = "mutation SuspendService($serviceID: ObjectID!, $environmentID: ObjectID!) {
  suspendService(serviceID: $serviceID, environmentID: $environmentID)
}";

const RESTART_SERVICE: &str = "mutation RestartService($serviceID: ObjectID!, $environmentID: ObjectID!) {
  restartService(serviceID: $serviceID, environmentID: $environmentID)
}";

const RENAME_PROJECT: &str = "mutation RenameProject($projectID: ObjectID!, $name: String!) {
  renameProject(_id: $projectID, name: $name)
}";

const RUNTIME_LOGS: &str = "query RuntimeLogs($projectID: ObjectID!, $serviceID: ObjectID!, $environmentID: ObjectID!) {
  runtimeLogs(projectID: $projectID, serviceID: $serviceID, environmentID: $environmentID) {
    message
    timestamp
  }
}";

// ============================================================================
// Types
// ============================================================================

/// One runtime log line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log message.
    #[serde(default)]
    pub message: String,
    /// RFC 3339 timestamp.
    #[serde(default)]
    pub timestamp: String,
}

impl LogEntry {
    fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }
}

/// The tail of a service's runtime log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeLogs {
    /// Kept entries, oldest first.
    pub logs: Vec<LogEntry>,
    /// Number of kept entries.
    pub count: usize,
    /// Number of entries the provider returned.
    pub total_count: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeLogsData {
    #[serde(default)]
    runtime_logs: Option<Vec<LogEntry>>,
}

// ============================================================================
// Operations
// ============================================================================

/// Pauses a service in an environment.
#[instrument(skip(ctx, token))]
pub async fn suspend_service(
    ctx: &FetchContext,
    token: &str,
    service_id: &str,
    environment_id: &str,
) -> Result<(), ProviderError> {
    let context = "failed to suspend service";
    let token = checked_token(token, context)?;
    let vars = variables(&[("serviceID", service_id), ("environmentID", environment_id)], context)?;
    run_mutation(ctx, &token, SUSPEND_SERVICE, "suspendService", vars, context).await?;
    info!(service_id, "Service suspended");
    Ok(())
}

/// Restarts a service in an environment.
#[instrument(skip(ctx, token))]
pub async fn restart_service(
    ctx: &FetchContext,
    token: &str,
    service_id: &str,
    environment_id: &str,
) -> Result<(), ProviderError> {
    let context = "failed to restart service";
    let token = checked_token(token, context)?;
    let vars = variables(&[("serviceID", service_id), ("environmentID", environment_id)], context)?;
    run_mutation(ctx, &token, RESTART_SERVICE, "restartService", vars, context).await?;
    info!(service_id, "Service restarted");
    Ok(())
}

/// Renames a project.
#[instrument(skip(ctx, token))]
pub async fn rename_project(
    ctx: &FetchContext,
    token: &str,
    project_id: &str,
    new_name: &str,
) -> Result<(), ProviderError> {
    let context = "failed to rename project";
    let token = checked_token(token, context)?;
    let vars = variables(&[("projectID", project_id), ("name", new_name)], context)?;
    run_mutation(ctx, &token, RENAME_PROJECT, "renameProject", vars, context).await?;
    info!(project_id, new_name, "Project renamed");
    Ok(())
}

/// Fetches the last `limit` runtime log entries of a service, oldest first.
///
/// A `limit` of 0 keeps every entry.
#[instrument(skip(ctx, token))]
pub async fn runtime_logs(
    ctx: &FetchContext,
    token: &str,
    project_id: &str,
    service_id: &str,
    environment_id: &str,
    limit: usize,
) -> Result<RuntimeLogs, ProviderError> {
    let context = "failed to fetch runtime logs";
    let token = checked_token(token, context)?;
    let vars = variables(
        &[
            ("projectID", project_id),
            ("serviceID", service_id),
            ("environmentID", environment_id),
        ],
        context,
    )?;

    let request = GraphQlRequest::new(RUNTIME_LOGS).with_variables(vars);
    let data: RuntimeLogsData = graphql::execute(ctx, GRAPHQL_ENDPOINT, &token, &request)
        .await
        .provider_context(ProviderKind::Zeabur, context)?;
    let entries = data.runtime_logs.ok_or_else(|| {
        ProviderError::no_data(ProviderKind::Zeabur, "runtime logs missing from response")
    })?;

    Ok(tail_logs(entries, limit))
}

/// Sorts entries by timestamp and keeps the last `limit` (0 keeps all).
///
/// Unparsable timestamps sort first; ties keep their upstream order.
pub fn tail_logs(mut entries: Vec<LogEntry>, limit: usize) -> RuntimeLogs {
    let total_count = entries.len();
    entries.sort_by_key(LogEntry::parsed_timestamp);

    let skip = if limit == 0 {
        0
    } else {
        total_count.saturating_sub(limit)
    };
    let logs: Vec<LogEntry> = entries.into_iter().skip(skip).collect();

    RuntimeLogs {
        count: logs.len(),
        logs,
        total_count,
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn checked_token(token: &str, context: &str) -> Result<String, ProviderError> {
    let token = normalize_token(token);
    if token.is_empty() {
        return Err(ProviderError::new(
            ProviderKind::Zeabur,
            context,
            FetchError::Core(CoreError::MissingToken),
        ));
    }
    Ok(token)
}

fn variables(pairs: &[(&str, &str)], context: &str) -> Result<Value, ProviderError> {
    let mut map = Map::new();
    for (name, value) in pairs {
        let value = value.trim();
        if value.is_empty() {
            return Err(ProviderError::new(
                ProviderKind::Zeabur,
                context,
                FetchError::InvalidRequest(format!("{name} is required")),
            ));
        }
        map.insert((*name).to_string(), json!(value));
    }
    Ok(Value::Object(map))
}

async fn run_mutation(
    ctx: &FetchContext,
    token: &str,
    document: &str,
    field: &str,
    variables: Value,
    context: &str,
) -> Result<(), ProviderError> {
    let request = GraphQlRequest::new(document).with_variables(variables);
    let data: Value = graphql::execute(ctx, GRAPHQL_ENDPOINT, token, &request)
        .await
        .provider_context(ProviderKind::Zeabur, context)?;

    if data.get(field).and_then(Value::as_bool) == Some(true) {
        Ok(())
    } else {
        Err(ProviderError::new(
            ProviderKind::Zeabur,
            context,
            FetchError::NoData(format!("{field} did not return true")),
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedHttp;
    use cloudboard_core::ErrorKind;

    fn entry(message: &str, timestamp: &str) -> LogEntry {
        LogEntry {
            message: message.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_tail_logs_sorts_and_keeps_last() {
        let entries = vec![
            entry("c", "2024-05-01T10:00:03Z"),
            entry("a", "2024-05-01T10:00:01Z"),
            entry("b", "2024-05-01T12:00:02+02:00"),
            entry("d", "2024-05-01T10:00:04Z"),
        ];
        let logs = tail_logs(entries, 2);
        let messages: Vec<_> = logs.logs.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["c", "d"]);
        assert_eq!(logs.count, 2);
        assert_eq!(logs.total_count, 4);
    }

    #[test]
    fn test_tail_logs_unparsable_first() {
        let entries = vec![
            entry("late", "2024-05-01T10:00:01Z"),
            entry("junk", "yesterday"),
        ];
        let logs = tail_logs(entries, DEFAULT_LOG_LIMIT);
        assert_eq!(logs.logs[0].message, "junk");
        assert_eq!(logs.count, 2);
    }

    #[test]
    fn test_tail_logs_zero_limit_keeps_all() {
        let entries = vec![entry("a", ""), entry("b", "")];
        assert_eq!(tail_logs(entries, 0).count, 2);
    }

    #[tokio::test]
    async fn test_suspend_uses_variables() {
        let (http, ctx) = ScriptedHttp::new()
            .post(GRAPHQL_ENDPOINT, "suspendService", json!({"data": {"suspendService": true}}))
            .into_context();

        suspend_service(&ctx, "Bearer tok", "svc\") { evil }", "env-1")
            .await
            .unwrap();

        let requests = http.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].bearer.as_deref(), Some("tok"));
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["variables"]["serviceID"], "svc\") { evil }");
        assert_eq!(body["variables"]["environmentID"], "env-1");
        assert!(!body["query"].as_str().unwrap().contains("evil"));
    }

    #[tokio::test]
    async fn test_mutation_false_is_upstream_error() {
        let (_, ctx) = ScriptedHttp::new()
            .post(GRAPHQL_ENDPOINT, "restartService", json!({"data": {"restartService": false}}))
            .into_context();

        let err = restart_service(&ctx, "tok", "svc", "env").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
    }

    #[tokio::test]
    async fn test_rename_validates_inputs() {
        let (http, ctx) = ScriptedHttp::new().into_context();

        let err = rename_project(&ctx, "tok", "p1", "  ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = rename_project(&ctx, "   ", "p1", "new").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_rename_project() {
        let (http, ctx) = ScriptedHttp::new()
            .post(GRAPHQL_ENDPOINT, "renameProject", json!({"data": {"renameProject": true}}))
            .into_context();

        rename_project(&ctx, "tok", "p1", "shop \"v2\"").await.unwrap();
        let body = http.requests()[0].body.clone().unwrap();
        assert_eq!(body["variables"]["name"], "shop \"v2\"");
        assert_eq!(body["variables"]["projectID"], "p1");
    }

    #[tokio::test]
    async fn test_runtime_logs() {
        let (_, ctx) = ScriptedHttp::new()
            .post(
                GRAPHQL_ENDPOINT,
                "runtimeLogs",
                json!({"data": {"runtimeLogs": [
                    {"message": "second", "timestamp": "2024-05-01T10:00:02Z"},
                    {"message": "first", "timestamp": "2024-05-01T10:00:01Z"},
                    {"message": "third", "timestamp": "2024-05-01T10:00:03Z"}
                ]}}),
            )
            .into_context();

        let logs = runtime_logs(&ctx, "tok", "p", "s", "e", 2).await.unwrap();
        let messages: Vec<_> = logs.logs.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "third"]);
        assert_eq!(logs.total_count, 3);
    }

    #[tokio::test]
    async fn test_runtime_logs_missing_is_error() {
        let (_, ctx) = ScriptedHttp::new()
            .post(GRAPHQL_ENDPOINT, "runtimeLogs", json!({"data": {"runtimeLogs": null}}))
            .into_context();

        let err = runtime_logs(&ctx, "tok", "p", "s", "e", 10).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
    }
}
