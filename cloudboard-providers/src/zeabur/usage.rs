//! Zeabur monthly usage and cost aggregation.
//!
//! Per-project costs are shown rounded up to the next cent, matching the
//! provider's own dashboard. The account total sums the un-rounded project
//! totals so the remaining free quota stays exact.

use chrono::{Datelike, Local, NaiveDate};
use cloudboard_core::{UsageSummary, FREE_QUOTA_LIMIT};
use cloudboard_fetch::graphql::{self, GraphQlRequest};
use cloudboard_fetch::{FetchContext, FetchError};
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use super::api::GRAPHQL_ENDPOINT;

/// Absorbs binary floating-point noise before rounding up to the cent.
const CEIL_EPSILON: f64 = 1e-9;

const USAGE_QUERY: &str = "query GetHeaderMonthlyUsage($from: String!, $to: String!, $groupByEntity: GroupByEntity, $groupByTime: GroupByTime, $groupByType: GroupByType, $userID: ObjectID!) {
  usages(
    from: $from
    to: $to
    groupByEntity: $groupByEntity
    groupByTime: $groupByTime
    groupByType: $groupByType
    userID: $userID
  ) {
    categories
    data {
      id
      name
      groupByEntity
      usageOfEntity
    }
  }
}";

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct UsageData {
    #[serde(default)]
    usages: Option<Usages>,
}

#[derive(Debug, Default, Deserialize)]
struct Usages {
    #[serde(default)]
    data: Option<Vec<UsageEntry>>,
}

/// Daily usage samples of one project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEntry {
    /// Project id.
    #[serde(default)]
    pub id: Option<String>,
    /// Project name.
    #[serde(default)]
    pub name: Option<String>,
    /// Daily cost samples; null samples count as zero.
    #[serde(default)]
    pub usage_of_entity: Option<Vec<Option<f64>>>,
}

impl UsageEntry {
    /// Creates an entry from samples.
    pub fn new(id: impl Into<String>, samples: &[f64]) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
            usage_of_entity: Some(samples.iter().copied().map(Some).collect()),
        }
    }

    /// Un-rounded total of all samples.
    pub fn total(&self) -> f64 {
        self.usage_of_entity
            .iter()
            .flatten()
            .map(|sample| sample.unwrap_or(0.0))
            .sum()
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Rounds a project total up to the cent; non-positive totals show as 0.
///
/// Any positive total shows as at least one cent.
pub fn display_cost(total: f64) -> f64 {
    if total > 0.0 {
        ((total * 100.0 - CEIL_EPSILON).ceil() / 100.0).max(0.01)
    } else {
        0.0
    }
}

/// Aggregates usage entries into a summary.
pub fn summarize(entries: &[UsageEntry]) -> UsageSummary {
    let mut project_costs = BTreeMap::new();
    let mut total_usage = 0.0;

    for entry in entries {
        let total = entry.total();
        match entry.id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => {
                project_costs.insert(id.to_string(), display_cost(total));
            }
            None => debug!(name = ?entry.name, "Usage entry without project id"),
        }
        total_usage += total;
    }

    UsageSummary {
        project_costs,
        total_usage,
        free_quota_remaining: FREE_QUOTA_LIMIT - total_usage,
        free_quota_limit: FREE_QUOTA_LIMIT,
    }
}

/// Returns `(from, to)`: the first day of `today`'s month and tomorrow.
pub fn billing_window(today: NaiveDate) -> (String, String) {
    let from = today.with_day(1).unwrap_or(today);
    let to = today.succ_opt().unwrap_or(today);
    (
        from.format("%Y-%m-%d").to_string(),
        to.format("%Y-%m-%d").to_string(),
    )
}

/// Builds the monthly usage request for a user.
pub fn usage_request(user_id: &str, today: NaiveDate) -> GraphQlRequest {
    let (from, to) = billing_window(today);
    GraphQlRequest::new(USAGE_QUERY)
        .with_operation_name("GetHeaderMonthlyUsage")
        .with_variables(json!({
            "from": from,
            "to": to,
            "groupByEntity": "PROJECT",
            "groupByTime": "DAY",
            "groupByType": "ALL",
            "userID": user_id,
        }))
}

/// Fetches and aggregates this month's usage for `user_id`.
#[instrument(skip(ctx, token))]
pub async fn fetch_usage(
    ctx: &FetchContext,
    token: &str,
    user_id: &str,
) -> Result<UsageSummary, FetchError> {
    let request = usage_request(user_id, Local::now().date_naive());
    let data: UsageData = graphql::execute(ctx, GRAPHQL_ENDPOINT, token, &request).await?;
    let entries = data.usages.and_then(|u| u.data).unwrap_or_default();

    let summary = summarize(&entries);
    debug!(
        projects = summary.project_costs.len(),
        total = summary.total_usage,
        "Usage aggregated"
    );
    Ok(summary)
}

// ============================================================================
// Tests
// ============================================================================
