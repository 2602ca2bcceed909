//! JSON output formatting.

use anyhow::Result;
use cloudboard_core::{BatchResult, ErrorKind};
use cloudboard_providers::ProviderDescriptor;
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// One line of the accounts overview.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOutput {
    pub name: String,
    pub provider: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_usage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_quota_remaining: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl From<&BatchResult> for AccountOutput {
    fn from(result: &BatchResult) -> Self {
        let snapshot = result.snapshot();
        let usage = snapshot.and_then(|s| s.usage.as_ref());

        Self {
            name: result.name.clone(),
            provider: result.provider.clone(),
            success: result.success,
            user: snapshot.and_then(|s| s.user.username.clone()),
            email: snapshot.and_then(|s| s.user.email.clone()),
            project_count: snapshot.map(|s| s.project_count()),
            credit: result.credit,
            total_usage: usage.map(|u| u.total_usage),
            free_quota_remaining: usage.map(|u| u.free_quota_remaining),
            error: result.error.clone(),
            error_kind: result.error_kind,
        }
    }
}

/// Provider info output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfoOutput {
    pub id: String,
    pub display_name: String,
    pub aliases: Vec<String>,
    pub is_primary: bool,
    pub supports_billing: bool,
    pub projects_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats the accounts overview.
    pub fn format_accounts(&self, results: &[BatchResult]) -> Result<String> {
        let outputs: Vec<AccountOutput> = results.iter().map(AccountOutput::from).collect();
        self.format(&outputs)
    }

    /// Formats provider list.
    pub fn format_providers(&self, providers: &[ProviderDescriptor]) -> Result<String> {
        let outputs: Vec<ProviderInfoOutput> = providers
            .iter()
            .map(|desc| ProviderInfoOutput {
                id: desc.cli_name().to_string(),
                display_name: desc.display_name().to_string(),
                aliases: desc.cli.aliases.iter().map(ToString::to_string).collect(),
                is_primary: desc.metadata.is_primary_provider,
                supports_billing: desc.metadata.supports_billing,
                projects_label: desc.metadata.projects_label.clone(),
                dashboard_url: desc.metadata.dashboard_url.clone(),
            })
            .collect();

        self.format(&outputs)
    }
}
