//! Canonical account snapshot types.
//!
//! Every provider adapter translates its native schema into these types:
//! - [`AccountSnapshot`] - The unified result of one account fetch
//! - [`AccountUser`] - Account identity
//! - [`Project`] - A project/service/repository, with domains and cost
//! - [`AiHubTenant`] - Secondary balance structure (primary provider only)

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use super::usage::UsageSummary;

// ============================================================================
// Account User
// ============================================================================

/// Account identity. Fields a provider doesn't expose stay absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUser {
    /// Provider-side user id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Username or display handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Account email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AccountUser {
    /// Returns a display string for this user.
    pub fn display_string(&self) -> String {
        match (&self.username, &self.email) {
            (Some(name), Some(email)) if name != email => format!("{name} ({email})"),
            (Some(name), _) => name.clone(),
            (None, Some(email)) => email.clone(),
            (None, None) => self.id.clone().unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

// ============================================================================
// Project
// ============================================================================

/// A domain attached to a project or service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDomain {
    /// Host name.
    pub domain: String,
    /// Whether the provider generated the domain (vs. a custom domain).
    #[serde(default)]
    pub is_generated: bool,
}

impl ProjectDomain {
    /// Creates a new domain record.
    pub fn new(domain: impl Into<String>, is_generated: bool) -> Self {
        Self {
            domain: domain.into(),
            is_generated,
        }
    }
}

/// Resource limits of a service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceLimit {
    /// CPU limit in cores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    /// Memory limit in MiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<f64>,
}

/// A service inside a project (primary provider only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Service id.
    pub id: String,
    /// Service name.
    pub name: String,
    /// Runtime status (e.g. "RUNNING", "SUSPENDED").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Template the service was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Resource limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_limit: Option<ResourceLimit>,
    /// Domains bound to this service.
    #[serde(default)]
    pub domains: Vec<ProjectDomain>,
}

/// A project record in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Non-empty id, unique within one fetch.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Region (or another grouping label for providers without regions).
    pub region: String,
    /// Environment ids.
    #[serde(default)]
    pub environments: Vec<String>,
    /// Services.
    #[serde(default)]
    pub services: Vec<Service>,
    /// Domains.
    #[serde(default)]
    pub domains: Vec<ProjectDomain>,
    /// Displayed cost for the current billing window.
    #[serde(default)]
    pub cost: f64,
    /// Whether `cost` came from the provider's billing data.
    #[serde(default)]
    pub has_cost_data: bool,
}

impl Project {
    /// Creates a project with no services, domains or cost.
    pub fn new(id: impl Into<String>, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region: region.into(),
            environments: Vec::new(),
            services: Vec::new(),
            domains: Vec::new(),
            cost: 0.0,
            has_cost_data: false,
        }
    }

    /// Sets the project domains.
    pub fn with_domains(mut self, domains: Vec<ProjectDomain>) -> Self {
        self.domains = domains;
        self
    }

    /// Applies the billing cost for this project, if any.
    pub fn apply_cost(&mut self, project_costs: &BTreeMap<String, f64>) {
        let cost = project_costs.get(&self.id).copied().unwrap_or(0.0);
        self.cost = cost;
        self.has_cost_data = cost != 0.0;
    }
}

// ============================================================================
// Project Id Allocation
// ============================================================================

/// Hands out project ids that are unique within one fetch.
///
/// Upstream ids are passed through unless they collide with an id already
/// synthesized, in which case they get a `-<n>` suffix. The same upstream id
/// always maps to the same result, so a project listed twice stays one
/// project. When the provider supplies none, an id is synthesized as
/// `<basis>-<n>` from the available fields; `n` increments per allocation,
/// so the result only depends on input order.
#[derive(Debug, Default)]
pub struct ProjectIdAllocator {
    issued: HashSet<String>,
    upstream: HashMap<String, String>,
    counter: usize,
}

impl ProjectIdAllocator {
    /// Creates an empty allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `candidate` when non-empty and free, otherwise a unique id.
    pub fn assign(&mut self, candidate: Option<&str>, basis: &str) -> String {
        if let Some(id) = candidate.map(str::trim).filter(|id| !id.is_empty()) {
            return self.assign_upstream(id);
        }

        let basis = match basis.trim() {
            "" => "project",
            trimmed => trimmed,
        };

        loop {
            let id = format!("{basis}-{}", self.counter);
            self.counter += 1;
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    fn assign_upstream(&mut self, id: &str) -> String {
        if let Some(existing) = self.upstream.get(id) {
            return existing.clone();
        }

        let mut assigned = id.to_string();
        let mut suffix = 1;
        while !self.issued.insert(assigned.clone()) {
            assigned = format!("{id}-{suffix}");
            suffix += 1;
        }

        self.upstream.insert(id.to_string(), assigned.clone());
        assigned
    }
}

// ============================================================================
// AI Hub
// ============================================================================

/// An API key on the AI Hub tenant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiHubKey {
    /// Key id.
    #[serde(rename = "keyID", default)]
    pub key_id: Option<String>,
    /// User-chosen alias.
    #[serde(default)]
    pub alias: Option<String>,
    /// Accumulated cost of this key.
    #[serde(default)]
    pub cost: Option<f64>,
}

/// Account-level AI Hub balance and keys (primary provider only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiHubTenant {
    /// Remaining balance.
    #[serde(default)]
    pub balance: Option<f64>,
    /// Keys on the tenant.
    #[serde(default)]
    pub keys: Vec<AiHubKey>,
}

// ============================================================================
// Account Snapshot
// ============================================================================

/// The unified `{user, projects, usage?, aihub?}` result of one account fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Account identity.
    pub user: AccountUser,
    /// Projects in provider order.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Usage/cost summary (primary provider only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageSummary>,
    /// AI Hub tenant (primary provider only, best effort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aihub: Option<AiHubTenant>,
}

impl AccountSnapshot {
    /// Creates a snapshot with no usage or AI Hub data.
    pub fn new(user: AccountUser, projects: Vec<Project>) -> Self {
        Self {
            user,
            projects,
            usage: None,
            aihub: None,
        }
    }

    /// Attaches a usage summary and applies its per-project costs.
    pub fn apply_usage(&mut self, usage: UsageSummary) {
        for project in &mut self.projects {
            project.apply_cost(&usage.project_costs);
        }
        self.usage = Some(usage);
    }

    /// Returns the number of projects.
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
