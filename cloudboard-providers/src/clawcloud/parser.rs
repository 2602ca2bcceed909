//! ClawCloud response normalization.

use cloudboard_core::normalize::{extract, first_string};
use cloudboard_core::{AccountSnapshot, AccountUser, Project, ProjectDomain, ProjectIdAllocator};
use serde_json::Value;

const DEFAULT_USER_ID: &str = "clawcloud";
const DEFAULT_USERNAME: &str = "ClawCloud User";
const DEFAULT_REGION: &str = "Global";

static NULL: Value = Value::Null;

/// Builds the snapshot from the projects listing body.
pub fn build_snapshot(body: &Value) -> AccountSnapshot {
    let mut ids = ProjectIdAllocator::new();
    let projects = extract(body, "projects")
        .iter()
        .map(|item| to_project(item, &mut ids))
        .collect();

    AccountSnapshot::new(parse_owner(body), projects)
}

/// Reads the owner from `owner`, `user` or `account`.
///
/// A bare string is the username. Null, `false` and blank strings are
/// skipped. An empty email is reported as absent.
fn parse_owner(body: &Value) -> AccountUser {
    let owner = ["owner", "user", "account"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find(|v| is_present(v));

    if let Some(Value::String(username)) = owner {
        return AccountUser {
            id: Some(DEFAULT_USER_ID.to_string()),
            username: Some(username.clone()),
            email: None,
        };
    }

    let owner = owner.unwrap_or(&NULL);
    AccountUser {
        id: Some(first_string(owner, &["id", "_id"]).unwrap_or(DEFAULT_USER_ID).to_string()),
        username: Some(
            first_string(owner, &["username", "name"])
                .unwrap_or(DEFAULT_USERNAME)
                .to_string(),
        ),
        email: first_string(owner, &["email"]).map(str::to_string),
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn to_project(item: &Value, ids: &mut ProjectIdAllocator) -> Project {
    let name = first_string(item, &["name"]).unwrap_or_default();
    let id = ids.assign(first_string(item, &["id", "name"]), "clawcloud");
    let region = first_string(item, &["region"]).unwrap_or(DEFAULT_REGION);
    let domains = item
        .get("domains")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|d| match d {
                    Value::String(s) => Some(s.as_str()),
                    other => first_string(other, &["domain", "name"]),
                })
                .map(|d| ProjectDomain::new(d, false))
                .collect()
        })
        .unwrap_or_default();

    Project::new(id, name, region).with_domains(domains)
}

// ============================================================================
// Tests
// ============================================================================
