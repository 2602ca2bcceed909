//! Render response normalization.
//!
//! List endpoints return cursor pages of `{cursor, owner: {...}}` or
//! `{cursor, service: {...}}`; bare objects are accepted as well.

use cloudboard_core::normalize::{first_string, to_sequence};
use cloudboard_core::{AccountUser, Project, ProjectDomain, ProjectIdAllocator};
use serde_json::Value;

const DEFAULT_USER_ID: &str = "render";
const DEFAULT_USERNAME: &str = "Render User";
const DEFAULT_REGION: &str = "Global";

/// Returns the item itself, or its `wrapper` property when present.
fn unwrap_cursor<'a>(item: &'a Value, wrapper: &str) -> &'a Value {
    match item.get(wrapper) {
        Some(inner) if inner.is_object() => inner,
        _ => item,
    }
}

/// Parses the owner list into the account user.
///
/// The owner is the first list element, or the body itself when it is a
/// single object.
pub fn parse_owner(body: &Value) -> AccountUser {
    let owner = match body {
        Value::Array(items) => items.first().cloned().unwrap_or(Value::Null),
        other => other.clone(),
    };
    let owner = unwrap_cursor(&owner, "owner");

    let email = first_string(owner, &["email"]).map(str::to_string);
    AccountUser {
        id: Some(first_string(owner, &["id"]).unwrap_or(DEFAULT_USER_ID).to_string()),
        username: Some(
            first_string(owner, &["name", "email"])
                .unwrap_or(DEFAULT_USERNAME)
                .to_string(),
        ),
        email,
    }
}

/// Parses the service list into projects, one per service.
pub fn parse_services(body: &Value) -> Vec<Project> {
    let mut ids = ProjectIdAllocator::new();
    to_sequence(body)
        .iter()
        .map(|item| {
            let service = unwrap_cursor(item, "service");
            let name = first_string(service, &["name"]).unwrap_or_default();
            let id = ids.assign(first_string(service, &["id"]), name);
            let details = service.get("serviceDetails");
            let region = details
                .and_then(|d| first_string(d, &["region"]))
                .unwrap_or(DEFAULT_REGION);
            let domains = details
                .and_then(|d| d.get("customDomains"))
                .and_then(Value::as_array)
                .map(|list| list.iter().filter_map(custom_domain).collect())
                .unwrap_or_default();

            Project::new(id, name, region).with_domains(domains)
        })
        .collect()
}

fn custom_domain(entry: &Value) -> Option<ProjectDomain> {
    let name = match entry {
        Value::String(s) => Some(s.as_str()),
        other => first_string(other, &["name"]),
    }?;
    Some(ProjectDomain::new(name, false))
}

// ============================================================================
// Tests
// ============================================================================
