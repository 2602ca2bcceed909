//! Hugging Face response normalization.

use cloudboard_core::normalize::first_string;
use cloudboard_core::{AccountUser, Project, ProjectIdAllocator};
use serde_json::Value;
use std::collections::HashSet;

use super::api::RepoKind;

/// Fields that may carry a repo's name, in preference order.
const BASE_NAME_KEYS: &[&str] = &["id", "name", "repo_id", "repoId", "slug", "full_name", "fullName"];

/// Parses `/whoami-v2` into the account user and its namespaces.
///
/// Namespaces are the user's own handles followed by its organizations,
/// without duplicates.
pub fn parse_whoami(body: &Value) -> (AccountUser, Vec<String>) {
    let user = AccountUser {
        id: first_string(body, &["id", "name"]).map(str::to_string),
        username: first_string(body, &["name"]).map(str::to_string),
        email: first_string(body, &["email"]).map(str::to_string),
    };

    let own = ["name", "user"]
        .into_iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str));
    let orgs = body
        .get("orgs")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|org| match org {
            Value::String(s) => Some(s.as_str()),
            _ => first_string(org, &["name", "orgName", "id"]),
        });

    let mut namespaces: Vec<String> = Vec::new();
    for namespace in own.chain(orgs).filter(|ns| !ns.is_empty()) {
        if !namespaces.iter().any(|n| n == namespace) {
            namespaces.push(namespace.to_string());
        }
    }

    (user, namespaces)
}

/// Builds projects from the listings, in kind order.
///
/// The composite id is `<base>-<kind>`; repos seen twice (e.g. listed
/// under both the user and an organization) are kept once.
pub fn build_projects(listings: Vec<(RepoKind, Vec<Value>)>) -> Vec<Project> {
    let mut ids = ProjectIdAllocator::new();
    let mut seen = HashSet::new();
    let mut projects = Vec::new();

    for (kind, repos) in listings {
        for repo in repos {
            let base = first_string(&repo, BASE_NAME_KEYS);
            let composite = base.map(|b| format!("{b}-{}", kind.label()));
            if let Some(id) = &composite {
                if !seen.insert(id.clone()) {
                    continue;
                }
            }

            let id = ids.assign(composite.as_deref(), &format!("repo-{}", kind.label()));
            let name = base.unwrap_or("Unknown");
            projects.push(Project::new(id, name, region(&repo, kind)));
        }
    }

    projects
}

fn region(repo: &Value, kind: RepoKind) -> String {
    let repo_type = first_string(repo, &["repo_type", "type"])
        .unwrap_or(kind.label())
        .to_lowercase();
    let visibility = if repo.get("private").and_then(Value::as_bool).unwrap_or(false) {
        "Private"
    } else {
        "Public"
    };
    format!("{} · {visibility}", capitalize(&repo_type))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_whoami() {
        let body = json!({
            "id": "u-123",
            "name": "neo",
            "email": "neo@x.io",
            "orgs": [{"name": "acme"}, {"orgName": "labs"}, "bare-org", {"name": "neo"}, {"id": 7}]
        });
        let (user, namespaces) = parse_whoami(&body);
        assert_eq!(user.id.as_deref(), Some("u-123"));
        assert_eq!(user.username.as_deref(), Some("neo"));
        assert_eq!(namespaces, vec!["neo", "acme", "labs", "bare-org"]);
    }

    #[test]
    fn test_parse_whoami_without_namespaces() {
        let (user, namespaces) = parse_whoami(&json!({}));
        assert_eq!(user, AccountUser::default());
        assert!(namespaces.is_empty());
    }

    #[test]
    fn test_build_projects() {
        let listings = vec![
            (
                RepoKind::Model,
                vec![
                    json!({"id": "neo/bert", "private": true}),
                    json!({"id": "neo/bert"}),
                    json!({"modelId": "nameless"}),
                ],
            ),
            (RepoKind::Space, vec![json!({"id": "neo/bert", "type": "SPACE"})]),
        ];
        let projects = build_projects(listings);

        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].id, "neo/bert-model");
        assert_eq!(projects[0].region, "Model · Private");
        assert_eq!(projects[1].id, "repo-model-0");
        assert_eq!(projects[1].name, "Unknown");
        assert_eq!(projects[2].id, "neo/bert-space");
        assert_eq!(projects[2].region, "Space · Public");
    }

    #[test]
    fn test_repo_type_overrides_kind_in_region() {
        let projects = build_projects(vec![(
            RepoKind::Dataset,
            vec![json!({"name": "corpus", "repo_type": "model"})],
        )]);
        assert_eq!(projects[0].id, "corpus-dataset");
        assert_eq!(projects[0].region, "Model · Public");
    }
}
