//! Vercel response normalization.

use cloudboard_core::normalize::{first_string, to_sequence};
use cloudboard_core::{AccountUser, Project, ProjectDomain, ProjectIdAllocator};
use serde_json::Value;
use std::collections::HashMap;

static NULL: Value = Value::Null;

/// Parses `/v2/user` into the account user and its team contexts.
///
/// The contexts are personal (`None`), the default team, then every listed
/// team, without duplicates.
pub fn parse_user(body: &Value) -> (AccountUser, Vec<Option<String>>) {
    let user = match body.get("user") {
        Some(user) if user.is_object() => user,
        _ => body.get("account").filter(|a| a.is_object()).unwrap_or(&NULL),
    };

    let account = AccountUser {
        id: first_string(user, &["id", "uid"]).map(str::to_string),
        username: first_string(user, &["username", "name", "email"]).map(str::to_string),
        email: first_string(user, &["email"]).map(str::to_string),
    };

    let mut contexts: Vec<Option<String>> = vec![None];
    let teams = body
        .get("teams")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|team| first_string(team, &["id"]));
    for team_id in first_string(user, &["defaultTeamId"]).into_iter().chain(teams) {
        let team_id = Some(team_id.to_string());
        if !contexts.contains(&team_id) {
            contexts.push(team_id);
        }
    }

    (account, contexts)
}

/// Parses one projects listing fetched in `team_id`'s context.
pub fn parse_projects(body: &Value, team_id: Option<&str>, ids: &mut ProjectIdAllocator) -> Vec<Project> {
    let list = body.get("projects").map(to_sequence).unwrap_or_default();
    list.iter()
        .map(|project| {
            let name = first_string(project, &["name"]).unwrap_or_default();
            let id = ids.assign(first_string(project, &["id", "projectId", "name"]), "vercel");
            let region = match team_id {
                Some(team) => format!("Team {team}"),
                None => first_string(project, &["teamId"]).unwrap_or("Personal").to_string(),
            };
            let display_name = if name.is_empty() { id.clone() } else { name.to_string() };
            Project::new(id, display_name, region).with_domains(target_domains(project))
        })
        .collect()
}

fn target_domains(project: &Value) -> Vec<ProjectDomain> {
    project
        .get("targets")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|target| {
            let domain = match target {
                Value::String(s) => Some(s.as_str()),
                _ => first_string(target, &["alias", "domain"]).or_else(|| {
                    target
                        .get("alias")
                        .and_then(Value::as_array)
                        .and_then(|aliases| aliases.iter().find_map(Value::as_str))
                }),
            }?;
            Some(ProjectDomain::new(domain, true))
        })
        .collect()
}

/// Projects unioned by id: a later record replaces an earlier one in place.
#[derive(Debug, Default)]
pub struct ProjectUnion {
    projects: Vec<Project>,
    index: HashMap<String, usize>,
}

impl ProjectUnion {
    /// Adds projects, replacing any already present with the same id.
    pub fn extend(&mut self, projects: Vec<Project>) {
        for project in projects {
            match self.index.get(&project.id) {
                Some(&slot) => self.projects[slot] = project,
                None => {
                    self.index.insert(project.id.clone(), self.projects.len());
                    self.projects.push(project);
                }
            }
        }
    }

    /// Returns true when no project was added.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Returns the projects in first-seen order.
    pub fn into_projects(self) -> Vec<Project> {
        self.projects
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
    fn test_parse_user_contexts() {
        let body = json!({
            "user": {"id": "u1", "username": "neo", "email": "neo@x.io", "defaultTeamId": "t1"},
            "teams": [{"id": "t2"}, {"id": "t1"}, {"name": "no-id"}]
        });
        let (user, contexts) = parse_user(&body);
        assert_eq!(user.id.as_deref(), Some("u1"));
        assert_eq!(user.username.as_deref(), Some("neo"));
        assert_eq!(
            contexts,
            vec![None, Some("t1".to_string()), Some("t2".to_string())]
        );
    }

    #[test]
    fn test_parse_user_account_fallback() {
        let body = json!({"account": {"uid": "a1", "email": "only@x.io"}});
        let (user, contexts) = parse_user(&body);
        assert_eq!(user.id.as_deref(), Some("a1"));
        assert_eq!(user.username.as_deref(), Some("only@x.io"));
        assert_eq!(contexts, vec![None]);
    }

    #[test]
    fn test_parse_projects() {
        let body = json!({"projects": [
            {"id": "prj_1", "name": "web", "targets": [{"alias": "web.vercel.app"}, "bare.dev", 42]},
            {"projectId": "prj_2", "name": "api", "teamId": "t9"},
            {"name": "named-only"}
        ]});
        let mut ids = ProjectIdAllocator::new();
        let projects = parse_projects(&body, None, &mut ids);

        assert_eq!(projects[0].id, "prj_1");
        assert_eq!(projects[0].region, "Personal");
        assert_eq!(
            projects[0].domains,
            vec![
                ProjectDomain::new("web.vercel.app", true),
                ProjectDomain::new("bare.dev", true)
            ]
        );
        assert_eq!(projects[1].id, "prj_2");
        assert_eq!(projects[1].region, "t9");
        assert_eq!(projects[2].id, "named-only");
    }

    #[test]
    fn test_team_region() {
        let body = json!({"projects": [{"id": "p", "name": "x", "teamId": "ignored"}]});
        let projects = parse_projects(&body, Some("t1"), &mut ProjectIdAllocator::new());
        assert_eq!(projects[0].region, "Team t1");
    }

    #[test]
    fn test_missing_ids_synthesized() {
        let body = json!({"projects": [{"targets": []}, {}]});
        let projects = parse_projects(&body, None, &mut ProjectIdAllocator::new());
        assert_eq!(projects[0].id, "vercel-0");
        assert_eq!(projects[1].id, "vercel-1");
        assert_eq!(projects[0].name, "vercel-0");
    }

    #[test]
    fn test_union_last_write_wins() {
        let mut union = ProjectUnion::default();
        union.extend(vec![Project::new("a", "first", "Personal"), Project::new("b", "b", "Personal")]);
        union.extend(vec![Project::new("a", "second", "Team t1")]);
        let projects = union.into_projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "second");
        assert_eq!(projects[0].region, "Team t1");
        assert_eq!(projects[1].id, "b");
    }
}
