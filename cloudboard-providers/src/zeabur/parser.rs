//! Zeabur response normalization.

use cloudboard_core::{
    AccountSnapshot, AccountUser, AiHubTenant, Project, ProjectDomain, ProjectIdAllocator,
    ResourceLimit, Service,
};

use super::api::{ZeaburDomain, ZeaburProject, ZeaburService, ZeaburUser};

/// Region label when the project has none.
const UNKNOWN_REGION: &str = "Unknown";

/// Builds the canonical snapshot from the three query results.
pub fn build_snapshot(
    user: ZeaburUser,
    projects: Vec<ZeaburProject>,
    aihub: Option<AiHubTenant>,
) -> AccountSnapshot {
    let mut ids = ProjectIdAllocator::new();
    let projects = projects
        .into_iter()
        .map(|p| to_project(p, &mut ids))
        .collect();

    let mut snapshot = AccountSnapshot::new(to_user(user), projects);
    snapshot.aihub = aihub;
    snapshot
}

fn to_user(user: ZeaburUser) -> AccountUser {
    AccountUser {
        id: user.id.filter(|id| !id.is_empty()),
        username: user.username,
        email: user.email,
    }
}

fn to_project(project: ZeaburProject, ids: &mut ProjectIdAllocator) -> Project {
    let name = project.name.unwrap_or_default();
    let id = ids.assign(project.id.as_deref(), &name);
    let region = project
        .region
        .and_then(|r| r.name)
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| UNKNOWN_REGION.to_string());

    let services: Vec<Service> = project
        .services
        .unwrap_or_default()
        .into_iter()
        .map(to_service)
        .collect();
    let domains = services
        .iter()
        .flat_map(|s| s.domains.iter().cloned())
        .collect();

    let mut result = Project::new(id, name, region).with_domains(domains);
    result.environments = project
        .environments
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| e.id)
        .collect();
    result.services = services;
    result
}

fn to_service(service: ZeaburService) -> Service {
    Service {
        id: service.id.unwrap_or_default(),
        name: service.name.unwrap_or_default(),
        status: service.status,
        template: service.template,
        resource_limit: service.resource_limit.map(|l| ResourceLimit {
            cpu: l.cpu,
            memory: l.memory,
        }),
        domains: to_domains(service.domains.unwrap_or_default()),
    }
}

fn to_domains(domains: Vec<ZeaburDomain>) -> Vec<ProjectDomain> {
    domains
        .into_iter()
        .filter_map(|d| {
            let domain = d.domain.filter(|d| !d.is_empty())?;
            Some(ProjectDomain::new(domain, d.is_generated.unwrap_or(false)))
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(value: serde_json::Value) -> ZeaburProject {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_project_mapping() {
        let raw = project(json!({
            "_id": "p1",
            "name": "shop",
            "region": {"name": "Tokyo"},
            "environments": [{"_id": "e1"}, {"_id": "e2"}],
            "services": [
                {
                    "_id": "s1",
                    "name": "web",
                    "status": "RUNNING",
                    "resourceLimit": {"cpu": 2, "memory": 2048},
                    "domains": [{"domain": "shop.zeabur.app", "isGenerated": true}]
                },
                {
                    "_id": "s2",
                    "name": "api",
                    "domains": [{"domain": "api.shop.dev", "isGenerated": false}]
                }
            ]
        }));

        let snapshot = build_snapshot(ZeaburUser::default(), vec![raw], None);
        let p = &snapshot.projects[0];
        assert_eq!(p.id, "p1");
        assert_eq!(p.region, "Tokyo");
        assert_eq!(p.environments, vec!["e1", "e2"]);
        assert_eq!(p.services.len(), 2);
        assert_eq!(p.services[0].resource_limit.as_ref().unwrap().cpu, Some(2.0));
        assert_eq!(
            p.domains,
            vec![
                ProjectDomain::new("shop.zeabur.app", true),
                ProjectDomain::new("api.shop.dev", false)
            ]
        );
        assert_eq!(p.cost, 0.0);
        assert!(!p.has_cost_data);
    }

    #[test]
    fn test_missing_region_and_nulls() {
        let raw = project(json!({
            "_id": "p1",
            "name": "bare",
            "region": null,
            "environments": null,
            "services": null
        }));
        let snapshot = build_snapshot(ZeaburUser::default(), vec![raw], None);
        let p = &snapshot.projects[0];
        assert_eq!(p.region, "Unknown");
        assert!(p.services.is_empty());
        assert!(p.domains.is_empty());
    }

    #[test]
    fn test_missing_ids_are_synthesized() {
        let raws = vec![
            project(json!({"name": "alpha"})),
            project(json!({"name": "alpha"})),
            project(json!({})),
        ];
        let snapshot = build_snapshot(ZeaburUser::default(), raws, None);
        let ids: Vec<_> = snapshot.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha-0", "alpha-1", "project-2"]);
    }

    #[test]
    fn test_user_and_aihub() {
        let user: ZeaburUser =
            serde_json::from_value(json!({"_id": "u1", "username": "neo", "email": "n@x.io"}))
                .unwrap();
        let aihub = AiHubTenant {
            balance: Some(3.5),
            keys: Vec::new(),
        };
        let snapshot = build_snapshot(user, Vec::new(), Some(aihub.clone()));
        assert_eq!(snapshot.user.id.as_deref(), Some("u1"));
        assert_eq!(snapshot.aihub, Some(aihub));
        assert!(snapshot.projects.is_empty());
    }
}
