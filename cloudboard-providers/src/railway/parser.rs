//! Railway response normalization.

use cloudboard_core::{AccountSnapshot, AccountUser, Project, ProjectIdAllocator};

use super::api::Viewer;

const REGION: &str = "Railway";

/// Builds the snapshot from the viewer.
pub fn build_snapshot(viewer: Viewer) -> AccountSnapshot {
    let mut ids = ProjectIdAllocator::new();
    let projects = viewer
        .projects
        .and_then(|c| c.edges)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|edge| edge.node)
        .map(|node| {
            let name = node.name.unwrap_or_default();
            let id = ids.assign(node.id.as_deref(), &name);
            Project::new(id, name, REGION)
        })
        .collect();

    let user = AccountUser {
        id: viewer.id,
        username: viewer.username.or_else(|| viewer.email.clone()),
        email: viewer.email,
    };
    AccountSnapshot::new(user, projects)
}

// ============================================================================
// Tests
// ============================================================================
