//! Railway GraphQL document and response types.

use cloudboard_fetch::graphql::{self, GraphQlRequest};
use cloudboard_fetch::{FetchContext, FetchError};
use serde::Deserialize;
use tracing::instrument;

/// Railway GraphQL endpoint.
pub const GRAPHQL_ENDPOINT: &str = "https://backboard.railway.app/graphql/v2";

const VIEWER_QUERY: &str = "query Viewer {
  viewer {
    id
    email
    username
    projects {
      edges {
        node { id name }
      }
    }
  }
}";

/// `data` of the viewer query; some schemas expose `me` instead.
#[derive(Debug, Default, Deserialize)]
pub struct ViewerData {
    #[serde(default)]
    pub viewer: Option<Viewer>,
    #[serde(default)]
    pub me: Option<Viewer>,
}

/// The authenticated user with its projects.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Viewer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub projects: Option<ProjectConnection>,
}

/// `projects` connection.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProjectConnection {
    #[serde(default)]
    pub edges: Option<Vec<ProjectEdge>>,
}

/// One connection edge.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProjectEdge {
    #[serde(default)]
    pub node: Option<ProjectNode>,
}

/// A project node.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProjectNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Runs the viewer query.
#[instrument(skip(ctx, token))]
pub async fn fetch_viewer(ctx: &FetchContext, token: &str) -> Result<Viewer, FetchError> {
    let request = GraphQlRequest::new(VIEWER_QUERY).with_operation_name("Viewer");
    let data: ViewerData = graphql::execute(ctx, GRAPHQL_ENDPOINT, token, &request).await?;
    Ok(data.viewer.or(data.me).unwrap_or_default())
}
