//! Zeabur GraphQL documents and response types.

use cloudboard_core::AiHubTenant;
use cloudboard_fetch::graphql::{self, GraphQlRequest};
use cloudboard_fetch::{FetchContext, FetchError};
use serde::Deserialize;
use tracing::instrument;

// ============================================================================
// Constants
// ============================================================================

/// Zeabur GraphQL endpoint.
pub const GRAPHQL_ENDPOINT: &str = "https://api.zeabur.com/graphql";

const ME_QUERY: &str = "query Me {
  me {
    _id
    username
    email
  }
}";

const PROJECTS_QUERY: &str = "query Projects {
  projects {
    edges {
      node {
        _id
        name
        region {
          name
        }
        environments {
          _id
        }
        services {
          _id
          name
          status
          template
          resourceLimit {
            cpu
            memory
          }
          domains {
            domain
            isGenerated
          }
        }
      }
    }
  }
}";

const AIHUB_QUERY: &str = "query GetAIHubTenant {
  aihubTenant {
    balance
    keys {
      keyID
      alias
      cost
    }
  }
}";

// ============================================================================
// Response Types
// ============================================================================

/// `data` of the `me` query.
#[derive(Debug, Default, Deserialize)]
pub struct MeData {
    #[serde(default)]
    pub me: Option<ZeaburUser>,
}

/// The authenticated user.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ZeaburUser {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `data` of the `projects` query.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsData {
    #[serde(default)]
    pub projects: Option<Connection<ZeaburProject>>,
}

/// A GraphQL connection.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Option::default")]
    pub edges: Option<Vec<Edge<T>>>,
}

/// A GraphQL connection edge.
#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    #[serde(default = "Option::default")]
    pub node: Option<T>,
}

/// A project node.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ZeaburProject {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<ZeaburRegion>,
    #[serde(default)]
    pub environments: Option<Vec<ZeaburEnvironment>>,
    #[serde(default)]
    pub services: Option<Vec<ZeaburService>>,
}

/// A project region.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ZeaburRegion {
    #[serde(default)]
    pub name: Option<String>,
}

/// A project environment.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ZeaburEnvironment {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}

/// A service node.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeaburService {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub resource_limit: Option<ZeaburResourceLimit>,
    #[serde(default)]
    pub domains: Option<Vec<ZeaburDomain>>,
}

/// Service resource limits.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ZeaburResourceLimit {
    #[serde(default)]
    pub cpu: Option<f64>,
    #[serde(default)]
    pub memory: Option<f64>,
}

/// A service domain.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeaburDomain {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub is_generated: Option<bool>,
}

/// `data` of the AI Hub query.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiHubData {
    #[serde(default)]
    pub aihub_tenant: Option<AiHubTenant>,
}

// ============================================================================
// Calls
// ============================================================================

/// Fetches the authenticated user.
#[instrument(skip(ctx, token))]
pub async fn fetch_me(ctx: &FetchContext, token: &str) -> Result<ZeaburUser, FetchError> {
    let data: MeData = graphql::execute(ctx, GRAPHQL_ENDPOINT, token, &GraphQlRequest::new(ME_QUERY)).await?;
    Ok(data.me.unwrap_or_default())
}

/// Fetches all projects visible to the token.
#[instrument(skip(ctx, token))]
pub async fn fetch_projects(
    ctx: &FetchContext,
    token: &str,
) -> Result<Vec<ZeaburProject>, FetchError> {
    let data: ProjectsData =
        graphql::execute(ctx, GRAPHQL_ENDPOINT, token, &GraphQlRequest::new(PROJECTS_QUERY)).await?;
    Ok(data
        .projects
        .and_then(|c| c.edges)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| e.node)
        .collect())
}

/// Fetches the AI Hub tenant, if the account has one.
#[instrument(skip(ctx, token))]
pub async fn fetch_aihub(ctx: &FetchContext, token: &str) -> Result<Option<AiHubTenant>, FetchError> {
    let request = GraphQlRequest::new(AIHUB_QUERY).with_operation_name("GetAIHubTenant");
    let data: AiHubData = graphql::execute(ctx, GRAPHQL_ENDPOINT, token, &request).await?;
    Ok(data.aihub_tenant)
}
