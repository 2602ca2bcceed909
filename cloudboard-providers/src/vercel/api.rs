//! Vercel REST calls.

use cloudboard_fetch::{ApiRequest, FetchContext, FetchError};
use serde_json::Value;
use tracing::instrument;

/// Vercel API base URL.
pub const API_BASE: &str = "https://api.vercel.com";

/// Page size of the projects listing.
const PROJECTS_LIMIT: u32 = 100;

/// Fetches the authenticated user record.
#[instrument(skip(ctx, token))]
pub async fn fetch_user(ctx: &FetchContext, token: &str) -> Result<Value, FetchError> {
    let request = ApiRequest::get(format!("{API_BASE}/v2/user")).bearer(token);
    ctx.http.send(request).await?.error_for_status()?.json_value()
}

/// Fetches the projects visible in one team context (`None` is personal).
#[instrument(skip(ctx, token))]
pub async fn fetch_projects(
    ctx: &FetchContext,
    token: &str,
    team_id: Option<&str>,
) -> Result<Value, FetchError> {
    let mut url = format!("{API_BASE}/v9/projects?limit={PROJECTS_LIMIT}");
    if let Some(team_id) = team_id {
        url.push_str("&teamId=");
        url.push_str(&url::form_urlencoded::byte_serialize(team_id.as_bytes()).collect::<String>());
    }
    let request = ApiRequest::get(url).bearer(token);
    ctx.http.send(request).await?.error_for_status()?.json_value()
}
