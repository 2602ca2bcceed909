//! ClawCloud REST calls.

use cloudboard_fetch::{ApiRequest, FetchContext, FetchError};
use serde_json::Value;
use tracing::instrument;

/// ClawCloud projects endpoint.
pub const PROJECTS_URL: &str = "https://api.claw.cloud/v1/projects";

/// Fetches the project listing, which also carries the owner.
#[instrument(skip(ctx, token))]
pub async fn fetch_projects(ctx: &FetchContext, token: &str) -> Result<Value, FetchError> {
    let request = ApiRequest::get(PROJECTS_URL).bearer(token);
    ctx.http.send(request).await?.error_for_status()?.json_value()
}
