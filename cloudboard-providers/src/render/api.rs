//! Render REST calls.

use cloudboard_fetch::{ApiRequest, FetchContext, FetchError};
use serde_json::Value;
use tracing::instrument;

/// Render API base URL.
pub const API_BASE: &str = "https://api.render.com/v1";

/// Fetches `GET /owners`.
#[instrument(skip(ctx, token))]
pub async fn fetch_owners(ctx: &FetchContext, token: &str) -> Result<Value, FetchError> {
    get(ctx, token, "owners").await
}

/// Fetches `GET /services`.
#[instrument(skip(ctx, token))]
pub async fn fetch_services(ctx: &FetchContext, token: &str) -> Result<Value, FetchError> {
    get(ctx, token, "services").await
}

async fn get(ctx: &FetchContext, token: &str, path: &str) -> Result<Value, FetchError> {
    let request = ApiRequest::get(format!("{API_BASE}/{path}")).bearer(token);
    ctx.http.send(request).await?.error_for_status()?.json_value()
}
