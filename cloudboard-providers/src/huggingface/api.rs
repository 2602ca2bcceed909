//! Hugging Face Hub REST calls.

use cloudboard_core::normalize::extract;
use cloudboard_fetch::{ApiRequest, FetchContext, FetchError};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

/// Hugging Face API base URL.
pub const API_BASE: &str = "https://huggingface.co/api";

/// Items requested per listing page.
pub const PAGE_SIZE: usize = 100;

/// Maximum pages fetched per kind and namespace.
pub const MAX_PAGES: usize = 5;

/// A repository listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoKind {
    /// `/api/models`
    Model,
    /// `/api/spaces`
    Space,
    /// `/api/datasets`
    Dataset,
}

impl RepoKind {
    /// All listings, in fetch order.
    pub const ALL: [RepoKind; 3] = [Self::Model, Self::Space, Self::Dataset];

    /// Listing path and response key.
    pub fn path(self) -> &'static str {
        match self {
            Self::Model => "models",
            Self::Space => "spaces",
            Self::Dataset => "datasets",
        }
    }

    /// Singular label used in ids and regions.
    pub fn label(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Space => "space",
            Self::Dataset => "dataset",
        }
    }
}

/// Fetches the authenticated identity.
#[instrument(skip(ctx, token))]
pub async fn whoami(ctx: &FetchContext, token: &str) -> Result<Value, FetchError> {
    let request = ApiRequest::get(format!("{API_BASE}/whoami-v2")).bearer(token);
    ctx.http.send(request).await?.error_for_status()?.json_value()
}

/// Builds the listing URL for one page.
pub fn listing_url(kind: RepoKind, namespace: Option<&str>, offset: usize) -> Result<String, FetchError> {
    let mut url = Url::parse(&format!("{API_BASE}/{}", kind.path()))
        .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("limit", &PAGE_SIZE.to_string());
        query.append_pair("full", "1");
        if let Some(namespace) = namespace {
            query.append_pair("author", namespace);
        }
        query.append_pair("offset", &offset.to_string());
    }
    Ok(url.into())
}

/// Lists every repo of `kind` in `namespace`, page by page.
///
/// Stops at the first short page or after [`MAX_PAGES`] pages.
#[instrument(skip(ctx, token))]
pub async fn list_repos(
    ctx: &FetchContext,
    token: &str,
    kind: RepoKind,
    namespace: Option<&str>,
) -> Result<Vec<Value>, FetchError> {
    let mut collected = Vec::new();

    for page in 0..MAX_PAGES {
        let url = listing_url(kind, namespace, page * PAGE_SIZE)?;
        let body = ctx
            .http
            .send(ApiRequest::get(url).bearer(token))
            .await?
            .error_for_status()?
            .json_value()?;
        let items = extract(&body, kind.path());
        let len = items.len();
        collected.extend(items);

        if len < PAGE_SIZE {
            break;
        }
    }

    debug!(count = collected.len(), "Listing complete");
    Ok(collected)
}
