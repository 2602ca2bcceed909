//! Provider adapter trait and error.
//!
//! An adapter turns one provider's API into a canonical
//! [`AccountSnapshot`]. Each supported provider has exactly one adapter,
//! registered in the provider registry.

use async_trait::async_trait;
use cloudboard_core::{AccountSnapshot, ErrorKind, ProviderKind, UsageSummary};
use thiserror::Error;

use crate::context::FetchContext;
use crate::error::FetchError;

// ============================================================================
// Provider Error
// ============================================================================

/// An upstream failure annotated with the provider and the failing step.
#[derive(Debug, Error)]
#[error("{provider}: {context}: {source}")]
pub struct ProviderError {
    /// Provider whose call failed.
    pub provider: ProviderKind,
    /// What the adapter was doing, e.g. "failed to fetch user info".
    pub context: String,
    /// Underlying fetch error.
    #[source]
    pub source: FetchError,
}

impl ProviderError {
    /// Creates a new provider error.
    pub fn new(provider: ProviderKind, context: impl Into<String>, source: FetchError) -> Self {
        Self {
            provider,
            context: context.into(),
            source,
        }
    }

    /// Shorthand for a [`FetchError::NoData`] failure.
    pub fn no_data(provider: ProviderKind, context: impl Into<String>) -> Self {
        let context = context.into();
        Self::new(provider, context.clone(), FetchError::NoData(context))
    }

    /// Returns the taxonomy kind of the underlying failure.
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

/// Attaches provider context to fetch results.
pub trait ProviderContext<T> {
    /// Wraps an error into a [`ProviderError`].
    fn provider_context(
        self,
        provider: ProviderKind,
        context: &str,
    ) -> Result<T, ProviderError>;
}

impl<T> ProviderContext<T> for Result<T, FetchError> {
    fn provider_context(
        self,
        provider: ProviderKind,
        context: &str,
    ) -> Result<T, ProviderError> {
        self.map_err(|source| ProviderError::new(provider, context, source))
    }
}

// ============================================================================
// Provider Adapter Trait
// ============================================================================

/// Fetches a canonical snapshot for one provider.
///
/// ## Implementing an Adapter
///
/// ```ignore
/// struct ExampleAdapter;
///
/// #[async_trait]
/// impl ProviderAdapter for ExampleAdapter {
///     fn kind(&self) -> ProviderKind {
///         ProviderKind::Railway
///     }
///
///     async fn fetch(
///         &self,
///         ctx: &FetchContext,
///         token: &str,
///     ) -> Result<AccountSnapshot, ProviderError> {
///         let data: Value = graphql::execute(ctx, ENDPOINT, token, &request)
///             .await
///             .provider_context(self.kind(), "failed to fetch projects")?;
///         Ok(parse_snapshot(&data))
///     }
/// }
/// ```
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// The provider this adapter serves.
    fn kind(&self) -> ProviderKind;

    /// Fetches user identity and projects.
    async fn fetch(&self, ctx: &FetchContext, token: &str)
    -> Result<AccountSnapshot, ProviderError>;

    /// Whether [`ProviderAdapter::fetch_usage`] talks to a billing API.
    fn supports_billing(&self) -> bool {
        false
    }

    /// Fetches the usage summary for an already fetched snapshot.
    ///
    /// Adapters without billing return an all-zero summary.
    async fn fetch_usage(
        &self,
        ctx: &FetchContext,
        token: &str,
        snapshot: &AccountSnapshot,
    ) -> Result<UsageSummary, ProviderError> {
        let _ = (ctx, token, snapshot);
        Ok(UsageSummary::zero())
    }
}

// ============================================================================
// Tests
// ============================================================================
