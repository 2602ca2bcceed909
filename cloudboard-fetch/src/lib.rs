// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Cloudboard Fetch
//!
//! Upstream transport for Cloudboard provider adapters.
//!
//! ## Host APIs
//!
//! The [`host`] module abstracts the network:
//!
//! - [`host::http`] - One bounded HTTP call per [`HttpApi::send`]
//!
//! ## Adapters
//!
//! - [`adapter::ProviderAdapter`] - Trait every provider implements
//! - [`context::FetchContext`] - Shared access to host APIs and settings
//! - [`graphql`] - GraphQL envelope handling with variables
//! - [`combine`] - Merging one call made across team/namespace contexts
//!
//! ## Example
//!
//! ```ignore
//! use cloudboard_fetch::{FetchContext, ProviderAdapter};
//!
//! let ctx = FetchContext::new()?;
//! let snapshot = adapter.fetch(&ctx, &token).await?;
//! ```

// Core modules
pub mod adapter;
pub mod combine;
pub mod context;
pub mod error;
pub mod graphql;
pub mod host;

// Re-export key types at crate root

// Errors
pub use error::FetchError;

// Host APIs
pub use host::{truncate_reason, ApiRequest, ApiResponse, HttpApi, HttpClient, Method};

// Adapter & context
pub use adapter::{ProviderAdapter, ProviderContext, ProviderError};
pub use combine::{collect_alternatives, combine_reasons, Alternatives};
pub use context::{FetchContext, FetchContextBuilder, FetchSettings};
pub use graphql::GraphQlRequest;
