//! Domain models for Cloudboard.
//!
//! ## Submodules
//!
//! - [`provider`] - Provider types (ProviderKind, ProviderMetadata)
//! - [`account`] - Account descriptors and token normalization
//! - [`snapshot`] - The canonical account snapshot (user, projects, AI Hub)
//! - [`usage`] - Usage/cost summary
//! - [`batch`] - Per-account batch results

mod account;
mod batch;
mod provider;
mod snapshot;
mod usage;

pub use account::{normalize_token, AccountDescriptor};
pub use batch::BatchResult;
pub use provider::{ProviderKind, ProviderMetadata};
pub use snapshot::{
    AccountSnapshot, AccountUser, AiHubKey, AiHubTenant, Project, ProjectDomain,
    ProjectIdAllocator, ResourceLimit, Service,
};
pub use usage::{UsageSummary, FREE_QUOTA_LIMIT};
