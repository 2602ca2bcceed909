// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `Cloudboard` Core
//!
//! Core types, models, and normalization helpers for `Cloudboard`.
//!
//! This crate provides the foundational abstractions used across all other
//! `Cloudboard` crates, including:
//!
//! - Domain models (account descriptors, snapshots, projects, usage)
//! - The error taxonomy shared by every layer
//! - Response normalization for inconsistently shaped JSON
//!
//! ## Key Types
//!
//! ### Input
//! - [`AccountDescriptor`] - `{name, token, provider}` for one account
//! - [`ProviderKind`] - Enum of all supported cloud providers
//!
//! ### Output
//! - [`AccountSnapshot`] - Canonical `{user, projects, usage?, aihub?}`
//! - [`Project`] - Canonical project record
//! - [`UsageSummary`] - Per-project and total cost (primary provider only)
//! - [`BatchResult`] - One account's outcome in a batch
//!
//! ### Errors
//! - [`ErrorKind`] - Validation / Timeout / Transport / Upstream / Parse / UnsupportedProvider
//! - [`CoreError`] - Descriptor-level failures

pub mod error;
pub mod models;
pub mod normalize;

// Re-export error types
pub use error::{CoreError, ErrorKind};

// Re-export all model types
pub use models::{
    // Input
    normalize_token,
    AccountDescriptor,
    ProviderKind,
    ProviderMetadata,
    // Snapshot
    AccountSnapshot,
    AccountUser,
    AiHubKey,
    AiHubTenant,
    Project,
    ProjectDomain,
    ProjectIdAllocator,
    ResourceLimit,
    Service,
    // Usage & batch
    BatchResult,
    UsageSummary,
    FREE_QUOTA_LIMIT,
};
