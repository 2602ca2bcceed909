// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Cloudboard Providers
//!
//! Provider adapters for the Cloudboard dashboard, plus the dispatcher and
//! batch orchestrator that drive them.
//!
//! Each provider module includes:
//!
//! - **Descriptor**: Static configuration (metadata, identifier, aliases)
//! - **Adapter**: The [`cloudboard_fetch::ProviderAdapter`] implementation
//! - **Parser**: Normalization of upstream responses into snapshots
//!
//! ## Supported Providers (6 total)
//!
//! | Provider | Id | Aliases | API | Billing |
//! |----------|----|---------|-----|---------|
//! | Zeabur | `zeabur` | | GraphQL | ✅ Primary |
//! | Vercel | `vercel` | | REST | ❌ |
//! | Hugging Face | `huggingface` | `hugging_face` | REST | ❌ |
//! | Render | `render` | | REST | ❌ |
//! | Railway | `railway` | | GraphQL | ❌ |
//! | ClawCloud | `clawcloud` | `claw` | REST | ❌ |
//!
//! ## Usage
//!
//! ```ignore
//! use cloudboard_providers::{BatchOrchestrator, Dispatcher};
//! use cloudboard_fetch::FetchContext;
//! use std::sync::Arc;
//!
//! let ctx = Arc::new(FetchContext::new()?);
//! let batch = BatchOrchestrator::new(Dispatcher::new(ctx));
//! let results = batch.run_batch(&accounts).await;
//! ```

pub mod batch;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod registry;

// Provider modules (primary first, then alphabetical)
pub mod zeabur;

pub mod clawcloud;
pub mod huggingface;
pub mod railway;
pub mod render;
pub mod vercel;

#[cfg(test)]
mod test_support;

// Re-export key types
pub use batch::BatchOrchestrator;
pub use descriptor::{CliConfig, ProviderDescriptor, ProviderDescriptorBuilder};
pub use dispatch::Dispatcher;
pub use error::ResolveError;
pub use registry::{normalize_provider_id, ProviderRegistry};

// Re-export provider descriptors
pub use clawcloud::clawcloud_descriptor;
pub use huggingface::huggingface_descriptor;
pub use railway::railway_descriptor;
pub use render::render_descriptor;
pub use vercel::vercel_descriptor;
pub use zeabur::zeabur_descriptor;

// Re-export adapters for convenience
pub use clawcloud::ClawCloudAdapter;
pub use huggingface::HuggingFaceAdapter;
pub use railway::RailwayAdapter;
pub use render::RenderAdapter;
pub use vercel::VercelAdapter;
pub use zeabur::ZeaburAdapter;
