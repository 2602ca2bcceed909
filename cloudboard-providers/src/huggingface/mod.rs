//! Hugging Face provider implementation.
//!
//! Hub REST API. Models, spaces and datasets are reported as projects, one
//! per repository, across the user's own and organization namespaces.

mod adapter;
mod api;
mod descriptor;
mod parser;

pub use adapter::HuggingFaceAdapter;
pub use api::{RepoKind, MAX_PAGES, PAGE_SIZE};
pub use descriptor::huggingface_descriptor;
