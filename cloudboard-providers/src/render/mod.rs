//! Render provider implementation.
//!
//! REST API. Each service is reported as a project.

mod adapter;
mod api;
mod descriptor;
mod parser;

pub use adapter::RenderAdapter;
pub use descriptor::render_descriptor;
