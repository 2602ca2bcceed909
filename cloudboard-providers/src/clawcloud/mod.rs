//! ClawCloud provider implementation.

mod adapter;
mod api;
mod descriptor;
mod parser;

pub use adapter::ClawCloudAdapter;
pub use descriptor::clawcloud_descriptor;
