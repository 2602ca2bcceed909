//! Vercel provider implementation.
//!
//! REST API. Projects are listed per team context: personal, the default
//! team and every team the user belongs to.

mod adapter;
mod api;
mod descriptor;
mod parser;

pub use adapter::VercelAdapter;
pub use descriptor::vercel_descriptor;
