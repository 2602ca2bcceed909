//! Railway provider implementation.
//!
//! GraphQL API, one viewer query.

mod adapter;
mod api;
mod descriptor;
mod parser;

pub use adapter::RailwayAdapter;
pub use descriptor::railway_descriptor;
