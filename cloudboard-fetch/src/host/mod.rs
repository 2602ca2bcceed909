//! Host APIs for Cloudboard provider adapters.
//!
//! - [`http`] - Bounded HTTP calls behind the [`HttpApi`] trait

pub mod http;

// Re-export key types
pub use http::{truncate_reason, ApiRequest, ApiResponse, HttpApi, HttpClient, Method};
