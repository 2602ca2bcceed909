//! Zeabur provider implementation.
//!
//! Zeabur is the primary provider. It speaks GraphQL and is the only one
//! with billing data: a monthly usage breakdown per project and an AI Hub
//! balance. It also exposes service and project operations.

mod adapter;
mod api;
mod descriptor;
pub mod mutations;
mod parser;
pub mod usage;

pub use adapter::ZeaburAdapter;
pub use api::GRAPHQL_ENDPOINT;
pub use descriptor::zeabur_descriptor;
pub use mutations::{
    rename_project, restart_service, runtime_logs, suspend_service, LogEntry, RuntimeLogs,
    DEFAULT_LOG_LIMIT,
};
pub use usage::{summarize, UsageEntry};
