// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Cloudboard Store
//!
//! Everything Cloudboard keeps outside the provider APIs.
//!
//! This crate provides:
//!
//! - **Config**: Timeout, log level and default accounts file, with
//!   environment overrides
//! - **Accounts**: Account descriptors from `ACCOUNTS` and accounts files
//! - **SessionStore**: Process-scoped login sessions with expiry
//! - **Persistence**: File I/O helpers for JSON data
//!
//! ## Usage
//!
//! ```ignore
//! use cloudboard_store::{collect_accounts, Config};
//!
//! let config = Config::load()?;
//! let env = std::env::var("ACCOUNTS").ok();
//! let accounts = collect_accounts(env.as_deref(), config.general.accounts_file.as_deref()).await?;
//! ```

pub mod accounts;
pub mod config;
pub mod error;
pub mod persistence;
pub mod session;

pub use accounts::{collect_accounts, load_accounts_file, parse_accounts_env, ACCOUNTS_ENV};
pub use config::{Config, GeneralConfig, ACCOUNTS_FILE_ENV, TIMEOUT_ENV};
pub use error::StoreError;
pub use persistence::{default_config_dir, default_config_path, load_json};
pub use session::{SessionStore, DEFAULT_SWEEP_INTERVAL, SESSION_LIFETIME_DAYS};
