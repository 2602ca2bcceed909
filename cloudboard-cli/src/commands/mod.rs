//! CLI command implementations.

pub mod accounts;
pub mod project;
pub mod projects;
pub mod providers;
pub mod service;
pub mod validate;

use anyhow::{bail, Result};
use cloudboard_core::BatchResult;
use cloudboard_providers::{BatchOrchestrator, Dispatcher};
use cloudboard_store::{collect_accounts, Config, ACCOUNTS_ENV};
use tracing::info;

use crate::{fetch_context, Cli, ExitCode};

/// Collects the configured accounts and fetches them all.
///
/// The `--accounts` flag wins over the configured accounts file.
pub async fn run_configured_batch(cli: &Cli, config: &Config) -> Result<Vec<BatchResult>> {
    let env_value = std::env::var(ACCOUNTS_ENV).ok();
    let file = cli
        .accounts
        .as_deref()
        .or(config.general.accounts_file.as_deref());

    let descriptors = collect_accounts(env_value.as_deref(), file).await?;
    if descriptors.is_empty() {
        bail!("No accounts configured: set {ACCOUNTS_ENV} or pass --accounts FILE");
    }

    info!(count = descriptors.len(), "Fetching accounts");
    let batch = BatchOrchestrator::new(Dispatcher::new(fetch_context(cli, config)?));
    Ok(batch.run_batch(&descriptors).await)
}

/// Exit code of a finished batch.
pub fn batch_exit_code(results: &[BatchResult]) -> ExitCode {
    if results.iter().any(|r| r.success) {
        ExitCode::Success
    } else {
        ExitCode::NoSuccess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudboard_core::{AccountSnapshot, ErrorKind};

    #[test]
    fn test_batch_exit_code() {
        let ok = BatchResult::success("a", "zeabur", AccountSnapshot::default(), 500);
        let failed = BatchResult::failure("b", "render", "Missing account token", ErrorKind::Validation);

        assert_eq!(batch_exit_code(&[failed.clone(), ok]), ExitCode::Success);
        assert_eq!(batch_exit_code(&[failed]), ExitCode::NoSuccess);
        assert_eq!(batch_exit_code(&[]), ExitCode::NoSuccess);
    }
}
