//! Account sources.
//!
//! Accounts come from the `ACCOUNTS` environment variable and from a JSON
//! accounts file. Both yield plain [`AccountDescriptor`]s with the provider
//! filled in.

use cloudboard_core::{normalize_token, AccountDescriptor, ProviderKind};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::persistence::load_json;

/// Environment variable holding inline accounts.
pub const ACCOUNTS_ENV: &str = "ACCOUNTS";

/// On-disk accounts file: a bare list or `{"accounts": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AccountsFile {
    List(Vec<AccountDescriptor>),
    Wrapped { accounts: Vec<AccountDescriptor> },
}

fn default_provider() -> String {
    ProviderKind::default().cli_name().to_string()
}

/// Fills in the primary provider when the descriptor names none.
fn with_default_provider(mut account: AccountDescriptor) -> AccountDescriptor {
    if account.provider.as_deref().is_none_or(|p| p.trim().is_empty()) {
        account.provider = Some(default_provider());
    }
    account
}

/// Parses `name[|provider]:token` items separated by commas.
///
/// Items without a name or token are skipped. The token is everything after
/// the first colon.
pub fn parse_accounts_env(raw: &str) -> Vec<AccountDescriptor> {
    raw.split(',')
        .filter_map(|item| {
            let Some((head, token)) = item.split_once(':') else {
                debug!("Skipping account item without a token");
                return None;
            };
            let (name, provider) = match head.split_once('|') {
                Some((name, provider)) => (name.trim(), provider.trim()),
                None => (head.trim(), ""),
            };
            let token = normalize_token(token);
            if name.is_empty() || token.is_empty() {
                debug!("Skipping incomplete account item");
                return None;
            }

            let account = AccountDescriptor::new(name, token).with_provider(provider);
            Some(with_default_provider(account))
        })
        .collect()
}

/// Loads accounts from a JSON file.
pub async fn load_accounts_file(path: &Path) -> Result<Vec<AccountDescriptor>, StoreError> {
    let file: AccountsFile = load_json(path).await?;
    let accounts = match file {
        AccountsFile::List(accounts) | AccountsFile::Wrapped { accounts } => accounts,
    };

    info!(path = %path.display(), count = accounts.len(), "Loaded accounts file");
    Ok(accounts.into_iter().map(with_default_provider).collect())
}

/// Collects accounts from every source, environment first.
///
/// A missing accounts file contributes nothing. Any other file error is
/// returned.
pub async fn collect_accounts(
    env_value: Option<&str>,
    file: Option<&Path>,
) -> Result<Vec<AccountDescriptor>, StoreError> {
    let mut accounts = env_value.map(parse_accounts_env).unwrap_or_default();

    if let Some(path) = file {
        match load_accounts_file(path).await {
            Ok(from_file) => accounts.extend(from_file),
            Err(e) if e.is_not_found() => {
                warn!(path = %path.display(), "Accounts file not found");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(accounts)
}

// ============================================================================
// Tests
// ============================================================================
