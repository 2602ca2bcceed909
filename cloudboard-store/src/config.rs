//! Configuration management.

use cloudboard_fetch::FetchSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::persistence::default_config_path;

/// Environment variable overriding `general.timeout_secs`.
pub const TIMEOUT_ENV: &str = "CLOUDBOARD_TIMEOUT_SECS";

/// Environment variable overriding `general.accounts_file`.
pub const ACCOUNTS_FILE_ENV: &str = "CLOUDBOARD_ACCOUNTS_FILE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneralConfig {
    /// Bound on every upstream call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Level of the `cloudboard` crates when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Accounts file used when none is given on the command line.
    #[serde(default)]
    pub accounts_file: Option<PathBuf>,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
            accounts_file: None,
        }
    }
}

impl Config {
    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        default_config_path()
    }

    /// Loads configuration from the default path, then applies the
    /// environment overrides.
    pub fn load() -> Result<Self, StoreError> {
        let mut config = Self::load_from(&Self::default_path())?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Loads configuration from a specific path.
    ///
    /// A missing file yields the defaults. A zero timeout is rejected.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        if config.general.timeout_secs == 0 {
            return Err(StoreError::Config(format!(
                "general.timeout_secs in {} must be a positive integer",
                path.display()
            )));
        }

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Applies overrides read through `lookup`.
    ///
    /// Blank values are ignored. A timeout that is not a positive integer
    /// is a configuration error.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), StoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = value(TIMEOUT_ENV) {
            self.general.timeout_secs = match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(StoreError::Config(format!(
                        "{TIMEOUT_ENV} must be a positive integer, got {raw:?}"
                    )));
                }
            };
        }
        if let Some(path) = value(ACCOUNTS_FILE_ENV) {
            self.general.accounts_file = Some(PathBuf::from(path.trim()));
        }
        Ok(())
    }

    /// Returns the upstream call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.general.timeout_secs)
    }

    /// Maps the configuration to fetch settings.
    pub fn to_fetch_settings(&self) -> FetchSettings {
        FetchSettings::default().with_timeout(self.timeout())
    }
}

// ============================================================================
// Tests
// ============================================================================
