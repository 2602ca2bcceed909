//! Validate command - resolve one account from the command line.

use anyhow::Result;
use clap::Args;
use cloudboard_core::{AccountDescriptor, AccountSnapshot};
use cloudboard_providers::{Dispatcher, ProviderRegistry};
use cloudboard_store::Config;
use serde::Serialize;
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{fetch_context, Cli, ExitCode, OutputFormat};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Account display name.
    #[arg(long, default_value = "account")]
    pub name: String,

    /// Account token; a leading "Bearer " is ignored.
    #[arg(long)]
    pub token: String,

    /// Provider id or alias.
    #[arg(long, short, default_value = "zeabur")]
    pub provider: String,
}

impl ValidateArgs {
    fn descriptor(&self) -> AccountDescriptor {
        AccountDescriptor::new(self.name.trim(), self.token.as_str()).with_provider(self.provider.as_str())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateOutput<'a> {
    name: &'a str,
    provider: String,
    #[serde(flatten)]
    snapshot: &'a AccountSnapshot,
}

/// Runs the validate command.
///
/// Resolution errors are printed and map to [`ExitCode::Error`].
pub async fn run(args: &ValidateArgs, cli: &Cli, config: &Config) -> Result<ExitCode> {
    let descriptor = args.descriptor();
    let provider = ProviderRegistry::canonical_id(&descriptor.provider_id());
    info!(name = %descriptor.name, provider = %provider, "Validating account");

    let dispatcher = Dispatcher::new(fetch_context(cli, config)?);
    let snapshot = match dispatcher.resolve(&descriptor).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            if !cli.quiet {
                let formatter = TextFormatter::new(!cli.no_color);
                eprintln!("{}", formatter.format_error(&descriptor.name, &e.to_string()));
            }
            return Ok(ExitCode::Error);
        }
    };

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_snapshot(&descriptor.name, &provider, &snapshot));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            let output = ValidateOutput {
                name: &descriptor.name,
                provider,
                snapshot: &snapshot,
            };
            println!("{}", formatter.format(&output)?);
        }
    }

    Ok(ExitCode::Success)
}
