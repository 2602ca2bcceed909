//! Accounts command - overview of every configured account.

use anyhow::Result;
use cloudboard_store::Config;

use super::{batch_exit_code, run_configured_batch};
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Runs the accounts command.
pub async fn run(cli: &Cli, config: &Config) -> Result<ExitCode> {
    let results = run_configured_batch(cli, config).await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);

            println!("{}", formatter.format_accounts_header());
            println!("{}", "─".repeat(80));
            for result in &results {
                println!("{}", formatter.format_account_line(result));
            }
            println!();
            println!("{}", formatter.format_batch_footer(&results));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_accounts(&results)?);
        }
    }

    Ok(batch_exit_code(&results))
}
