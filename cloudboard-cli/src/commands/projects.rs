//! Projects command - projects of every configured account.

use anyhow::Result;
use cloudboard_store::Config;

use super::{batch_exit_code, run_configured_batch};
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Runs the projects command.
///
/// JSON output is the full batch, one result per account in input order.
pub async fn run(cli: &Cli, config: &Config) -> Result<ExitCode> {
    let results = run_configured_batch(cli, config).await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            let blocks: Vec<String> = results.iter().map(|r| formatter.format_projects(r)).collect();
            println!("{}", blocks.join("\n\n"));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&results)?);
        }
    }

    Ok(batch_exit_code(&results))
}
