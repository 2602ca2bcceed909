//! Project command - rename a primary-provider project.

use anyhow::Result;
use clap::{Args, Subcommand};
use cloudboard_providers::zeabur;
use cloudboard_store::Config;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{fetch_context, Cli, ExitCode, OutputFormat};

/// Arguments for the project command.
#[derive(Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub action: ProjectAction,
}

/// Project operations.
#[derive(Subcommand)]
pub enum ProjectAction {
    /// Rename a project.
    Rename {
        /// Account token.
        #[arg(long)]
        token: String,

        /// Project id.
        #[arg(long)]
        project: String,

        /// New project name.
        #[arg(long)]
        name: String,
    },
}

/// Runs the project command.
pub async fn run(args: &ProjectArgs, cli: &Cli, config: &Config) -> Result<ExitCode> {
    match &args.action {
        ProjectAction::Rename {
            token,
            project,
            name,
        } => {
            let name = name.trim();
            let ctx = fetch_context(cli, config)?;
            zeabur::rename_project(&ctx, token, project, name).await?;

            match cli.format {
                OutputFormat::Text => {
                    let formatter = TextFormatter::new(!cli.no_color);
                    println!("{}", formatter.format_done(&format!("Project {project} renamed to {name}")));
                }
                OutputFormat::Json => {
                    let formatter = JsonFormatter::new(cli.pretty);
                    let output = serde_json::json!({ "success": true, "project": project, "name": name });
                    println!("{}", formatter.format(&output)?);
                }
            }
        }
    }

    Ok(ExitCode::Success)
}
