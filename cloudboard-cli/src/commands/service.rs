//! Service command - pause, restart and read logs of a primary-provider
//! service.

use anyhow::Result;
use clap::{Args, Subcommand};
use cloudboard_providers::zeabur::{self, DEFAULT_LOG_LIMIT};
use cloudboard_store::Config;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{fetch_context, Cli, ExitCode, OutputFormat};

/// Arguments for the service command.
#[derive(Args)]
pub struct ServiceArgs {
    #[command(subcommand)]
    pub action: ServiceAction,
}

/// Identifies a service in an environment.
#[derive(Args)]
pub struct ServiceTarget {
    /// Account token.
    #[arg(long)]
    pub token: String,

    /// Service id.
    #[arg(long)]
    pub service: String,

    /// Environment id.
    #[arg(long)]
    pub environment: String,
}

/// Service operations.
#[derive(Subcommand)]
pub enum ServiceAction {
    /// Suspend a running service.
    Pause(ServiceTarget),

    /// Restart a service.
    Restart(ServiceTarget),

    /// Show the latest runtime log lines.
    Logs {
        #[command(flatten)]
        target: ServiceTarget,

        /// Project id.
        #[arg(long)]
        project: String,

        /// Number of lines to keep (0 keeps all).
        #[arg(long, default_value_t = DEFAULT_LOG_LIMIT)]
        limit: usize,
    },
}

/// Runs the service command.
pub async fn run(args: &ServiceArgs, cli: &Cli, config: &Config) -> Result<ExitCode> {
    let ctx = fetch_context(cli, config)?;
    let text = TextFormatter::new(!cli.no_color);
    let json = JsonFormatter::new(cli.pretty);

    match &args.action {
        ServiceAction::Pause(target) => {
            zeabur::suspend_service(&ctx, &target.token, &target.service, &target.environment).await?;
            report(cli, &text, &json, "paused", &target.service)?;
        }
        ServiceAction::Restart(target) => {
            zeabur::restart_service(&ctx, &target.token, &target.service, &target.environment).await?;
            report(cli, &text, &json, "restarted", &target.service)?;
        }
        ServiceAction::Logs {
            target,
            project,
            limit,
        } => {
            let logs = zeabur::runtime_logs(
                &ctx,
                &target.token,
                project,
                &target.service,
                &target.environment,
                *limit,
            )
            .await?;

            match cli.format {
                OutputFormat::Text => println!("{}", text.format_logs(&logs)),
                OutputFormat::Json => println!("{}", json.format(&logs)?),
            }
        }
    }

    Ok(ExitCode::Success)
}

/// Prints the outcome of a service operation.
fn report(
    cli: &Cli,
    text: &TextFormatter,
    json: &JsonFormatter,
    action: &str,
    service: &str,
) -> Result<()> {
    match cli.format {
        OutputFormat::Text => println!("{}", text.format_done(&format!("Service {service} {action}"))),
        OutputFormat::Json => println!(
            "{}",
            json.format(&serde_json::json!({ "success": true, "service": service, "action": action }))?
        ),
    }
    Ok(())
}
