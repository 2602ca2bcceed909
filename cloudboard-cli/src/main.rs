// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Cloudboard CLI - cloud hosting accounts at a glance.
//!
//! # Examples
//!
//! ```bash
//! # Account overview for ACCOUNTS and the configured accounts file
//! cloudboard
//!
//! # Projects of every account, as JSON
//! cloudboard projects --format json --pretty
//!
//! # Check a token before saving it
//! cloudboard validate --name side --provider vercel --token "$VERCEL_TOKEN"
//!
//! # Tail a service's logs on the primary provider
//! cloudboard service logs --token "$TOKEN" --project P --service S --environment E
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cloudboard_fetch::FetchContext;
use cloudboard_store::Config;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{accounts, project, projects, providers, service, validate};

// ============================================================================
// CLI Definition
// ============================================================================

/// Cloudboard CLI - multi-provider cloud hosting dashboard.
#[derive(Parser)]
#[command(name = "cloudboard")]
#[command(about = "Multi-provider cloud hosting dashboard")]
#[command(long_about = r#"
Cloudboard aggregates accounts across cloud hosting providers.

Supported providers:
  • Zeabur (zeabur, primary, with billing)
  • Vercel (vercel)
  • Hugging Face (huggingface, hugging_face)
  • Render (render)
  • Railway (railway)
  • ClawCloud (clawcloud, claw)

Accounts are read from the ACCOUNTS environment variable
("name[|provider]:token", comma-separated) and from the accounts file.
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'accounts' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (no logs, errors only as exit code).
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Accounts file (JSON list of {name, token, provider}).
    #[arg(long, global = true, value_name = "FILE")]
    pub accounts: Option<PathBuf>,

    /// Timeout for each upstream call, in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show every account with its status and credit (default).
    #[command(visible_alias = "a")]
    Accounts,

    /// Show the projects of every account.
    #[command(visible_alias = "p")]
    Projects,

    /// Resolve a single account and show its user.
    Validate(validate::ValidateArgs),

    /// List supported providers.
    Providers,

    /// Operate on a service of the primary provider.
    Service(service::ServiceArgs),

    /// Operate on a project of the primary provider.
    Project(project::ProjectArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// A batch in which no account succeeded.
    NoSuccess = 2,
}

// ============================================================================
// Shared Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool, log_level: &str) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("cloudboard=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("cloudboard={log_level}")))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds the shared fetch context, the `--timeout` flag winning over
/// the configuration.
pub fn fetch_context(cli: &Cli, config: &Config) -> Result<Arc<FetchContext>> {
    let mut settings = config.to_fetch_settings();
    if let Some(secs) = cli.timeout.filter(|secs| *secs > 0) {
        settings = settings.with_timeout(Duration::from_secs(secs));
    }
    Ok(Arc::new(FetchContext::with_settings(settings)?))
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(ExitCode::Error as i32);
        }
    };

    setup_logging(cli.verbose, cli.quiet, &config.general.log_level);

    let result = match &cli.command {
        Some(Commands::Accounts) | None => accounts::run(&cli, &config).await,
        Some(Commands::Projects) => projects::run(&cli, &config).await,
        Some(Commands::Validate(args)) => validate::run(args, &cli, &config).await,
        Some(Commands::Providers) => providers::run(&cli),
        Some(Commands::Service(args)) => service::run(args, &cli, &config).await,
        Some(Commands::Project(args)) => project::run(args, &cli, &config).await,
    };

    match result {
        Ok(ExitCode::Success) => Ok(()),
        Ok(code) => std::process::exit(code as i32),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e:#}");
            }
            std::process::exit(ExitCode::Error as i32);
        }
    }
}
