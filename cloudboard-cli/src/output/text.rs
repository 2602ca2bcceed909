//! Text output formatting with colors.

use cloudboard_core::{AccountSnapshot, AccountUser, BatchResult, Project};
use cloudboard_providers::zeabur::RuntimeLogs;
use cloudboard_providers::ProviderDescriptor;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

const NONE: &str = "−";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Formats the accounts table header.
    pub fn format_accounts_header(&self) -> String {
        format!(
            "{:<16} {:<12} {:<6} {:<24} {:>9} {}",
            "Account", "Provider", "Status", "User", "Credit", "Usage"
        )
    }

    /// Formats one account line.
    pub fn format_account_line(&self, result: &BatchResult) -> String {
        let Some(snapshot) = result.snapshot() else {
            return format!(
                "{:<16} {:<12} {} {}",
                result.name,
                result.provider,
                self.red("error "),
                result.error.as_deref().unwrap_or("unknown error")
            );
        };

        let credit = match (result.credit, &snapshot.usage) {
            (Some(cents), Some(_)) => format_cents(cents),
            _ => NONE.to_string(),
        };
        let usage = snapshot.usage.as_ref().map_or_else(
            || NONE.to_string(),
            |u| format!("${:.2} / ${:.2}", u.total_usage, u.free_quota_limit),
        );

        format!(
            "{:<16} {:<12} {} {:<24} {:>9} {}",
            result.name,
            result.provider,
            self.green("ok    "),
            user_label(&snapshot.user),
            self.color_for_credit(result.credit.unwrap_or(0), &credit),
            usage
        )
    }

    /// Formats the closing line of a batch.
    pub fn format_batch_footer(&self, results: &[BatchResult]) -> String {
        let ok = results.iter().filter(|r| r.success).count();
        let text = format!("{ok}/{} accounts fetched", results.len());
        if ok == results.len() {
            self.dim(&text)
        } else {
            self.yellow(&text)
        }
    }

    // ========================================================================
    // Projects
    // ========================================================================

    /// Formats an account's projects under a header line.
    pub fn format_projects(&self, result: &BatchResult) -> String {
        let mut lines = vec![format!(
            "{} {}",
            self.bold(&result.name),
            self.dim(&format!("({})", result.provider))
        )];

        match result.snapshot() {
            Some(snapshot) if snapshot.projects.is_empty() => {
                lines.push(format!("  {}", self.dim("No projects")));
            }
            Some(snapshot) => {
                lines.extend(snapshot.projects.iter().map(|p| self.format_project(p)));
            }
            None => lines.push(format!(
                "  {} {}",
                self.red("Error:"),
                result.error.as_deref().unwrap_or("unknown error")
            )),
        }

        lines.join("\n")
    }

    /// Formats a single project line, with its domains below.
    pub fn format_project(&self, project: &Project) -> String {
        let cost = if project.has_cost_data {
            format!("${:.2}", project.cost)
        } else {
            NONE.to_string()
        };
        let mut line = format!(
            "  {:<28} {:<20} {:>8}  {}",
            project.name,
            project.region,
            cost,
            self.dim(&project.id)
        );

        for domain in &project.domains {
            line.push_str(&format!("\n    {}", self.cyan(&domain.domain)));
        }
        line
    }

    // ========================================================================
    // Single Account
    // ========================================================================

    /// Formats a resolved account.
    pub fn format_snapshot(&self, name: &str, provider: &str, snapshot: &AccountSnapshot) -> String {
        let mut lines = vec![format!(
            "{} {} {}",
            self.green("✓"),
            self.bold(name),
            self.dim(&format!("({provider})"))
        )];

        lines.push(format!("User:     {}", user_label(&snapshot.user)));
        if let Some(email) = &snapshot.user.email {
            lines.push(format!("Email:    {}", self.cyan(email)));
        }
        lines.push(format!("Projects: {}", snapshot.project_count()));

        if let Some(usage) = &snapshot.usage {
            lines.push(format!(
                "Usage:    ${:.2} of ${:.2} free quota",
                usage.total_usage, usage.free_quota_limit
            ));
        }
        if let Some(balance) = snapshot.aihub.as_ref().and_then(|t| t.balance) {
            lines.push(format!("AI Hub:   ${balance:.2}"));
        }

        lines.join("\n")
    }

    // ========================================================================
    // Providers
    // ========================================================================

    /// Formats provider list header.
    pub fn format_providers_header(&self) -> String {
        format!(
            "{:<14} {:<13} {:<14} {:<8} {}",
            self.bold("Provider"),
            self.bold("Id"),
            self.bold("Aliases"),
            self.bold("Billing"),
            self.bold("Dashboard")
        )
    }

    /// Formats a single provider line.
    pub fn format_provider_line(&self, desc: &ProviderDescriptor) -> String {
        let aliases = if desc.cli.aliases.is_empty() {
            NONE.to_string()
        } else {
            desc.cli.aliases.join(", ")
        };
        let billing = if desc.metadata.supports_billing {
            self.green("✓")
        } else {
            self.dim(NONE)
        };

        format!(
            "{:<14} {:<13} {:<14} {:<8} {}",
            desc.display_name(),
            desc.cli_name(),
            aliases,
            billing,
            desc.metadata.dashboard_url.as_deref().unwrap_or(NONE)
        )
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Formats runtime logs, oldest first.
    pub fn format_logs(&self, logs: &RuntimeLogs) -> String {
        let mut lines: Vec<String> = logs
            .logs
            .iter()
            .map(|entry| format!("{} {}", self.dim(&entry.timestamp), entry.message))
            .collect();
        lines.push(self.dim(&format!("{} of {} entries", logs.count, logs.total_count)));
        lines.join("\n")
    }

    /// Formats a completed operation.
    pub fn format_done(&self, message: &str) -> String {
        format!("{} {message}", self.green("✓"))
    }

    /// Formats an error message.
    pub fn format_error(&self, subject: &str, error: &str) -> String {
        format!("{}: {} - {}", self.bold(subject), self.red("Error"), error)
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn color_for_credit(&self, cents: i64, text: &str) -> String {
        if cents < 0 {
            self.red(text)
        } else if cents < 100 {
            self.yellow(text)
        } else {
            text.to_string()
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}

/// Username, else email, else id.
fn user_label(user: &AccountUser) -> &str {
    user.username
        .as_deref()
        .or(user.email.as_deref())
        .or(user.id.as_deref())
        .unwrap_or(NONE)
}

/// Formats integer cents as dollars, e.g. `-1434` as `-$14.34`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}
