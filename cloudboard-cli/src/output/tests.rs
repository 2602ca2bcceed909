//! CLI output formatting tests.
//!
//! These tests verify that CLI output is correctly formatted for both
//! text and JSON output modes.

#[cfg(test)]
mod text_formatter_tests {
    use super::super::text::{format_cents, TextFormatter};
    use cloudboard_core::{
        AccountSnapshot, AccountUser, BatchResult, ErrorKind, Project, ProjectDomain,
        UsageSummary,
    };
    use cloudboard_providers::zeabur::mutations::tail_logs;
    use cloudboard_providers::zeabur::LogEntry;
    use cloudboard_providers::ProviderRegistry;
    use std::collections::BTreeMap;

    fn user(username: &str) -> AccountUser {
        AccountUser {
            id: Some("u1".to_string()),
            username: Some(username.to_string()),
            email: None,
        }
    }

    fn zeabur_result() -> BatchResult {
        let mut project = Project::new("p1", "shop", "Tokyo")
            .with_domains(vec![ProjectDomain::new("shop.zeabur.app", true)]);
        project.apply_cost(&BTreeMap::from([("p1".to_string(), 1.25)]));

        let mut snapshot = AccountSnapshot::new(user("alice"), vec![project]);
        snapshot.usage = Some(UsageSummary {
            project_costs: BTreeMap::new(),
            total_usage: 1.25,
            free_quota_remaining: 3.75,
            free_quota_limit: 5.0,
        });
        BatchResult::success("main", "zeabur", snapshot, 375)
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(375), "$3.75");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(-1434), "-$14.34");
    }

    #[test]
    fn test_account_line_success() {
        let formatter = TextFormatter::new(false);
        let line = formatter.format_account_line(&zeabur_result());
        assert!(line.starts_with("main"));
        assert!(line.contains("zeabur"));
        assert!(line.contains("ok"));
        assert!(line.contains("alice"));
        assert!(line.contains("$3.75"));
        assert!(line.contains("$1.25 / $5.00"));
    }

    #[test]
    fn test_account_line_without_usage() {
        let formatter = TextFormatter::new(false);
        let snapshot = AccountSnapshot::new(user("bob"), Vec::new());
        let line = formatter.format_account_line(&BatchResult::success("side", "vercel", snapshot, 0));
        assert!(line.contains("bob"));
        assert!(!line.contains('$'));
    }

    #[test]
    fn test_account_line_failure() {
        let formatter = TextFormatter::new(true);
        let result = BatchResult::failure("x", "heroku", "Unsupported provider: heroku", ErrorKind::UnsupportedProvider);
        let line = formatter.format_account_line(&result);
        assert!(line.contains("\x1b[31m"));
        assert!(line.contains("Unsupported provider: heroku"));
    }

    #[test]
    fn test_batch_footer() {
        let formatter = TextFormatter::new(false);
        let results = vec![
            zeabur_result(),
            BatchResult::failure("y", "render", "Missing account token", ErrorKind::Validation),
        ];
        assert_eq!(formatter.format_batch_footer(&results), "1/2 accounts fetched");
    }

    #[test]
    fn test_projects_with_domains_and_cost() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_projects(&zeabur_result());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "main (zeabur)");
        assert!(lines[1].contains("shop"));
        assert!(lines[1].contains("Tokyo"));
        assert!(lines[1].contains("$1.25"));
        assert_eq!(lines[2].trim(), "shop.zeabur.app");
    }

    #[test]
    fn test_projects_empty_and_failed() {
        let formatter = TextFormatter::new(false);
        let empty = BatchResult::success("e", "railway", AccountSnapshot::default(), 0);
        assert!(formatter.format_projects(&empty).contains("No projects"));

        let failed = BatchResult::failure("f", "render", "Missing account token", ErrorKind::Validation);
        assert!(formatter.format_projects(&failed).contains("Error: Missing account token"));
    }

    #[test]
    fn test_snapshot() {
        let formatter = TextFormatter::new(false);
        let mut snapshot = AccountSnapshot::new(user("carol"), Vec::new());
        snapshot.user.email = Some("carol@example.com".to_string());
        let output = formatter.format_snapshot("side", "vercel", &snapshot);
        assert!(output.contains("User:     carol"));
        assert!(output.contains("Email:    carol@example.com"));
        assert!(output.contains("Projects: 0"));
        assert!(!output.contains("Usage"));
    }

    #[test]
    fn test_provider_lines() {
        let formatter = TextFormatter::new(false);
        let lines: Vec<String> = ProviderRegistry::all()
            .iter()
            .map(|d| formatter.format_provider_line(d))
            .collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().any(|l| l.contains("Hugging Face") && l.contains("hugging_face")));
        assert!(lines[0].contains("Zeabur") && lines[0].contains('✓'));
    }

    #[test]
    fn test_logs() {
        let formatter = TextFormatter::new(false);
        let entries = vec![
            LogEntry {
                message: "second".to_string(),
                timestamp: "2026-01-01T00:00:02Z".to_string(),
            },
            LogEntry {
                message: "first".to_string(),
                timestamp: "2026-01-01T00:00:01Z".to_string(),
            },
        ];
        let output = formatter.format_logs(&tail_logs(entries, 1));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["2026-01-01T00:00:02Z second", "1 of 2 entries"]);
    }

    #[test]
    fn test_no_colors_when_disabled() {
        let formatter = TextFormatter::new(false);
        assert!(!formatter.format_projects(&zeabur_result()).contains("\x1b["));
        assert!(!formatter.format_error("main", "boom").contains("\x1b["));
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::JsonFormatter;
    use cloudboard_core::{AccountSnapshot, AccountUser, BatchResult, ErrorKind, UsageSummary};
    use cloudboard_providers::ProviderRegistry;
    use serde_json::Value;

    #[test]
    fn test_format_pretty() {
        let formatter = JsonFormatter::new(true);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_compact() {
        let formatter = JsonFormatter::new(false);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_format_accounts() {
        let formatter = JsonFormatter::new(false);
        let user = AccountUser {
            id: Some("u1".to_string()),
            username: Some("alice".to_string()),
            email: None,
        };
        let mut snapshot = AccountSnapshot::new(user, Vec::new());
        snapshot.usage = Some(UsageSummary::zero());

        let results = vec![
            BatchResult::success("main", "zeabur", snapshot, 500),
            BatchResult::failure("x", "heroku", "Unsupported provider: heroku", ErrorKind::UnsupportedProvider),
        ];
        let output = formatter.format_accounts(&results).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json[0]["name"], "main");
        assert_eq!(json[0]["user"], "alice");
        assert_eq!(json[0]["credit"], 500);
        assert_eq!(json[0]["projectCount"], 0);
        assert_eq!(json[0]["freeQuotaRemaining"], 5.0);
        assert!(json[0].get("error").is_none());

        assert_eq!(json[1]["success"], false);
        assert_eq!(json[1]["errorKind"], "unsupported_provider");
        assert!(json[1].get("credit").is_none());
    }

    #[test]
    fn test_format_providers() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_providers(ProviderRegistry::all()).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        let items = json.as_array().unwrap();

        assert_eq!(items.len(), 6);
        let zeabur = items.iter().find(|i| i["id"] == "zeabur").unwrap();
        assert_eq!(zeabur["isPrimary"], true);
        assert_eq!(zeabur["supportsBilling"], true);
        let render = items.iter().find(|i| i["id"] == "render").unwrap();
        assert_eq!(render["supportsBilling"], false);
        assert_eq!(render["projectsLabel"], "Services");
    }
}
