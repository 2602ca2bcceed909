//! Usage/cost summary types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Monthly free allowance before usage-based billing applies.
pub const FREE_QUOTA_LIMIT: f64 = 5.0;

/// Per-project costs and account totals for the current billing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    /// Displayed (rounded up to the cent) cost per project id.
    #[serde(default)]
    pub project_costs: BTreeMap<String, f64>,
    /// Sum of un-rounded project totals.
    pub total_usage: f64,
    /// `free_quota_limit - total_usage`; may be negative.
    pub free_quota_remaining: f64,
    /// The free quota.
    pub free_quota_limit: f64,
}

impl UsageSummary {
    /// Zero usage with the full free quota remaining.
    pub fn zero() -> Self {
        Self {
            project_costs: BTreeMap::new(),
            total_usage: 0.0,
            free_quota_remaining: FREE_QUOTA_LIMIT,
            free_quota_limit: FREE_QUOTA_LIMIT,
        }
    }

    /// Remaining free quota in integer cents.
    #[allow(clippy::cast_possible_truncation)]
    pub fn credit_cents(&self) -> i64 {
        (self.free_quota_remaining * 100.0).round() as i64
    }
}

impl Default for UsageSummary {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_usage() {
        let usage = UsageSummary::zero();
        assert_eq!(usage.free_quota_remaining, 5.0);
        assert_eq!(usage.credit_cents(), 500);
    }

    #[test]
    fn test_credit_cents_negative() {
        let usage = UsageSummary {
            total_usage: 7.5,
            free_quota_remaining: 5.0 - 7.5,
            ..UsageSummary::zero()
        };
        assert_eq!(usage.credit_cents(), -250);
    }
}
