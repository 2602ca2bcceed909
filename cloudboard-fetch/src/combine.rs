//! Combining calls made across alternative contexts.
//!
//! Some providers scope listings by team or namespace. The same call runs
//! once per context and the outcomes are merged: the operation succeeds if
//! at least one context succeeded.

use tracing::warn;

use crate::error::FetchError;
use crate::host::http::{truncate_reason, REASON_LIMIT};

/// Limit applied to the joined failure reasons.
pub const COMBINED_REASON_LIMIT: usize = 300;

/// Successful and failed outcomes of one call across contexts.
#[derive(Debug)]
pub struct Alternatives<T> {
    /// Values from the contexts that succeeded, in context order.
    pub succeeded: Vec<T>,
    /// Errors from the contexts that failed, in context order.
    pub failed: Vec<FetchError>,
}

impl<T> Alternatives<T> {
    /// Returns the joined reasons of the failed contexts.
    pub fn reasons(&self) -> String {
        combine_reasons(&self.failed)
    }
}

/// Joins error messages with `"; "`, truncating each one and the result.
pub fn combine_reasons(errors: &[FetchError]) -> String {
    let joined = errors
        .iter()
        .map(|e| truncate_reason(&e.to_string(), REASON_LIMIT))
        .collect::<Vec<_>>()
        .join("; ");
    if joined.is_empty() {
        return "unknown error".to_string();
    }
    truncate_reason(&joined, COMBINED_REASON_LIMIT)
}

/// Splits outcomes into successes and failures.
///
/// Fails with [`FetchError::AllFailed`] only when there was at least one
/// outcome and none succeeded. Partial failures are logged at warn with
/// `what` naming the call.
pub fn collect_alternatives<T>(
    what: &str,
    outcomes: Vec<Result<T, FetchError>>,
) -> Result<Alternatives<T>, FetchError> {
    let mut alternatives = Alternatives {
        succeeded: Vec::new(),
        failed: Vec::new(),
    };

    for outcome in outcomes {
        match outcome {
            Ok(value) => alternatives.succeeded.push(value),
            Err(e) => alternatives.failed.push(e),
        }
    }

    if alternatives.failed.is_empty() {
        return Ok(alternatives);
    }

    if alternatives.succeeded.is_empty() {
        let kind = alternatives.failed[0].kind();
        return Err(FetchError::AllFailed {
            kind,
            reasons: alternatives.reasons(),
        });
    }

    warn!(
        call = what,
        failed = alternatives.failed.len(),
        reasons = %alternatives.reasons(),
        "Call partially failed for some contexts"
    );
    Ok(alternatives)
}

// ============================================================================
// Tests
// ============================================================================
