//! In-memory login sessions.
//!
//! Sessions are process-scoped: a restart logs everyone out. A session
//! expires [`SESSION_LIFETIME_DAYS`] days after it was issued.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Lifetime of a session.
pub const SESSION_LIFETIME_DAYS: i64 = 10;

/// Default period of the expiry sweep.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

const TOKEN_PREFIX: &str = "session_";
const TOKEN_LEN: usize = 32;

/// Issued session tokens and their creation times.
///
/// This is the login-session contract for a front end; the `cloudboard`
/// binary itself never constructs one.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, DateTime<Utc>>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lifetime() -> ChronoDuration {
        ChronoDuration::days(SESSION_LIFETIME_DAYS)
    }

    /// Issues a new session token.
    pub fn issue(&self) -> String {
        self.issue_at(Utc::now())
    }

    /// Issues a new session token created at `now`.
    pub fn issue_at(&self, now: DateTime<Utc>) -> String {
        let random: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        let token = format!("{TOKEN_PREFIX}{random}");

        self.lock().insert(token.clone(), now);
        debug!("Session issued");
        token
    }

    /// Returns whether `token` is a live session.
    pub fn validate(&self, token: &str) -> bool {
        self.validate_at(token, Utc::now())
    }

    /// Returns whether `token` is live at `now`; an expired token is removed.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> bool {
        let mut sessions = self.lock();
        let Some(created) = sessions.get(token).copied() else {
            return false;
        };

        if now - created < Self::lifetime() {
            true
        } else {
            sessions.remove(token);
            debug!("Expired session removed on validation");
            false
        }
    }

    /// Removes every expired session, returning how many were removed.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Utc::now())
    }

    /// Removes sessions expired at `now`.
    pub fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, created| now - *created < Self::lifetime());
        let removed = before - sessions.len();
        if removed > 0 {
            info!(removed, "Swept expired sessions");
        }
        removed
    }

    /// Returns the number of stored sessions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no session is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Spawns a task sweeping the store every `interval`.
    ///
    /// The task runs until the handle is aborted or the runtime shuts down.
    pub fn spawn_reaper(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                store.sweep();
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
