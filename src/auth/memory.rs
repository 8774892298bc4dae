//! In-process account table, used for offline runs and tests

use super::{AuthError, AuthService, Credentials};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Message returned for an unknown email or a wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// One recorded call to [`MemoryAuthService::login`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    /// Email as submitted
    pub email: String,
    /// "Remember me" as submitted
    pub remember_me: bool,
    /// Whether the attempt succeeded
    pub accepted: bool,
}

/// [`AuthService`] that checks credentials against an in-memory table
#[derive(Debug, Default)]
pub struct MemoryAuthService {
    accounts: RwLock<HashMap<String, String>>,
    attempts: Mutex<Vec<LoginAttempt>>,
    delay: Duration,
}

impl MemoryAuthService {
    /// Create a service with no accounts
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account (emails match case-insensitively)
    #[must_use]
    pub fn with_account(self, email: &str, password: &str) -> Self {
        self.add_account(email, password);
        self
    }

    /// Delay every answer by `delay`, to stand in for network latency
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Add or replace an account
    pub fn add_account(&self, email: &str, password: &str) {
        self.accounts
            .write()
            .insert(email.to_lowercase(), password.to_string());
    }

    /// Every login call made so far, oldest first
    #[must_use]
    pub fn attempts(&self) -> Vec<LoginAttempt> {
        self.attempts.lock().clone()
    }

    /// Number of login calls made so far
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().len()
    }
}

impl AuthService for MemoryAuthService {
    fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let accepted = self
            .accounts
            .read()
            .get(&credentials.email.to_lowercase())
            .is_some_and(|password| *password == credentials.password);

        self.attempts.lock().push(LoginAttempt {
            email: credentials.email.clone(),
            remember_me: credentials.remember_me,
            accepted,
        });
        debug!(email = %credentials.email, accepted, "In-memory sign-in checked");

        if accepted {
            Ok(())
        } else {
            Err(AuthError::Rejected {
                status: 401,
                message: INVALID_CREDENTIALS.to_string(),
            })
        }
    }
}
