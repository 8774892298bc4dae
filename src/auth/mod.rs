//! Authentication service: the call a sign-in submission is handed to

mod http;
mod memory;
mod submitter;

pub use http::HttpAuthService;
pub use memory::{INVALID_CREDENTIALS, LoginAttempt, MemoryAuthService};
pub use submitter::{Completion, Submitter};

use serde::Serialize;
use std::fmt;

/// Credentials sent to the authentication service
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Email address as typed
    pub email: String,
    /// Password as typed
    pub password: String,
    /// Whether the user asked to stay signed in
    pub remember_me: bool,
}

impl Credentials {
    /// Bundle the three submitted values
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>, remember_me: bool) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Why a sign-in attempt failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The service answered and refused the credentials
    #[error("{message}")]
    Rejected {
        /// HTTP status (or equivalent) of the refusal
        status: u16,
        /// Message supplied by the service
        message: String,
    },
    /// The service could not be reached
    #[error("Could not reach the sign-in service: {0}")]
    Transport(String),
    /// The service answered with something that is not a sign-in result
    #[error("Unexpected response from the sign-in service: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// Human-readable text shown in the form's email error slot
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Something that can check credentials.
///
/// Implementations block until the service answers; callers that must stay
/// responsive run them through a [`Submitter`].
pub trait AuthService: Send + Sync + fmt::Debug {
    /// Attempt to sign in
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the credentials are refused or the service
    /// cannot be reached.
    fn login(&self, credentials: &Credentials) -> Result<(), AuthError>;
}
