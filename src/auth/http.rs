//! Sign-in over HTTP.
//!
//! Credentials are sent as a JSON `POST` to a single endpoint. Any 2xx answer is a
//! successful sign-in; anything else is a refusal whose message is read from
//! the response body (`{"message": "..."}` or `{"data": {"message": "..."}}`).

use super::{AuthError, AuthService, Credentials};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};
use ureq::Agent;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<ErrorData>,
}

#[derive(Debug, Deserialize)]
struct ErrorData {
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .or_else(|| self.data.and_then(|data| data.message))
            .filter(|message| !message.trim().is_empty())
    }
}

/// [`AuthService`] backed by an HTTP endpoint
#[derive(Clone)]
pub struct HttpAuthService {
    agent: Agent,
    url: String,
    user_agent: String,
}

impl fmt::Debug for HttpAuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpAuthService")
            .field("url", &self.url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl HttpAuthService {
    /// Create a service posting to `url`, giving up after `timeout`
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::config::Config::builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.new_agent(),
            url: url.into(),
            user_agent: format!("signin/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Endpoint the credentials are sent to
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AuthService for HttpAuthService {
    fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        debug!(url = %self.url, email = %credentials.email, "Sending sign-in request");

        let mut response = match self
            .agent
            .post(&self.url)
            .header("User-Agent", self.user_agent.as_str())
            .send_json(credentials)
        {
            Ok(response) => response,
            Err(err) => {
                warn!(url = %self.url, error = %err, "Sign-in request failed");
                return Err(AuthError::Transport(err.to_string()));
            }
        };

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Sign-in accepted");
            return Ok(());
        }

        if !status.is_client_error() && !status.is_server_error() {
            return Err(AuthError::InvalidResponse(format!(
                "HTTP {}",
                status.as_u16()
            )));
        }

        let message = response
            .body_mut()
            .read_json::<ErrorBody>()
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| format!("Sign in failed (HTTP {})", status.as_u16()));

        debug!(status = status.as_u16(), "Sign-in refused");
        Err(AuthError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
