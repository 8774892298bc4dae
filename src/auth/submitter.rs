//! Runs sign-in calls off the UI thread.
//!
//! Each submission gets its own short-lived worker thread; the answer comes
//! back tagged with the submission id and is picked up by the event loop on
//! its next tick.

use super::{AuthError, AuthService};
use crate::form::{Submission, SubmissionId};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tracing::{debug, warn};

/// Answer to one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Submission the answer belongs to
    pub id: SubmissionId,
    /// What the service said
    pub outcome: Result<(), AuthError>,
}

/// Hands submissions to an [`AuthService`] on background threads
#[derive(Debug)]
pub struct Submitter {
    service: Arc<dyn AuthService>,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
}

impl Submitter {
    /// Create a submitter for `service`
    #[must_use]
    pub fn new(service: Arc<dyn AuthService>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            service,
            sender,
            receiver,
        }
    }

    /// Service the calls are made against
    #[must_use]
    pub const fn service(&self) -> &Arc<dyn AuthService> {
        &self.service
    }

    /// Start the sign-in call for `submission` without waiting for it
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread cannot be spawned.
    pub fn submit(&self, submission: Submission) -> std::io::Result<()> {
        let Submission { id, credentials } = submission;
        let service = Arc::clone(&self.service);
        let sender = self.sender.clone();

        std::thread::Builder::new()
            .name(format!("signin-submit-{id}"))
            .spawn(move || {
                let outcome = service.login(&credentials);
                if let Err(err) = &outcome {
                    debug!(%id, error = %err, "Sign-in call returned an error");
                }
                if sender.send(Completion { id, outcome }).is_err() {
                    warn!(%id, "Sign-in answer arrived after the submitter was dropped");
                }
            })?;

        debug!(%id, "Sign-in call dispatched");
        Ok(())
    }

    /// Next finished answer, if one is ready
    #[must_use]
    pub fn try_next(&self) -> Option<Completion> {
        self.receiver.try_recv().ok()
    }

    /// Every answer that is ready, oldest first
    #[must_use]
    pub fn drain(&self) -> Vec<Completion> {
        self.receiver.try_iter().collect()
    }

    /// Wait up to `timeout` for the next answer
    #[must_use]
    pub fn next_timeout(&self, timeout: Duration) -> Option<Completion> {
        self.receiver.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Credentials, MemoryAuthService};

    fn submission(email: &str, password: &str) -> Submission {
        Submission {
            id: SubmissionId::new(),
            credentials: Credentials::new(email, password, false),
        }
    }

    #[test]
    fn test_completion_carries_submission_id() -> std::io::Result<()> {
        let service = Arc::new(MemoryAuthService::new().with_account("a@b.co", "password123"));
        let submitter = Submitter::new(service);
        let submission = submission("a@b.co", "password123");
        let id = submission.id;

        submitter.submit(submission)?;
        let completion = submitter.next_timeout(Duration::from_secs(5));

        assert_eq!(completion, Some(Completion { id, outcome: Ok(()) }));
        Ok(())
    }

    #[test]
    fn test_refusal_is_delivered() -> std::io::Result<()> {
        let submitter = Submitter::new(Arc::new(MemoryAuthService::new()));
        submitter.submit(submission("a@b.co", "password123"))?;

        let completion = submitter.next_timeout(Duration::from_secs(5));

        assert!(matches!(
            completion.map(|c| c.outcome),
            Some(Err(AuthError::Rejected { status: 401, .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_try_next_and_drain_when_idle() {
        let submitter = Submitter::new(Arc::new(MemoryAuthService::new()));
        assert!(submitter.try_next().is_none());
        assert!(submitter.drain().is_empty());
    }

    #[test]
    fn test_calls_do_not_block_caller() -> std::io::Result<()> {
        let service = Arc::new(
            MemoryAuthService::new()
                .with_account("a@b.co", "password123")
                .with_delay(Duration::from_millis(200)),
        );
        let submitter = Submitter::new(service.clone());

        submitter.submit(submission("a@b.co", "password123"))?;
        assert!(submitter.try_next().is_none());

        assert!(submitter.next_timeout(Duration::from_secs(5)).is_some());
        assert_eq!(service.attempt_count(), 1);
        Ok(())
    }
}
