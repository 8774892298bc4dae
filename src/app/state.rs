//! Core application state: the page the user is on, which overlay is open
//! and the sign-in form behind the modal.

use crate::auth::{AuthError, AuthService, Completion, Submitter};
use crate::config::Config;
use crate::form::{InputState, Link, LoginForm, Schema};
use crate::state::{AppMode, LoginMode, NoticeMode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Page shown behind the overlays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page
    #[default]
    Home,
    /// Target of "Forgot Password?"
    ForgotPassword,
    /// Target of "Sign Up"
    SignUp,
}

impl Route {
    /// Page heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::ForgotPassword => "Forgot Password",
            Self::SignUp => "Sign Up",
        }
    }
}

impl From<Link> for Route {
    fn from(link: Link) -> Self {
        match link {
            Link::ForgotPassword => Self::ForgotPassword,
            Link::SignUp => Self::SignUp,
        }
    }
}

/// Whether the sign-in modal is showing, as seen by the header and overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalVisibility {
    /// Modal is on screen
    Open,
    /// Modal is hidden
    Closed,
}

impl ModalVisibility {
    /// Whether the modal is on screen
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Request to change the modal's visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginIntent {
    /// Show the modal with a fresh form
    Open,
    /// Hide the modal and discard the form
    Close,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Rules the form is validated against
    pub schema: Schema,

    /// Current mode; the modal is open exactly when this is `AppMode::Login`
    pub mode: AppMode,

    /// Page behind the overlays
    pub route: Route,

    /// Sign-in form backing the modal
    pub form: LoginForm,

    /// Email of the account signed in during this session
    pub signed_in: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,

    submitter: Submitter,
}

impl App {
    /// Create a new application state.
    ///
    /// The modal starts open when `config.open_on_start` is set.
    #[must_use]
    pub fn new(config: Config, service: Arc<dyn AuthService>) -> Self {
        let mode = if config.open_on_start {
            AppMode::login()
        } else {
            AppMode::home()
        };

        Self {
            schema: config.validation.clone(),
            config,
            mode,
            route: Route::Home,
            form: LoginForm::new(),
            signed_in: None,
            should_quit: false,
            submitter: Submitter::new(service),
        }
    }

    /// Service sign-in calls are made against
    #[must_use]
    pub const fn auth_service(&self) -> &Arc<dyn AuthService> {
        self.submitter.service()
    }

    /// Visibility of the sign-in modal
    #[must_use]
    pub const fn login_visibility(&self) -> ModalVisibility {
        if self.mode.is_login() {
            ModalVisibility::Open
        } else {
            ModalVisibility::Closed
        }
    }

    /// Apply a mode transition.
    ///
    /// Entering or leaving the sign-in modal resets the form, so a reopened
    /// modal never shows values, errors or a pending submission from before.
    pub fn apply_mode(&mut self, next: AppMode) {
        if self.mode == next {
            return;
        }

        debug!(new_mode = next.name(), old_mode = self.mode.name(), "Applying mode transition");

        if self.mode.is_login() != next.is_login() {
            self.form.reset();
        }
        self.mode = next;
    }

    /// Return to the home mode.
    pub fn exit_mode(&mut self) {
        self.apply_mode(AppMode::home());
    }

    /// Open or close the sign-in modal
    pub fn handle_login_intent(&mut self, intent: LoginIntent) {
        match intent {
            LoginIntent::Open => self.open_login(),
            LoginIntent::Close => self.close_login(),
        }
    }

    /// Show the sign-in modal with a fresh form (no-op if it is already open)
    pub fn open_login(&mut self) {
        self.apply_mode(LoginMode.into());
    }

    /// Hide the sign-in modal and discard the form (no-op if it is closed)
    pub fn close_login(&mut self) {
        if self.mode.is_login() {
            self.exit_mode();
        }
    }

    /// Show a notice modal
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.apply_mode(
            NoticeMode {
                message: message.into(),
            }
            .into(),
        );
    }

    /// Switch the page behind the overlays
    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            info!(
                from = self.route_path_for(self.route),
                to = self.route_path_for(route),
                "Navigating"
            );
        }
        self.route = route;
    }

    /// Close the modal and follow one of its links
    pub fn follow_link(&mut self, link: Link) {
        self.close_login();
        self.navigate(link.into());
    }

    /// Path of the current page
    #[must_use]
    pub fn route_path(&self) -> &str {
        self.route_path_for(self.route)
    }

    fn route_path_for(&self, route: Route) -> &str {
        match route {
            Route::Home => "/",
            Route::ForgotPassword => &self.config.forgot_password_route,
            Route::SignUp => &self.config.sign_up_route,
        }
    }

    /// Apply `edit` to the focused text input of the form, re-validating it
    /// once a submit has been attempted. Returns `false` when focus is not on
    /// a text input.
    pub fn edit_login_input(&mut self, edit: impl FnOnce(&mut InputState)) -> bool {
        self.form.edit_focused(&self.schema, edit)
    }

    /// Flip the "remember me" checkbox
    pub fn toggle_remember_me(&mut self) {
        self.form.toggle_remember_me(&self.schema);
    }

    /// Whether a sign-in answer is pending
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.form.status().is_submitting()
    }

    /// Validate the form and, if it passes, send the sign-in request in the
    /// background. Validation errors are shown on the form and nothing is
    /// sent.
    pub fn submit_login(&mut self) {
        let submission = match self.form.begin_submit(&self.schema) {
            Ok(submission) => submission,
            Err(err) => {
                debug!(field = %err.field, "Sign-in blocked by validation");
                return;
            }
        };

        let id = submission.id;
        info!(
            %id,
            email = %submission.credentials.email,
            remember_me = submission.credentials.remember_me,
            "Submitting sign-in"
        );

        if let Err(err) = self.submitter.submit(submission) {
            warn!(%id, error = %err, "Failed to start sign-in request");
            self.apply_completion(Completion {
                id,
                outcome: Err(AuthError::Transport(err.to_string())),
            });
        }
    }

    /// Apply every sign-in answer that has arrived.
    ///
    /// Returns how many answers were applied to the form; answers for a
    /// submission that is no longer pending are dropped.
    pub fn poll_submissions(&mut self) -> usize {
        let mut applied = 0;
        for completion in self.submitter.drain() {
            if self.apply_completion(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Block up to `timeout` for the next sign-in answer and apply it.
    ///
    /// Returns `true` if an answer was applied to the form.
    pub fn wait_for_submission(&mut self, timeout: Duration) -> bool {
        self.submitter
            .next_timeout(timeout)
            .is_some_and(|completion| self.apply_completion(completion))
    }

    fn apply_completion(&mut self, completion: Completion) -> bool {
        let Completion { id, outcome } = completion;
        match self.form.complete_submit(id, outcome) {
            None => false,
            Some(Ok(())) => {
                self.on_signed_in();
                true
            }
            Some(Err(err)) => {
                info!(%id, error = %err.message, "Sign-in refused");
                true
            }
        }
    }

    fn on_signed_in(&mut self) {
        let email = self.form.email.value().to_string();
        info!(%email, "Signed in");
        self.signed_in = Some(email.clone());

        if self.config.close_on_success {
            self.show_notice(format!("Signed in as {email}"));
        }
    }
}
