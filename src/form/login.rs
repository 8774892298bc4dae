//! Sign-in form state machine
//!
//! A `LoginForm` holds what the user typed, the errors currently shown and
//! where the form is in its submit cycle:
//!
//! ```text
//! Editing --submit--> Invalid                  (schema rejected, no request)
//! Editing --submit--> Submitting(id) --> Failed     (error under email)
//!                                    \-> Succeeded  (caller decides what next)
//! ```
//!
//! Visibility is not tracked here; the coordinator resets the form whenever
//! the modal opens or closes.

use super::{Field, FieldError, FieldErrors, InputState, LoginValues, Schema};
use crate::auth::{AuthError, AuthService, Credentials};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Returned by [`LoginForm::submit`] if the answer no longer applies.
const DISCARDED_ANSWER: &str = "Sign-in was interrupted, please try again";

/// Identifies one submission, so a late answer can be matched (or ignored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Generate a fresh id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Validated credentials ready to hand to an [`AuthService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Id the answer must carry to be applied
    pub id: SubmissionId,
    /// Values that passed the schema
    pub credentials: Credentials,
}

/// Outbound navigation links shown in the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    /// "Forgot Password?"
    ForgotPassword,
    /// "Sign Up"
    SignUp,
}

impl Link {
    /// Link text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ForgotPassword => "Forgot Password?",
            Self::SignUp => "Sign Up",
        }
    }
}

/// Focusable elements of the modal, in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Email input
    #[default]
    Email,
    /// Password input
    Password,
    /// "Remember me" checkbox
    RememberMe,
    /// "Forgot Password?" link
    ForgotPassword,
    /// "Sign In" button
    Submit,
    /// "Sign Up" link
    SignUp,
}

impl Focus {
    /// Tab order
    pub const ORDER: &'static [Self] = &[
        Self::Email,
        Self::Password,
        Self::RememberMe,
        Self::ForgotPassword,
        Self::Submit,
        Self::SignUp,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    /// Next element in tab order (wraps)
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous element in tab order (wraps)
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// Focus target for a field
    #[must_use]
    pub const fn for_field(field: Field) -> Self {
        match field {
            Field::Email => Self::Email,
            Field::Password => Self::Password,
            Field::RememberMe => Self::RememberMe,
        }
    }

    /// The text field this element edits, if any
    #[must_use]
    pub const fn text_field(self) -> Option<Field> {
        match self {
            Self::Email => Some(Field::Email),
            Self::Password => Some(Field::Password),
            _ => None,
        }
    }

    /// The link this element follows, if any
    #[must_use]
    pub const fn link(self) -> Option<Link> {
        match self {
            Self::ForgotPassword => Some(Link::ForgotPassword),
            Self::SignUp => Some(Link::SignUp),
            _ => None,
        }
    }
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Fresh or being edited
    #[default]
    Editing,
    /// Last submit was rejected by the schema
    Invalid,
    /// Waiting for the authentication service
    Submitting(SubmissionId),
    /// Last submit was refused by the authentication service
    Failed,
    /// Last submit was accepted
    Succeeded,
}

impl FormStatus {
    /// Whether an answer is pending
    #[must_use]
    pub const fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting(_))
    }
}

/// Values, errors and submit state of the sign-in modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email input
    pub email: InputState,
    /// Password input
    pub password: InputState,
    /// "Remember me" checkbox
    pub remember_me: bool,
    /// Focused element
    pub focus: Focus,
    errors: FieldErrors,
    status: FormStatus,
    submitted: bool,
}

impl LoginForm {
    /// An empty form with focus on the email input
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything typed, every error and any pending submission
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Borrowed view of the current values
    #[must_use]
    pub fn values(&self) -> LoginValues<'_> {
        LoginValues {
            email: self.email.value(),
            password: self.password.value(),
            remember_me: self.remember_me,
        }
    }

    /// Errors currently shown
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message shown under `field`, if any
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.message(field)
    }

    /// Current submit state
    #[must_use]
    pub const fn status(&self) -> FormStatus {
        self.status
    }

    /// Whether a submit has been attempted since the form was last reset
    #[must_use]
    pub const fn has_attempted_submit(&self) -> bool {
        self.submitted
    }

    /// Move focus forward
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus backward
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Input backing a text field
    pub const fn input_mut(&mut self, field: Field) -> Option<&mut InputState> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::RememberMe => None,
        }
    }

    /// Apply `edit` to the focused text input.
    ///
    /// Returns `false` (and does nothing) when focus is not on a text input.
    /// After the first submit attempt the edited field is re-validated, which
    /// sets or clears that field's error only.
    pub fn edit_focused(&mut self, schema: &Schema, edit: impl FnOnce(&mut InputState)) -> bool {
        let Some(field) = self.focus.text_field() else {
            return false;
        };
        if let Some(input) = self.input_mut(field) {
            edit(input);
        }
        self.revalidate(field, schema);
        true
    }

    /// Flip the "remember me" checkbox; no other value or error changes
    pub fn toggle_remember_me(&mut self, schema: &Schema) {
        self.set_remember_me(!self.remember_me, schema);
    }

    /// Set the "remember me" checkbox; no other value or error changes
    pub fn set_remember_me(&mut self, checked: bool, schema: &Schema) {
        self.remember_me = checked;
        self.revalidate(Field::RememberMe, schema);
    }

    fn revalidate(&mut self, field: Field, schema: &Schema) {
        if !self.submitted {
            return;
        }
        let error = schema.validate_field(field, self.values().get(field));
        match error {
            Some(error) => self.errors.insert(error),
            None => {
                self.errors.remove(field);
            }
        }
    }

    /// Validate the form and, if it passes, start a submission.
    ///
    /// # Errors
    ///
    /// If any rule fails, every failing field gets its error, focus moves to
    /// the first invalid field and the first error (in field order) is
    /// returned. No submission is started.
    pub fn begin_submit(&mut self, schema: &Schema) -> Result<Submission, FieldError> {
        self.submitted = true;

        let errors = schema.validate(&self.values());
        if let Some(first) = errors.first().cloned() {
            debug!(field = %first.field, invalid = errors.len(), "Sign-in form failed validation");
            self.errors = errors;
            self.status = FormStatus::Invalid;
            self.focus = Focus::for_field(first.field);
            return Err(first);
        }

        self.errors.clear();
        let id = SubmissionId::new();
        self.status = FormStatus::Submitting(id);
        debug!(%id, "Sign-in submission started");

        Ok(Submission {
            id,
            credentials: Credentials::new(
                self.email.value(),
                self.password.value(),
                self.remember_me,
            ),
        })
    }

    /// Apply the service's answer to submission `id`.
    ///
    /// Answers for anything but the submission currently pending (the form was
    /// reset, or a newer submit superseded it) are ignored and `None` is
    /// returned. A refusal is stored under the email field.
    pub fn complete_submit(
        &mut self,
        id: SubmissionId,
        outcome: Result<(), AuthError>,
    ) -> Option<Result<(), FieldError>> {
        if self.status != FormStatus::Submitting(id) {
            debug!(%id, "Discarding sign-in result for a submission that is no longer pending");
            return None;
        }

        match outcome {
            Ok(()) => {
                self.status = FormStatus::Succeeded;
                debug!(%id, "Sign-in succeeded");
                Some(Ok(()))
            }
            Err(err) => {
                let error = FieldError::authentication(err.message());
                self.errors.insert(error.clone());
                self.status = FormStatus::Failed;
                debug!(%id, "Sign-in refused");
                Some(Err(error))
            }
        }
    }

    /// Validate, then sign in through `service` and wait for the answer.
    ///
    /// # Errors
    ///
    /// Returns the first validation error (the service is not called), or the
    /// service's refusal as an authentication error on the email field.
    pub fn submit(&mut self, schema: &Schema, service: &dyn AuthService) -> Result<(), FieldError> {
        let Submission { id, credentials } = self.begin_submit(schema)?;
        let outcome = service.login(&credentials);
        self.finish_submit(id, outcome)
    }

    /// `complete_submit` for a caller waiting on `id`: a discarded answer is
    /// an error, never a sign-in.
    fn finish_submit(
        &mut self,
        id: SubmissionId,
        outcome: Result<(), AuthError>,
    ) -> Result<(), FieldError> {
        self.complete_submit(id, outcome)
            .unwrap_or_else(|| Err(FieldError::authentication(DISCARDED_ANSWER)))
    }
}
