//! Sign-in form: field model, validation schema and form state

mod input;
mod login;
mod schema;

pub use input::InputState;
pub use login::{Focus, FormStatus, Link, LoginForm, Submission, SubmissionId};
pub use schema::{Check, DEFAULT_MIN_PASSWORD_LEN, MissingCheck, Rule, Schema, is_valid_email};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A named input of the sign-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Email address
    Email,
    /// Password
    Password,
    /// "Remember me" checkbox
    RememberMe,
}

impl Field {
    /// All fields, in validation and display order.
    pub const ALL: &'static [Self] = &[Self::Email, Self::Password, Self::RememberMe];

    /// Label shown next to the input
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::RememberMe => "Remember me",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::RememberMe => "rememberMe",
        };
        f.write_str(name)
    }
}

/// Where a field error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// Rejected by the local schema; the service was not contacted
    Validation,
    /// Rejected by the authentication service after submission
    Authentication,
}

/// An error message attached to one form field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Field whose error slot holds the message
    pub field: Field,
    /// Origin of the error
    pub kind: FieldErrorKind,
    /// Human-readable message shown under the field
    pub message: String,
}

impl FieldError {
    /// Create a schema validation error
    #[must_use]
    pub fn validation(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Create an authentication error.
    ///
    /// Sign-in failures are always reported under the email field, whichever
    /// credential was wrong.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self {
            field: Field::Email,
            kind: FieldErrorKind::Authentication,
            message: message.into(),
        }
    }

    /// Whether the error came from the local schema
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind, FieldErrorKind::Validation)
    }
}

/// Field-scoped errors currently shown on the form (at most one per field)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    /// Create an empty error set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Store an error in its field's slot, replacing any previous one
    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field, error);
    }

    /// Remove the error for `field`
    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    /// Remove every error
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Error stored for `field`
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message stored for `field`
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(|error| error.message.as_str())
    }

    /// First error in field order
    #[must_use]
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.values().next()
    }

    /// Whether no field has an error
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with an error
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate errors in field order
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

/// The value of one field as seen by the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Text input content
    Text(&'a str),
    /// Checkbox state
    Flag(bool),
}

/// Borrowed snapshot of the form values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginValues<'a> {
    /// Email input content
    pub email: &'a str,
    /// Password input content
    pub password: &'a str,
    /// Checkbox state
    pub remember_me: bool,
}

impl<'a> LoginValues<'a> {
    /// Value of `field`
    #[must_use]
    pub const fn get(&self, field: Field) -> FieldValue<'a> {
        match field {
            Field::Email => FieldValue::Text(self.email),
            Field::Password => FieldValue::Text(self.password),
            Field::RememberMe => FieldValue::Flag(self.remember_me),
        }
    }
}
