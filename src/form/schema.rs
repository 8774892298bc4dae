//! Declarative validation rules
//!
//! A [`Schema`] is plain data: for each field, an ordered list of checks with
//! the message to show when the check fails. It can be built in code or
//! loaded from the config file, and is evaluated synchronously before any
//! sign-in request is made.

use super::{Field, FieldError, FieldErrors, FieldValue, LoginValues};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Longest accepted email address, in bytes.
const MAX_EMAIL_LEN: usize = 254;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok()
});

/// Whether `value` looks like an email address
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    value.len() <= MAX_EMAIL_LEN && EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// A single predicate over a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Text must contain something other than whitespace
    Required,
    /// Text must look like an email address
    Email,
    /// Text must have at least this many characters
    MinLength(usize),
    /// Text must have at most this many characters
    MaxLength(usize),
    /// Text must contain an ASCII digit
    ContainsDigit,
    /// Text must contain an alphabetic character
    ContainsLetter,
    /// Checkbox must be ticked
    Checked,
}

impl Check {
    /// Name used in config files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::MinLength(_) => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::ContainsDigit => "contains_digit",
            Self::ContainsLetter => "contains_letter",
            Self::Checked => "checked",
        }
    }

    /// Same kind of check, ignoring any length parameter
    #[must_use]
    pub fn same_kind(self, other: Self) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }

    /// Evaluate the check.
    ///
    /// Text checks pass on checkbox values and `Checked` passes on text, so a
    /// rule attached to the wrong kind of field never blocks submission.
    #[must_use]
    pub fn passes(self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Self::Required, FieldValue::Text(text)) => !text.trim().is_empty(),
            (Self::Email, FieldValue::Text(text)) => is_valid_email(text),
            (Self::MinLength(min), FieldValue::Text(text)) => text.chars().count() >= min,
            (Self::MaxLength(max), FieldValue::Text(text)) => text.chars().count() <= max,
            (Self::ContainsDigit, FieldValue::Text(text)) => {
                text.chars().any(|c| c.is_ascii_digit())
            }
            (Self::ContainsLetter, FieldValue::Text(text)) => text.chars().any(char::is_alphabetic),
            (Self::Checked, FieldValue::Flag(checked)) => checked,
            (Self::Checked, FieldValue::Text(_)) | (_, FieldValue::Flag(_)) => true,
        }
    }
}

/// A check plus the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Predicate to evaluate
    pub check: Check,
    /// Message stored in the field's error slot on failure
    pub message: String,
}

impl Rule {
    /// Create a rule
    #[must_use]
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }
}

/// Checks a sign-in rule table must always contain. Without them an empty or
/// malformed email, or an empty password, would reach the service.
const REQUIRED_CHECKS: &[(Field, Check)] = &[
    (Field::Email, Check::Required),
    (Field::Email, Check::Email),
    (Field::Password, Check::Required),
    (Field::Password, Check::MinLength(DEFAULT_MIN_PASSWORD_LEN)),
];

/// A rule table that dropped one of the checks every sign-in form keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the {field} rules must include the `{}` check", .check.name())]
pub struct MissingCheck {
    /// Field whose rules are incomplete
    pub field: Field,
    /// Kind of check that is missing (any length satisfies `min_length`)
    pub check: Check,
}

/// Rule table for the sign-in form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    rules: BTreeMap<Field, Vec<Rule>>,
}

/// Default minimum password length.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;

impl Default for Schema {
    fn default() -> Self {
        Self::login(DEFAULT_MIN_PASSWORD_LEN)
    }
}

impl Schema {
    /// A schema with no rules
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// The standard sign-in rules: required, well-formed email and a required
    /// password of at least `min_password_len` characters.
    #[must_use]
    pub fn login(min_password_len: usize) -> Self {
        Self::empty()
            .with_rules(
                Field::Email,
                vec![
                    Rule::new(Check::Required, "Email is required"),
                    Rule::new(Check::Email, "Enter a valid email address"),
                ],
            )
            .with_rules(
                Field::Password,
                vec![
                    Rule::new(Check::Required, "Password is required"),
                    Rule::new(
                        Check::MinLength(min_password_len),
                        format!("Password must be at least {min_password_len} characters"),
                    ),
                ],
            )
    }

    /// Replace the rules for `field`
    #[must_use]
    pub fn with_rules(mut self, field: Field, rules: Vec<Rule>) -> Self {
        self.rules.insert(field, rules);
        self
    }

    /// Append one rule to `field`
    #[must_use]
    pub fn with_rule(mut self, field: Field, rule: Rule) -> Self {
        self.rules.entry(field).or_default().push(rule);
        self
    }

    /// Give every field the table does not mention its default rules.
    ///
    /// A field listed in the table keeps exactly the rules listed for it.
    pub fn merge_defaults(&mut self) {
        for (field, rules) in Self::default().rules {
            self.rules.entry(field).or_insert(rules);
        }
    }

    /// Make sure the checks that keep bad input away from the service are
    /// still present.
    ///
    /// # Errors
    ///
    /// Returns the first missing check: email must be required and
    /// email-shaped, password must be required and have a minimum length.
    pub fn ensure_required_checks(&self) -> Result<(), MissingCheck> {
        REQUIRED_CHECKS.iter().try_for_each(|&(field, check)| {
            if self
                .rules_for(field)
                .iter()
                .any(|rule| rule.check.same_kind(check))
            {
                Ok(())
            } else {
                Err(MissingCheck { field, check })
            }
        })
    }

    /// Rules attached to `field`, in evaluation order
    #[must_use]
    pub fn rules_for(&self, field: Field) -> &[Rule] {
        self.rules.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Validate one field; the first failing rule wins.
    #[must_use]
    pub fn validate_field(&self, field: Field, value: FieldValue<'_>) -> Option<FieldError> {
        self.rules_for(field)
            .iter()
            .find(|rule| !rule.check.passes(value))
            .map(|rule| FieldError::validation(field, rule.message.clone()))
    }

    /// Validate every field of the form
    #[must_use]
    pub fn validate(&self, values: &LoginValues<'_>) -> FieldErrors {
        Field::ALL
            .iter()
            .filter_map(|&field| self.validate_field(field, values.get(field)))
            .collect()
    }
}
