//! Sign-in modal state type.

/// The sign-in modal is open and owns the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginMode;
