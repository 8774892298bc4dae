//! Home mode state type.

/// Home page with no overlay - home keybindings active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeMode;
