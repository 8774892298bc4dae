//! Help overlay state type.

/// Help overlay listing the keybindings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpMode;
