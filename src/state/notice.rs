//! Notice modal state type.

/// Notice modal - displaying a one-off message (e.g. a completed sign-in).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeMode {
    /// Message shown in the modal.
    pub message: String,
}
