//! Compile-time state types.
//!
//! Each mode is a marker type so that actions can declare which modes they
//! are valid in; `AppMode` is the runtime union stored on `App`.

mod help;
mod home;
mod login;
mod notice;

pub use help::HelpMode;
pub use home::HomeMode;
pub use login::LoginMode;
pub use notice::NoticeMode;

/// Runtime mode of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Home page, no overlay.
    Home(HomeMode),
    /// Sign-in modal open.
    Login(LoginMode),
    /// Help overlay.
    Help(HelpMode),
    /// Notice modal.
    Notice(NoticeMode),
}

impl Default for AppMode {
    fn default() -> Self {
        Self::home()
    }
}

impl AppMode {
    /// Convenience constructor for `AppMode::Home`.
    #[must_use]
    pub const fn home() -> Self {
        Self::Home(HomeMode)
    }

    /// Convenience constructor for `AppMode::Login`.
    #[must_use]
    pub const fn login() -> Self {
        Self::Login(LoginMode)
    }

    /// Whether the sign-in modal is the active mode.
    #[must_use]
    pub const fn is_login(&self) -> bool {
        matches!(self, Self::Login(_))
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home(_) => "home",
            Self::Login(_) => "login",
            Self::Help(_) => "help",
            Self::Notice(_) => "notice",
        }
    }
}

impl From<HomeMode> for AppMode {
    fn from(state: HomeMode) -> Self {
        Self::Home(state)
    }
}

impl From<LoginMode> for AppMode {
    fn from(state: LoginMode) -> Self {
        Self::Login(state)
    }
}

impl From<HelpMode> for AppMode {
    fn from(state: HelpMode) -> Self {
        Self::Help(state)
    }
}

impl From<NoticeMode> for AppMode {
    fn from(state: NoticeMode) -> Self {
        Self::Notice(state)
    }
}
