use crate::action::ValidIn;
use crate::app::{AppData, Route};
use crate::state::{AppMode, HelpMode, HomeMode, LoginMode};
use anyhow::Result;

/// Home action: open the sign-in modal.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenLoginAction;

impl ValidIn<HomeMode> for OpenLoginAction {
    type NextState = AppMode;

    fn execute(self, _state: HomeMode, _app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        Ok(LoginMode.into())
    }
}

/// Home action: switch the page behind the overlays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigateAction(pub Route);

impl NavigateAction {
    /// Go to the landing page.
    #[must_use]
    pub const fn home() -> Self {
        Self(Route::Home)
    }

    /// Go to the sign-up page.
    #[must_use]
    pub const fn sign_up() -> Self {
        Self(Route::SignUp)
    }

    /// Go to the forgot-password page.
    #[must_use]
    pub const fn forgot_password() -> Self {
        Self(Route::ForgotPassword)
    }
}

impl ValidIn<HomeMode> for NavigateAction {
    type NextState = AppMode;

    fn execute(self, state: HomeMode, app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        app_data.navigate(self.0);
        Ok(state.into())
    }
}

/// Home action: open the help overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpAction;

impl ValidIn<HomeMode> for HelpAction {
    type NextState = AppMode;

    fn execute(self, _state: HomeMode, _app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        Ok(HelpMode.into())
    }
}

/// Home action: quit the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuitAction;

impl ValidIn<HomeMode> for QuitAction {
    type NextState = AppMode;

    fn execute(self, state: HomeMode, app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        app_data.should_quit = true;
        Ok(state.into())
    }
}
