//! Compile-time action types.
//!
//! Every (state, action) pair the app supports is an explicit `ValidIn`
//! impl; the dispatchers below translate key input into those pairs.

mod home;
mod login;
mod overlay;

pub use home::*;
pub use login::*;
pub use overlay::*;

use crate::app::{App, AppData};
use crate::config::Action as KeyAction;
use crate::state::HomeMode;
use anyhow::Result;

/// Marker trait: This action is valid in this state.
///
/// Each impl is an explicit entry in the "registry" of valid combinations.
pub trait ValidIn<State>: Sized {
    /// The next state produced after executing this action in `State`.
    type NextState;

    /// Execute this action in `State`, producing the next state.
    ///
    /// # Errors
    ///
    /// Returns an error if executing the action fails.
    fn execute(self, state: State, app_data: &mut AppData<'_>) -> Result<Self::NextState>;
}

/// Dispatch a keybinding `Action` while in `HomeMode`.
///
/// # Errors
///
/// Returns an error if the dispatched action fails.
pub fn dispatch_home_mode(app: &mut App, action: KeyAction) -> Result<()> {
    let mut app_data = AppData::new(app);

    let next = match action {
        KeyAction::OpenLogin => OpenLoginAction.execute(HomeMode, &mut app_data)?,
        KeyAction::SignUp => NavigateAction::sign_up().execute(HomeMode, &mut app_data)?,
        KeyAction::ForgotPassword => {
            NavigateAction::forgot_password().execute(HomeMode, &mut app_data)?
        }
        KeyAction::Back => NavigateAction::home().execute(HomeMode, &mut app_data)?,
        KeyAction::Help => HelpAction.execute(HomeMode, &mut app_data)?,
        KeyAction::Quit => QuitAction.execute(HomeMode, &mut app_data)?,
    };

    app_data.apply_mode(next);
    Ok(())
}
