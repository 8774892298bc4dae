use crate::action::ValidIn;
use crate::app::{App, AppData};
use crate::form::{Focus, Link};
use crate::state::{AppMode, LoginMode};
use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Login action: type a character into the focused input.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharInputAction(pub char);

/// Login action: delete previous character (backspace).
#[derive(Debug, Clone, Copy, Default)]
pub struct BackspaceAction;

/// Login action: delete character at cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteAction;

/// Login action: move cursor left.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorLeftAction;

/// Login action: move cursor right.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorRightAction;

/// Login action: move cursor to start of line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorHomeAction;

/// Login action: move cursor to end of line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorEndAction;

/// Login action: clear the focused input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearLineAction;

/// Login action: delete the previous word.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteWordAction;

/// Login action: move focus to the next element.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusNextAction;

/// Login action: move focus to the previous element.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusPrevAction;

/// Login action: flip "remember me".
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleRememberMeAction;

/// Login action: close the modal and follow one of its links.
#[derive(Debug, Clone, Copy)]
pub struct FollowLinkAction(pub Link);

/// Login action: validate and send the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitAction;

/// Login action: close the modal, discarding the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct CancelAction;

/// Login action: activate the focused element (Enter).
///
/// Text inputs and the button submit, the checkbox toggles, links are
/// followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivateAction;

macro_rules! edit_action {
    ($action:ty, |$input:ident, $this:ident| $body:expr) => {
        impl ValidIn<LoginMode> for $action {
            type NextState = AppMode;

            fn execute(
                self,
                state: LoginMode,
                app_data: &mut AppData<'_>,
            ) -> Result<Self::NextState> {
                let $this = self;
                app_data.edit_login_input(|$input| $body);
                Ok(state.into())
            }
        }
    };
}

edit_action!(CharInputAction, |input, this| input.insert_char(this.0));
edit_action!(BackspaceAction, |input, _this| input.backspace());
edit_action!(DeleteAction, |input, _this| input.delete());
edit_action!(CursorLeftAction, |input, _this| input.cursor_left());
edit_action!(CursorRightAction, |input, _this| input.cursor_right());
edit_action!(CursorHomeAction, |input, _this| input.cursor_home());
edit_action!(CursorEndAction, |input, _this| input.cursor_end());
edit_action!(ClearLineAction, |input, _this| input.clear());
edit_action!(DeleteWordAction, |input, _this| input.delete_word());

impl ValidIn<LoginMode> for FocusNextAction {
    type NextState = AppMode;

    fn execute(self, state: LoginMode, app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        app_data.form.focus_next();
        Ok(state.into())
    }
}

impl ValidIn<LoginMode> for FocusPrevAction {
    type NextState = AppMode;

    fn execute(self, state: LoginMode, app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        app_data.form.focus_prev();
        Ok(state.into())
    }
}

impl ValidIn<LoginMode> for ToggleRememberMeAction {
    type NextState = AppMode;

    fn execute(self, state: LoginMode, app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        app_data.toggle_remember_me();
        Ok(state.into())
    }
}

impl ValidIn<LoginMode> for FollowLinkAction {
    type NextState = AppMode;

    fn execute(self, _state: LoginMode, app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        app_data.follow_link(self.0);
        Ok(AppMode::home())
    }
}

impl ValidIn<LoginMode> for SubmitAction {
    type NextState = AppMode;

    fn execute(self, state: LoginMode, app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        app_data.submit_login();
        Ok(state.into())
    }
}

impl ValidIn<LoginMode> for CancelAction {
    type NextState = AppMode;

    fn execute(self, _state: LoginMode, _app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        Ok(AppMode::home())
    }
}

impl ValidIn<LoginMode> for ActivateAction {
    type NextState = AppMode;

    fn execute(self, state: LoginMode, app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        match app_data.form.focus {
            Focus::Email | Focus::Password | Focus::Submit => {
                SubmitAction.execute(state, app_data)
            }
            Focus::RememberMe => ToggleRememberMeAction.execute(state, app_data),
            Focus::ForgotPassword => {
                FollowLinkAction(Link::ForgotPassword).execute(state, app_data)
            }
            Focus::SignUp => FollowLinkAction(Link::SignUp).execute(state, app_data),
        }
    }
}

/// Dispatch a raw key event while the sign-in modal is open.
///
/// # Errors
///
/// Returns an error if the dispatched action fails.
pub fn dispatch_login_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
    let mut app_data = AppData::new(app);
    let state = LoginMode;
    let on_text = app_data.form.focus.text_field().is_some();

    let next = match (code, modifiers) {
        (KeyCode::Esc, _) => CancelAction.execute(state, &mut app_data)?,
        (KeyCode::Tab | KeyCode::Down, _) => FocusNextAction.execute(state, &mut app_data)?,
        (KeyCode::BackTab | KeyCode::Up, _) => FocusPrevAction.execute(state, &mut app_data)?,
        (KeyCode::Enter, _) => ActivateAction.execute(state, &mut app_data)?,
        (KeyCode::Char(' '), _) if !on_text => ActivateAction.execute(state, &mut app_data)?,
        (KeyCode::Char('u' | 'U'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            ClearLineAction.execute(state, &mut app_data)?
        }
        (KeyCode::Char('w' | 'W'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            DeleteWordAction.execute(state, &mut app_data)?
        }
        // AltGr arrives as Ctrl+Alt and still types a character
        (KeyCode::Char(_), mods)
            if mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::ALT) =>
        {
            state.into()
        }
        (KeyCode::Char(c), _) => CharInputAction(c).execute(state, &mut app_data)?,
        (KeyCode::Backspace, _) => BackspaceAction.execute(state, &mut app_data)?,
        (KeyCode::Delete, _) => DeleteAction.execute(state, &mut app_data)?,
        (KeyCode::Left, _) => CursorLeftAction.execute(state, &mut app_data)?,
        (KeyCode::Right, _) => CursorRightAction.execute(state, &mut app_data)?,
        (KeyCode::Home, _) => CursorHomeAction.execute(state, &mut app_data)?,
        (KeyCode::End, _) => CursorEndAction.execute(state, &mut app_data)?,

        _ => state.into(),
    };

    app_data.apply_mode(next);
    Ok(())
}
