//! Key routing: picks the dispatcher for the current mode.

use crate::action::{dispatch_home_mode, dispatch_login_mode, dispatch_overlay_mode};
use crate::app::App;
use crate::state::AppMode;
use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle one key press
///
/// Ctrl+C quits from every mode. Inside the sign-in modal keys edit the
/// form; on the home page they go through the configured keybindings.
///
/// # Errors
///
/// Returns an error if the dispatched action fails.
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
    if matches!(code, KeyCode::Char('c' | 'C')) && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return Ok(());
    }

    match &app.mode {
        AppMode::Login(_) => dispatch_login_mode(app, code, modifiers),
        AppMode::Help(_) | AppMode::Notice(_) => dispatch_overlay_mode(app),
        AppMode::Home(_) => {
            if let Some(action) = app.config.keys.get_action(code, modifiers) {
                dispatch_home_mode(app, action)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Route;
    use crate::auth::MemoryAuthService;
    use crate::config::Config;
    use crate::state::HelpMode;
    use std::sync::Arc;

    fn home_app() -> App {
        let config = Config {
            open_on_start: false,
            ..Config::default()
        };
        App::new(config, Arc::new(MemoryAuthService::new()))
    }

    fn press(app: &mut App, code: KeyCode) -> Result<()> {
        handle_key_event(app, code, KeyModifiers::NONE)
    }

    #[test]
    fn test_home_keys_open_modal() -> Result<()> {
        let mut app = home_app();
        press(&mut app, KeyCode::Char('l'))?;
        assert!(app.login_visibility().is_open());
        Ok(())
    }

    #[test]
    fn test_keys_type_into_modal_not_bindings() -> Result<()> {
        let mut app = home_app();
        press(&mut app, KeyCode::Enter)?;
        press(&mut app, KeyCode::Char('q'))?;

        assert!(!app.should_quit);
        assert_eq!(app.form.email.value(), "q");
        Ok(())
    }

    #[test]
    fn test_help_opens_and_any_key_dismisses() -> Result<()> {
        let mut app = home_app();
        press(&mut app, KeyCode::Char('?'))?;
        assert_eq!(app.mode, AppMode::Help(HelpMode));

        press(&mut app, KeyCode::Char('x'))?;
        assert_eq!(app.mode, AppMode::home());
        Ok(())
    }

    #[test]
    fn test_route_keys() -> Result<()> {
        let mut app = home_app();
        press(&mut app, KeyCode::Char('s'))?;
        assert_eq!(app.route, Route::SignUp);
        press(&mut app, KeyCode::Esc)?;
        assert_eq!(app.route, Route::Home);
        Ok(())
    }

    #[test]
    fn test_ctrl_c_quits_from_modal() -> Result<()> {
        let mut app = home_app();
        app.open_login();
        handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL)?;
        assert!(app.should_quit);
        Ok(())
    }

    #[test]
    fn test_unbound_key_on_home_is_ignored() -> Result<()> {
        let mut app = home_app();
        press(&mut app, KeyCode::Char('z'))?;
        assert_eq!(app.mode, AppMode::home());
        assert!(!app.should_quit);
        Ok(())
    }
}
