//! Home page keys, links out of the modal and overlays

use crate::common::{EMAIL, TestFixture, press, press_with, type_text};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use signin::app::Route;
use signin::config::Config;
use signin::form::{Focus, LoginForm};
use signin::state::{AppMode, HelpMode};
use std::time::Duration;

fn closed_on_start() -> TestFixture {
    let config = Config {
        open_on_start: false,
        ..Config::default()
    };
    TestFixture::with_config(config, Duration::ZERO)
}

#[test]
fn test_modal_open_on_start() {
    let fixture = TestFixture::new();
    assert!(fixture.app.login_visibility().is_open());
    assert_eq!(fixture.app.form.focus, Focus::Email);
}

#[test]
fn test_forgot_password_link() -> anyhow::Result<()> {
    let mut fixture = TestFixture::new();
    type_text(&mut fixture.app, EMAIL)?;
    for _ in 0..3 {
        press(&mut fixture.app, KeyCode::Tab)?;
    }
    assert_eq!(fixture.app.form.focus, Focus::ForgotPassword);
    press(&mut fixture.app, KeyCode::Enter)?;

    assert!(!fixture.app.login_visibility().is_open());
    assert_eq!(fixture.app.route, Route::ForgotPassword);
    assert_eq!(fixture.app.route_path(), "/forgotpassword");
    assert_eq!(fixture.app.form, LoginForm::new());
    Ok(())
}

#[test]
fn test_sign_up_link_is_last_in_tab_order() -> anyhow::Result<()> {
    let mut fixture = TestFixture::new();
    press_with(&mut fixture.app, KeyCode::BackTab, KeyModifiers::SHIFT)?;
    assert_eq!(fixture.app.form.focus, Focus::SignUp);
    press(&mut fixture.app, KeyCode::Enter)?;

    assert_eq!(fixture.app.route, Route::SignUp);
    assert_eq!(fixture.app.route_path(), "/register");
    Ok(())
}

#[test]
fn test_home_keys() -> anyhow::Result<()> {
    let mut fixture = closed_on_start();
    assert!(!fixture.app.login_visibility().is_open());

    press(&mut fixture.app, KeyCode::Char('f'))?;
    assert_eq!(fixture.app.route, Route::ForgotPassword);
    press(&mut fixture.app, KeyCode::Char('h'))?;
    assert_eq!(fixture.app.route, Route::Home);

    press(&mut fixture.app, KeyCode::Char('?'))?;
    assert_eq!(fixture.app.mode, AppMode::Help(HelpMode));
    press(&mut fixture.app, KeyCode::Esc)?;
    assert_eq!(fixture.app.mode, AppMode::home());

    press(&mut fixture.app, KeyCode::Char('l'))?;
    assert!(fixture.app.login_visibility().is_open());
    Ok(())
}

#[test]
fn test_quit_keys() -> anyhow::Result<()> {
    let mut fixture = closed_on_start();
    press(&mut fixture.app, KeyCode::Char('q'))?;
    assert!(fixture.app.should_quit);

    let mut fixture = TestFixture::new();
    press_with(&mut fixture.app, KeyCode::Char('c'), KeyModifiers::CONTROL)?;
    assert!(fixture.app.should_quit);
    assert_eq!(fixture.service.attempt_count(), 0);
    Ok(())
}
