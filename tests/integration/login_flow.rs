//! Sign-in flows through the modal

use crate::common::{EMAIL, PASSWORD, TestFixture, press, type_text};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::KeyCode;
use signin::config::Config;
use signin::form::{Field, FormStatus, LoginForm};
use signin::state::{AppMode, NoticeMode};
use std::time::Duration;

#[test]
fn test_successful_sign_in_closes_modal_with_notice() -> anyhow::Result<()> {
    let mut fixture = TestFixture::new();
    fixture.fill(EMAIL, PASSWORD)?;
    press(&mut fixture.app, KeyCode::Enter)?;

    assert!(fixture.settle());

    assert_eq!(fixture.app.signed_in.as_deref(), Some(EMAIL));
    assert_eq!(
        fixture.app.mode,
        AppMode::Notice(NoticeMode {
            message: format!("Signed in as {EMAIL}"),
        })
    );

    // Any key dismisses the notice
    press(&mut fixture.app, KeyCode::Char('x'))?;
    assert_eq!(fixture.app.mode, AppMode::home());
    Ok(())
}

#[test]
fn test_remember_me_is_sent() -> anyhow::Result<()> {
    let mut fixture = TestFixture::new();
    fixture.fill(EMAIL, PASSWORD)?;
    press(&mut fixture.app, KeyCode::Tab)?;
    press(&mut fixture.app, KeyCode::Char(' '))?;
    assert!(fixture.app.form.remember_me);

    press(&mut fixture.app, KeyCode::Tab)?;
    press(&mut fixture.app, KeyCode::Tab)?;
    press(&mut fixture.app, KeyCode::Enter)?;
    assert!(fixture.settle());

    let attempts = fixture.service.attempts();
    assert_eq!(attempts.len(), 1);
    assert!(attempts[0].remember_me);
    assert!(attempts[0].accepted);
    Ok(())
}

#[test]
fn test_wrong_password_keeps_modal_open_with_email_error() -> anyhow::Result<()> {
    let mut fixture = TestFixture::new();
    fixture.fill(EMAIL, "not-the-password")?;
    press(&mut fixture.app, KeyCode::Enter)?;
    assert!(fixture.settle());

    assert!(fixture.app.login_visibility().is_open());
    assert_eq!(fixture.app.form.error(Field::Email), Some("Invalid credentials"));
    assert_eq!(fixture.app.form.status(), FormStatus::Failed);
    assert_eq!(fixture.app.signed_in, None);
    Ok(())
}

#[test]
fn test_invalid_input_never_calls_service() -> anyhow::Result<()> {
    let mut fixture = TestFixture::new();
    fixture.fill("user@", "short")?;
    press(&mut fixture.app, KeyCode::Enter)?;

    assert_eq!(
        fixture.app.form.error(Field::Email),
        Some("Enter a valid email address")
    );
    assert_eq!(
        fixture.app.form.error(Field::Password),
        Some("Password must be at least 8 characters")
    );
    assert_eq!(fixture.app.poll_submissions(), 0);
    assert_eq!(fixture.service.attempt_count(), 0);
    Ok(())
}

#[test]
fn test_fixing_fields_after_submit_clears_errors_as_you_type() -> anyhow::Result<()> {
    let mut fixture = TestFixture::new();
    fixture.fill("user", "pass")?;
    press(&mut fixture.app, KeyCode::Enter)?;
    assert_eq!(fixture.app.form.errors().len(), 2);

    // Focus moved to the first invalid field (email)
    type_text(&mut fixture.app, "@example.com")?;
    assert_eq!(fixture.app.form.error(Field::Email), None);
    assert!(fixture.app.form.error(Field::Password).is_some());

    press(&mut fixture.app, KeyCode::Tab)?;
    type_text(&mut fixture.app, "word")?;
    assert!(fixture.app.form.errors().is_empty());
    Ok(())
}

#[test]
fn test_escape_discards_everything() -> anyhow::Result<()> {
    let mut fixture = TestFixture::new();
    fixture.fill("user", "pass")?;
    press(&mut fixture.app, KeyCode::Enter)?;
    press(&mut fixture.app, KeyCode::Esc)?;

    assert!(!fixture.app.login_visibility().is_open());

    press(&mut fixture.app, KeyCode::Char('l'))?;
    assert!(fixture.app.login_visibility().is_open());
    assert_eq!(fixture.app.form, LoginForm::new());
    Ok(())
}

#[test]
fn test_answer_arriving_after_close_is_ignored() -> anyhow::Result<()> {
    let mut fixture = TestFixture::with_config(Config::default(), Duration::from_millis(150));
    fixture.fill(EMAIL, "not-the-password")?;
    press(&mut fixture.app, KeyCode::Enter)?;
    assert!(fixture.app.is_submitting());

    press(&mut fixture.app, KeyCode::Esc)?;
    press(&mut fixture.app, KeyCode::Enter)?;

    assert!(!fixture.settle());
    assert!(fixture.app.login_visibility().is_open());
    assert_eq!(fixture.app.form, LoginForm::new());
    assert_eq!(fixture.service.attempt_count(), 1);
    Ok(())
}

#[test]
fn test_resubmit_while_pending_uses_latest_answer() -> anyhow::Result<()> {
    let mut fixture = TestFixture::with_config(Config::default(), Duration::from_millis(100));
    fixture.fill(EMAIL, "not-the-password")?;
    press(&mut fixture.app, KeyCode::Enter)?;

    // Fix the password and submit again before the first answer is back
    for _ in 0.."not-the-password".len() {
        press(&mut fixture.app, KeyCode::Backspace)?;
    }
    type_text(&mut fixture.app, PASSWORD)?;
    press(&mut fixture.app, KeyCode::Enter)?;

    // Only the answer to the latest submission is applied
    let applied = [fixture.settle(), fixture.settle()];
    assert_eq!(applied.iter().filter(|applied| **applied).count(), 1);
    assert_eq!(fixture.app.signed_in.as_deref(), Some(EMAIL));
    assert_eq!(fixture.app.form.error(Field::Email), None);
    Ok(())
}

#[test]
fn test_stays_open_on_success_when_configured() -> anyhow::Result<()> {
    let config = Config {
        close_on_success: false,
        ..Config::default()
    };
    let mut fixture = TestFixture::with_config(config, Duration::ZERO);
    fixture.fill(EMAIL, PASSWORD)?;
    press(&mut fixture.app, KeyCode::Enter)?;
    assert!(fixture.settle());

    assert!(fixture.app.login_visibility().is_open());
    assert_eq!(fixture.app.form.status(), FormStatus::Succeeded);
    assert_eq!(fixture.app.form.email.value(), EMAIL);
    Ok(())
}
