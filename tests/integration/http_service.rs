//! The modal against a mock HTTP sign-in endpoint

use crate::common::{EMAIL, PASSWORD, press, type_text};
use mockito::Matcher;
use ratatui::crossterm::event::KeyCode;
use signin::App;
use signin::config::Config;
use signin::form::Field;
use std::sync::Arc;
use std::time::Duration;

fn app_for(server: &mockito::Server) -> App {
    let config = Config {
        auth_url: format!("{}/api/auth/login", server.url()),
        request_timeout_ms: 3_000,
        ..Config::default()
    };
    let service = Arc::new(config.auth_service());
    App::new(config, service)
}

fn sign_in(app: &mut App, email: &str, password: &str) -> anyhow::Result<()> {
    type_text(app, email)?;
    press(app, KeyCode::Tab)?;
    type_text(app, password)?;
    press(app, KeyCode::Enter)?;
    Ok(())
}

#[test]
fn test_accepted_by_server() -> anyhow::Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(serde_json::json!({
            "email": EMAIL,
            "password": PASSWORD,
            "rememberMe": false,
        })))
        .with_status(200)
        .with_body("{}")
        .create();

    let mut app = app_for(&server);
    sign_in(&mut app, EMAIL, PASSWORD)?;
    assert!(app.wait_for_submission(Duration::from_secs(5)));

    mock.assert();
    assert_eq!(app.signed_in.as_deref(), Some(EMAIL));
    Ok(())
}

#[test]
fn test_server_message_shown_under_email() -> anyhow::Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Account is locked"}"#)
        .create();

    let mut app = app_for(&server);
    sign_in(&mut app, EMAIL, PASSWORD)?;
    assert!(app.wait_for_submission(Duration::from_secs(5)));

    mock.assert();
    assert!(app.login_visibility().is_open());
    assert_eq!(app.form.error(Field::Email), Some("Account is locked"));
    assert_eq!(app.form.error(Field::Password), None);
    Ok(())
}

#[test]
fn test_invalid_input_sends_no_request() -> anyhow::Result<()> {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/api/auth/login").expect(0).create();

    let mut app = app_for(&server);
    sign_in(&mut app, "not-an-email", PASSWORD)?;
    assert!(!app.wait_for_submission(Duration::from_millis(200)));

    mock.assert();
    assert_eq!(
        app.form.error(Field::Email),
        Some("Enter a valid email address")
    );
    Ok(())
}

#[test]
fn test_unreachable_server_is_reported() -> anyhow::Result<()> {
    let config = Config {
        auth_url: "http://127.0.0.1:1/api/auth/login".to_string(),
        request_timeout_ms: 2_000,
        ..Config::default()
    };
    let service = Arc::new(config.auth_service());
    let mut app = App::new(config, service);

    sign_in(&mut app, EMAIL, PASSWORD)?;
    assert!(app.wait_for_submission(Duration::from_secs(5)));

    let message = app.form.error(Field::Email).unwrap_or_default();
    assert!(message.starts_with("Could not reach the sign-in service"));
    Ok(())
}
