//! Config files feeding the form rules and the app

use crate::common::{EMAIL, PASSWORD, TestFixture};
use signin::config::Config;
use signin::form::Field;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_stricter_rules_from_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "validation": {
                "password": [
                    {"check": "required", "message": "Password is required"},
                    {"check": {"min_length": 12}, "message": "Use at least 12 characters"},
                    {"check": "contains_digit", "message": "Add a number"}
                ],
                "remember_me": [{"check": "checked", "message": "Please tick this"}]
            }
        }"#,
    )?;

    let config = Config::load_from(&path)?;
    let mut fixture = TestFixture::with_config(config, Duration::ZERO);
    fixture.fill("anything", PASSWORD)?;
    fixture.app.submit_login();

    // Email was not mentioned, so it keeps the default rules
    assert_eq!(
        fixture.app.form.error(Field::Email),
        Some("Enter a valid email address")
    );
    assert_eq!(
        fixture.app.form.error(Field::Password),
        Some("Use at least 12 characters")
    );
    assert_eq!(
        fixture.app.form.error(Field::RememberMe),
        Some("Please tick this")
    );
    assert_eq!(fixture.service.attempt_count(), 0);
    Ok(())
}

#[test]
fn test_empty_email_never_sent_with_custom_password_rules() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"validation": {"password": [
            {"check": "required", "message": "Password is required"},
            {"check": {"min_length": 4}, "message": "Use at least 4 characters"}
        ]}}"#,
    )?;

    let config = Config::load_from(&path)?;
    let mut fixture = TestFixture::with_config(config, Duration::ZERO);
    fixture.fill("", PASSWORD)?;
    fixture.app.submit_login();

    assert!(!fixture.app.wait_for_submission(Duration::from_millis(100)));
    assert_eq!(fixture.app.form.error(Field::Email), Some("Email is required"));
    assert_eq!(fixture.service.attempt_count(), 0);

    fixture.app.form.email.set(EMAIL);
    fixture.app.submit_login();
    assert!(fixture.settle());
    assert_eq!(fixture.app.signed_in.as_deref(), Some(EMAIL));
    Ok(())
}

#[test]
fn test_config_without_email_rules_is_refused() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"validation": {"email": [{"check": "required", "message": "Email is required"}]}}"#,
    )?;

    let err = Config::load_from(&path).err().map(|e| format!("{e:#}"));

    assert!(err.is_some_and(|msg| msg.contains("the email rules must include the `email` check")));
    Ok(())
}

#[test]
fn test_saved_config_round_trips() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("nested").join("config.json");

    let config = Config {
        open_on_start: false,
        sign_up_route: "/join".to_string(),
        ..Config::default()
    };
    config.save_to(&path)?;

    assert_eq!(Config::load_from(&path)?, config);
    Ok(())
}
