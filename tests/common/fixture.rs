//! App fixture driven through the same key routing as the terminal

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use signin::App;
use signin::auth::MemoryAuthService;
use signin::config::Config;
use signin::tui::input::handle_key_event;
use std::sync::Arc;
use std::time::Duration;

/// Account known to the fixture's in-memory service
pub const EMAIL: &str = "user@example.com";
/// Password of [`EMAIL`]
pub const PASSWORD: &str = "password123";

/// An `App` backed by an in-memory service the test can inspect
#[derive(Debug)]
pub struct TestFixture {
    /// App under test
    pub app: App,
    /// Service the app signs in against
    pub service: Arc<MemoryAuthService>,
}

impl TestFixture {
    /// Default config (modal open on start) and one known account
    pub fn new() -> Self {
        Self::with_config(Config::default(), Duration::ZERO)
    }

    /// Custom config; every sign-in answer is delayed by `delay`
    pub fn with_config(config: Config, delay: Duration) -> Self {
        let service = Arc::new(
            MemoryAuthService::new()
                .with_account(EMAIL, PASSWORD)
                .with_delay(delay),
        );
        let app = App::new(config, service.clone());
        Self { app, service }
    }

    /// Type credentials into the modal the way a user would
    pub fn fill(&mut self, email: &str, password: &str) -> anyhow::Result<()> {
        type_text(&mut self.app, email)?;
        press(&mut self.app, KeyCode::Tab)?;
        type_text(&mut self.app, password)?;
        Ok(())
    }

    /// Wait for the pending sign-in answer and apply it
    pub fn settle(&mut self) -> bool {
        self.app.wait_for_submission(Duration::from_secs(5))
    }
}

/// Press a key without modifiers
pub fn press(app: &mut App, code: KeyCode) -> anyhow::Result<()> {
    handle_key_event(app, code, KeyModifiers::NONE)
}

/// Press a key with modifiers
pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
    handle_key_event(app, code, modifiers)
}

/// Type each character of `text`
pub fn type_text(app: &mut App, text: &str) -> anyhow::Result<()> {
    for c in text.chars() {
        press(app, KeyCode::Char(c))?;
    }
    Ok(())
}
