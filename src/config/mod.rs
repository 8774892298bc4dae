//! Configuration management for signin

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use crate::auth::HttpAuthService;
use crate::form::Schema;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Endpoint that sign-in requests are sent to (`POST`)
    #[serde(default = "default_auth_url")]
    pub auth_url: String,

    /// Time limit for a whole sign-in request, in milliseconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    /// Event loop tick in milliseconds (also how often answers are picked up)
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Show the sign-in modal as soon as the app starts
    #[serde(default = "default_true")]
    pub open_on_start: bool,

    /// Close the modal after a successful sign-in
    #[serde(default = "default_true")]
    pub close_on_success: bool,

    /// Path shown by the "Forgot Password?" page
    #[serde(default = "default_forgot_password_route")]
    pub forgot_password_route: String,

    /// Path shown by the "Sign Up" page
    #[serde(default = "default_sign_up_route")]
    pub sign_up_route: String,

    /// Rules applied to the form before anything is sent
    #[serde(default)]
    pub validation: Schema,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

fn default_auth_url() -> String {
    "http://localhost:3000/api/auth/login".to_string()
}

const fn default_request_timeout() -> u64 {
    10_000
}

const fn default_poll_interval() -> u64 {
    100
}

const fn default_true() -> bool {
    true
}

fn default_forgot_password_route() -> String {
    "/forgotpassword".to_string()
}

fn default_sign_up_route() -> String {
    "/register".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            request_timeout_ms: default_request_timeout(),
            poll_interval_ms: default_poll_interval(),
            open_on_start: true,
            close_on_success: true,
            forgot_password_route: default_forgot_password_route(),
            sign_up_route: default_sign_up_route(),
            validation: Schema::default(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        // Fields the file leaves out keep their default rules
        config.validation.merge_defaults();
        config
            .validation
            .ensure_required_checks()
            .with_context(|| format!("Invalid validation rules in {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        crate::paths::config_file()
    }

    /// Sign-in request time limit
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Event loop tick
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// HTTP client for the configured endpoint
    #[must_use]
    pub fn auth_service(&self) -> HttpAuthService {
        HttpAuthService::new(self.auth_url.clone(), self.request_timeout())
    }
}
