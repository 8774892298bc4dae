//! signin - terminal sign-in form
//!
//! A sign-in modal (email, password, "remember me") in front of a small
//! terminal app. Input is checked against a declarative rule table before
//! anything is sent; accepted credentials are handed to an authentication
//! service in the background and its refusal is shown under the email field.

pub mod action;
pub mod app;
pub mod auth;
pub mod config;
pub mod form;
pub mod paths;
pub mod state;
pub mod tui;

pub use app::App;
pub use auth::{AuthError, AuthService, Credentials};
pub use config::Config;
pub use form::{LoginForm, Schema};
pub use state::AppMode;
