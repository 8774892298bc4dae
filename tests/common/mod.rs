//! Common test utilities shared across integration tests

pub mod fixture;

pub use fixture::{EMAIL, PASSWORD, TestFixture, press, press_with, type_text};
