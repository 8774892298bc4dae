//! Shared application data/context for action execution.

use super::App;

/// Mutable access to the application state while an action executes.
#[derive(Debug)]
pub struct AppData<'a> {
    /// The application being driven.
    pub app: &'a mut App,
}

impl<'a> AppData<'a> {
    /// Wrap an `App` for action execution.
    #[must_use]
    pub const fn new(app: &'a mut App) -> Self {
        Self { app }
    }
}

impl std::ops::Deref for AppData<'_> {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        self.app
    }
}

impl std::ops::DerefMut for AppData<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.app
    }
}
