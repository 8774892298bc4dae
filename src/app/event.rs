//! Terminal input for the main loop
//!
//! The loop blocks on [`EventSource::next`] for at most one poll interval.
//! When nothing arrives it gets a [`Event::Tick`], which is when finished
//! sign-in requests are applied to the form.

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};
use std::time::Duration;

/// One step of input for the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Poll interval elapsed without input
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Mouse input (ignored by the sign-in screen)
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),
}

impl Event {
    /// Map a raw terminal event.
    ///
    /// Key releases and repeats are dropped so a key acts once on terminals
    /// that report both edges; anything else the loop has no use for
    /// becomes a tick.
    #[must_use]
    pub fn from_terminal(raw: CrosstermEvent) -> Self {
        match raw {
            CrosstermEvent::Key(key) if matches!(key.kind, KeyEventKind::Press) => Self::Key(key),
            CrosstermEvent::Mouse(mouse) => Self::Mouse(mouse),
            CrosstermEvent::Resize(columns, rows) => Self::Resize(columns, rows),
            _ => Self::Tick,
        }
    }
}

/// Polls the terminal with a fixed interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSource {
    poll_interval: Duration,
}

impl EventSource {
    /// Poll every `poll_interval`
    #[must_use]
    pub const fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Wait up to one poll interval for input
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be polled or read
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.poll_interval)? {
            Ok(Event::from_terminal(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }

    /// How long [`EventSource::next`] waits before producing a tick
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_key_press_is_forwarded() {
        let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            Event::from_terminal(key(KeyEventKind::Press)),
            Event::Key(press)
        );
    }

    #[test]
    fn test_key_release_and_repeat_are_dropped() {
        assert_eq!(Event::from_terminal(key(KeyEventKind::Release)), Event::Tick);
        assert_eq!(Event::from_terminal(key(KeyEventKind::Repeat)), Event::Tick);
    }

    #[test]
    fn test_resize_and_focus() {
        assert_eq!(
            Event::from_terminal(CrosstermEvent::Resize(80, 24)),
            Event::Resize(80, 24)
        );
        assert_eq!(Event::from_terminal(CrosstermEvent::FocusGained), Event::Tick);
    }

    #[test]
    fn test_poll_interval() {
        let source = EventSource::new(Duration::from_millis(50));
        assert_eq!(source.poll_interval(), Duration::from_millis(50));
    }
}
