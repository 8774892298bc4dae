//! Terminal User Interface for signin

pub mod input;
pub mod render;

use crate::app::{App, Event, EventSource};
use anyhow::{Context, Result};
use ratatui::crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or restored, or if
/// drawing or reading input fails.
pub fn run(app: &mut App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventSource::new(app.config.poll_interval());
    info!(tick_ms = app.config.poll_interval_ms, "Starting TUI");

    let result = run_loop(&mut terminal, app, events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: EventSource,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        match events.next()? {
            Event::Tick => {
                let applied = app.poll_submissions();
                if applied > 0 {
                    debug!(applied, "Applied sign-in answers");
                }
            }
            Event::Key(key) => {
                input::handle_key_event(app, key.code, key.modifiers)?;
            }
            Event::Mouse(_) | Event::Resize(_, _) => {}
        }

        if app.should_quit {
            info!("Quitting");
            break;
        }
    }

    Ok(())
}
