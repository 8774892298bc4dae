//! TUI rendering
//!
//! - `colors`: Color palette definitions
//! - `modals`: Modal/overlay rendering
//!
//! The screen is a one-line header, the current page and a one-line status
//! bar, with the active overlay drawn on top.

mod colors;
mod modals;


use crate::app::{App, Route};
use crate::config::Action;
use crate::state::AppMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_page(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    match &app.mode {
        AppMode::Login(_) => modals::render_login_modal(frame, app),
        AppMode::Help(_) => modals::render_help_overlay(frame, app),
        AppMode::Notice(state) => modals::render_notice_modal(frame, &state.message),
        AppMode::Home(_) => {}
    }
}

fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = Span::styled(
        " signin ",
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    );

    let right = match (&app.signed_in, app.login_visibility().is_open()) {
        (Some(email), _) => Span::styled(
            format!(" {email} "),
            Style::default().fg(colors::ACCENT_POSITIVE),
        ),
        (None, true) => Span::styled(
            " Sign In ",
            Style::default()
                .fg(colors::SELECTED)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        (None, false) => {
            let keys = app.config.keys.format_keys(Action::OpenLogin);
            Span::styled(
                format!(" [{keys}] Sign In "),
                Style::default().fg(colors::TEXT_DIM),
            )
        }
    };

    let right_width = u16::try_from(right.content.chars().count())
        .unwrap_or(0)
        .min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    let left = Paragraph::new(Line::from(title)).style(Style::default().bg(colors::SURFACE));
    frame.render_widget(left, chunks[0]);

    let right = Paragraph::new(Line::from(right))
        .style(Style::default().bg(colors::SURFACE))
        .alignment(Alignment::Right);
    frame.render_widget(right, chunks[1]);
}

fn render_page(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.route.title(),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.route_path(),
            Style::default().fg(colors::TEXT_MUTED),
        )),
        Line::from(""),
    ];

    let body = match (app.route, &app.signed_in) {
        (Route::Home, Some(email)) => format!("Welcome back, {email}."),
        (Route::Home, None) => "You are not signed in.".to_string(),
        (Route::ForgotPassword, _) => "Password reset is handled elsewhere.".to_string(),
        (Route::SignUp, _) => "Account creation is handled elsewhere.".to_string(),
    };
    lines.push(Line::from(Span::styled(
        body,
        Style::default().fg(colors::TEXT_DIM),
    )));

    let page = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        );
    frame.render_widget(page, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = match &app.mode {
        AppMode::Login(_) => {
            "Tab/Shift+Tab: move | Enter: select | Space: toggle | Esc: close".to_string()
        }
        AppMode::Help(_) | AppMode::Notice(_) => "Press any key to dismiss".to_string(),
        AppMode::Home(_) => app.config.keys.status_hints(),
    };

    let status = Paragraph::new(Line::from(Span::styled(
        format!(" {hints} "),
        Style::default().fg(colors::TEXT_DIM),
    )))
    .style(Style::default().bg(colors::SURFACE));
    frame.render_widget(status, area);
}
