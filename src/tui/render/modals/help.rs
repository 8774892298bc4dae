//! Help overlay rendering

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect_absolute;
use crate::app::App;
use crate::config::Action;
use crate::tui::render::colors;

/// Keys inside the sign-in modal; these are fixed.
const FORM_KEYS: &[(&str, &str)] = &[
    ("Tab/Down", "Next field"),
    ("BackTab/Up", "Previous field"),
    ("Enter", "Submit, follow link or toggle"),
    ("Space", "Toggle remember me"),
    ("Ctrl+u", "Clear field"),
    ("Ctrl+w", "Delete word"),
    ("Esc", "Close the form"),
];

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame<'_>, app: &App) {
    let mut lines = vec![section("Keybindings"), Line::from("")];

    lines.extend(Action::ALL_FOR_HELP.iter().map(|&action| {
        Line::from(Span::styled(
            app.config.keys.help_line(action),
            Style::default().fg(colors::TEXT_PRIMARY),
        ))
    }));

    lines.push(Line::from(""));
    lines.push(section("Sign-in form"));
    lines.push(Line::from(""));
    lines.extend(FORM_KEYS.iter().map(|(keys, description)| {
        Line::from(vec![
            Span::styled(format!("  {keys:<10} "), Style::default().fg(colors::TEXT_DIM)),
            Span::styled(*description, Style::default().fg(colors::TEXT_PRIMARY)),
        ])
    }));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    let max_height = frame.area().height.saturating_sub(2);
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(max_height);
    let area = centered_rect_absolute(60, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
