//! Sign-in modal rendering

use ratatui::{
    Frame,
    layout::{Alignment, Margin, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect_absolute;
use crate::app::App;
use crate::form::{Field, Focus, FormStatus, InputState, Link, LoginForm};
use crate::tui::render::colors;

/// Rows inside the border: blank, then label/input/error for email and
/// password, blank, checkbox row, blank, button, blank, two sign-up rows.
const CONTENT_ROWS: u16 = 14;
const EMAIL_INPUT_ROW: u16 = 2;
const PASSWORD_INPUT_ROW: u16 = 5;

const PASSWORD_MASK: char = '•';

/// One text input, already scrolled so the cursor is visible
struct InputView {
    line: Line<'static>,
    cursor_x: u16,
}

fn input_view(
    input: &InputState,
    placeholder: &str,
    masked: bool,
    focused: bool,
    width: u16,
) -> InputView {
    let width = usize::from(width.max(1));
    let bg = if focused {
        colors::INPUT_BG_FOCUSED
    } else {
        colors::INPUT_BG
    };

    if input.is_empty() {
        let text = format!("{placeholder:<width$}");
        return InputView {
            line: Line::from(Span::styled(
                text,
                Style::default().fg(colors::TEXT_MUTED).bg(bg),
            )),
            cursor_x: 0,
        };
    }

    let shown: Vec<char> = if masked {
        input.masked(PASSWORD_MASK).chars().collect()
    } else {
        input.value().chars().collect()
    };
    let cursor = input.cursor_column();
    // Keep one column free for the cursor at end of text
    let scroll = (cursor + 1).saturating_sub(width);
    let visible: String = shown.iter().skip(scroll).take(width).collect();
    let text = format!("{visible:<width$}");

    InputView {
        line: Line::from(Span::styled(
            text,
            Style::default().fg(colors::TEXT_PRIMARY).bg(bg),
        )),
        cursor_x: u16::try_from(cursor - scroll).unwrap_or(0),
    }
}

fn label(text: &str, focused: bool) -> Line<'_> {
    let style = if focused {
        Style::default()
            .fg(colors::SELECTED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_DIM)
    };
    Line::from(Span::styled(text, style))
}

fn error_line(form: &LoginForm, field: Field) -> Line<'_> {
    form.error(field).map_or_else(
        || Line::from(""),
        |message| {
            Line::from(Span::styled(
                message,
                Style::default().fg(colors::MODAL_BORDER_ERROR),
            ))
        },
    )
}

fn link_style(focused: bool) -> Style {
    let style = Style::default()
        .fg(colors::SELECTED)
        .add_modifier(Modifier::UNDERLINED);
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

fn checkbox_row(form: &LoginForm, width: u16) -> Line<'static> {
    let mark = if form.remember_me { "[x]" } else { "[ ]" };
    let checkbox_style = if form.focus == Focus::RememberMe {
        Style::default()
            .fg(colors::SELECTED)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(colors::TEXT_PRIMARY)
    };

    let left = format!("{mark} Remember me");
    let right = Link::ForgotPassword.label();
    let gap = usize::from(width)
        .saturating_sub(left.chars().count() + right.chars().count())
        .max(1);

    Line::from(vec![
        Span::styled(left, checkbox_style),
        Span::raw(" ".repeat(gap)),
        Span::styled(right, link_style(form.focus == Focus::ForgotPassword)),
    ])
}

fn button_row(form: &LoginForm) -> Line<'static> {
    let (text, color) = match form.status() {
        FormStatus::Submitting(_) => ("[ Signing in… ]", colors::ACCENT_WARNING),
        _ => ("[ Sign In ]", colors::SELECTED),
    };
    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if form.focus == Focus::Submit {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Line::from(Span::styled(text, style)).alignment(Alignment::Center)
}

/// Size and position of the sign-in modal
pub fn login_modal_rect(area: Rect) -> Rect {
    centered_rect_absolute(60, CONTENT_ROWS + 2, area)
}

/// Render the sign-in modal and place the terminal cursor in the focused
/// text input
pub fn render_login_modal(frame: &mut Frame<'_>, app: &App) {
    let form = &app.form;
    let area = login_modal_rect(frame.area());
    let border_color = if form.status() == FormStatus::Failed {
        colors::MODAL_BORDER_ERROR
    } else {
        colors::BORDER
    };
    let block = Block::default()
        .title(" Sign In ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let content = block.inner(area).inner(Margin::new(1, 0));

    let email = input_view(
        &form.email,
        "Enter your email",
        false,
        form.focus == Focus::Email,
        content.width,
    );
    let password = input_view(
        &form.password,
        "Enter your password",
        true,
        form.focus == Focus::Password,
        content.width,
    );
    let email_cursor = email.cursor_x;
    let password_cursor = password.cursor_x;

    let lines = vec![
        Line::from(""),
        label("Email", form.focus == Focus::Email),
        email.line,
        error_line(form, Field::Email),
        label("Password", form.focus == Focus::Password),
        password.line,
        error_line(form, Field::Password),
        Line::from(""),
        checkbox_row(form, content.width),
        Line::from(""),
        button_row(form),
        Line::from(""),
        Line::from(Span::styled(
            "Don't have an account?",
            Style::default().fg(colors::TEXT_DIM),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            Link::SignUp.label(),
            link_style(form.focus == Focus::SignUp).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::MODAL_BG)),
        area,
    );
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), content);

    let cursor = match form.focus {
        Focus::Email => Some((email_cursor, EMAIL_INPUT_ROW)),
        Focus::Password => Some((password_cursor, PASSWORD_INPUT_ROW)),
        _ => None,
    };
    if let Some((x, y)) = cursor
        && y < content.height
    {
        frame.set_cursor_position(Position::new(content.x + x, content.y + y));
    }
}
