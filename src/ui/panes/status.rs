//! Status bar rendering with keybindings and run state

use crate::interpreter::engine::RunState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn state_badge(state: RunState, has_error: bool) -> (&'static str, Color) {
    if has_error {
        return (" Error ", DEFAULT_THEME.error);
    }
    match state {
        RunState::Halted => (" Idle ", DEFAULT_THEME.comment),
        RunState::Paused => (" Paused ", DEFAULT_THEME.secondary),
        RunState::RunningContinuous => (" Running ", DEFAULT_THEME.success),
        RunState::RunningBreakpoint => (" Running to * ", DEFAULT_THEME.success),
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    state: RunState,
    program_counter: usize,
    has_error: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (badge, badge_color) = state_badge(state, has_error);
    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" PC {} ", program_counter),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.primary),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if has_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.border_focused)
        .add_modifier(Modifier::BOLD);
    let label = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);
    let hints = [
        ("r", "run"),
        ("b", "to *"),
        ("s", "step"),
        ("1-9", "step n"),
        ("p", "pause"),
        ("x", "stop"),
        ("q", "quit"),
    ];
    let mut right_spans = Vec::with_capacity(hints.len() * 2);
    for (k, l) in hints {
        right_spans.push(Span::styled(format!(" {}", k), key));
        right_spans.push(Span::styled(format!(" {} ", l), label));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
