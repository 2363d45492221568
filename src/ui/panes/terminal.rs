//! Input and output panes

use super::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the input not yet consumed by the program
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str) {
    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let paragraph = if input.is_empty() {
        Paragraph::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment))
    } else {
        Paragraph::new(input.to_string()).style(Style::default().fg(DEFAULT_THEME.fg))
    };
    frame.render_widget(paragraph.block(block), area);
}

/// Render the program output, keeping the tail visible unless scrolled back
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if output.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    // Control characters other than newline would garble the terminal
    let lines: Vec<Line> = output
        .split('\n')
        .map(|line| {
            let printable: String = line
                .chars()
                .map(|c| if c.is_control() { '.' } else { c })
                .collect();
            Line::from(printable)
        })
        .collect();

    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_lines > visible_height {
        let max_scroll = total_lines - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(visible)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg));
    frame.render_widget(paragraph, area);
}
