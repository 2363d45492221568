//! Memory pane: tape dump with the pointer cell highlighted

use super::border_style;
use super::utils::{ascii_column, dump_rows, pad_number, CELLS_PER_ROW, DUMP_ROWS};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render up to [`DUMP_ROWS`] rows of the tape starting at `offset`
pub fn render_memory_pane(
    frame: &mut Frame,
    area: Rect,
    memory: &[u8],
    pointer: usize,
    offset: usize,
    is_focused: bool,
) {
    let value = memory.get(pointer).copied().unwrap_or(0);
    let block = Block::default()
        .title(format!(" Memory (ptr {} = {}) ", pointer, value))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let pointer_style = Style::default()
        .bg(DEFAULT_THEME.pointer_bg)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);
    let cell_style = Style::default().fg(DEFAULT_THEME.fg);
    let zero_style = Style::default().fg(DEFAULT_THEME.comment);

    let visible_height = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = dump_rows(memory, offset, DUMP_ROWS.min(visible_height))
        .into_iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(2 * CELLS_PER_ROW + 2);
            spans.push(Span::styled(
                format!("{}: ", pad_number(row.address, 5)),
                Style::default().fg(DEFAULT_THEME.address),
            ));

            for (i, &cell) in row.cells.iter().enumerate() {
                let style = if row.address + i == pointer {
                    pointer_style
                } else if cell == 0 {
                    zero_style
                } else {
                    cell_style
                };
                spans.push(Span::styled(pad_number(cell as usize, 3), style));
                spans.push(Span::raw(" "));
            }

            for (i, &cell) in row.cells.iter().enumerate() {
                let style = if row.address + i == pointer {
                    pointer_style
                } else {
                    cell_style
                };
                spans.push(Span::styled(ascii_column(cell).to_string(), style));
            }

            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
