//! Program pane with instruction colouring and the program counter

use super::border_style;
use crate::program::Instruction;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which character of the program to mark, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramHighlight {
    None,
    /// Next instruction to execute
    ProgramCounter(usize),
    /// Position reported by the bracket check
    Error(usize),
}

impl ProgramHighlight {
    fn index(self) -> Option<usize> {
        match self {
            ProgramHighlight::None => None,
            ProgramHighlight::ProgramCounter(i) | ProgramHighlight::Error(i) => Some(i),
        }
    }
}

fn char_style(c: char) -> Style {
    match Instruction::from_char(c) {
        Some(Instruction::Breakpoint) => Style::default()
            .fg(DEFAULT_THEME.breakpoint)
            .add_modifier(Modifier::BOLD),
        Some(i) if i.is_loop() => Style::default().fg(DEFAULT_THEME.bracket),
        Some(_) => Style::default().fg(DEFAULT_THEME.fg),
        None => Style::default().fg(DEFAULT_THEME.comment),
    }
}

/// Split the program into styled lines
///
/// Character indices keep counting across newlines, so the highlight index is
/// the same character index the engine reports. Returns the lines and the line
/// holding the highlight.
fn styled_lines(source: &str, highlight: ProgramHighlight) -> (Vec<Line<'static>>, Option<usize>) {
    let target = highlight.index();
    let marker = match highlight {
        ProgramHighlight::Error(_) => Style::default().bg(DEFAULT_THEME.error).fg(Color::Black),
        _ => Style::default()
            .bg(DEFAULT_THEME.pointer_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    };

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();
    let mut highlight_line = None;

    for (index, c) in source.chars().enumerate() {
        let is_target = target == Some(index);
        if c == '\n' {
            if !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            if is_target {
                // Highlight on a newline shows as a trailing block
                spans.push(Span::styled(" ", marker));
                highlight_line = Some(lines.len());
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
            continue;
        }

        let style = if is_target { marker } else { char_style(c) };
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        if is_target {
            highlight_line = Some(lines.len());
        }
        run_style = style;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    lines.push(Line::from(spans));

    (lines, highlight_line)
}

/// Render the program pane, scrolling so the highlighted line stays visible
pub fn render_program_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    highlight: ProgramHighlight,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Program ")
        .borders(Borders::ALL)
        .border_style(border_style(true));

    let (lines, highlight_line) = styled_lines(source, highlight);
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders

    if let Some(line) = highlight_line {
        if line < *scroll_offset {
            *scroll_offset = line;
        } else if line >= *scroll_offset + visible_height {
            *scroll_offset = line + 1 - visible_height;
        }
    }
    *scroll_offset = (*scroll_offset).min(lines.len().saturating_sub(1));

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_preserve_text() {
        let (lines, at) = styled_lines("+[-]\n>.", ProgramHighlight::None);
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "+[-]");
        assert_eq!(line_text(&lines[1]), ">.");
        assert_eq!(at, None);
    }

    #[test]
    fn test_highlight_counts_across_newlines() {
        let (lines, at) = styled_lines("++\n+.", ProgramHighlight::ProgramCounter(4));
        assert_eq!(at, Some(1));
        let marked: Vec<_> = lines[1]
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(DEFAULT_THEME.pointer_bg))
            .collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].content, ".");
    }

    #[test]
    fn test_error_highlight_uses_error_colour() {
        let (lines, at) = styled_lines("+]", ProgramHighlight::Error(1));
        assert_eq!(at, Some(0));
        assert!(lines[0]
            .spans
            .iter()
            .any(|s| s.content == "]" && s.style.bg == Some(DEFAULT_THEME.error)));
    }
}
