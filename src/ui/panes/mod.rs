//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`program`]: program text with the program counter highlighted
//! - [`memory`]: tape dump around a scroll offset with the pointer highlighted
//! - [`terminal`]: pending input and accumulated output
//! - [`status`]: status bar with keybindings and run state
//! - `utils`: memory dump layout shared by the panes
//!
//! Each pane module exports a primary `render_*_pane()` function that takes
//! the data it shows by reference; scroll state lives in [`App`](super::App).

mod utils;

pub mod memory;
pub mod program;
pub mod status;
pub mod terminal;

pub use memory::render_memory_pane;
pub use program::{render_program_pane, ProgramHighlight};
pub use status::render_status_bar;
pub use terminal::{render_input_pane, render_output_pane};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
