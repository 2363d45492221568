//! Main TUI application state and logic

use crate::interpreter::engine::{Engine, RunState, TickOutcome};
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::events::Event;
use crate::program::check_brackets;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use super::panes::ProgramHighlight;

/// Longest the event loop waits for a key before polling the engine again
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Cells moved by PageUp / PageDown in the memory pane (one full dump page)
const MEMORY_PAGE: usize = 64 * 8;

/// Which pane receives scroll keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Memory,
    Output,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Memory => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Memory,
        }
    }
}

/// The main application state
pub struct App {
    /// The engine instance
    pub engine: Engine,

    /// Program text loaded on every fresh start
    pub source_code: String,

    /// Input text handed to every fresh start
    pub input_text: String,

    /// Update notifications from the engine
    updates: Receiver<Event>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// First tape address shown in the memory pane
    pub memory_offset: usize,

    /// Per-pane scroll offsets
    pub program_scroll: usize,
    pub output_scroll: usize,

    /// Index reported by the last failed bracket check
    pub error_index: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the screen must be redrawn
    dirty: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around `engine` for the given program and input
    pub fn new(mut engine: Engine, source_code: String, input_text: String) -> Self {
        let updates = engine.subscribe();
        App {
            engine,
            source_code,
            input_text,
            updates,
            focused_pane: FocusedPane::Memory,
            memory_offset: 0,
            program_scroll: 0,
            output_scroll: 0,
            error_index: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            dirty: true,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.dirty {
                terminal.draw(|f| self.render(f))?;
                self.dirty = false;
            }

            if self.should_quit {
                break;
            }

            self.tick();

            // Wake up in time for the next batch
            let timeout = self
                .engine
                .next_tick_in()
                .map_or(INPUT_POLL, |wait| wait.min(INPUT_POLL));
            if event::poll(timeout)? {
                match event::read()? {
                    TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                        self.dirty = true;
                    }
                    TermEvent::Resize(_, _) => self.dirty = true,
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Let the engine run a due batch and pick up its notifications
    pub fn tick(&mut self) {
        if let Some(outcome) = self.engine.poll() {
            self.status_message = match outcome {
                TickOutcome::Yielded => "Running...".to_string(),
                TickOutcome::Finished => "Program finished".to_string(),
                TickOutcome::Breakpoint => {
                    format!("Breakpoint at {}", self.engine.program_counter())
                }
                TickOutcome::Faulted(e) => format!("Error: {}", e),
            };
            self.output_scroll = usize::MAX;
        }
        if self.updates.try_iter().count() > 0 {
            self.dirty = true;
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        // Left column: Program (top) | Input | Output
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(60),
                Constraint::Percentage(15),
                Constraint::Percentage(25),
            ])
            .split(columns[0]);

        super::panes::render_program_pane(
            frame,
            left_rows[0],
            &self.source_code,
            self.program_highlight(),
            &mut self.program_scroll,
        );

        let pending_input = if self.engine.is_halted() {
            self.input_text.clone()
        } else {
            self.engine.input_remaining()
        };
        super::panes::render_input_pane(frame, left_rows[1], &pending_input);

        super::panes::render_output_pane(
            frame,
            left_rows[2],
            self.engine.output(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_memory_pane(
            frame,
            columns[1],
            self.engine.memory(),
            self.engine.memory_pointer(),
            self.memory_offset,
            self.focused_pane == FocusedPane::Memory,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.engine.run_state(),
            self.engine.program_counter(),
            self.error_index.is_some() || self.engine.last_error().is_some(),
        );
    }

    /// What the program pane should mark
    pub fn program_highlight(&self) -> ProgramHighlight {
        if let Some(index) = self.error_index {
            ProgramHighlight::Error(index)
        } else if let Some(pc) = self.engine.last_error().and_then(RuntimeError::pc) {
            ProgramHighlight::Error(pc)
        } else if self.engine.is_halted() {
            ProgramHighlight::None
        } else {
            ProgramHighlight::ProgramCounter(self.engine.program_counter())
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.run_to_end(),
            KeyCode::Char('b') => self.run_to_breakpoint(),
            KeyCode::Char('s') | KeyCode::Right => self.step(1),
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                self.step(n);
            }
            KeyCode::Char('p') => self.pause(),
            KeyCode::Char(' ') => {
                // Toggle pause/resume (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.engine.is_batch_active() {
                        self.pause();
                    } else {
                        self.run_to_end();
                    }
                }
            }
            KeyCode::Char('x') | KeyCode::Esc => {
                self.engine.stop();
                self.status_message = "Stopped".to_string();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => self.scroll(-1),
            KeyCode::Down => self.scroll(1),
            KeyCode::PageUp => self.scroll_memory_by(-(MEMORY_PAGE as isize)),
            KeyCode::PageDown => self.scroll_memory_by(MEMORY_PAGE as isize),
            KeyCode::Home => {
                self.memory_offset = 0;
            }
            KeyCode::End => {
                // Jump the dump to the cell under the pointer
                self.memory_offset = self.engine.memory_pointer();
            }
            _ => {}
        }
    }

    fn scroll(&mut self, rows: isize) {
        match self.focused_pane {
            FocusedPane::Memory => self.scroll_memory_by(rows * 8),
            FocusedPane::Output => {
                self.output_scroll = self.output_scroll.saturating_add_signed(rows);
            }
        }
    }

    fn scroll_memory_by(&mut self, cells: isize) {
        let max = self.engine.memory().len().saturating_sub(1);
        self.memory_offset = self.memory_offset.saturating_add_signed(cells).min(max);
    }

    /// Validate and load the program if the engine is halted
    ///
    /// Returns false when the bracket check failed.
    fn ensure_started(&mut self) -> bool {
        if !self.engine.is_halted() {
            return true;
        }
        if let Err(e) = check_brackets(&self.source_code) {
            self.error_index = Some(e.index);
            self.status_message = e.to_string();
            return false;
        }
        self.error_index = None;
        self.program_scroll = 0;
        self.output_scroll = 0;
        if let Err(e) = self.engine.start(&self.source_code, &self.input_text) {
            self.status_message = format!("Error: {}", e);
            return false;
        }
        true
    }

    fn run_to_end(&mut self) {
        if !self.ensure_started() {
            return;
        }
        self.status_message = match self.engine.run_to_end() {
            Ok(()) => "Running...".to_string(),
            Err(e) => format!("Cannot run: {}", e),
        };
    }

    fn run_to_breakpoint(&mut self) {
        if !self.ensure_started() {
            return;
        }
        self.status_message = match self.engine.run_to_breakpoint() {
            Ok(()) => "Running to breakpoint...".to_string(),
            Err(e) => format!("Cannot run: {}", e),
        };
    }

    fn step(&mut self, count: usize) {
        if !self.ensure_started() {
            return;
        }
        self.status_message = match self.engine.step_many(count) {
            Ok(stepped) if self.engine.is_halted() => {
                format!("Stepped {} step(s), program finished", stepped)
            }
            Ok(stepped) => format!("Stepped forward {} step(s)", stepped),
            Err(e) => format!("Error: {}", e),
        };
        // Auto-scroll output to bottom
        self.output_scroll = usize::MAX;
    }

    fn pause(&mut self) {
        self.status_message = match self.engine.pause() {
            Ok(()) => format!("Paused at {}", self.engine.program_counter()),
            Err(e) => e.to_string(),
        };
    }

    /// Run state shown in the status bar
    pub fn run_state(&self) -> RunState {
        self.engine.run_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app(source: &str, input: &str) -> App {
        App::new(Engine::new(), source.to_string(), input.to_string())
    }

    #[test]
    fn test_step_key_starts_and_steps() {
        let mut app = app("++.", "");
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.run_state(), RunState::Paused);
        assert_eq!(app.engine.memory()[0], 1);
        assert_eq!(
            app.program_highlight(),
            ProgramHighlight::ProgramCounter(1)
        );

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.run_state(), RunState::Halted);
        assert_eq!(app.engine.output(), "\u{2}");
        assert_eq!(app.program_highlight(), ProgramHighlight::None);
    }

    #[test]
    fn test_unbalanced_program_is_not_started() {
        let mut app = app("+[", "");
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.run_state(), RunState::Halted);
        assert_eq!(app.error_index, Some(1));
        assert!(app.status_message.starts_with("Unbalanced brackets"));
        assert_eq!(app.program_highlight(), ProgramHighlight::Error(1));
    }

    #[test]
    fn test_run_pause_stop_keys() {
        let mut app = app("+[]", "");
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.run_state(), RunState::RunningContinuous);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.run_state(), RunState::Paused);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.run_state(), RunState::Halted);
    }

    #[test]
    fn test_memory_scroll_is_clamped() {
        let mut app = app("+", "");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.memory_offset, 0);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.memory_offset, 8);
        for _ in 0..100 {
            press(&mut app, KeyCode::PageDown);
        }
        assert_eq!(app.memory_offset, 29_999);
    }
}
