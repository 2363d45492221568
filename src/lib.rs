//! # Introduction
//!
//! Tapedeck runs programs written in the classic eight-instruction tape
//! language (plus a `*` breakpoint marker) on a 30,000-cell byte tape, and
//! lets a host single-step them, run them to the end, or run them to the next
//! breakpoint without ever blocking its own event loop. A terminal UI built
//! with [ratatui](https://docs.rs/ratatui) shows the program counter, a memory
//! dump and the output as the program runs.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → bracket check → Engine::start → step / run (batched ticks) → update event → UI
//! ```
//!
//! 1. [`program`] — program text, the instruction set and bracket validation.
//! 2. [`memory`] — the byte tape: wrapping cells, clamped pointer.
//! 3. [`interpreter`] — control unit, I/O channels, scheduler, events and the
//!    [`interpreter::engine::Engine`] facade.
//! 4. [`snapshot`] — owned copies of engine state.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Instruction set
//!
//! `>` `<` move the pointer, `+` `-` change the current cell, `.` outputs it,
//! `,` reads one input character (zero once input runs out), `[` `]` loop
//! while the current cell is non-zero, `*` is a breakpoint. Everything else is
//! a comment.

pub mod interpreter;
pub mod memory;
pub mod program;
pub mod snapshot;
pub mod ui;

pub use interpreter::engine::{Engine, RunState, TickOutcome};
pub use interpreter::events::Event;
