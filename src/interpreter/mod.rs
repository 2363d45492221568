//! Tape interpreter execution engine
//!
//! This module provides the core execution logic:
//! - [`machine`]: control unit (program counter, loop stack, dispatch)
//! - [`io`]: input queue and output accumulator
//! - [`scheduler`]: cooperative batch scheduling on an injectable [`scheduler::Clock`]
//! - [`events`]: observer registry for update notifications
//! - [`engine`]: the public [`engine::Engine`] tying the above together
//! - [`errors`]: runtime error types
//!
//! # Execution Model
//!
//! A step dispatches the instruction at PC, then advances PC to the next
//! recognized instruction. Continuous runs execute steps in bounded batches,
//! one batch per scheduler tick, so the host thread is never blocked for
//! longer than one batch.

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod io;
pub mod machine;
pub mod scheduler;
