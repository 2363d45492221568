//! Memory model for the tape interpreter
//!
//! This module provides the single memory abstraction:
//! - [`tape`]: fixed-capacity array of byte cells addressed by a pointer
//!
//! # Arithmetic
//!
//! Cells and the pointer behave differently at their bounds:
//! ```text
//! cell:    255 + 1 → 0      0 - 1 → 255       (wraps)
//! pointer: 0 - 1   → 0      29999 + 1 → 29999 (clamps)
//! ```

pub mod tape;

pub use tape::Tape;
