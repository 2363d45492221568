//! Runtime error types for the tape interpreter
//!
//! This module defines [`RuntimeError`], which covers both faults raised while
//! executing a program (a jump with no valid target) and calls made to the
//! [`Engine`](super::engine::Engine) in a run state that does not accept them.
//!
//! Rejected calls never touch engine state and never emit an update.
//! A [`RuntimeError::MalformedProgram`] halts the machine at the offending
//! program counter.

use std::fmt;

/// Which kind of bracket failed to find its partner at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// `[` with a zero cell and no matching `]` before the end of the program
    UnmatchedOpen,
    /// `]` with a non-zero cell and an empty loop stack
    UnmatchedClose,
}

/// Errors raised by the execution engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A loop jump had no target
    MalformedProgram { pc: usize, kind: MalformedKind },

    /// The operation is rejected while a batch loop is active
    BatchActive { operation: &'static str },

    /// The operation needs a loaded, non-halted program
    Halted { operation: &'static str },

    /// `start` called while a program is still loaded (not halted)
    AlreadyLoaded,

    /// `pause` called with no batch loop active
    NotRunning,
}

impl RuntimeError {
    /// Program counter of the faulting instruction, if any
    pub fn pc(&self) -> Option<usize> {
        match self {
            RuntimeError::MalformedProgram { pc, .. } => Some(*pc),
            _ => None,
        }
    }

    /// True for errors that only reject a call without executing anything
    pub fn is_rejection(&self) -> bool {
        !matches!(self, RuntimeError::MalformedProgram { .. })
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::MalformedProgram { pc, kind } => match kind {
                MalformedKind::UnmatchedOpen => {
                    write!(f, "Malformed program: '[' at {} has no matching ']'", pc)
                }
                MalformedKind::UnmatchedClose => {
                    write!(f, "Malformed program: ']' at {} has no open loop", pc)
                }
            },
            RuntimeError::BatchActive { operation } => {
                write!(f, "Cannot {} while a run is in progress", operation)
            }
            RuntimeError::Halted { operation } => {
                write!(f, "Cannot {}: program is halted", operation)
            }
            RuntimeError::AlreadyLoaded => {
                write!(f, "Cannot start: a program is already loaded (stop it first)")
            }
            RuntimeError::NotRunning => write!(f, "Cannot pause: nothing is running"),
        }
    }
}

impl std::error::Error for RuntimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_carries_pc() {
        let err = RuntimeError::MalformedProgram {
            pc: 4,
            kind: MalformedKind::UnmatchedClose,
        };
        assert_eq!(err.pc(), Some(4));
        assert!(!err.is_rejection());
        assert_eq!(
            err.to_string(),
            "Malformed program: ']' at 4 has no open loop"
        );
    }

    #[test]
    fn test_rejections() {
        assert!(RuntimeError::NotRunning.is_rejection());
        assert_eq!(RuntimeError::AlreadyLoaded.pc(), None);
        assert_eq!(
            RuntimeError::BatchActive { operation: "step" }.to_string(),
            "Cannot step while a run is in progress"
        );
    }
}
