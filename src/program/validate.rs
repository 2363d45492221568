//! Bracket-balance validation
//!
//! The engine never validates its input: an unbalanced program only fails when
//! a bad jump is actually taken. Hosts call [`check_brackets`] before
//! [`Engine::start`](crate::interpreter::engine::Engine::start) so the user
//! sees the problem up front.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketErrorKind {
    /// A `]` closed more loops than were open
    UnexpectedClose,
    /// At least one `[` was never closed
    Unclosed,
}

/// Where the bracket check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketError {
    /// Character index to highlight. For [`BracketErrorKind::Unclosed`] this is
    /// the last character of the program.
    pub index: usize,
    pub kind: BracketErrorKind,
}

impl fmt::Display for BracketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BracketErrorKind::UnexpectedClose => {
                write!(f, "Unbalanced brackets: unexpected ']' at {}", self.index)
            }
            BracketErrorKind::Unclosed => {
                write!(f, "Unbalanced brackets: unclosed '[' (end at {})", self.index)
            }
        }
    }
}

impl std::error::Error for BracketError {}

/// Check that every `[` has a matching `]` and vice versa
pub fn check_brackets(code: &str) -> Result<(), BracketError> {
    let mut depth: i64 = 0;
    let mut len = 0;
    for (index, c) in code.chars().enumerate() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Err(BracketError {
                index,
                kind: BracketErrorKind::UnexpectedClose,
            });
        }
        len = index + 1;
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(BracketError {
            index: len - 1,
            kind: BracketErrorKind::Unclosed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced() {
        assert_eq!(check_brackets(""), Ok(()));
        assert_eq!(check_brackets("+[->[+]<]comment"), Ok(()));
    }

    #[test]
    fn test_unexpected_close() {
        assert_eq!(
            check_brackets("+]["),
            Err(BracketError {
                index: 1,
                kind: BracketErrorKind::UnexpectedClose
            })
        );
    }

    #[test]
    fn test_unclosed_reports_last_index() {
        let err = check_brackets("[[-] ").unwrap_err();
        assert_eq!(err.kind, BracketErrorKind::Unclosed);
        assert_eq!(err.index, 4);
    }
}
