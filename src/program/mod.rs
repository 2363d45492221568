//! Program text and instruction decoding
//!
//! - [`instruction`]: the recognized instruction set and its character encoding
//! - [`validate`]: bracket-balance check the host runs before loading a program
//!
//! A [`Program`] is an immutable sequence of characters. Characters outside the
//! instruction set are comments: they are skipped when the program counter
//! advances and never dispatched.

pub mod instruction;
pub mod validate;

pub use instruction::Instruction;
pub use validate::{check_brackets, BracketError, BracketErrorKind};

/// Immutable program text indexed by character position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    chars: Vec<char>,
}

impl Program {
    pub fn new(code: &str) -> Self {
        Program {
            chars: code.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `pc`, or `None` past the end
    pub fn char_at(&self, pc: usize) -> Option<char> {
        self.chars.get(pc).copied()
    }

    /// Decoded instruction at `pc`; comments and out-of-range positions are `None`
    pub fn instruction_at(&self, pc: usize) -> Option<Instruction> {
        self.char_at(pc).and_then(Instruction::from_char)
    }

    /// Position of the first instruction strictly after `pc`, or `len()` if none
    pub fn next_instruction(&self, pc: usize) -> usize {
        let mut next = pc + 1;
        while next < self.chars.len() && Instruction::from_char(self.chars[next]).is_none() {
            next += 1;
        }
        next.min(self.chars.len())
    }

    /// Index of the `]` matching the `[` at `open`
    ///
    /// Counts nesting from `open` itself; returns `None` when the program ends
    /// before the count returns to zero.
    pub fn find_closing_bracket(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (i, &c) in self.chars.iter().enumerate().skip(open) {
            match c {
                '[' => depth += 1,
                ']' => depth = depth.checked_sub(1)?,
                _ => {}
            }
            if depth == 0 {
                return Some(i);
            }
        }
        None
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Program {
    fn from(code: &str) -> Self {
        Program::new(code)
    }
}
