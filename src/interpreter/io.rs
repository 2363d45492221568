//! Input queue and output accumulator

use std::collections::VecDeque;

/// Pending input characters, consumed from the front
///
/// There is no refill: once empty, every read reports end of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputQueue {
    pending: VecDeque<char>,
}

impl InputQueue {
    pub fn new(input: &str) -> Self {
        InputQueue {
            pending: input.chars().collect(),
        }
    }

    /// Next input byte, or 0 once the queue is exhausted
    ///
    /// Characters above U+00FF keep only their low 8 bits.
    pub fn read_byte(&mut self) -> u8 {
        match self.pending.pop_front() {
            Some(c) => (u32::from(c) & 0xFF) as u8,
            None => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remaining input as text
    pub fn remaining(&self) -> String {
        self.pending.iter().collect()
    }
}

/// Append-only output text for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        OutputBuffer {
            text: String::new(),
        }
    }

    /// Append the character whose code is `byte` (U+0000..U+00FF)
    pub fn write_byte(&mut self, byte: u8) {
        self.text.push(char::from(byte));
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
