//! Byte-cell tape
//!
//! [`Tape`] owns [`TAPE_SIZE`] cells, all zero on creation. Cell arithmetic
//! wraps modulo 256; pointer movement through [`Tape::move_left`] and
//! [`Tape::move_right`] clamps at both ends and never wraps.

use crate::interpreter::constants::{MAX_POINTER, TAPE_SIZE};

/// Fixed-size tape of byte cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
}

impl Tape {
    /// Create a zeroed tape
    pub fn new() -> Self {
        Tape {
            cells: vec![0; TAPE_SIZE],
        }
    }

    /// Add one to the cell, wrapping 255 to 0
    pub fn increment(&mut self, pointer: usize) {
        let cell = &mut self.cells[pointer];
        *cell = cell.wrapping_add(1);
    }

    /// Subtract one from the cell, wrapping 0 to 255
    pub fn decrement(&mut self, pointer: usize) {
        let cell = &mut self.cells[pointer];
        *cell = cell.wrapping_sub(1);
    }

    pub fn read(&self, pointer: usize) -> u8 {
        self.cells[pointer]
    }

    pub fn write(&mut self, pointer: usize, value: u8) {
        self.cells[pointer] = value;
    }

    /// Pointer one cell to the left, or unchanged at address 0
    pub fn move_left(pointer: usize) -> usize {
        if pointer > 0 {
            pointer - 1
        } else {
            pointer
        }
    }

    /// Pointer one cell to the right, or unchanged at the last address
    pub fn move_right(pointer: usize) -> usize {
        if pointer < MAX_POINTER {
            pointer + 1
        } else {
            pointer
        }
    }

    /// All cells in address order
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tape_is_zeroed() {
        let tape = Tape::new();
        assert_eq!(tape.len(), TAPE_SIZE);
        assert!(tape.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_increment_wraps_to_zero() {
        let mut tape = Tape::new();
        tape.write(7, 255);
        tape.increment(7);
        assert_eq!(tape.read(7), 0);
    }

    #[test]
    fn test_decrement_wraps_to_255() {
        let mut tape = Tape::new();
        tape.decrement(0);
        assert_eq!(tape.read(0), 255);
        // Neighbours untouched
        assert_eq!(tape.read(1), 0);
    }

    #[test]
    fn test_pointer_clamps_at_edges() {
        assert_eq!(Tape::move_left(0), 0);
        assert_eq!(Tape::move_left(10), 9);
        assert_eq!(Tape::move_right(MAX_POINTER), MAX_POINTER);
        assert_eq!(Tape::move_right(MAX_POINTER - 1), MAX_POINTER);
    }
}
