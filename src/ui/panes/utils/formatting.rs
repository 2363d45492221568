//! Memory dump layout
//!
//! Rows of [`CELLS_PER_ROW`] cells: a zero-padded 5-digit address, the cells as
//! zero-padded 3-digit decimals, then the same cells as text with control
//! characters shown as `.`.
//!
//! ```text
//! 00008: 072 105 000 000 000 000 000 000 Hi......
//! ```

/// Cells shown per dump row
pub(crate) const CELLS_PER_ROW: usize = 8;

/// Rows shown in one dump page
pub(crate) const DUMP_ROWS: usize = 64;

/// One row of the memory dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DumpRow<'a> {
    pub address: usize,
    pub cells: &'a [u8],
}

/// Rows starting at `offset` rounded down to a row boundary
///
/// The start is clamped to the tape; at most `max_rows` rows are returned and
/// the last one may be short.
pub(crate) fn dump_rows(memory: &[u8], offset: usize, max_rows: usize) -> Vec<DumpRow<'_>> {
    let start = (offset / CELLS_PER_ROW * CELLS_PER_ROW).min(memory.len());
    memory[start..]
        .chunks(CELLS_PER_ROW)
        .take(max_rows)
        .enumerate()
        .map(|(i, cells)| DumpRow {
            address: start + i * CELLS_PER_ROW,
            cells,
        })
        .collect()
}

/// Zero-pad `n` to `width` digits
pub(crate) fn pad_number(n: usize, width: usize) -> String {
    format!("{:0width$}", n, width = width)
}

/// Text rendering of a cell for the dump's character column
pub(crate) fn ascii_column(cell: u8) -> char {
    let c = char::from(cell);
    if c.is_control() {
        '.'
    } else {
        c
    }
}
