//! Shared helpers for pane rendering

mod formatting;

pub(crate) use formatting::{ascii_column, dump_rows, pad_number, CELLS_PER_ROW, DUMP_ROWS};
