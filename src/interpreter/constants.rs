// Constants for the tape interpreter

use std::time::Duration;

/// Number of cells on the tape
pub const TAPE_SIZE: usize = 30_000;

/// Highest valid pointer address
pub const MAX_POINTER: usize = TAPE_SIZE - 1;

/// Upper bound on single steps executed in one scheduler tick
pub const BATCH_SIZE: usize = 10_000_000;

/// Wall-clock interval between batches of a continuous run
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Breakpoint marker: a no-op that stops breakpointed runs
pub const BREAKPOINT: char = '*';
