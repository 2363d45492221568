// Engine tuning knobs

use crate::interpreter::constants::{BATCH_SIZE, TICK_INTERVAL};
use std::time::Duration;

/// Timing and batch bounds for continuous runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Delay between batches of a continuous run
    pub tick_interval: Duration,

    /// Most single steps executed in one batch
    pub batch_size: usize,
}

impl EngineConfig {
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Batch bound; zero is raised to one so a batch always makes progress
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            tick_interval: TICK_INTERVAL,
            batch_size: BATCH_SIZE,
        }
    }
}
