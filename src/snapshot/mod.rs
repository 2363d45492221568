// Owned copy of engine state for hosts that render after each update

use crate::interpreter::engine::{Engine, RunState};
use crate::interpreter::scheduler::Clock;

/// Read-only view of one moment of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub memory: Vec<u8>,
    pub memory_pointer: usize,
    pub program_counter: usize,
    pub output: String,
    pub run_state: RunState,
}

impl Snapshot {
    /// Copy the observable state of `engine`
    pub fn capture<C: Clock>(engine: &Engine<C>) -> Self {
        Snapshot {
            memory: engine.memory().to_vec(),
            memory_pointer: engine.memory_pointer(),
            program_counter: engine.program_counter(),
            output: engine.output().to_string(),
            run_state: engine.run_state(),
        }
    }

    pub fn is_halted(&self) -> bool {
        self.run_state == RunState::Halted
    }

    /// Cell value under the memory pointer
    pub fn current_cell(&self) -> u8 {
        self.memory[self.memory_pointer]
    }

    /// Whether everything but the run state matches `other`
    pub fn same_machine_state(&self, other: &Snapshot) -> bool {
        self.memory == other.memory
            && self.memory_pointer == other.memory_pointer
            && self.program_counter == other.program_counter
            && self.output == other.output
    }
}
