// Execution engine for the tape interpreter

use crate::interpreter::config::EngineConfig;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::events::{Event, EventBus};
use crate::interpreter::machine::Machine;
use crate::interpreter::scheduler::{Clock, RunMode, Scheduler, SystemClock};
use crate::program::Program;
use crate::snapshot::Snapshot;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Coarse run state as seen by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing loaded, finished, faulted or stopped
    Halted,
    /// Loaded and resumable, no batch loop active
    Paused,
    /// Batch loop active, stopping only at the end of the program
    RunningContinuous,
    /// Batch loop active, also stopping at breakpoint markers
    RunningBreakpoint,
}

/// How a batch tick ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Batch bound reached; the next tick is scheduled
    Yielded,
    /// Program ran off its end
    Finished,
    /// PC landed on a breakpoint marker
    Breakpoint,
    /// A malformed jump halted the machine
    Faulted(RuntimeError),
}

/// The interpreter engine: one run's state, its scheduler and its observers
///
/// Every public operation either executes fully or is rejected with a
/// [`RuntimeError`] without touching state. State-changing calls publish
/// [`Event::Update`] once.
pub struct Engine<C: Clock = SystemClock> {
    machine: Machine,
    scheduler: Scheduler,
    clock: C,
    config: EngineConfig,
    events: EventBus,

    /// Fault that ended the last run, cleared by `start`
    last_error: Option<RuntimeError>,
}

impl Engine<SystemClock> {
    /// Engine on the wall clock with default timing
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new(), EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_clock(SystemClock::new(), config)
    }
}

impl Default for Engine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Engine<C> {
    pub fn with_clock(clock: C, config: EngineConfig) -> Self {
        Engine {
            machine: Machine::unloaded(),
            scheduler: Scheduler::new(config.tick_interval),
            clock,
            config,
            events: EventBus::new(),
            last_error: None,
        }
    }

    // ========== Control ==========

    /// Load a program and its input, replacing the previous run
    ///
    /// Only accepted while halted. Leaves the engine paused at PC 0.
    pub fn start(&mut self, code: &str, input: &str) -> Result<(), RuntimeError> {
        self.ensure_idle("start")?;
        if !self.machine.is_halted() {
            return Err(RuntimeError::AlreadyLoaded);
        }

        self.machine = Machine::new(code, input);
        self.last_error = None;
        self.emit_update();
        Ok(())
    }

    /// Execute exactly one instruction
    pub fn step(&mut self) -> Result<(), RuntimeError> {
        self.ensure_idle("step")?;
        self.ensure_loaded("step")?;

        let result = self.machine.step();
        if let Err(e) = &result {
            self.last_error = Some(e.clone());
        }
        self.emit_update();
        result
    }

    /// Execute up to `count` instructions, stopping early at the end of the
    /// program; publishes a single update. Returns the number executed.
    pub fn step_many(&mut self, count: usize) -> Result<usize, RuntimeError> {
        self.ensure_idle("step")?;
        self.ensure_loaded("step")?;

        let mut executed = 0;
        let mut result = Ok(());
        while executed < count && !self.machine.is_halted() {
            if let Err(e) = self.machine.step() {
                self.last_error = Some(e.clone());
                result = Err(e);
                break;
            }
            executed += 1;
        }
        self.emit_update();
        result.map(|()| executed)
    }

    /// Run in batches until the program halts
    ///
    /// Returns immediately; batches execute from [`Engine::poll`].
    pub fn run_to_end(&mut self) -> Result<(), RuntimeError> {
        self.arm(RunMode::Continuous, "run")
    }

    /// Run in batches until the program halts or PC reaches a breakpoint
    pub fn run_to_breakpoint(&mut self) -> Result<(), RuntimeError> {
        self.arm(RunMode::Breakpoint, "run to breakpoint")
    }

    /// Cancel the batch loop, leaving the run resumable
    pub fn pause(&mut self) -> Result<(), RuntimeError> {
        if !self.scheduler.is_active() {
            return Err(RuntimeError::NotRunning);
        }
        self.scheduler.cancel();
        self.emit_update();
        Ok(())
    }

    /// Cancel any batch loop and halt; always publishes an update
    ///
    /// The halted run stays inspectable until the next `start`.
    pub fn stop(&mut self) {
        self.scheduler.cancel();
        self.machine.halt();
        self.emit_update();
    }

    /// Run one batch if the scheduled tick is due
    ///
    /// Hosts call this from their event loop. Returns `None` when nothing was
    /// due; batches are never interrupted once begun.
    pub fn poll(&mut self) -> Option<TickOutcome> {
        let mode = self.scheduler.take_due(self.clock.now())?;
        Some(self.run_batch(mode))
    }

    /// Time until the next batch is due, `None` without an active loop
    pub fn next_tick_in(&self) -> Option<Duration> {
        self.scheduler.time_until_next(self.clock.now())
    }

    fn arm(&mut self, mode: RunMode, operation: &'static str) -> Result<(), RuntimeError> {
        self.ensure_idle(operation)?;
        self.ensure_loaded(operation)?;
        self.scheduler.arm(mode, self.clock.now());
        Ok(())
    }

    fn run_batch(&mut self, mode: RunMode) -> TickOutcome {
        for _ in 0..self.config.batch_size {
            if let Err(e) = self.machine.step() {
                self.last_error = Some(e.clone());
                return self.finish_batch(TickOutcome::Faulted(e));
            }
            if self.machine.is_halted() {
                return self.finish_batch(TickOutcome::Finished);
            }
            if mode == RunMode::Breakpoint && self.machine.at_breakpoint() {
                return self.finish_batch(TickOutcome::Breakpoint);
            }
        }

        // Breakpoint runs stay silent until their terminating tick
        if mode == RunMode::Continuous {
            self.emit_update();
        }
        TickOutcome::Yielded
    }

    fn finish_batch(&mut self, outcome: TickOutcome) -> TickOutcome {
        self.scheduler.cancel();
        self.emit_update();
        outcome
    }

    fn ensure_idle(&self, operation: &'static str) -> Result<(), RuntimeError> {
        if self.scheduler.is_active() {
            return Err(RuntimeError::BatchActive { operation });
        }
        Ok(())
    }

    fn ensure_loaded(&self, operation: &'static str) -> Result<(), RuntimeError> {
        if self.machine.is_halted() {
            return Err(RuntimeError::Halted { operation });
        }
        Ok(())
    }

    // ========== Observation ==========

    /// Register a callback for `event`
    pub fn on<F>(&mut self, event: Event, handler: F)
    where
        F: FnMut() + 'static,
    {
        self.events.on(event, handler);
    }

    /// Channel receiving every published event
    pub fn subscribe(&mut self) -> Receiver<Event> {
        self.events.subscribe()
    }

    fn emit_update(&mut self) {
        self.events.emit(Event::Update);
    }

    // ========== Getter methods for hosts ==========

    pub fn is_batch_active(&self) -> bool {
        self.scheduler.is_active()
    }

    pub fn is_halted(&self) -> bool {
        self.machine.is_halted()
    }

    pub fn run_state(&self) -> RunState {
        match self.scheduler.mode() {
            Some(RunMode::Continuous) => RunState::RunningContinuous,
            Some(RunMode::Breakpoint) => RunState::RunningBreakpoint,
            None if self.machine.is_halted() => RunState::Halted,
            None => RunState::Paused,
        }
    }

    /// All tape cells in address order
    pub fn memory(&self) -> &[u8] {
        self.machine.tape().cells()
    }

    pub fn program_counter(&self) -> usize {
        self.machine.pc()
    }

    pub fn memory_pointer(&self) -> usize {
        self.machine.pointer()
    }

    /// Everything output since the last `start`
    pub fn output(&self) -> &str {
        self.machine.output()
    }

    pub fn program(&self) -> &Program {
        self.machine.program()
    }

    /// Character at PC, `None` once PC is past the end
    pub fn current_instruction(&self) -> Option<char> {
        self.machine.program().char_at(self.machine.pc())
    }

    /// Input not yet consumed
    pub fn input_remaining(&self) -> String {
        self.machine.input().remaining()
    }

    pub fn loop_depth(&self) -> usize {
        self.machine.loop_depth()
    }

    pub fn last_error(&self) -> Option<&RuntimeError> {
        self.last_error.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
