//! Cooperative batch scheduling
//!
//! Continuous runs never block the host. Arming a run only records a deadline;
//! the host loop calls [`Engine::poll`](super::engine::Engine::poll), and each
//! poll that finds the deadline passed executes one batch and schedules the
//! next. Cancelling only clears the schedule, so a batch already in progress
//! always finishes.
//!
//! Time comes from a [`Clock`]. [`SystemClock`] reads the monotonic wall
//! clock; [`ManualClock`] is advanced explicitly, which keeps tests
//! deterministic.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// What a recurring batch stops on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Stop only when the program halts
    Continuous,
    /// Also stop when PC lands on a breakpoint marker
    Breakpoint,
}

/// Recurring tick bookkeeping
#[derive(Debug, Clone)]
pub struct Scheduler {
    active: Option<RunMode>,
    next_tick: Duration,
    interval: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Scheduler {
            active: None,
            next_tick: Duration::ZERO,
            interval,
        }
    }

    /// Begin a recurring cycle; the first tick is one interval from `now`
    pub fn arm(&mut self, mode: RunMode, now: Duration) {
        self.active = Some(mode);
        self.next_tick = now + self.interval;
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn mode(&self) -> Option<RunMode> {
        self.active
    }

    /// If a tick is due at `now`, schedule the following one and return the mode
    pub fn take_due(&mut self, now: Duration) -> Option<RunMode> {
        let mode = self.active?;
        if now < self.next_tick {
            return None;
        }
        self.next_tick = now + self.interval;
        Some(mode)
    }

    /// Time left before the next tick, zero if overdue, `None` when idle
    pub fn time_until_next(&self, now: Duration) -> Option<Duration> {
        self.active?;
        Some(self.next_tick.saturating_sub(now))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
