//! Observer registry for engine notifications
//!
//! The engine publishes a single named event, [`Event::Update`], after every
//! state-affecting call and after batch ticks. Hosts either register a
//! callback with [`EventBus::on`] or take a channel with
//! [`EventBus::subscribe`] and drain it from their own loop.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

/// Events published by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Engine state changed; read it back through the accessors
    Update,
}

impl Event {
    pub fn name(self) -> &'static str {
        match self {
            Event::Update => "update",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Handler = Box<dyn FnMut()>;

/// Callback and channel subscribers keyed by event
#[derive(Default)]
pub struct EventBus {
    handlers: FxHashMap<Event, Vec<Handler>>,
    channels: Vec<Sender<Event>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` to run on every `event`, in registration order
    pub fn on<F>(&mut self, event: Event, handler: F)
    where
        F: FnMut() + 'static,
    {
        self.handlers
            .entry(event)
            .or_default()
            .push(Box::new(handler));
    }

    /// Channel receiving every emitted event
    pub fn subscribe(&mut self) -> Receiver<Event> {
        let (tx, rx) = mpsc::channel();
        self.channels.push(tx);
        rx
    }

    /// Notify all subscribers of `event`
    pub fn emit(&mut self, event: Event) {
        if let Some(handlers) = self.handlers.get_mut(&event) {
            for handler in handlers.iter_mut() {
                handler();
            }
        }
        // Drop channels whose receiver is gone
        self.channels.retain(|tx| tx.send(event).is_ok());
    }

    pub fn handler_count(&self, event: Event) -> usize {
        self.handlers.get(&event).map_or(0, Vec::len)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handler_count(Event::Update))
            .field("channels", &self.channels.len())
            .finish()
    }
}
