//! `EventQueue` — time-ordered pending events.
//!
//! A passenger has at most one pending event at any time, so
//! `(timestamp, passenger id)` is a unique key and a `BTreeMap` gives the
//! total order directly: O(log n) push and pop, no heap tie-breaking.

use std::collections::BTreeMap;

use lift_core::{PassengerId, Tick};

use crate::SimEvent;

#[derive(Default)]
pub struct EventQueue {
    inner: BTreeMap<(Tick, PassengerId), SimEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `event`.
    ///
    /// # Panics
    /// Panics in debug builds if the passenger already has an event at the
    /// same instant.
    pub fn push(&mut self, event: SimEvent) {
        let previous = self.inner.insert(event.key(), event);
        debug_assert!(previous.is_none(), "two pending events share one key");
    }

    /// Remove and return the earliest event.
    pub fn pop(&mut self) -> Option<SimEvent> {
        self.inner.pop_first().map(|(_, event)| event)
    }

    /// Timestamp of the earliest event, or `None` if empty.
    pub fn next_time(&self) -> Option<Tick> {
        self.inner.keys().next().map(|&(at, _)| at)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
