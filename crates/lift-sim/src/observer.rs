//! Simulation observer trait for tracing and data collection.

use lift_core::Tick;
use lift_dispatch::{Assignment, Stats};

use crate::SimEvent;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::step`][crate::Sim::step].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — exit counter
///
/// ```rust,ignore
/// struct ExitCounter(u64);
///
/// impl SimObserver for ExitCounter {
///     fn on_event(&mut self, _now: Tick, event: &SimEvent) {
///         if event.kind() == EventKind::Exit {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after the clock advances to `event`, before it is processed.
    fn on_event(&mut self, _now: Tick, _event: &SimEvent) {}

    /// Called once a passenger has been given a cab.
    fn on_assignment(&mut self, _now: Tick, _assignment: &Assignment) {}

    /// Called once after the loop stops.
    fn on_sim_end(&mut self, _final_time: Tick, _stats: &Stats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
