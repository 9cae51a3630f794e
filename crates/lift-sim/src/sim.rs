//! The `Sim` struct and its event loop.

use lift_core::{SimClock, SimConfig, Tick};
use lift_dispatch::{DispatchModel, Stats};

use crate::{EventQueue, SimError, SimObserver, SimResult};

/// What a finished run reports back.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Clock value when the loop stopped; at or past the horizon unless the
    /// queue ran dry.
    pub final_time:       Tick,
    pub events_processed: u64,
    pub stats:            Stats,
}

/// The main simulation runner.
///
/// Holds the clock, the pending events, and the [`DispatchModel`] that owns
/// every cab and generator.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Validated configuration the run was built from.
    pub config: SimConfig,

    pub clock: SimClock,

    pub queue: EventQueue,

    /// Cabs, generators, id arena, and counters.
    pub model: DispatchModel,

    events_processed: u64,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, model: DispatchModel, queue: EventQueue) -> Self {
        Self {
            config,
            clock: SimClock::new(),
            queue,
            model,
            events_processed: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the clock reaches `config.horizon`.
    ///
    /// The event whose timestamp first reaches the horizon is still
    /// processed; the loop stops before popping the next one.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        let horizon = self.config.horizon;
        log::info!(
            "run start: {} floors, {} shafts, {}, horizon {horizon}, seed {}",
            self.config.floors,
            self.config.shafts,
            self.config.algorithm,
            self.config.seed,
        );

        while self.clock.now() < horizon {
            if !self.step(observer)? {
                log::warn!("event queue drained at {}", self.clock);
                break;
            }
        }

        let summary = self.summary();
        observer.on_sim_end(summary.final_time, &summary.stats);
        log::info!(
            "run end at {}: {} events, {} arrivals, {} exits",
            self.clock,
            summary.events_processed,
            summary.stats.arrivals,
            summary.stats.exits,
        );
        Ok(summary)
    }

    /// Process exactly one event.  Returns `false` if the queue was empty.
    ///
    /// Ignores the horizon; useful for tests and incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        let Some(event) = self.queue.pop() else {
            return Ok(false);
        };

        let at = event.at();
        if !self.clock.advance_to(at) {
            return Err(SimError::Causality { event: at, now: self.clock.now() });
        }
        log::trace!("{at}: {} passenger {}", event.kind(), event.passenger().id);

        observer.on_event(at, &event);
        let outcome = event.process(&mut self.model)?;
        if let Some(assignment) = &outcome.assignment {
            observer.on_assignment(at, assignment);
        }
        for follow_up in outcome.spawned {
            self.queue.push(follow_up);
        }

        self.events_processed += 1;
        Ok(true)
    }

    /// Snapshot of the run so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            final_time:       self.clock.now(),
            events_processed: self.events_processed,
            stats:            *self.model.stats(),
        }
    }

    pub fn stats(&self) -> &Stats {
        self.model.stats()
    }
}
