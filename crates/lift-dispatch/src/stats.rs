//! Running statistics for one run.

/// Counters updated by the Arrive and Exit transitions.
///
/// Waits and totals are summed in ticks; averages are derived on demand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Passengers that reached a lobby and were assigned a cab.
    pub arrivals: u64,
    /// Passengers delivered to their destination.
    pub exits: u64,
    /// Sum of (pickup − arrival) over all admitted passengers.
    pub total_wait: u64,
    /// Sum of (exit − arrival) over all delivered passengers.
    pub total_time: u64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_admission(&mut self, wait: u64) {
        self.arrivals += 1;
        self.total_wait += wait;
    }

    #[inline]
    pub fn record_exit(&mut self, time_in_system: u64) {
        self.exits += 1;
        self.total_time += time_in_system;
    }

    /// Passengers admitted but not yet delivered.
    #[inline]
    pub fn in_flight(&self) -> u64 {
        self.arrivals.saturating_sub(self.exits)
    }

    /// Mean wait per admitted passenger; `None` before the first admission.
    pub fn average_wait(&self) -> Option<f64> {
        (self.arrivals > 0).then(|| self.total_wait as f64 / self.arrivals as f64)
    }

    /// Mean time in system per delivered passenger; `None` before the first
    /// exit.
    pub fn average_total(&self) -> Option<f64> {
        (self.exits > 0).then(|| self.total_time as f64 / self.exits as f64)
    }
}
