//! Plain data row types written by output backends.

use lift_core::Tick;
use lift_dispatch::Stats;
use lift_traffic::Passenger;

use crate::{OutputError, OutputResult};

/// One delivered passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow {
    pub passenger_id: u64,
    pub source:       u32,
    pub destination:  u32,
    pub cab_id:       u32,
    /// Instant the passenger reached the lobby.
    pub arrival:      u64,
    pub pickup:       u64,
    pub exit:         u64,
}

impl TripRow {
    /// Build the row for `passenger` leaving the system at `exit`.
    ///
    /// Fails if the passenger was never dispatched.
    pub fn from_exit(passenger: &Passenger, exit: Tick) -> OutputResult<Self> {
        let (Some(cab), Some(pickup)) = (passenger.cab, passenger.pickup_time) else {
            return Err(OutputError::IncompleteTrip(passenger.id.0));
        };
        Ok(Self {
            passenger_id: passenger.id.0,
            source:       passenger.source,
            destination:  passenger.destination,
            cab_id:       cab.0,
            arrival:      passenger.arrival_time.0,
            pickup:       pickup.0,
            exit:         exit.0,
        })
    }

    #[inline]
    pub fn wait(&self) -> u64 {
        self.pickup.saturating_sub(self.arrival)
    }
}

/// Final counters of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub final_time: u64,
    pub arrivals:   u64,
    pub exits:      u64,
    pub total_wait: u64,
    pub total_time: u64,
}

impl RunSummaryRow {
    pub fn new(final_time: Tick, stats: &Stats) -> Self {
        Self {
            final_time: final_time.0,
            arrivals:   stats.arrivals,
            exits:      stats.exits,
            total_wait: stats.total_wait,
            total_time: stats.total_time,
        }
    }
}
