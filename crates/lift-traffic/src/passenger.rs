//! Passenger records and id allocation.

use lift_core::{CabId, Floor, PassengerId, Tick};

/// One person travelling through the bank.
///
/// A passenger is owned by exactly one pending event at a time and moves
/// through Generate → Arrive → Exit by value; it is dropped after Exit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id: PassengerId,

    /// Creation time until the Generate transition runs, then the instant the
    /// passenger actually reaches the lobby of `source`.
    pub arrival_time: Tick,

    pub source: Floor,

    /// Never equal to `source`.
    pub destination: Floor,

    /// Serving cab; `None` until the Arrive transition dispatches one.
    pub cab: Option<CabId>,

    /// Instant the serving cab reaches `source`; `None` until dispatched.
    pub pickup_time: Option<Tick>,
}

impl Passenger {
    /// Create an unassigned passenger.
    ///
    /// # Panics
    /// Panics in debug builds if `source == destination`.
    pub fn new(id: PassengerId, created_at: Tick, source: Floor, destination: Floor) -> Self {
        debug_assert_ne!(source, destination, "passenger {id} would not travel");
        Self {
            id,
            arrival_time: created_at,
            source,
            destination,
            cab: None,
            pickup_time: None,
        }
    }

    /// Number of floors between source and destination.
    #[inline]
    pub fn floors_travelled(&self) -> u64 {
        self.source.abs_diff(self.destination) as u64
    }

    /// Lowest and highest floor the trip touches.
    #[inline]
    pub fn span(&self) -> (Floor, Floor) {
        (self.source.min(self.destination), self.source.max(self.destination))
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.cab.is_some()
    }
}

/// Hands out unique, monotonically increasing passenger ids.
///
/// Owned by the dispatch model, not a process-wide counter, so two runs in
/// one process (or two tests) never share id space.
#[derive(Debug, Default)]
pub struct PassengerArena {
    next: u64,
}

impl PassengerArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next id.
    #[inline]
    pub fn allocate(&mut self) -> PassengerId {
        let id = PassengerId(self.next);
        self.next += 1;
        id
    }

    /// How many ids have been handed out so far.
    #[inline]
    pub fn allocated(&self) -> u64 {
        self.next
    }
}
