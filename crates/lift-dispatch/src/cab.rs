//! Elevator cab state.

use lift_core::{CabId, CabPosition, Floor, ShaftId, Tick};

/// Pickup ETAs computed for one candidate during an assignment.
///
/// Both values are absolute instants.  They are scratch values, rewritten
/// every time the cab is considered for a passenger.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct PickupCosts {
    /// ETA at the passenger ignoring the sibling cab.
    pub no_wait: Tick,
    /// ETA at the passenger after waiting out a colliding sibling.
    pub with_collision: Tick,
}

/// One cab of a two-cab shaft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cab {
    pub id:       CabId,
    pub shaft:    ShaftId,
    pub position: CabPosition,

    /// Floor the cab last dropped a passenger at.
    pub current_floor: Floor,

    /// Floor the cab is committed to reach; where its next trip starts from.
    pub reserved_floor: Floor,

    /// The cab is free from this instant on.
    pub next_available: Tick,

    pub costs: PickupCosts,
}

impl Cab {
    /// A cab parked at its position's starting floor, free from tick 0.
    pub fn new(id: CabId, shaft: ShaftId, position: CabPosition) -> Self {
        let floor = position.starting_floor();
        Self {
            id,
            shaft,
            position,
            current_floor:  floor,
            reserved_floor: floor,
            next_available: Tick::ZERO,
            costs:          PickupCosts::default(),
        }
    }

    #[inline]
    pub fn is_available(&self, now: Tick) -> bool {
        now >= self.next_available
    }

    /// Commit the cab to reach `floor`, busy until `until`.
    #[inline]
    pub fn reserve(&mut self, floor: Floor, until: Tick) {
        self.reserved_floor = floor;
        self.next_available = until;
    }

    /// Instant the cab can start a new move if asked at `now`.
    #[inline]
    pub fn departure_time(&self, now: Tick) -> Tick {
        now.max(self.next_available)
    }
}
