//! Per-floor arrival generator.

use lift_core::{Floor, Tick};

use crate::{Passenger, PassengerArena, RandomStream};

/// Drives the arrival process of one floor.
///
/// The generator both spawns passengers (drawing their destination) and
/// decides when each of them actually shows up.
pub struct ArrivalGenerator {
    floor:  Floor,
    stream: RandomStream,
}

impl ArrivalGenerator {
    pub fn new(floor: Floor, stream: RandomStream) -> Self {
        Self { floor, stream }
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Arrival instant of the next passenger, counted from `after`.
    pub fn next_arrival(&mut self, after: Tick) -> Tick {
        after + self.stream.next_offset()
    }

    /// Create a new passenger on this floor at `now`.
    pub fn spawn(&mut self, arena: &mut PassengerArena, now: Tick) -> Passenger {
        let id = arena.allocate();
        let destination = self.stream.next_destination(self.floor);
        Passenger::new(id, now, self.floor, destination)
    }
}
