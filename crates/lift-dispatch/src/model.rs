//! `DispatchModel`: owns every cab, generator, and counter, and applies the
//! three state transitions the scheduler drives.

use lift_core::{
    CabId, CabPosition, DispatchAlgorithm, Floor, LiftError, LiftResult, PassengerId, SimConfig,
    SimRng, Tick,
};
use lift_traffic::{ArrivalGenerator, DestinationTables, Passenger, PassengerArena, RandomStream};

use crate::{CabBank, DispatchError, DispatchResult, Stats, Trip};

// ── Assignment ────────────────────────────────────────────────────────────────

/// What the dispatcher did to the selected cab's shaft sibling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SiblingMove {
    /// The sibling already stood clear of the trip.
    Untouched,
    /// Moved just past the trip's extreme floor.
    Nudged { cab: CabId, floor: Floor, until: Tick },
    /// Held until the selected cab clears, then moved next to its
    /// destination.
    Delayed { cab: CabId, floor: Floor, until: Tick },
}

/// The outcome of dispatching one passenger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub passenger: PassengerId,
    pub cab:       CabId,
    /// Instant the cab reaches the passenger's source floor.
    pub pickup:    Tick,
    /// Instant the cab reaches the passenger's destination.
    pub drop_off:  Tick,
    /// Every legal cab collided, so Algorithm A took its cheapest one anyway.
    pub fallback:  bool,
    pub sibling:   SiblingMove,
}

impl Assignment {
    /// Ticks the passenger waits in the lobby.
    pub fn wait_from(&self, arrival: Tick) -> u64 {
        self.pickup.since(arrival)
    }
}

// ── DispatchModel ─────────────────────────────────────────────────────────────

/// All mutable simulation state apart from the event queue and clock.
pub struct DispatchModel {
    bank:       CabBank,
    /// One generator per floor; index `floor - 1`.
    generators: Vec<ArrivalGenerator>,
    arena:      PassengerArena,
    stats:      Stats,
    algorithm:  DispatchAlgorithm,
    travel:     u64,
    floors:     Floor,
}

impl DispatchModel {
    /// Validate `config` and build the bank and one generator per floor.
    ///
    /// Each floor's generator draws from `rng.child(floor)`, so its stream
    /// depends only on the root seed.  Fails if any destination pair the
    /// traffic model can produce is outside every cab's zone.
    pub fn new(config: &SimConfig, rng: &mut SimRng) -> DispatchResult<Self> {
        config.validate()?;

        let tables = DestinationTables::for_building(config.floors);
        if let Some((source, destination)) = tables
            .reachable_pairs()
            .find(|&(s, d)| !config.bounds.serves(s, d))
        {
            return Err(LiftError::Config(format!(
                "trips from floor {source} to floor {destination} fit neither the lower \
                 cab bounds {} nor the upper cab bounds {}",
                config.bounds.lower, config.bounds.upper
            ))
            .into());
        }

        let generators = (1..=config.floors)
            .map(|floor| -> LiftResult<ArrivalGenerator> {
                let stream =
                    RandomStream::new(rng.child(floor as u64), &config.inter_arrival, tables.clone())?;
                Ok(ArrivalGenerator::new(floor, stream))
            })
            .collect::<LiftResult<Vec<_>>>()?;

        Ok(Self {
            bank: CabBank::new(config.shafts, config.bounds),
            generators,
            arena: PassengerArena::new(),
            stats: Stats::new(),
            algorithm: config.algorithm,
            travel: config.travel_ticks_per_floor,
            floors: config.floors,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn bank(&self) -> &CabBank {
        &self.bank
    }

    /// Direct cab access, for setting up scenarios.
    pub fn bank_mut(&mut self) -> &mut CabBank {
        &mut self.bank
    }

    pub fn algorithm(&self) -> DispatchAlgorithm {
        self.algorithm
    }

    pub fn floors(&self) -> Floor {
        self.floors
    }

    /// Number of passenger ids handed out so far.
    pub fn passengers_created(&self) -> u64 {
        self.arena.allocated()
    }

    /// Index of `floor`'s generator.
    fn slot(&self, floor: Floor) -> DispatchResult<usize> {
        if (1..=self.floors).contains(&floor) {
            Ok((floor - 1) as usize)
        } else {
            Err(LiftError::FloorOutOfRange { floor, floors: self.floors }.into())
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// One passenger per floor, created at tick 0, in floor order.
    pub fn seed_passengers(&mut self) -> Vec<Passenger> {
        let arena = &mut self.arena;
        self.generators
            .iter_mut()
            .map(|g| g.spawn(arena, Tick::ZERO))
            .collect()
    }

    /// Create a passenger on `floor` at `now`.
    pub fn spawn_passenger(&mut self, now: Tick, floor: Floor) -> DispatchResult<Passenger> {
        let slot = self.slot(floor)?;
        Ok(self.generators[slot].spawn(&mut self.arena, now))
    }

    /// Draw `passenger`'s lobby arrival instant and store it.
    pub fn schedule_arrival(&mut self, passenger: &mut Passenger) -> DispatchResult<Tick> {
        let slot = self.slot(passenger.source)?;
        let at = self.generators[slot].next_arrival(passenger.arrival_time);
        passenger.arrival_time = at;
        Ok(at)
    }

    /// Pick a cab for `passenger`, commit it, reposition its sibling, and
    /// count the admission.
    pub fn assign(&mut self, now: Tick, passenger: &mut Passenger) -> DispatchResult<Assignment> {
        let trip = Trip::new(passenger.source, passenger.destination);
        let legal = self.bank.legal_cabs(trip);
        if legal.is_empty() {
            return Err(DispatchError::Infeasible {
                passenger:   passenger.id,
                origin:      trip.source,
                destination: trip.destination,
            });
        }
        for &id in &legal {
            self.bank.evaluate(id, trip, now, self.travel);
        }

        let (id, fallback) = self.select(&legal, trip, now);
        let cab = self.bank.cab(id);
        let pickup = cab.costs.with_collision;
        let departs = cab.departure_time(now);
        let drop_off = pickup + self.travel * trip.floors();

        self.bank.reserve(id, trip.destination, drop_off);
        passenger.cab = Some(id);
        passenger.pickup_time = Some(pickup);

        let sibling = self.reposition_sibling(id, trip, now, departs, drop_off);

        self.stats.record_admission(pickup.since(passenger.arrival_time));

        log::debug!(
            "{now}: cab {} assigned to passenger {} from {} to {}, pickup {pickup}, \
             reaches destination at {drop_off}{}",
            id.0,
            passenger.id.0,
            trip.source,
            trip.destination,
            if fallback { " (collision fallback)" } else { "" },
        );

        Ok(Assignment {
            passenger: passenger.id,
            cab: id,
            pickup,
            drop_off,
            fallback,
            sibling,
        })
    }

    /// Deliver `passenger` at `now`.
    pub fn retire(&mut self, now: Tick, passenger: &Passenger) -> DispatchResult<()> {
        let id = passenger.cab.ok_or(DispatchError::Unassigned(passenger.id))?;
        let cab = self.bank.get_mut(id).ok_or(DispatchError::UnknownCab(id))?;
        cab.current_floor = passenger.destination;
        self.stats.record_exit(now.since(passenger.arrival_time));
        log::debug!("{now}: passenger {} exits at floor {}", passenger.id.0, passenger.destination);
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Choose among `legal` (non-empty, ascending ids) per the configured
    /// algorithm.  Returns the cab and whether Algorithm A had to fall back.
    fn select(&self, legal: &[CabId], trip: Trip, now: Tick) -> (CabId, bool) {
        let bank = &self.bank;
        let no_wait = |id: &&CabId| bank.cab(**id).costs.no_wait;
        match self.algorithm {
            DispatchAlgorithm::AvoidCollision => {
                let clear = legal
                    .iter()
                    .filter(|&&id| !bank.collides(id, trip, now))
                    .min_by_key(no_wait);
                match clear {
                    Some(&id) => (id, false),
                    None => (*legal.iter().min_by_key(no_wait).unwrap_or(&legal[0]), true),
                }
            }
            DispatchAlgorithm::CollisionCost => {
                let best = legal
                    .iter()
                    .min_by_key(|&&id| bank.cab(id).costs.with_collision)
                    .unwrap_or(&legal[0]);
                (*best, false)
            }
        }
    }

    /// Keep the sibling of `id` out of the way of `trip`.
    fn reposition_sibling(
        &mut self,
        id:       CabId,
        trip:     Trip,
        now:      Tick,
        departs:  Tick,
        drop_off: Tick,
    ) -> SiblingMove {
        let collides = self.bank.collides(id, trip, departs);
        let sibling = self.bank.sibling(id);
        let (sib_id, position, reserved, busy_until) =
            (sibling.id, sibling.position, sibling.reserved_floor, sibling.next_available);
        let zone = self.bank.bounds().for_position(position);
        let clamp = |floor: Floor| floor.clamp(zone.lowest, zone.highest);

        if !collides {
            let target = clamp(match position {
                CabPosition::Upper => trip.highest() + 1,
                CabPosition::Lower => trip.lowest().saturating_sub(1),
            });
            // A zone edge can clamp the target back onto the trip itself.
            let clears = match position {
                CabPosition::Upper => target > trip.highest(),
                CabPosition::Lower => target < trip.lowest(),
            };
            let widens = match position {
                CabPosition::Upper => reserved < target,
                CabPosition::Lower => reserved > target,
            };
            if !clears || !widens {
                return SiblingMove::Untouched;
            }
            let until = now.max(busy_until) + self.travel * reserved.abs_diff(target) as u64;
            self.bank.reserve(sib_id, target, until);
            log::trace!("{now}: {sib_id} nudged to floor {target} until {until}");
            SiblingMove::Nudged { cab: sib_id, floor: target, until }
        } else {
            let target = clamp(match position {
                CabPosition::Upper => trip.destination + 1,
                CabPosition::Lower => trip.destination.saturating_sub(1),
            });
            let until = busy_until.max(drop_off) + self.travel * reserved.abs_diff(target) as u64;
            self.bank.reserve(sib_id, target, until);
            log::trace!("{now}: {sib_id} delayed to floor {target} until {until}");
            SiblingMove::Delayed { cab: sib_id, floor: target, until }
        }
    }
}
