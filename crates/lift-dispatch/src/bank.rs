//! `CabBank`: every cab of the building in one flat `Vec`, plus the rules
//! that only make sense across a shaft's two cabs.
//!
//! Cab ids are laid out as `shaft * 2 + position`, so a cab's sibling is a
//! pure function of its (shaft, position) and never a stored reference.

use lift_core::{CabId, CabPosition, Floor, ShaftId, Tick, ZoneBounds};

use crate::{Cab, PickupCosts};

/// The (source, destination) pair a cab is being evaluated for.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Trip {
    pub source:      Floor,
    pub destination: Floor,
}

impl Trip {
    pub fn new(source: Floor, destination: Floor) -> Self {
        Self { source, destination }
    }

    #[inline]
    pub fn floors(self) -> u64 {
        self.source.abs_diff(self.destination) as u64
    }

    #[inline]
    pub fn lowest(self) -> Floor {
        self.source.min(self.destination)
    }

    #[inline]
    pub fn highest(self) -> Floor {
        self.source.max(self.destination)
    }
}

/// Flat, id-indexed cab storage for a bank of two-cab shafts.
pub struct CabBank {
    cabs:   Vec<Cab>,
    bounds: ZoneBounds,
}

impl CabBank {
    /// `shafts` shafts, each with a lower and an upper cab at their starting
    /// floors.
    pub fn new(shafts: u32, bounds: ZoneBounds) -> Self {
        let cabs = (0..shafts)
            .flat_map(|shaft| {
                CabPosition::ALL.map(|position| {
                    Cab::new(CabBank::id_of(ShaftId(shaft), position), ShaftId(shaft), position)
                })
            })
            .collect();
        Self { cabs, bounds }
    }

    /// Id of the cab at `position` in `shaft`.
    #[inline]
    pub fn id_of(shaft: ShaftId, position: CabPosition) -> CabId {
        CabId(shaft.0 * 2 + position.index())
    }

    /// Id of the other cab in `cab`'s shaft.
    #[inline]
    pub fn sibling_id(cab: &Cab) -> CabId {
        CabBank::id_of(cab.shaft, cab.position.opposite())
    }

    pub fn len(&self) -> usize {
        self.cabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cabs.is_empty()
    }

    pub fn bounds(&self) -> &ZoneBounds {
        &self.bounds
    }

    /// # Panics
    /// Panics if `id` is not a cab of this bank.
    #[inline]
    pub fn cab(&self, id: CabId) -> &Cab {
        &self.cabs[id.index()]
    }

    pub fn get(&self, id: CabId) -> Option<&Cab> {
        self.cabs.get(id.index())
    }

    pub fn get_mut(&mut self, id: CabId) -> Option<&mut Cab> {
        self.cabs.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cab> {
        self.cabs.iter()
    }

    /// The other cab in `id`'s shaft.
    ///
    /// # Panics
    /// Panics if `id` is not a cab of this bank.
    pub fn sibling(&self, id: CabId) -> &Cab {
        &self.cabs[CabBank::sibling_id(&self.cabs[id.index()]).index()]
    }

    /// `true` if `id`'s zone contains both ends of `trip`.
    #[inline]
    pub fn is_legal(&self, id: CabId, trip: Trip) -> bool {
        let cab = &self.cabs[id.index()];
        self.bounds
            .for_position(cab.position)
            .covers(trip.source, trip.destination)
    }

    /// Ids of every cab allowed to carry `trip`, ascending.
    pub fn legal_cabs(&self, trip: Trip) -> Vec<CabId> {
        self.cabs
            .iter()
            .map(|c| c.id)
            .filter(|&id| self.is_legal(id, trip))
            .collect()
    }

    /// Would moving `id` through `trip` at instant `at` run into its sibling?
    ///
    /// Only a sibling still busy at `at` can be in the way.  A lower cab is
    /// clear when the whole trip stays below the upper sibling's reserved
    /// floor; an upper cab is clear when it stays above the lower sibling's.
    pub fn collides(&self, id: CabId, trip: Trip, at: Tick) -> bool {
        let cab = &self.cabs[id.index()];
        let sibling = self.sibling(id);
        if sibling.is_available(at) {
            return false;
        }
        let fence = sibling.reserved_floor;
        match cab.position {
            CabPosition::Lower => !(trip.source < fence && trip.destination < fence),
            CabPosition::Upper => !(trip.source > fence && trip.destination > fence),
        }
    }

    /// Compute and store both pickup ETAs of `id` for `trip` at `now`.
    pub fn evaluate(&mut self, id: CabId, trip: Trip, now: Tick, travel_per_floor: u64) -> PickupCosts {
        let cab = &self.cabs[id.index()];
        let start = cab.departure_time(now);
        let approach = travel_per_floor * cab.reserved_floor.abs_diff(trip.source) as u64;

        let no_wait = start + approach;
        let with_collision = if self.collides(id, trip, start) {
            // The sibling is busy past `start`, so its release is later still.
            self.sibling(id).next_available + approach
        } else {
            no_wait
        };

        let costs = PickupCosts { no_wait, with_collision };
        self.cabs[id.index()].costs = costs;
        costs
    }

    /// Commit `id` to `floor`, busy until `until`.
    pub fn reserve(&mut self, id: CabId, floor: Floor, until: Tick) {
        self.cabs[id.index()].reserve(floor, until);
    }
}
