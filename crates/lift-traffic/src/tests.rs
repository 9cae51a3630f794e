//! Unit tests for lift-traffic.

use lift_core::{InterArrivalShape, SimRng};

use crate::{DestinationTables, RandomStream};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn stream(seed: u64, floors: u32) -> RandomStream {
    RandomStream::new(
        SimRng::new(seed),
        &InterArrivalShape::default(),
        DestinationTables::for_building(floors),
    )
    .unwrap()
}

// ── Passenger / arena ─────────────────────────────────────────────────────────

#[cfg(test)]
mod passenger {
    use lift_core::{PassengerId, Tick};

    use crate::{Passenger, PassengerArena};

    #[test]
    fn arena_ids_are_monotonic() {
        let mut arena = PassengerArena::new();
        let ids: Vec<PassengerId> = (0..4).map(|_| arena.allocate()).collect();
        assert_eq!(ids, vec![PassengerId(0), PassengerId(1), PassengerId(2), PassengerId(3)]);
        assert_eq!(arena.allocated(), 4);
    }

    #[test]
    fn new_passenger_is_unassigned() {
        let p = Passenger::new(PassengerId(3), Tick(10), 9, 2);
        assert!(!p.is_assigned());
        assert_eq!(p.pickup_time, None);
        assert_eq!(p.floors_travelled(), 7);
        assert_eq!(p.span(), (2, 9));
    }
}

// ── Destination tables ────────────────────────────────────────────────────────

#[cfg(test)]
mod destination {
    use crate::{DestinationTable, DestinationTables, SourceBucket};

    #[test]
    fn buckets() {
        assert_eq!(SourceBucket::of(1), SourceBucket::Ground);
        assert_eq!(SourceBucket::of(2), SourceBucket::Second);
        assert_eq!(SourceBucket::of(3), SourceBucket::Middle);
        assert_eq!(SourceBucket::of(12), SourceBucket::Middle);
        assert_eq!(SourceBucket::of(13), SourceBucket::High);
        assert_eq!(SourceBucket::of(21), SourceBucket::High);
    }

    #[test]
    fn inverse_cdf_skips_zero_weight_floors() {
        let table = DestinationTable::from_weights(&[0.0, 0.5, 0.0, 0.5]).unwrap();
        assert_eq!(table.floor_for(0.0), 2);
        assert_eq!(table.floor_for(0.49), 2);
        assert_eq!(table.floor_for(0.5), 4);
        assert_eq!(table.floor_for(0.999), 4);
        assert_eq!(table.probability(1), 0.0);
        assert!((table.probability(4) - 0.5).abs() < 1e-12);
        assert_eq!(table.probability(9), 0.0);
    }

    #[test]
    fn empty_mass_is_rejected() {
        assert!(DestinationTable::from_weights(&[0.0, 0.0]).is_none());
        assert!(DestinationTable::from_weights(&[]).is_none());
    }

    #[test]
    fn reference_building_tables() {
        let tables = DestinationTables::for_building(21);
        // Ground floor passengers only travel to floors 3..=12.
        let ground = tables.table_for(1);
        assert_eq!(ground.len(), 21);
        assert_eq!(ground.probability(1), 0.0);
        assert_eq!(ground.probability(13), 0.0);
        assert!(ground.probability(12) > 0.3);
        // High floors never ask for floor 1.
        assert!(!tables.is_reachable(15, 1));
        assert!(tables.is_reachable(15, 2));
    }

    #[test]
    fn small_building_falls_back_to_uniform() {
        // Floors 1..=2 carry no weight in the ground-floor table.
        let tables = DestinationTables::for_building(2);
        let ground = tables.table_for(1);
        assert!((ground.probability(1) - 0.5).abs() < 1e-12);
        assert!((ground.probability(2) - 0.5).abs() < 1e-12);
        // Second-floor table keeps its weight on floor 1.
        assert!(tables.is_reachable(2, 1));
        let pairs: Vec<_> = tables.reachable_pairs().collect();
        assert_eq!(pairs, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn reachable_pairs_are_served_by_reference_bounds() {
        let tables = DestinationTables::for_building(21);
        let bounds = lift_core::ZoneBounds::default();
        for (s, d) in tables.reachable_pairs() {
            assert!(bounds.serves(s, d), "pair {s}->{d} has no legal cab");
        }
    }
}

// ── RandomStream ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod random_stream {
    use super::*;

    #[test]
    fn offsets_stay_inside_triangle() {
        let mut s = stream(1, 21);
        let shape = InterArrivalShape::default();
        let upper = (shape.max * shape.scale).round() as u64;
        for _ in 0..2_000 {
            assert!(s.next_offset() <= upper);
        }
    }

    #[test]
    fn offsets_skew_towards_the_mode() {
        // Mode sits at ~0, so the median is well under half the range.
        let mut s = stream(2, 21);
        let mut draws: Vec<u64> = (0..4_001).map(|_| s.next_offset()).collect();
        draws.sort_unstable();
        assert!(draws[2_000] < 230, "median {}", draws[2_000]);
    }

    #[test]
    fn destination_never_equals_source() {
        let mut s = stream(3, 21);
        for source in 1..=21 {
            for _ in 0..200 {
                let d = s.next_destination(source);
                assert_ne!(d, source);
                assert!((1..=21).contains(&d));
            }
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = stream(77, 21);
        let mut b = stream(77, 21);
        for _ in 0..100 {
            assert_eq!(a.next_offset(), b.next_offset());
            assert_eq!(a.next_destination(5), b.next_destination(5));
        }
    }
}

// ── ArrivalGenerator ──────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use lift_core::{PassengerId, Tick};

    use super::*;
    use crate::{ArrivalGenerator, PassengerArena};

    #[test]
    fn next_arrival_is_not_before_reference() {
        let mut g = ArrivalGenerator::new(4, stream(5, 21));
        for t in [0u64, 10, 500] {
            assert!(g.next_arrival(Tick(t)) >= Tick(t));
        }
    }

    #[test]
    fn spawn_allocates_ids_and_keeps_floor() {
        let mut arena = PassengerArena::new();
        let mut g = ArrivalGenerator::new(7, stream(6, 21));
        let p0 = g.spawn(&mut arena, Tick(30));
        let p1 = g.spawn(&mut arena, Tick(31));
        assert_eq!(p0.id, PassengerId(0));
        assert_eq!(p1.id, PassengerId(1));
        assert_eq!(p0.source, 7);
        assert_eq!(p0.arrival_time, Tick(30));
        assert_ne!(p0.destination, 7);
        assert_eq!(g.floor(), 7);
    }
}
