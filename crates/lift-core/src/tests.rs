//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CabId, PassengerId, ShaftId};

    #[test]
    fn index_roundtrip() {
        let id = CabId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(CabId::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PassengerId(0) < PassengerId(1));
        assert!(ShaftId(3) > ShaftId(2));
    }

    #[test]
    fn display() {
        assert_eq!(PassengerId(17).to_string(), "PassengerId(17)");
        assert_eq!(CabId(3).to_string(), "CabId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).since(Tick(10)), 0, "since saturates");
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut clock = SimClock::new();
        assert!(clock.advance_to(Tick(40)));
        assert!(clock.advance_to(Tick(40)), "equal timestamps are fine");
        assert!(!clock.advance_to(Tick(39)));
        assert_eq!(clock.now(), Tick(40));
    }

    #[test]
    fn clock_hms() {
        let mut clock = SimClock::new();
        clock.advance_to(Tick(3_725));
        assert_eq!(clock.elapsed_hms(), (1, 2, 5));
        assert_eq!(clock.to_string(), "T3725 (01:02:05)");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
        }
    }

    #[test]
    fn children_are_reproducible_and_distinct() {
        let mut root_a = SimRng::new(9);
        let mut root_b = SimRng::new(9);
        let mut a0 = root_a.child(0);
        let mut a1 = root_a.child(1);
        let mut b0 = root_b.child(0);
        let x = a0.uniform();
        assert_eq!(x, b0.uniform());
        assert_ne!(x, a1.uniform(), "sibling streams should diverge");
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let u = rng.uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{
        CabPosition, DispatchAlgorithm, FloorRange, LiftError, SimConfig, Tick, ZoneBounds,
    };

    fn assert_config_err(cfg: &SimConfig, needle: &str) {
        match cfg.validate() {
            Err(LiftError::Config(msg)) => assert!(msg.contains(needle), "message was {msg:?}"),
            other => panic!("expected config error containing {needle:?}, got {other:?}"),
        }
    }

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.cab_count(), 12);
        assert_eq!(cfg.horizon, Tick(3_600));
    }

    #[test]
    fn rejects_degenerate_building() {
        assert_config_err(&SimConfig { floors: 0, ..SimConfig::default() }, "at least 2 floors");
        assert_config_err(&SimConfig { shafts: 0, ..SimConfig::default() }, "at least 1 shaft");
        assert_config_err(&SimConfig { cabs_per_shaft: 3, ..SimConfig::default() }, "must be 2");
        assert_config_err(&SimConfig { horizon: Tick::ZERO, ..SimConfig::default() }, "horizon");
    }

    #[test]
    fn rejects_uncovered_floor() {
        let cfg = SimConfig {
            bounds: ZoneBounds {
                lower: FloorRange::new(1, 8),
                upper: FloorRange::new(2, 7),
            },
            ..SimConfig::default()
        };
        assert_config_err(&cfg, "floor 9 is not covered");
    }

    #[test]
    fn rejects_bounds_outside_building() {
        let cfg = SimConfig {
            bounds: ZoneBounds {
                lower: FloorRange::new(1, 12),
                upper: FloorRange::new(2, 30),
            },
            ..SimConfig::default()
        };
        assert_config_err(&cfg, "upper cab bounds");
    }

    #[test]
    fn rejects_bad_inter_arrival_shape() {
        let mut cfg = SimConfig::default();
        cfg.inter_arrival.mode = cfg.inter_arrival.max + 1.0;
        assert_config_err(&cfg, "inter-arrival");
    }

    #[test]
    fn zone_bounds_lookup() {
        let bounds = ZoneBounds::default();
        assert!(bounds.for_position(CabPosition::Lower).covers(1, 12));
        assert!(!bounds.for_position(CabPosition::Upper).covers(1, 2));
        assert!(bounds.serves(2, 21));
        assert!(!bounds.serves(1, 13));
    }

    #[test]
    fn algorithm_parsing() {
        assert_eq!("a".parse::<DispatchAlgorithm>().unwrap(), DispatchAlgorithm::AvoidCollision);
        assert_eq!("1".parse::<DispatchAlgorithm>().unwrap(), DispatchAlgorithm::AvoidCollision);
        assert_eq!("B".parse::<DispatchAlgorithm>().unwrap(), DispatchAlgorithm::CollisionCost);
        assert_eq!(
            "collision-cost".parse::<DispatchAlgorithm>().unwrap(),
            DispatchAlgorithm::CollisionCost
        );
        assert!("c".parse::<DispatchAlgorithm>().is_err());
        assert_eq!(DispatchAlgorithm::CollisionCost.to_string(), "collision-cost");
    }

    #[test]
    fn positions() {
        assert_eq!(CabPosition::Lower.starting_floor(), 1);
        assert_eq!(CabPosition::Upper.starting_floor(), 2);
        assert_eq!(CabPosition::Upper.opposite(), CabPosition::Lower);
    }
}
