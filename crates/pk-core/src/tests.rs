//! Unit tests for pk-core primitives.

#[cfg(test)]
mod ids {
    use crate::{SpotId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = SpotId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SpotId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VehicleId(0) < VehicleId(1));
        assert!(SpotId(100) > SpotId(99));
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Direction, GridPos};

    #[test]
    fn manhattan_is_symmetric() {
        let a = GridPos::new(1, 7);
        let b = GridPos::new(4, 3);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn up_decreases_y() {
        let p = GridPos::new(3, 3);
        assert_eq!(p.step(Direction::Up), GridPos::new(3, 2));
        assert_eq!(p.step(Direction::Down), GridPos::new(3, 4));
        assert_eq!(p.step(Direction::Left), GridPos::new(2, 3));
        assert_eq!(p.step(Direction::Right), GridPos::new(4, 3));
    }

    #[test]
    fn neighbours_are_distance_one() {
        let p = GridPos::new(0, 0);
        for n in p.neighbours() {
            assert_eq!(p.manhattan(n), 1);
        }
    }

    #[test]
    fn horizontal_towards() {
        assert_eq!(Direction::horizontal_towards(2, 5), Some(Direction::Right));
        assert_eq!(Direction::horizontal_towards(5, 2), Some(Direction::Left));
        assert_eq!(Direction::horizontal_towards(5, 5), None);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
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
        assert_eq!(Tick(3).since(Tick(10)), 0);
    }

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed(), 2);
        assert_eq!(clock.to_string(), "T2");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;
    use crate::rng::PERTURBATION_SCALE;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        SimRng::new(99).shuffle(&mut a);
        SimRng::new(99).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn perturbation_bounded() {
        let mut rng = SimRng::new(1);
        for _ in 0..1_000 {
            let p = rng.perturbation();
            assert!((0.0..PERTURBATION_SCALE).contains(&p));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(3);
        assert!((0..100).all(|_| rng.gen_bool(1.0)));
        assert!((0..100).all(|_| !rng.gen_bool(0.0)));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(3);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

#[cfg(test)]
mod config {
    use crate::{AllocationMode, PkError, SimConfig};

    #[test]
    fn default_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("fcfs".parse::<AllocationMode>().unwrap(), AllocationMode::Fcfs);
        assert_eq!("Auction".parse::<AllocationMode>().unwrap(), AllocationMode::Auction);
        assert_eq!(" PRIORITY ".parse::<AllocationMode>().unwrap(), AllocationMode::Priority);
    }

    #[test]
    fn unknown_mode_is_error() {
        let err = "LOTTERY".parse::<AllocationMode>().unwrap_err();
        assert!(matches!(err, PkError::UnknownMode(ref s) if s == "LOTTERY"));
    }

    #[test]
    fn mode_display_round_trips() {
        for mode in [AllocationMode::Fcfs, AllocationMode::Auction, AllocationMode::Priority] {
            assert_eq!(mode.to_string().parse::<AllocationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn rejects_tiny_grid() {
        let cfg = SimConfig { width: 2, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(PkError::Config(_))));
        let cfg = SimConfig { height: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_spawn_rate() {
        for rate in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let cfg = SimConfig { spawn_rate: rate, ..SimConfig::default() };
            assert!(cfg.validate().is_err(), "rate {rate} accepted");
        }
        let cfg = SimConfig { spawn_rate: 1.0, ..SimConfig::default() };
        cfg.validate().unwrap();
    }
}

#[cfg(test)]
mod spot {
    use crate::SpotType;

    #[test]
    fn base_prices() {
        assert_eq!(SpotType::Standard.base_price(), 5);
        assert_eq!(SpotType::Handicap.base_price(), 10);
        assert_eq!(SpotType::Vip.base_price(), 20);
        assert_eq!(SpotType::Vip.to_string(), "VIP");
    }
}
