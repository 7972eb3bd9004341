//! Unit tests for pk-agent.

use pk_core::{GridPos, SimRng, SpotId, SpotType, Tick, VehicleId};
use pk_spatial::RoadTopology;

use crate::{SpotRegistry, VehicleAttrs};

fn registry20() -> SpotRegistry {
    SpotRegistry::from_topology(&RoadTopology::new(20, 20).unwrap())
}

fn attrs() -> VehicleAttrs {
    VehicleAttrs { budget: 30, priority: 1, parking_duration: 3 }
}

#[cfg(test)]
mod registry {
    use super::*;
    use crate::AgentError;

    #[test]
    fn one_spot_per_parkable_cell() {
        let reg = registry20();
        assert_eq!(reg.len(), 216);
        assert!(reg.iter().all(|s| s.is_free()));
        assert_eq!(reg.free_spots().count(), 216);
    }

    #[test]
    fn ids_are_column_major() {
        let reg = registry20();
        assert_eq!(reg.lookup(SpotId(0)).unwrap().pos, GridPos::new(1, 1));
        assert_eq!(reg.lookup(SpotId(18)).unwrap().pos, GridPos::new(2, 1));
        for (i, s) in reg.iter().enumerate() {
            assert_eq!(s.id.index(), i);
            assert_eq!(reg.at(s.pos), Some(s.id));
        }
    }

    #[test]
    fn zoning_and_prices() {
        let reg = registry20();
        let vip = reg.at(GridPos::new(17, 1)).unwrap();
        let std = reg.at(GridPos::new(10, 10)).unwrap();
        let vip = reg.lookup(vip).unwrap();
        assert_eq!(vip.spot_type, SpotType::Vip);
        assert_eq!(vip.base_price, 20);
        assert_eq!(vip.distance_to_exit, 3);
        assert_eq!(reg.lookup(std).unwrap().base_price, 5);
    }

    #[test]
    fn lane_cells_have_no_spot() {
        let reg = registry20();
        assert!(reg.at(GridPos::new(0, 5)).is_none());
        assert!(reg.at(GridPos::new(5, 0)).is_none());
    }

    #[test]
    fn reserve_sets_both_fields() {
        let mut reg = registry20();
        reg.reserve(SpotId(7), VehicleId(3)).unwrap();
        let s = reg.lookup(SpotId(7)).unwrap();
        assert!(s.occupied);
        assert_eq!(s.reserved_by, Some(VehicleId(3)));
        assert_eq!(reg.occupied_count(), 1);
        assert_eq!(reg.free_spots().count(), 215);
    }

    #[test]
    fn double_reserve_fails() {
        let mut reg = registry20();
        reg.reserve(SpotId(7), VehicleId(3)).unwrap();
        let err = reg.reserve(SpotId(7), VehicleId(4)).unwrap_err();
        assert!(matches!(
            err,
            AgentError::AlreadyReserved { spot: SpotId(7), holder: VehicleId(3) }
        ));
        assert_eq!(reg.lookup(SpotId(7)).unwrap().reserved_by, Some(VehicleId(3)));
    }

    #[test]
    fn unknown_spot_is_an_error() {
        let mut reg = registry20();
        assert!(matches!(reg.reserve(SpotId(9999), VehicleId(0)), Err(AgentError::SpotNotFound(_))));
        assert!(reg.release(SpotId(9999)).is_err());
        assert!(reg.lookup(SpotId(9999)).is_none());
    }

    #[test]
    fn release_is_idempotent() {
        let mut reg = registry20();
        reg.reserve(SpotId(1), VehicleId(0)).unwrap();
        reg.release(SpotId(1)).unwrap();
        reg.release(SpotId(1)).unwrap();
        let s = reg.lookup(SpotId(1)).unwrap();
        assert!(!s.occupied);
        assert!(s.reserved_by.is_none());
        assert_eq!(reg.occupied_count(), 0);
    }

    #[test]
    fn occupancy_rate_percent() {
        let topo = RoadTopology::new(3, 3).unwrap();
        let mut reg = SpotRegistry::from_topology(&topo);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.occupancy_rate(), 0.0);
        reg.reserve(SpotId(0), VehicleId(0)).unwrap();
        assert_eq!(reg.occupancy_rate(), 100.0);
        assert_eq!(SpotRegistry::default().occupancy_rate(), 0.0);
    }
}

#[cfg(test)]
mod vehicle {
    use super::*;
    use crate::vehicle::{MOVING_STUCK_LIMIT, SEARCHING_STUCK_LIMIT};
    use crate::{Recovery, Vehicle, VehicleState};

    fn fresh() -> Vehicle {
        Vehicle::new(VehicleId(0), GridPos::new(0, 0), attrs(), Tick(4))
    }

    #[test]
    fn new_vehicle_is_searching_at_entrance() {
        let v = fresh();
        assert_eq!(v.state, VehicleState::Searching);
        assert_eq!(v.pos, v.entrance);
        assert_eq!(v.last_position, v.entrance);
        assert_eq!(v.arrival_tick, Tick(4));
        assert!(v.target.is_none());
        assert!(v.is_live());
    }

    #[test]
    fn attrs_within_ranges() {
        let mut rng = SimRng::new(11);
        let mut seen = [0usize; 4];
        for _ in 0..2_000 {
            let a = VehicleAttrs::draw(&mut rng);
            assert!((10..=50).contains(&a.budget));
            assert!((50..=200).contains(&a.parking_duration));
            seen[a.priority as usize] += 1;
        }
        assert_eq!(seen[0], 0);
        // Roughly 70 / 20 / 10 percent.
        assert!(seen[1] > seen[2] && seen[2] > seen[3] && seen[3] > 100);
    }

    #[test]
    fn stuck_counter_counts_and_resets() {
        let mut v = fresh();
        v.observe_position();
        v.observe_position();
        assert_eq!(v.stuck_counter, 2);
        v.pos = GridPos::new(0, 1);
        v.observe_position();
        assert_eq!(v.stuck_counter, 0);
        assert_eq!(v.last_position, GridPos::new(0, 1));
    }

    #[test]
    fn parked_does_not_accrue() {
        let mut v = fresh();
        v.transition(VehicleState::Parked);
        for _ in 0..100 {
            v.observe_position();
        }
        assert_eq!(v.stuck_counter, 0);
        assert!(v.recovery().is_none());
    }

    #[test]
    fn transition_resets_stuck_tracking() {
        let mut v = fresh();
        for _ in 0..10 {
            v.observe_position();
        }
        v.pos = GridPos::new(0, 3);
        v.assign(SpotId(2), 5);
        assert_eq!(v.state, VehicleState::Moving);
        assert_eq!(v.stuck_counter, 0);
        assert_eq!(v.last_position, GridPos::new(0, 3));
        assert_eq!(v.target, Some(SpotId(2)));
        assert_eq!(v.paid, 5);
    }

    #[test]
    fn recovery_thresholds() {
        let mut v = fresh();
        v.assign(SpotId(0), 5);
        for _ in 0..MOVING_STUCK_LIMIT {
            v.observe_position();
        }
        assert!(v.recovery().is_none());
        v.observe_position();
        assert_eq!(v.recovery(), Some(Recovery::AbandonSpot));

        assert_eq!(v.clear_target(), Some(SpotId(0)));
        assert_eq!(v.paid, 0);
        v.transition(VehicleState::Searching);
        for _ in 0..=SEARCHING_STUCK_LIMIT {
            v.observe_position();
        }
        assert_eq!(v.recovery(), Some(Recovery::GiveUp));

        v.leave(GridPos::new(19, 0));
        assert_eq!(v.state, VehicleState::Leaving);
        assert_eq!(v.exit, Some(GridPos::new(19, 0)));
        for _ in 0..21 {
            v.observe_position();
        }
        assert_eq!(v.recovery(), Some(Recovery::ForceRemove));
    }

    #[test]
    fn parking_countdown() {
        let mut v = fresh();
        assert!(!v.tick_parking());
        assert!(!v.tick_parking());
        assert!(v.tick_parking());
        assert!(v.tick_parking());
    }

    #[test]
    fn state_labels() {
        assert_eq!(VehicleState::Searching.to_string(), "SEARCHING");
        assert_eq!(VehicleState::Removed.as_str(), "REMOVED");
    }
}

#[cfg(test)]
mod store {
    use super::*;
    use crate::{VehicleState, VehicleStore};

    #[test]
    fn ids_are_monotonic() {
        let mut store = VehicleStore::new();
        let a = store.spawn(GridPos::new(0, 0), attrs(), Tick(0));
        let b = store.spawn(GridPos::new(19, 19), attrs(), Tick(1));
        assert_eq!(a, VehicleId(0));
        assert_eq!(b, VehicleId(1));
        assert_eq!(store.ids(), vec![a, b]);
        assert_eq!(store.spawned(), 2);
    }

    #[test]
    fn compact_drops_removed_only() {
        let mut store = VehicleStore::new();
        let a = store.spawn(GridPos::new(0, 0), attrs(), Tick(0));
        let b = store.spawn(GridPos::new(19, 19), attrs(), Tick(0));
        store.get_mut(a).unwrap().transition(VehicleState::Removed);
        assert_eq!(store.len(), 2);
        assert_eq!(store.live().count(), 1);
        assert_eq!(store.compact(), 1);
        assert!(store.get(a).is_none());
        assert!(store.get(b).is_some());
        // Ids are never reused.
        assert_eq!(store.spawn(GridPos::new(0, 0), attrs(), Tick(2)), VehicleId(2));
    }

    #[test]
    fn require_mut_reports_missing() {
        let mut store = VehicleStore::new();
        assert!(store.require_mut(VehicleId(5)).is_err());
    }
}
