//! Per-tick aggregate metrics.

use pk_agent::{SpotRegistry, VehicleState, VehicleStore};
use pk_core::Tick;

/// Running totals updated as side effects of allocation and movement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counters {
    pub total_revenue:          u64,
    pub total_walking_distance: u64,
    /// Arrivals at a spot so far.
    pub parked_count:           u64,
    pub departed_count:         u64,
    pub forced_removals:        u64,
}

/// Facility-wide metrics after a tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub tick:                  u64,
    /// Occupied spots as a percentage of all spots.
    pub occupancy_rate:        f64,
    pub total_revenue:         u64,
    pub avg_walking_distance:  f64,
    /// Sample variance of `waiting_time` over live vehicles that are not
    /// SEARCHING.
    pub waiting_time_variance: f64,
    pub live_vehicles:         usize,
    /// Vehicles spawned so far.
    pub vehicle_count:         u64,
    pub parked_count:          u64,
    pub forced_removals:       u64,
}

impl Metrics {
    pub fn compute(tick: Tick, spots: &SpotRegistry, vehicles: &VehicleStore, counters: &Counters) -> Self {
        let avg_walking_distance = if counters.parked_count == 0 {
            0.0
        } else {
            counters.total_walking_distance as f64 / counters.parked_count as f64
        };
        let waits: Vec<f64> = vehicles
            .live()
            .filter(|v| v.state != VehicleState::Searching)
            .map(|v| v.waiting_time as f64)
            .collect();

        Self {
            tick:                  tick.0,
            occupancy_rate:        spots.occupancy_rate(),
            total_revenue:         counters.total_revenue,
            avg_walking_distance,
            waiting_time_variance: sample_variance(&waits),
            live_vehicles:         vehicles.live().count(),
            vehicle_count:         vehicles.spawned(),
            parked_count:          counters.parked_count,
            forced_removals:       counters.forced_removals,
        }
    }
}

/// Unbiased (n − 1) variance; 0 with fewer than two samples.
pub fn sample_variance(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
}
