//! Plain data row types written by output backends.

use pk_agent::VehicleState;
use pk_sim::{Metrics, VehicleSnapshot};

/// Facility-wide metrics for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRow {
    pub tick:                  u64,
    pub occupancy_rate:        f64,
    pub total_revenue:         u64,
    pub avg_walking_distance:  f64,
    pub waiting_time_variance: f64,
    pub live_vehicles:         u64,
    pub parked_count:          u64,
    pub forced_removals:       u64,
}

impl From<&Metrics> for MetricsRow {
    fn from(m: &Metrics) -> Self {
        Self {
            tick:                  m.tick,
            occupancy_rate:        m.occupancy_rate,
            total_revenue:         m.total_revenue,
            avg_walking_distance:  m.avg_walking_distance,
            waiting_time_variance: m.waiting_time_variance,
            live_vehicles:         m.live_vehicles as u64,
            parked_count:          m.parked_count,
            forced_removals:       m.forced_removals,
        }
    }
}

/// One vehicle at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleSnapshotRow {
    pub tick:       u64,
    pub vehicle_id: u32,
    pub x:          i32,
    pub y:          i32,
    pub state:      VehicleState,
    pub budget:     u32,
    pub priority:   u8,
}

impl VehicleSnapshotRow {
    pub fn new(tick: u64, v: &VehicleSnapshot) -> Self {
        Self {
            tick,
            vehicle_id: v.id.0,
            x:          v.pos.x,
            y:          v.pos.y,
            state:      v.state,
            budget:     v.budget,
            priority:   v.priority,
        }
    }
}
