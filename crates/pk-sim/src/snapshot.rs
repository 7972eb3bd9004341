//! Point-in-time view of the facility for observers and drivers.

use pk_agent::{SpotRegistry, VehicleState, VehicleStore};
use pk_core::{GridPos, SpotId, SpotType, Tick, VehicleId};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotSnapshot {
    pub id:        SpotId,
    pub pos:       GridPos,
    pub spot_type: SpotType,
    pub occupied:  bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleSnapshot {
    pub id:       VehicleId,
    pub pos:      GridPos,
    pub state:    VehicleState,
    pub budget:   u32,
    pub priority: u8,
}

/// Every spot and every live vehicle, in id order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub tick:     Tick,
    pub spots:    Vec<SpotSnapshot>,
    pub vehicles: Vec<VehicleSnapshot>,
}

impl Snapshot {
    pub fn capture(tick: Tick, spots: &SpotRegistry, vehicles: &VehicleStore) -> Self {
        Self {
            tick,
            spots: spots
                .iter()
                .map(|s| SpotSnapshot { id: s.id, pos: s.pos, spot_type: s.spot_type, occupied: s.occupied })
                .collect(),
            vehicles: vehicles
                .live()
                .map(|v| VehicleSnapshot {
                    id:       v.id,
                    pos:      v.pos,
                    state:    v.state,
                    budget:   v.budget,
                    priority: v.priority,
                })
                .collect(),
        }
    }
}
