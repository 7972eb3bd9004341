//! `SpotRegistry` — the spot arena.
//!
//! Spots are created once from the topology and never destroyed, so a
//! `SpotId` is simply the spot's index in the arena.  A secondary
//! `GridPos → SpotId` index answers "is there a spot here?" in O(1).

use rustc_hash::FxHashMap;

use pk_core::{GridPos, SpotId, VehicleId};
use pk_spatial::RoadTopology;

use crate::{AgentError, AgentResult, ParkingSpot};

/// Arena of every parking spot in the facility.
#[derive(Clone, Debug, Default)]
pub struct SpotRegistry {
    spots:  Vec<ParkingSpot>,
    by_pos: FxHashMap<GridPos, SpotId>,
}

impl SpotRegistry {
    /// One spot per parkable cell, ids assigned in column-major order.
    pub fn from_topology(topology: &RoadTopology) -> Self {
        let mut registry = Self::default();
        for (i, pos) in topology.parkable_cells().enumerate() {
            let id = SpotId(i as u32);
            registry.spots.push(ParkingSpot::new(
                id,
                pos,
                topology.zone(pos),
                topology.distance_to_exit(pos),
            ));
            registry.by_pos.insert(pos, id);
        }
        registry
    }

    #[inline]
    pub fn lookup(&self, id: SpotId) -> Option<&ParkingSpot> {
        self.spots.get(id.index())
    }

    /// The spot at `pos`, if that cell is parkable.
    #[inline]
    pub fn at(&self, pos: GridPos) -> Option<SpotId> {
        self.by_pos.get(&pos).copied()
    }

    /// Spots that are neither occupied nor reserved, in id order.
    pub fn free_spots(&self) -> impl Iterator<Item = &ParkingSpot> + '_ {
        self.spots.iter().filter(|s| s.is_free())
    }

    /// Reserve and occupy `spot` for `vehicle` in one step.
    pub fn reserve(&mut self, spot: SpotId, vehicle: VehicleId) -> AgentResult<()> {
        let s = self.spots.get_mut(spot.index()).ok_or(AgentError::SpotNotFound(spot))?;
        // `occupied` implies `reserved_by`, so the holder check covers both.
        if let Some(holder) = s.reserved_by {
            return Err(AgentError::AlreadyReserved { spot, holder });
        }
        s.occupied = true;
        s.reserved_by = Some(vehicle);
        Ok(())
    }

    /// Clear both `occupied` and `reserved_by`.  Releasing a free spot is a
    /// no-op.
    pub fn release(&mut self, spot: SpotId) -> AgentResult<()> {
        let s = self.spots.get_mut(spot.index()).ok_or(AgentError::SpotNotFound(spot))?;
        s.occupied = false;
        s.reserved_by = None;
        Ok(())
    }

    pub fn occupied_count(&self) -> usize {
        self.spots.iter().filter(|s| s.occupied).count()
    }

    /// Occupied spots as a percentage of all spots; 0 for an empty arena.
    pub fn occupancy_rate(&self) -> f64 {
        if self.spots.is_empty() {
            return 0.0;
        }
        self.occupied_count() as f64 / self.spots.len() as f64 * 100.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParkingSpot> + '_ {
        self.spots.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = SpotId> + '_ {
        self.spots.iter().map(|s| s.id)
    }
}
