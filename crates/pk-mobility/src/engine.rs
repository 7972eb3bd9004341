//! Movement engine: asks the router for candidates and moves one cell.

use pk_core::{GridPos, SimRng, VehicleId};
use pk_spatial::{RoadTopology, Router};

use crate::{MobilityResult, OccupancyStore, StepOutcome};

/// Wraps a [`Router`] and the [`OccupancyStore`] behind the step API used by
/// pk-sim.
///
/// `R` is chosen at compile time, e.g. [`pk_spatial::LaneRouter`].
pub struct MobilityEngine<R: Router> {
    /// The next-step planner.
    pub router: R,

    /// Cell occupancy for every vehicle on the grid.
    pub store: OccupancyStore,
}

impl<R: Router> MobilityEngine<R> {
    pub fn new(router: R) -> Self {
        Self { router, store: OccupancyStore::new() }
    }

    /// Put a vehicle on the grid without moving (spawn).
    pub fn place(&mut self, vehicle: VehicleId, pos: GridPos, topology: &RoadTopology) -> MobilityResult<()> {
        topology.ensure_contains(pos)?;
        self.store.place(pos, vehicle)
    }

    /// Take a vehicle off the grid.
    pub fn vacate(&mut self, vehicle: VehicleId, pos: GridPos) -> bool {
        self.store.vacate(pos, vehicle)
    }

    #[inline]
    pub fn is_free(&self, pos: GridPos) -> bool {
        self.store.is_free(pos)
    }

    /// `true` if `vehicle` may not enter `cell`.
    ///
    /// `own_spot` is the cell of the mover's reserved spot, the only parkable
    /// cell it may enter.
    pub fn is_blocked(
        &self,
        vehicle:  VehicleId,
        cell:     GridPos,
        own_spot: Option<GridPos>,
        topology: &RoadTopology,
    ) -> bool {
        if !topology.contains(cell) {
            return true;
        }
        if matches!(self.store.holder(cell), Some(h) if h != vehicle) {
            return true;
        }
        topology.is_parkable(cell) && own_spot != Some(cell)
    }

    /// Advance `vehicle` one cell from `from` towards `target`.
    ///
    /// Takes the first unblocked router candidate.  The occupancy index is
    /// updated on a move; the caller updates the vehicle's own position.
    pub fn step_toward(
        &mut self,
        vehicle:  VehicleId,
        from:     GridPos,
        target:   GridPos,
        own_spot: Option<GridPos>,
        topology: &RoadTopology,
        rng:      &mut SimRng,
    ) -> StepOutcome {
        if from == target {
            return StepOutcome::Stationary;
        }
        let candidates = self.router.candidates(topology, from, target, rng);
        let Some(to) = candidates
            .into_iter()
            .find(|&c| !self.is_blocked(vehicle, c, own_spot, topology))
        else {
            return StepOutcome::Blocked;
        };
        self.store.relocate(vehicle, from, to);
        StepOutcome::Moved { from, to }
    }
}
