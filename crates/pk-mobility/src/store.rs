//! The `OccupancyStore` — which vehicle stands on which cell.

use rustc_hash::FxHashMap;

use pk_core::{GridPos, VehicleId};

use crate::{MobilityError, MobilityResult};

/// Sparse `GridPos → VehicleId` index.  Only occupied cells have an entry.
#[derive(Clone, Debug, Default)]
pub struct OccupancyStore {
    cells: FxHashMap<GridPos, VehicleId>,
}

impl OccupancyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `vehicle` on `pos`.  Fails if another vehicle holds the cell.
    pub fn place(&mut self, pos: GridPos, vehicle: VehicleId) -> MobilityResult<()> {
        match self.cells.get(&pos) {
            Some(&holder) if holder != vehicle => Err(MobilityError::CellOccupied { pos, holder }),
            _ => {
                self.cells.insert(pos, vehicle);
                Ok(())
            }
        }
    }

    /// Clear `pos` if `vehicle` holds it.  Returns `true` if a cell was freed.
    pub fn vacate(&mut self, pos: GridPos, vehicle: VehicleId) -> bool {
        if self.cells.get(&pos) == Some(&vehicle) {
            self.cells.remove(&pos);
            true
        } else {
            false
        }
    }

    /// Move `vehicle` from `from` to `to`.  The caller has checked that `to`
    /// is free.
    pub(crate) fn relocate(&mut self, vehicle: VehicleId, from: GridPos, to: GridPos) {
        self.vacate(from, vehicle);
        self.cells.insert(to, vehicle);
    }

    #[inline]
    pub fn holder(&self, pos: GridPos) -> Option<VehicleId> {
        self.cells.get(&pos).copied()
    }

    #[inline]
    pub fn is_free(&self, pos: GridPos) -> bool {
        !self.cells.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridPos, VehicleId)> + '_ {
        self.cells.iter().map(|(&p, &v)| (p, v))
    }
}
