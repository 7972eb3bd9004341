//! `VehicleStore` — the live vehicle set.
//!
//! # Two-phase removal
//!
//! A vehicle that exits (or is force-removed) only flips its state to
//! `Removed` during the tick.  The activation order for the tick was fixed
//! before anyone acted, so entries must stay addressable until the tick is
//! over; [`VehicleStore::compact`] drops them all at once afterwards.

use std::collections::BTreeMap;

use pk_core::{GridPos, Tick, VehicleId};

use crate::{AgentError, AgentResult, Vehicle, VehicleAttrs};

/// Live vehicles keyed by id, in spawn order.
#[derive(Clone, Debug, Default)]
pub struct VehicleStore {
    vehicles: BTreeMap<VehicleId, Vehicle>,
    next_id:  u32,
}

impl VehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vehicle at `entrance` and return its id.
    pub fn spawn(&mut self, entrance: GridPos, attrs: VehicleAttrs, now: Tick) -> VehicleId {
        let id = VehicleId(self.next_id);
        self.next_id += 1;
        self.vehicles.insert(id, Vehicle::new(id, entrance, attrs, now));
        id
    }

    #[inline]
    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(&id)
    }

    /// Like [`get_mut`](Self::get_mut) but as an error for `?` callers.
    pub fn require_mut(&mut self, id: VehicleId) -> AgentResult<&mut Vehicle> {
        self.vehicles.get_mut(&id).ok_or(AgentError::VehicleNotFound(id))
    }

    /// Ids of every stored vehicle (removed-but-not-compacted included).
    pub fn ids(&self) -> Vec<VehicleId> {
        self.vehicles.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.values()
    }

    /// Vehicles not yet marked for removal.
    pub fn live(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.values().filter(|v| v.is_live())
    }

    /// Drop every vehicle marked `Removed`.  Returns how many were dropped.
    pub fn compact(&mut self) -> usize {
        let before = self.vehicles.len();
        self.vehicles.retain(|_, v| v.is_live());
        before - self.vehicles.len()
    }

    /// Vehicles ever spawned.
    #[inline]
    pub fn spawned(&self) -> u64 {
        self.next_id as u64
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
