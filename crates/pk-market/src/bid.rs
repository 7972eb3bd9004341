//! Pool entries and resolved allocations.

use pk_core::{SpotId, Tick, VehicleId};

/// One request or bid for a spot.
///
/// AUCTION uses `amount`; PRIORITY uses `priority` and `arrival`.  Entries
/// are kept in submission order, which is the final tie-break for both.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bid {
    pub vehicle:  VehicleId,
    pub amount:   u32,
    pub priority: u8,
    pub arrival:  Tick,
}

/// A won allocation: `vehicle` gets `spot` for `price`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Award {
    pub spot:    SpotId,
    pub vehicle: VehicleId,
    pub price:   u32,
}
