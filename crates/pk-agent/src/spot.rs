//! A single parking spot.

use pk_core::{GridPos, SpotId, SpotType, VehicleId};

/// One parkable cell.
///
/// `occupied` and `reserved_by` always change together: a spot is occupied
/// from the moment it is allocated, before its vehicle physically arrives,
/// until the vehicle departs or abandons it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkingSpot {
    pub id:               SpotId,
    pub pos:              GridPos,
    pub spot_type:        SpotType,
    pub base_price:       u32,
    pub occupied:         bool,
    pub reserved_by:      Option<VehicleId>,
    /// Manhattan distance to the nearer exit, fixed at creation.
    pub distance_to_exit: u32,
}

impl ParkingSpot {
    pub fn new(id: SpotId, pos: GridPos, spot_type: SpotType, distance_to_exit: u32) -> Self {
        Self {
            id,
            pos,
            spot_type,
            base_price: spot_type.base_price(),
            occupied: false,
            reserved_by: None,
            distance_to_exit,
        }
    }

    /// `true` if nobody holds or occupies the spot.
    #[inline]
    pub fn is_free(&self) -> bool {
        !self.occupied && self.reserved_by.is_none()
    }
}
