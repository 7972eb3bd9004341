use pk_core::{GridPos, VehicleId};
use pk_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("cell {pos} is already held by {holder}")]
    CellOccupied { pos: GridPos, holder: VehicleId },

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
