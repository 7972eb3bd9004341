//! Spatial-subsystem error type.

use thiserror::Error;

use pk_core::GridPos;

/// Errors produced by `pk-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("grid {width}x{height} is too small (minimum {min}x{min})")]
    GridTooSmall { width: u32, height: u32, min: u32 },

    #[error("grid {width}x{height} does not fit in i32 coordinates")]
    GridTooLarge { width: u32, height: u32 },

    #[error("cell {0} lies outside the grid")]
    OutOfBounds(GridPos),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
