use pk_core::{AllocationMode, SpotId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("bid pool refers to unknown spot {0}")]
    UnknownSpot(SpotId),

    #[error("{operation} is not available in {mode} mode")]
    WrongMode { operation: &'static str, mode: AllocationMode },
}

pub type MarketResult<T> = Result<T, MarketError>;
