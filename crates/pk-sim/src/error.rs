use pk_agent::AgentError;
use pk_core::PkError;
use pk_market::MarketError;
use pk_mobility::MobilityError;
use pk_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] PkError),

    #[error("grid error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("allocation error: {0}")]
    Market(#[from] MarketError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),

    /// Internal state no longer adds up.  Fatal; never retried.
    #[error("simulation invariant violated: {0}")]
    Invariant(String),
}

pub type SimResult<T> = Result<T, SimError>;
