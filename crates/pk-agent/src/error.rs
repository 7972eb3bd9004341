use pk_core::{SpotId, VehicleId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("spot {0} does not exist")]
    SpotNotFound(SpotId),

    #[error("spot {spot} is already reserved by {holder}")]
    AlreadyReserved { spot: SpotId, holder: VehicleId },

    #[error("vehicle {0} is not in the live set")]
    VehicleNotFound(VehicleId),
}

pub type AgentResult<T> = Result<T, AgentError>;
