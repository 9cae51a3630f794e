use lift_core::{CabId, Floor, LiftError, PassengerId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// No cab may legally carry the passenger, even ignoring collisions.
    /// Reachable only through a configuration that slipped validation.
    #[error("no cab can serve passenger {passenger} from floor {origin} to floor {destination}")]
    Infeasible {
        passenger:   PassengerId,
        origin:      Floor,
        destination: Floor,
    },

    #[error("passenger {0} reached its exit without an assigned cab")]
    Unassigned(PassengerId),

    #[error("cab {0} is not part of the bank")]
    UnknownCab(CabId),

    #[error(transparent)]
    Core(#[from] LiftError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
