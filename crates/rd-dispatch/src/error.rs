use rd_core::{CoreError, UserId, VehicleId};
use rd_registry::RegistryError;
use rd_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("vehicle {0} has no ongoing ride")]
    NoOngoingRide(VehicleId),

    #[error("vehicle {0} is serving a ride")]
    VehicleBusy(VehicleId),

    #[error("cannot end ride for vehicle {0}: not arrived and current location incomplete")]
    IncompleteInput(VehicleId),

    #[error("rating {0} outside [0, 5]")]
    InvalidRating(f64),

    #[error("user {0} has no ride to rebook")]
    NoHistory(UserId),

    #[error("configuration error: {0}")]
    Config(#[from] CoreError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
