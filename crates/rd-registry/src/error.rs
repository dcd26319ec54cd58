use rd_core::{UserId, VehicleId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("vehicle {0} is already registered")]
    DuplicateVehicle(VehicleId),

    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("invalid traffic delay {delay} for vehicle {vehicle}")]
    InvalidDelay { vehicle: VehicleId, delay: f64 },

    #[error("invalid coordinates {0}")]
    InvalidLocation(rd_core::GeoPoint),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
