//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `rd-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("invalid road {from} <-> {to}: weight {weight} must be finite and non-negative")]
    InvalidEdge { from: String, to: String, weight: f64 },

    #[error("road file parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
