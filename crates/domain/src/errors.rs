//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Latitude/longitude outside the valid range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Bounding box whose south-west corner is not south-west of its north-east corner
    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// The map already carries the maximum number of custom markers
    #[error("Marker limit reached: at most {max} custom markers may be shown")]
    MarkerLimitReached {
        /// Maximum number of custom markers
        max: usize,
    },
}
