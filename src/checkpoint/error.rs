//! Checkpoint error types.

use crate::core::InvalidMove;
use crate::validation::ConfigurationError;
use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint data failed validation
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(String),

    /// The recorded starting configuration is not a valid puzzle
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A recorded move could not be replayed
    #[error("Recorded move could not be replayed: {0}")]
    InvalidMove(#[from] InvalidMove),
}
