//! Checkpoint and resume functionality for puzzle histories.
//!
//! A checkpoint records where a history started and every move played
//! since, so a state and its whole parent chain can be rebuilt after a
//! process restart. Checkpoints serialize to JSON for readability or to
//! bincode for compactness.

use crate::builder::PuzzleConfig;
use crate::core::{replay, Disk, Move, PuzzleState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable record of a puzzle state and the moves that reached it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Puzzle dimensions
    pub config: PuzzleConfig,

    /// Configuration of the root state, bottom disk first
    pub start: Vec<Vec<Disk>>,

    /// Moves played from the root, in order
    pub moves: Vec<Move>,

    /// Configuration of the captured state
    pub current: Vec<Vec<Disk>>,
}

impl Checkpoint {
    /// Record `state` and its full history.
    pub fn capture(state: &PuzzleState) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            config: PuzzleConfig::of(state),
            start: state.root().stacks(),
            moves: state.moves(),
            current: state.stacks(),
        };
        debug!(
            id = %checkpoint.id,
            moves = checkpoint.moves.len(),
            "captured checkpoint"
        );
        checkpoint
    }

    /// Rebuild the captured state by replaying every recorded move.
    ///
    /// The returned state has the same parent chain as the captured one.
    ///
    /// # Errors
    ///
    /// Fails if the version is unsupported, the recorded start is not a
    /// valid configuration, a move is rejected, or the replayed
    /// configuration differs from the recorded one.
    pub fn restore(&self) -> Result<PuzzleState, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.start.len() != self.config.pegs {
            return Err(CheckpointError::ValidationFailed(format!(
                "start has {} pegs, config says {}",
                self.start.len(),
                self.config.pegs
            )));
        }

        let root = PuzzleState::from_configuration(self.config.disks, self.start.clone())?;
        let state = replay(&root, self.moves.iter().copied())?;

        if state.stacks() != self.current {
            warn!(id = %self.id, "replayed configuration differs from checkpoint");
            return Err(CheckpointError::ValidationFailed(
                "replayed configuration does not match recorded configuration".to_string(),
            ));
        }

        debug!(id = %self.id, depth = state.depth(), "restored checkpoint");
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}
