//! Puzzle dimensions.

use crate::builder::error::BuildError;
use crate::core::{Disk, PuzzleState};
use serde::{Deserialize, Serialize};

/// Default number of pegs.
pub const DEFAULT_PEGS: usize = 3;

/// Default number of disks.
pub const DEFAULT_DISKS: Disk = 5;

/// Dimensions of a puzzle: how many pegs and how many disks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub pegs: usize,
    pub disks: Disk,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            pegs: DEFAULT_PEGS,
            disks: DEFAULT_DISKS,
        }
    }
}

impl PuzzleConfig {
    pub fn new(pegs: usize, disks: Disk) -> Self {
        Self { pegs, disks }
    }

    /// Dimensions of an existing state.
    pub fn of(state: &PuzzleState) -> Self {
        Self {
            pegs: state.peg_count(),
            disks: state.disk_count(),
        }
    }

    /// Check that both counts are positive.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.pegs == 0 {
            return Err(BuildError::NoPegs);
        }
        if self.disks == 0 {
            return Err(BuildError::NoDisks);
        }
        Ok(())
    }

    /// Starting state for these dimensions.
    pub fn initial_state(&self) -> Result<PuzzleState, BuildError> {
        PuzzleState::initial(self.pegs, self.disks)
    }
}
