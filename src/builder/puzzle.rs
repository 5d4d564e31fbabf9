//! Builder for constructing puzzle states.

use crate::builder::config::PuzzleConfig;
use crate::builder::error::BuildError;
use crate::core::{Disk, PuzzleState};

/// Builder for the starting state of a puzzle with a fluent API.
///
/// Unset dimensions fall back to [`PuzzleConfig::default`].
#[derive(Clone, Debug, Default)]
pub struct PuzzleBuilder {
    pegs: Option<usize>,
    disks: Option<Disk>,
}

impl PuzzleBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pegs.
    pub fn pegs(mut self, pegs: usize) -> Self {
        self.pegs = Some(pegs);
        self
    }

    /// Set the number of disks.
    pub fn disks(mut self, disks: Disk) -> Self {
        self.disks = Some(disks);
        self
    }

    /// Resolve the dimensions without building a state.
    /// Returns an error if either count is zero.
    pub fn config(&self) -> Result<PuzzleConfig, BuildError> {
        let defaults = PuzzleConfig::default();
        let config = PuzzleConfig {
            pegs: self.pegs.unwrap_or(defaults.pegs),
            disks: self.disks.unwrap_or(defaults.disks),
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the initial puzzle state.
    pub fn build(self) -> Result<PuzzleState, BuildError> {
        self.config()?.initial_state()
    }
}

impl From<PuzzleConfig> for PuzzleBuilder {
    fn from(config: PuzzleConfig) -> Self {
        Self::new().pegs(config.pegs).disks(config.disks)
    }
}
