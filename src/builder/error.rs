//! Build errors for puzzle construction.

use thiserror::Error;

/// Errors that can occur when building a puzzle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Puzzle needs at least one peg. Call .pegs(n) with n > 0")]
    NoPegs,

    #[error("Puzzle needs at least one disk. Call .disks(n) with n > 0")]
    NoDisks,
}
