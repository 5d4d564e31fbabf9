//! Move rejection errors.

use super::peg::Disk;
use thiserror::Error;

/// Reasons a move cannot be applied to a puzzle state.
///
/// Every variant names the pegs involved so callers can report the
/// offending move without re-inspecting the state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("No disks on peg {from} (move {from} -> {to})")]
    EmptyPeg { from: usize, to: usize },

    #[error(
        "Top disk on peg {from} is size {disk} which is larger than peg {to}'s top disk of size {target}"
    )]
    DiskTooLarge {
        from: usize,
        to: usize,
        disk: Disk,
        target: Disk,
    },

    #[error("Peg {peg} does not exist (puzzle has {peg_count} pegs)")]
    PegOutOfRange { peg: usize, peg_count: usize },
}

impl InvalidMove {
    /// Source and destination pegs of the rejected move, when known.
    pub fn pegs(&self) -> Option<(usize, usize)> {
        match self {
            Self::EmptyPeg { from, to } | Self::DiskTooLarge { from, to, .. } => Some((*from, *to)),
            Self::PegOutOfRange { .. } => None,
        }
    }
}
