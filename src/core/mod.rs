//! Core puzzle types and logic.
//!
//! This module contains the pure core of the puzzle model:
//! - Pegs, disks and moves
//! - The immutable `PuzzleState` and its transitions
//! - History walks over the parent chain
//! - The `Puzzle` trait and move replay
//!
//! Nothing in this module mutates a state once it has been built.

mod error;
mod history;
mod peg;
mod puzzle;
mod state;

pub use error::InvalidMove;
pub use history::Ancestors;
pub use peg::{Disk, Move, Peg, TopDisk};
pub use puzzle::{replay, Puzzle};
pub use state::PuzzleState;
