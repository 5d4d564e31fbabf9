//! hanoi-state: an immutable model of the generalized Tower of Hanoi
//!
//! The puzzle is a pure value. A `PuzzleState` is never modified once
//! built; applying a move produces a new state that remembers its parent
//! and the move that produced it, so every state carries its own history.
//!
//! # Core Concepts
//!
//! - **PuzzleState**: Snapshot of disks on pegs with move validation
//! - **Moves**: `(from, to)` pairs checked against the stacking rule
//! - **History**: The parent chain, walkable back to the starting state
//! - **Checkpoints**: Serializable move histories that can be replayed
//!
//! The crate checks and applies moves supplied by a caller; it does not
//! search for solutions.
//!
//! # Example
//!
//! ```rust
//! use hanoi_state::{Move, PuzzleState};
//!
//! let state = PuzzleState::initial(3, 2)?;
//! assert_eq!(state.possible_actions(), vec![Move::new(0, 1), Move::new(0, 2)]);
//!
//! let state = state
//!     .transition(0, 1)?
//!     .transition(0, 2)?
//!     .transition(1, 2)?;
//!
//! assert!(state.is_goal_state());
//! assert_eq!(state.stacks(), vec![vec![], vec![], vec![2, 1]]);
//! assert_eq!(state.depth(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{BuildError, PuzzleBuilder, PuzzleConfig};
pub use crate::checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{replay, Disk, InvalidMove, Move, Peg, Puzzle, PuzzleState, TopDisk};
pub use crate::validation::{ConfigurationError, ConfigurationViolation};
