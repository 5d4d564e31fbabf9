//! Builder API for puzzle construction.
//!
//! This module provides the fluent `PuzzleBuilder`, the serializable
//! `PuzzleConfig` dimensions, and the errors raised when either count is
//! unusable.
//!
//! # Example
//!
//! ```
//! use hanoi_state::builder::PuzzleBuilder;
//!
//! let state = PuzzleBuilder::new().pegs(3).disks(4).build()?;
//! assert_eq!(state.stacks(), vec![vec![4, 3, 2, 1], vec![], vec![]]);
//! assert!(!state.is_goal_state());
//! # Ok::<(), hanoi_state::builder::BuildError>(())
//! ```

pub mod config;
pub mod error;
pub mod puzzle;

pub use config::{PuzzleConfig, DEFAULT_DISKS, DEFAULT_PEGS};
pub use error::BuildError;
pub use puzzle::PuzzleBuilder;
