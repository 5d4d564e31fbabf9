//! Puzzle trait for move-driven state types.
//!
//! Any immutable puzzle whose states can list their legal moves and apply
//! one to obtain a successor implements this trait. Callers that drive a
//! puzzle (replaying recorded moves, stepping through a demo) work against
//! the trait rather than a concrete state type.

use super::error::InvalidMove;
use super::peg::Move;
use super::state::PuzzleState;
use std::fmt::Debug;

/// A puzzle state that advances by applying actions.
///
/// All methods are pure. `apply` returns a new state and leaves the
/// receiver untouched.
pub trait Puzzle: Clone + PartialEq + Debug + Send + Sync {
    /// A single move in the puzzle.
    type Action: Copy + Debug;

    /// Why an action was rejected.
    type Error: std::error::Error;

    /// Actions that `apply` would accept from this state.
    fn possible_actions(&self) -> Vec<Self::Action>;

    /// Successor state after `action`.
    fn apply(&self, action: Self::Action) -> Result<Self, Self::Error>;

    /// Check if this state solves the puzzle.
    fn is_goal(&self) -> bool;
}

impl Puzzle for PuzzleState {
    type Action = Move;
    type Error = InvalidMove;

    fn possible_actions(&self) -> Vec<Move> {
        PuzzleState::possible_actions(self)
    }

    fn apply(&self, action: Move) -> Result<Self, InvalidMove> {
        self.apply_move(action)
    }

    fn is_goal(&self) -> bool {
        self.is_goal_state()
    }
}

/// Apply `actions` in order starting from `start`.
///
/// Stops at the first rejected action and returns its error.
///
/// # Example
///
/// ```rust
/// use hanoi_state::core::{replay, Move, PuzzleState};
///
/// let start = PuzzleState::initial(3, 1)?;
/// let end = replay(&start, [Move::new(0, 2)])?;
/// assert!(end.is_goal_state());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn replay<P, I>(start: &P, actions: I) -> Result<P, P::Error>
where
    P: Puzzle,
    I: IntoIterator<Item = P::Action>,
{
    actions
        .into_iter()
        .try_fold(start.clone(), |state, action| state.apply(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_methods_delegate_to_state() {
        let state = PuzzleState::initial(3, 2).unwrap();

        assert_eq!(
            Puzzle::possible_actions(&state),
            PuzzleState::possible_actions(&state)
        );
        assert!(!state.is_goal());

        let next = state.apply(Move::new(0, 1)).unwrap();
        assert_eq!(next.stacks(), vec![vec![2], vec![1], vec![]]);
    }

    #[test]
    fn replay_applies_moves_in_order() {
        let start = PuzzleState::initial(3, 2).unwrap();
        let end = replay(
            &start,
            [Move::new(0, 1), Move::new(0, 2), Move::new(1, 2)],
        )
        .unwrap();

        assert!(end.is_goal());
        assert_eq!(end.depth(), 3);
        assert_eq!(end.root(), start);
    }

    #[test]
    fn replay_stops_at_first_rejected_move() {
        let start = PuzzleState::initial(3, 2).unwrap();
        let result = replay(
            &start,
            [Move::new(0, 1), Move::new(0, 1), Move::new(0, 2)],
        );

        assert_eq!(
            result.unwrap_err(),
            InvalidMove::DiskTooLarge {
                from: 0,
                to: 1,
                disk: 2,
                target: 1
            }
        );
    }

    #[test]
    fn replay_of_nothing_returns_start() {
        let start = PuzzleState::initial(3, 2).unwrap();
        let end = replay(&start, Vec::new()).unwrap();
        assert_eq!(end, start);
        assert_eq!(end.depth(), 0);
    }
}
