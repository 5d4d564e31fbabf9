//! Move history reconstruction.
//!
//! Each state links back to its parent, so the full history of a state is
//! recovered by walking that chain towards the root. The walk only reads
//! ancestors; nothing here can change them.

use super::peg::Move;
use super::state::PuzzleState;

/// Iterator over a state and its ancestors, newest first.
///
/// Created by [`PuzzleState::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors {
    next: Option<PuzzleState>,
}

impl Iterator for Ancestors {
    type Item = PuzzleState;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent().cloned();
        Some(current)
    }
}

impl PuzzleState {
    /// Walk from this state back to the root, starting with `self`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi_state::core::PuzzleState;
    ///
    /// let state = PuzzleState::initial(3, 2)?.transition(0, 1)?.transition(0, 2)?;
    /// assert_eq!(state.ancestors().count(), 3);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: Some(self.clone()),
        }
    }

    /// Number of moves between the root and this state.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// The state at the start of this state's history.
    pub fn root(&self) -> PuzzleState {
        self.ancestors().last().unwrap_or_else(|| self.clone())
    }

    /// Moves that led from the root to this state, in the order played.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi_state::core::{Move, PuzzleState};
    ///
    /// let state = PuzzleState::initial(3, 2)?.transition(0, 1)?.transition(0, 2)?;
    /// assert_eq!(state.moves(), vec![Move::new(0, 1), Move::new(0, 2)]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .ancestors()
            .filter_map(|state| state.last_move())
            .collect();
        moves.reverse();
        moves
    }

    /// States from the root to this one, inclusive.
    pub fn path(&self) -> Vec<PuzzleState> {
        let mut path: Vec<PuzzleState> = self.ancestors().collect();
        path.reverse();
        path
    }
}
