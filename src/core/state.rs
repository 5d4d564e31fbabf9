//! Immutable puzzle state.
//!
//! A `PuzzleState` is a snapshot of disk placement across pegs. States are
//! never mutated: `transition` builds a successor that points back at the
//! state it came from, so every state carries its own move history.

use super::error::InvalidMove;
use super::peg::{Disk, Move, Peg, TopDisk};
use crate::builder::{BuildError, PuzzleConfig};
use crate::validation::{validate_configuration, ConfigurationError};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use stillwater::validation::Validation;
use tracing::{debug, trace};

/// Snapshot of a generalized Tower of Hanoi puzzle.
///
/// Cloning is cheap: the snapshot lives behind an `Arc`, and successors
/// share the pegs a move did not touch.
///
/// Equality and hashing consider the configuration only; two states
/// reached by different move sequences compare equal when their pegs hold
/// the same disks.
///
/// # Example
///
/// ```rust
/// use hanoi_state::core::{Move, PuzzleState};
///
/// let start = PuzzleState::initial(3, 3)?;
/// assert_eq!(start.stacks(), vec![vec![3, 2, 1], vec![], vec![]]);
///
/// let next = start.transition(0, 2)?;
/// assert_eq!(next.stacks(), vec![vec![3, 2], vec![], vec![1]]);
/// assert_eq!(next.last_move(), Some(Move::new(0, 2)));
/// assert_eq!(next.parent(), Some(&start));
///
/// // The original state is untouched
/// assert_eq!(start.stacks(), vec![vec![3, 2, 1], vec![], vec![]]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct PuzzleState {
    node: Arc<StateNode>,
}

struct StateNode {
    disk_count: Disk,
    configuration: Vec<Peg>,
    parent: Option<PuzzleState>,
    last_move: Option<Move>,
}

impl Drop for StateNode {
    // Unlinks the parent chain iteratively so long histories do not
    // recurse once per ancestor.
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(state) = parent {
            parent = match Arc::try_unwrap(state.node) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

impl PuzzleState {
    /// Create the starting state: every disk on peg 0, largest at the
    /// bottom, all other pegs empty.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::NoPegs` or `BuildError::NoDisks` when either
    /// count is zero.
    pub fn initial(peg_count: usize, disk_count: Disk) -> Result<Self, BuildError> {
        PuzzleConfig::new(peg_count, disk_count).validate()?;

        let mut configuration = Vec::with_capacity(peg_count);
        configuration.push(Peg::from_disks((1..=disk_count).rev().collect()));
        configuration.extend((1..peg_count).map(|_| Peg::empty()));

        debug!(peg_count, disk_count, "created initial puzzle state");
        Ok(Self::parentless(disk_count, configuration))
    }

    /// Create a parentless state from explicit stacks (bottom disk first).
    ///
    /// Every problem with the configuration is reported at once rather
    /// than stopping at the first one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi_state::core::PuzzleState;
    ///
    /// let state = PuzzleState::from_configuration(3, vec![vec![3], vec![2, 1], vec![]])?;
    /// assert_eq!(state.peg_count(), 3);
    /// assert!(state.parent().is_none());
    ///
    /// let broken = PuzzleState::from_configuration(3, vec![vec![1, 3], vec![1]]);
    /// assert_eq!(broken.unwrap_err().violations.len(), 3);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_configuration(
        disk_count: Disk,
        stacks: Vec<Vec<Disk>>,
    ) -> Result<Self, ConfigurationError> {
        match validate_configuration(disk_count, &stacks) {
            Validation::Success(_) => {
                let configuration = stacks.into_iter().map(Peg::from_disks).collect();
                Ok(Self::parentless(disk_count, configuration))
            }
            Validation::Failure(violations) => {
                let error = ConfigurationError {
                    violations: violations.iter().cloned().collect(),
                };
                debug!(%error, "rejected puzzle configuration");
                Err(error)
            }
        }
    }

    fn parentless(disk_count: Disk, configuration: Vec<Peg>) -> Self {
        Self {
            node: Arc::new(StateNode {
                disk_count,
                configuration,
                parent: None,
                last_move: None,
            }),
        }
    }

    pub fn peg_count(&self) -> usize {
        self.node.configuration.len()
    }

    pub fn disk_count(&self) -> Disk {
        self.node.disk_count
    }

    /// Pegs in index order.
    pub fn configuration(&self) -> &[Peg] {
        &self.node.configuration
    }

    /// Peg at `index`, or `None` if the puzzle has no such peg.
    pub fn peg(&self, index: usize) -> Option<&Peg> {
        self.node.configuration.get(index)
    }

    /// Owned copy of every stack, bottom disk first.
    pub fn stacks(&self) -> Vec<Vec<Disk>> {
        self.node
            .configuration
            .iter()
            .map(|peg| peg.disks().to_vec())
            .collect()
    }

    /// The state this one was derived from; `None` for a root state.
    pub fn parent(&self) -> Option<&PuzzleState> {
        self.node.parent.as_ref()
    }

    /// The move that produced this state from its parent.
    pub fn last_move(&self) -> Option<Move> {
        self.node.last_move
    }

    /// Top disk on `peg`.
    ///
    /// # Panics
    ///
    /// Panics if `peg >= self.peg_count()`.
    pub fn top_disk(&self, peg: usize) -> TopDisk {
        self.node.configuration[peg].top()
    }

    /// Move the top disk of `from` onto `to`, returning the successor state.
    ///
    /// The receiver is left unchanged. Moving a disk onto its own peg is
    /// accepted and recorded as a no-op move.
    ///
    /// # Errors
    ///
    /// - `InvalidMove::PegOutOfRange` if either peg does not exist
    /// - `InvalidMove::EmptyPeg` if `from` holds no disks
    /// - `InvalidMove::DiskTooLarge` if the moved disk is larger than the
    ///   top disk of `to`
    pub fn transition(&self, from: usize, to: usize) -> Result<Self, InvalidMove> {
        let peg_count = self.peg_count();
        if let Some(peg) = [from, to].into_iter().find(|&peg| peg >= peg_count) {
            debug!(peg, peg_count, "move references a missing peg");
            return Err(InvalidMove::PegOutOfRange { peg, peg_count });
        }

        let source = self.top_disk(from);
        let target = self.top_disk(to);
        let disk = match source {
            TopDisk::Disk(disk) => disk,
            TopDisk::Empty => {
                debug!(from, to, "move from empty peg");
                return Err(InvalidMove::EmptyPeg { from, to });
            }
        };
        if let TopDisk::Disk(top) = target {
            if source > target {
                debug!(from, to, disk, onto = top, "move onto smaller disk");
                return Err(InvalidMove::DiskTooLarge {
                    from,
                    to,
                    disk,
                    target: top,
                });
            }
        }

        let mut configuration = self.node.configuration.clone();
        configuration[from] = configuration[from].without_top();
        configuration[to] = configuration[to].with_disk(disk);

        debug!(from, to, disk, "moved disk");
        Ok(Self {
            node: Arc::new(StateNode {
                disk_count: self.node.disk_count,
                configuration,
                parent: Some(self.clone()),
                last_move: Some(Move::new(from, to)),
            }),
        })
    }

    /// Apply `step`; shorthand for `transition(step.from, step.to)`.
    pub fn apply_move(&self, step: Move) -> Result<Self, InvalidMove> {
        self.transition(step.from, step.to)
    }

    /// Every move whose source disk is strictly smaller than the target's
    /// top disk, ordered by source peg then destination peg.
    ///
    /// Empty source pegs and self-moves never qualify, so each returned
    /// move succeeds when passed to `transition`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi_state::core::{Move, PuzzleState};
    ///
    /// let state = PuzzleState::initial(3, 3)?;
    /// assert_eq!(state.possible_actions(), vec![Move::new(0, 1), Move::new(0, 2)]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn possible_actions(&self) -> Vec<Move> {
        let tops: Vec<TopDisk> = self.node.configuration.iter().map(Peg::top).collect();

        let mut actions = Vec::new();
        for (from, source) in tops.iter().enumerate() {
            for (to, target) in tops.iter().enumerate() {
                if source < target {
                    actions.push(Move::new(from, to));
                }
            }
        }

        trace!(count = actions.len(), "enumerated possible actions");
        actions
    }

    /// True when the last peg holds every disk.
    pub fn is_goal_state(&self) -> bool {
        self.node
            .configuration
            .last()
            .is_some_and(|peg| peg.len() == self.node.disk_count as usize)
    }

    /// Column diagram of the pegs, top row first.
    ///
    /// Each peg occupies a field one wider than the largest disk label.
    /// Empty slots show a `|` at the right edge of the field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi_state::core::PuzzleState;
    ///
    /// let state = PuzzleState::initial(3, 3)?.transition(0, 2)?;
    /// assert_eq!(state.render(), " | | |\n 2 | |\n 3 | 1\n");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn render(&self) -> String {
        let height = self.node.disk_count as usize;
        let width = self.node.disk_count.ilog10() as usize + 2;

        let mut out = String::new();
        for row in (0..height).rev() {
            for peg in &self.node.configuration {
                match peg.get(row) {
                    Some(disk) => out.push_str(&format!("{disk:>width$}")),
                    None => {
                        out.push_str(&" ".repeat(width - 1));
                        out.push('|');
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
            || self.node.configuration == other.node.configuration
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.configuration.hash(state);
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PuzzleState")
            .field("configuration", &self.node.configuration)
            .field("last_move", &self.node.last_move)
            .finish()
    }
}
