//! Pegs, disks and moves.
//!
//! A peg is an immutable stack of disks read bottom-to-top. Pegs share
//! their storage, so cloning a configuration only bumps reference counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Size of a disk. Sizes run from 1 (smallest) up to the disk count.
pub type Disk = u32;

/// The topmost disk on a peg, as seen by the stacking rule.
///
/// `Empty` orders above every real disk, so "may this disk go here" is a
/// single comparison whether or not the target peg holds anything.
///
/// # Example
///
/// ```rust
/// use hanoi_state::core::TopDisk;
///
/// assert!(TopDisk::Disk(1) < TopDisk::Disk(2));
/// assert!(TopDisk::Disk(u32::MAX) < TopDisk::Empty);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TopDisk {
    /// The peg's top disk has this size
    Disk(Disk),
    /// The peg holds no disks
    Empty,
}

impl TopDisk {
    /// Size of the disk, or `None` for an empty peg.
    pub fn size(self) -> Option<Disk> {
        match self {
            Self::Disk(size) => Some(size),
            Self::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Option<Disk>> for TopDisk {
    fn from(disk: Option<Disk>) -> Self {
        disk.map_or(Self::Empty, Self::Disk)
    }
}

impl fmt::Display for TopDisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disk(size) => write!(f, "{size}"),
            Self::Empty => f.write_str("empty"),
        }
    }
}

/// Relocation of the top disk of `from` onto `to`.
///
/// # Example
///
/// ```rust
/// use hanoi_state::core::Move;
///
/// let step = Move::new(0, 2);
/// assert_eq!(step.to_string(), "0 -> 2");
/// assert_eq!(Move::from((0, 2)), step);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Peg the disk is taken from
    pub from: usize,
    /// Peg the disk is placed on
    pub to: usize,
}

impl Move {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// A move that puts a disk straight back where it came from.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

impl From<(usize, usize)> for Move {
    fn from((from, to): (usize, usize)) -> Self {
        Self::new(from, to)
    }
}

impl From<Move> for (usize, usize) {
    fn from(step: Move) -> Self {
        (step.from, step.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// An immutable stack of disks, bottom first.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Peg {
    disks: Arc<[Disk]>,
}

impl Peg {
    pub fn empty() -> Self {
        Self {
            disks: Arc::from(Vec::<Disk>::new()),
        }
    }

    pub fn from_disks(disks: Vec<Disk>) -> Self {
        Self {
            disks: Arc::from(disks),
        }
    }

    /// Disks on this peg, bottom first.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Disk at `height` counted from the bottom (0 = bottom disk).
    pub fn get(&self, height: usize) -> Option<Disk> {
        self.disks.get(height).copied()
    }

    pub fn top(&self) -> TopDisk {
        self.disks.last().copied().into()
    }

    /// Copy of this peg with the top disk removed.
    pub(crate) fn without_top(&self) -> Self {
        match self.disks.split_last() {
            Some((_, rest)) => Self {
                disks: Arc::from(rest),
            },
            None => self.clone(),
        }
    }

    /// Copy of this peg with `disk` placed on top.
    pub(crate) fn with_disk(&self, disk: Disk) -> Self {
        let mut disks = self.disks.to_vec();
        disks.push(disk);
        Self::from_disks(disks)
    }

    #[cfg(test)]
    pub(crate) fn shares_storage(&self, other: &Peg) -> bool {
        Arc::ptr_eq(&self.disks, &other.disks)
    }
}

impl fmt::Debug for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.disks.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_orders_above_every_disk() {
        assert!(TopDisk::Disk(1) < TopDisk::Empty);
        assert!(TopDisk::Disk(Disk::MAX) < TopDisk::Empty);
        assert!(TopDisk::Disk(2) > TopDisk::Disk(1));
        assert_eq!(TopDisk::Empty, TopDisk::Empty);
    }

    #[test]
    fn top_disk_converts_from_option() {
        assert_eq!(TopDisk::from(Some(4)), TopDisk::Disk(4));
        assert_eq!(TopDisk::from(None), TopDisk::Empty);
        assert_eq!(TopDisk::Disk(4).size(), Some(4));
        assert!(TopDisk::Empty.is_empty());
    }

    #[test]
    fn peg_reports_top_disk() {
        let peg = Peg::from_disks(vec![3, 2, 1]);
        assert_eq!(peg.top(), TopDisk::Disk(1));
        assert_eq!(peg.len(), 3);
        assert_eq!(peg.get(0), Some(3));
        assert_eq!(peg.get(3), None);
        assert_eq!(Peg::empty().top(), TopDisk::Empty);
    }

    #[test]
    fn without_top_leaves_original_intact() {
        let peg = Peg::from_disks(vec![3, 2, 1]);
        let popped = peg.without_top();

        assert_eq!(popped.disks(), &[3, 2]);
        assert_eq!(peg.disks(), &[3, 2, 1]);
        assert!(Peg::empty().without_top().is_empty());
    }

    #[test]
    fn with_disk_pushes_on_top() {
        let peg = Peg::from_disks(vec![3]);
        let pushed = peg.with_disk(1);

        assert_eq!(pushed.disks(), &[3, 1]);
        assert_eq!(pushed.top(), TopDisk::Disk(1));
        assert_eq!(peg.disks(), &[3]);
    }

    #[test]
    fn move_converts_to_and_from_pairs() {
        let step = Move::from((1, 2));
        assert_eq!(step, Move::new(1, 2));
        assert_eq!(<(usize, usize)>::from(step), (1, 2));
        assert!(Move::new(2, 2).is_noop());
        assert!(!step.is_noop());
    }

    #[test]
    fn move_serializes_correctly() {
        let step = Move::new(0, 2);
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"from":0,"to":2}"#);
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(step, deserialized);
    }
}
