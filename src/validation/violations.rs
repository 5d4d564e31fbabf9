//! Configuration violations.

use crate::core::Disk;
use thiserror::Error;

/// A single way an explicit configuration breaks the puzzle's invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationViolation {
    #[error("Configuration has no pegs")]
    NoPegs,

    #[error("Disk count must be positive")]
    NoDisks,

    #[error("Disk {disk} on peg {peg} is outside 1..={disk_count}")]
    DiskOutOfRange {
        peg: usize,
        disk: Disk,
        disk_count: Disk,
    },

    #[error("Disk {disk} appears {count} times")]
    DuplicateDisk { disk: Disk, count: usize },

    #[error("Disk {disk} is missing")]
    MissingDisk { disk: Disk },

    #[error("Expected {disk_count} disks but only {present} are present")]
    TooFewDisks { disk_count: Disk, present: usize },

    #[error("Peg {peg} has disk {above} at height {height} resting on disk {below} (must be larger)")]
    NotDecreasing {
        peg: usize,
        height: usize,
        below: Disk,
        above: Disk,
    },
}

/// Every violation found in a rejected configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid puzzle configuration ({} violation(s))", .violations.len())]
pub struct ConfigurationError {
    pub violations: Vec<ConfigurationViolation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_decreasing_message_fits_equal_disks() {
        let violation = ConfigurationViolation::NotDecreasing {
            peg: 0,
            height: 1,
            below: 2,
            above: 2,
        };
        assert_eq!(
            violation.to_string(),
            "Peg 0 has disk 2 at height 1 resting on disk 2 (must be larger)"
        );
    }

    #[test]
    fn too_few_disks_message_names_both_counts() {
        let violation = ConfigurationViolation::TooFewDisks {
            disk_count: 5,
            present: 3,
        };
        assert_eq!(
            violation.to_string(),
            "Expected 5 disks but only 3 are present"
        );
    }
}
