//! Configuration rules checked with Validation.

use crate::core::Disk;
use crate::validation::violations::ConfigurationViolation;
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of one configuration check.
pub type ConfigurationCheck = Validation<(), NonEmptyVec<ConfigurationViolation>>;

/// Check every puzzle invariant on `stacks`, accumulating ALL violations.
/// Returns Validation::Success(()) if the configuration is well formed.
pub fn validate_configuration(disk_count: Disk, stacks: &[Vec<Disk>]) -> ConfigurationCheck {
    let mut checks: Vec<ConfigurationCheck> = vec![check_pegs(stacks), check_disk_count(disk_count)];

    for (peg, stack) in stacks.iter().enumerate() {
        checks.extend(check_stack_order(peg, stack));
    }
    checks.extend(check_disk_set(disk_count, stacks));

    Validation::all_vec(checks).map(|_| ())
}

fn check_pegs(stacks: &[Vec<Disk>]) -> ConfigurationCheck {
    if stacks.is_empty() {
        Validation::fail(ConfigurationViolation::NoPegs)
    } else {
        Validation::success(())
    }
}

fn check_disk_count(disk_count: Disk) -> ConfigurationCheck {
    if disk_count == 0 {
        Validation::fail(ConfigurationViolation::NoDisks)
    } else {
        Validation::success(())
    }
}

/// One check per adjacent pair: each disk must be smaller than the one below.
fn check_stack_order(peg: usize, stack: &[Disk]) -> Vec<ConfigurationCheck> {
    stack
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let (below, above) = (pair[0], pair[1]);
            if above < below {
                Validation::success(())
            } else {
                Validation::fail(ConfigurationViolation::NotDecreasing {
                    peg,
                    height: index + 1,
                    below,
                    above,
                })
            }
        })
        .collect()
}

/// Every disk in `1..=disk_count` exactly once, and nothing else.
///
/// Work is bounded by the disks actually present, never by `disk_count`:
/// when fewer disks are present than declared, a single `TooFewDisks`
/// stands in for the individual `MissingDisk` reports.
fn check_disk_set(disk_count: Disk, stacks: &[Vec<Disk>]) -> Vec<ConfigurationCheck> {
    let mut checks = Vec::new();
    let present: usize = stacks.iter().map(Vec::len).sum();
    let mut counts: BTreeMap<Disk, usize> = BTreeMap::new();

    for (peg, stack) in stacks.iter().enumerate() {
        for &disk in stack {
            if disk == 0 || disk > disk_count {
                checks.push(Validation::fail(ConfigurationViolation::DiskOutOfRange {
                    peg,
                    disk,
                    disk_count,
                }));
            } else {
                *counts.entry(disk).or_insert(0) += 1;
            }
        }
    }

    for (&disk, &count) in &counts {
        if count > 1 {
            checks.push(Validation::fail(ConfigurationViolation::DuplicateDisk {
                disk,
                count,
            }));
        }
    }

    if (disk_count as usize) > present {
        checks.push(Validation::fail(ConfigurationViolation::TooFewDisks {
            disk_count,
            present,
        }));
    } else {
        for disk in (1..=disk_count).filter(|disk| !counts.contains_key(disk)) {
            checks.push(Validation::fail(ConfigurationViolation::MissingDisk { disk }));
        }
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(disk_count: Disk, stacks: &[Vec<Disk>]) -> Vec<ConfigurationViolation> {
        match validate_configuration(disk_count, stacks) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    #[test]
    fn well_formed_configuration_passes() {
        let result = validate_configuration(3, &[vec![3], vec![2, 1], vec![]]);
        assert!(result.is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let found = violations(3, &[vec![1, 3], vec![1, 4]]);

        assert_eq!(found.len(), 5);
        assert!(found
            .iter()
            .any(|v| matches!(v, ConfigurationViolation::NotDecreasing { peg: 0, .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, ConfigurationViolation::NotDecreasing { peg: 1, .. })));
        assert!(found.contains(&ConfigurationViolation::DiskOutOfRange {
            peg: 1,
            disk: 4,
            disk_count: 3
        }));
        assert!(found.contains(&ConfigurationViolation::DuplicateDisk { disk: 1, count: 2 }));
        assert!(found.contains(&ConfigurationViolation::MissingDisk { disk: 2 }));
    }

    #[test]
    fn empty_configuration_reports_no_pegs() {
        let found = violations(2, &[]);

        assert!(found.contains(&ConfigurationViolation::NoPegs));
        assert!(found.contains(&ConfigurationViolation::TooFewDisks {
            disk_count: 2,
            present: 0
        }));
    }

    #[test]
    fn missing_disks_are_named_when_enough_are_present() {
        let found = violations(3, &[vec![3, 1], vec![1]]);

        assert!(found.contains(&ConfigurationViolation::DuplicateDisk { disk: 1, count: 2 }));
        assert!(found.contains(&ConfigurationViolation::MissingDisk { disk: 2 }));
        assert!(!found
            .iter()
            .any(|v| matches!(v, ConfigurationViolation::TooFewDisks { .. })));
    }

    #[test]
    fn huge_disk_count_reports_single_shortfall() {
        let found = violations(Disk::MAX, &[vec![2, 1], vec![]]);

        assert_eq!(
            found,
            vec![ConfigurationViolation::TooFewDisks {
                disk_count: Disk::MAX,
                present: 2
            }]
        );
    }

    #[test]
    fn zero_disk_count_is_rejected() {
        let found = violations(0, &[vec![], vec![]]);
        assert_eq!(found, vec![ConfigurationViolation::NoDisks]);
    }

    #[test]
    fn disk_zero_is_out_of_range() {
        let found = violations(1, &[vec![1, 0]]);

        assert!(found.contains(&ConfigurationViolation::DiskOutOfRange {
            peg: 0,
            disk: 0,
            disk_count: 1
        }));
    }

    #[test]
    fn equal_neighbours_are_not_decreasing() {
        let found = violations(2, &[vec![2, 2], vec![1]]);

        assert!(found.contains(&ConfigurationViolation::NotDecreasing {
            peg: 0,
            height: 1,
            below: 2,
            above: 2
        }));
    }
}
