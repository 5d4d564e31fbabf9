//! Validation of explicit puzzle configurations.
//!
//! Configurations supplied by callers (rather than reached through legal
//! moves) are checked against every puzzle invariant using Stillwater's
//! `Validation` type, so ALL problems are reported in one pass instead of
//! stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use hanoi_state::validation::validate_configuration;
//!
//! let ok = validate_configuration(3, &[vec![3, 1], vec![2], vec![]]);
//! assert!(ok.is_success());
//!
//! let broken = validate_configuration(3, &[vec![1, 2], vec![], vec![]]);
//! assert!(broken.is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{validate_configuration, ConfigurationCheck};
pub use violations::{ConfigurationError, ConfigurationViolation};
