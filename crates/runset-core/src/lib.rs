//! Core types for cross-run distribution estimation
//!
//! A stochastic experiment is repeated several times. Each repetition (a
//! *run*) produces a [`Sample`] of [`Observation`]s, and the runs of one
//! configuration are collected into a [`RunSet`]. The other runset crates
//! consume these types:
//!
//! - `runset-quantile` extracts per-run quantiles over a shared grid
//! - `runset-confidence` turns cross-run estimates into confidence intervals
//! - `runset-ecdf` renders single-run empirical CDFs
//! - `runset-summary` reports descriptive statistics
//! - `runset-render` assembles confidence bands for plotting
//!
//! # Example
//!
//! ```rust
//! use runset_core::{Observation, RunSet, Sample};
//!
//! let mut runs: RunSet = RunSet::new();
//! runs.insert("seed1".to_string(), Sample::from(vec![1.0, 2.0, 3.0]));
//! runs.insert(
//!     "seed2".to_string(),
//!     Sample::new(vec![Observation::new(2.0, 0.5), Observation::exact(4.0)]),
//! );
//!
//! let samples = runs.samples(None, 2).unwrap();
//! assert_eq!(samples.len(), 2);
//! ```

pub mod error;
pub mod observation;
pub mod run_set;
pub mod utils;

pub use error::{Error, Result};
pub use observation::{Observation, Sample};
pub use run_set::{RunRecord, RunSet};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{Observation, Result, RunRecord, RunSet, Sample};
}
