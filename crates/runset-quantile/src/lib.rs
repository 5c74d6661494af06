//! Quantile extraction for run sets
//!
//! This crate provides the shared quantile grid, single-sample quantile
//! estimators and the per-quantile cross-run aggregator that feeds the
//! confidence interval engine.
//!
//! # Example
//!
//! ```rust
//! use runset_core::{RunSet, Sample};
//! use runset_quantile::{QuantileBuckets, QuantileGrid};
//!
//! let runs: RunSet = [
//!     ("A".to_string(), Sample::from(vec![1.0, 2.0, 3.0])),
//!     ("B".to_string(), Sample::from(vec![2.0, 3.0, 4.0])),
//!     ("C".to_string(), Sample::from(vec![3.0, 4.0, 5.0])),
//! ]
//! .into_iter()
//! .collect();
//!
//! let grid = QuantileGrid::default();
//! let buckets = QuantileBuckets::collect(&runs, None, 3, grid.points()).unwrap();
//! assert_eq!(buckets.effective_level(), 3);
//! assert_eq!(buckets.len(), 1000);
//! ```

pub mod buckets;
pub mod estimators;
pub mod grid;
pub mod traits;

pub use buckets::{quantile_spread, QuantileBuckets, QuantileSpread};
pub use estimators::{nearest_rank_index, LinearInterpolation, NearestRank};
pub use grid::{GridSpec, QuantileGrid};
pub use traits::QuantileEstimator;

pub use runset_core::{Error, Result};
