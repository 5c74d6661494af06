//! Cross-run confidence intervals
//!
//! This crate turns one point estimate per run into a confidence interval for
//! the population value. The main estimator, [`ResolutionAwareCI`], uses a
//! Student-t half-width with a small-sample correction and widens the interval
//! by the stated measurement resolution of each run's estimate.
//!
//! # Example
//!
//! ```rust
//! use runset_confidence::{ConfidenceIntervalEstimator, ConfidenceLevel, ResolutionAwareCI};
//! use runset_core::Observation;
//!
//! // median latency of three runs, the last one measured with 0.5 resolution
//! let estimates = vec![
//!     Observation::exact(2.0),
//!     Observation::exact(3.0),
//!     Observation::new(4.0, 0.5),
//! ];
//!
//! let ci = ResolutionAwareCI::new(ConfidenceLevel::NINETY_FIVE);
//! let interval = ci.confidence_interval(&estimates).unwrap();
//! assert!(interval.contains(3.0));
//! println!("{interval}");
//! ```

mod resolution;
pub mod student_t;
mod traits;
mod types;

pub use resolution::{CrossRunMoments, ResolutionAwareCI};
pub use student_t::{critical_value, error_factor};
pub use traits::ConfidenceIntervalEstimator;
pub use types::{ConfidenceInterval, ConfidenceLevel, LowerBound};

pub use runset_core::{Error, Result};
