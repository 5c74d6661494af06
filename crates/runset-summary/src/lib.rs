//! Descriptive statistics for run samples
//!
//! ```rust
//! use runset_core::Sample;
//! use runset_summary::SummaryStatistics;
//!
//! let stats = SummaryStatistics::from_sample(&Sample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();
//! assert_eq!(stats.median, 3.0);
//! assert_eq!(
//!     stats.to_string(),
//!     format!("min=1 q1=2 median=3 q3=4 max=5 mean=3 stddev={}", 2f64.sqrt())
//! );
//! ```

pub mod summary;

pub use summary::SummaryStatistics;

pub use runset_core::{Error, Result};
