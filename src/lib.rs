//! Cross-run CDF estimation with confidence bands
//!
//! Facade over the `runset-*` crates:
//!
//! - [`core`]: observations, samples, run sets and the shared error type
//! - [`quantile`]: quantile grid and per-quantile cross-run aggregation
//! - [`confidence`]: resolution-aware Student-t intervals
//! - [`ecdf`]: single-run empirical CDFs and cross-run range bands
//! - [`summary`]: descriptive statistics records
//! - [`render`]: multi-level CDF confidence bands
//!
//! # Example
//!
//! ```rust
//! use runset_ci::prelude::*;
//!
//! let runs: RunSet = [
//!     ("A".to_string(), Sample::from(vec![1.0, 2.0, 3.0])),
//!     ("B".to_string(), Sample::from(vec![2.0, 3.0, 4.0])),
//!     ("C".to_string(), Sample::from(vec![3.0, 4.0, 5.0])),
//! ]
//! .into_iter()
//! .collect();
//!
//! let rendered = MultiLevelRenderer::default().render(&runs, None, &[2, 3]).unwrap();
//! assert_eq!(rendered.bands().count(), 2);
//!
//! let cdf = EmpiricalCdfBuilder::default().build(&Sample::from(vec![3.0, 1.0])).unwrap();
//! assert_eq!(cdf.max_y(), 1.0);
//! ```

pub use runset_confidence as confidence;
pub use runset_core as core;
pub use runset_ecdf as ecdf;
pub use runset_quantile as quantile;
pub use runset_render as render;
pub use runset_summary as summary;

pub use runset_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use runset_confidence::{
        ConfidenceInterval, ConfidenceIntervalEstimator, ConfidenceLevel, LowerBound,
        ResolutionAwareCI,
    };
    pub use runset_core::prelude::*;
    pub use runset_ecdf::{CdfBuilder, CdfOptions, CdfRangeBuilder, EmpiricalCdfBuilder, Thinning};
    pub use runset_quantile::{GridSpec, QuantileBuckets, QuantileEstimator, QuantileGrid};
    pub use runset_render::{CiBand, MultiLevelRenderer, PlotSurface, RenderConfig};
    pub use runset_summary::SummaryStatistics;
}
