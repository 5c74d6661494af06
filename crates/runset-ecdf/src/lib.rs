//! Empirical CDF construction for run samples
//!
//! [`EmpiricalCdfBuilder`] turns one sample into step-function plot
//! coordinates, thinning large samples so the output stays plottable.
//! [`CdfRangeBuilder`] overlays the CDFs of every run in a run set and
//! reports their spread at each cumulative fraction.
//!
//! # Example
//!
//! ```rust
//! use runset_core::Sample;
//! use runset_ecdf::{CdfBuilder, CdfOptions, EmpiricalCdfBuilder};
//!
//! let builder = EmpiricalCdfBuilder::new(CdfOptions::default());
//! let coords = builder.build(&Sample::from(vec![2.0, 1.0])).unwrap();
//!
//! assert_eq!(coords.x(), &[1.0, 1.0, 2.0, 2.0]);
//! assert_eq!(coords.y(), &[0.0, 0.5, 0.5, 1.0]);
//! ```

pub mod builders;
pub mod range;
pub mod traits;
pub mod types;

pub use builders::{CdfOptions, EmpiricalCdfBuilder, Thinning};
pub use range::CdfRangeBuilder;
pub use traits::CdfBuilder;
pub use types::{CdfCoordinates, CdfRangeBand};

pub use runset_core::{Error, Result};
