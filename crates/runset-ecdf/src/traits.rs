//! Traits for CDF construction

use crate::CdfCoordinates;
use runset_core::{Result, Sample};

/// Trait for building a plottable CDF from one sample
pub trait CdfBuilder {
    /// Build the CDF coordinates
    ///
    /// The sample is not modified; builders sort a working copy.
    fn build(&self, sample: &Sample) -> Result<CdfCoordinates>;

    /// Build from plain values
    fn build_values(&self, values: &[f64]) -> Result<CdfCoordinates> {
        self.build(&Sample::from_values(values.iter().copied()))
    }
}
