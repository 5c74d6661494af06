//! Core traits for confidence interval estimation

use crate::types::ConfidenceInterval;
use runset_core::{Observation, Result};

/// Confidence interval for a quantity from one estimate per run
///
/// Each estimate is an [`Observation`] so that its measurement resolution can
/// widen the interval.
pub trait ConfidenceIntervalEstimator {
    /// Calculate a confidence interval from per-run estimates
    fn confidence_interval(&self, estimates: &[Observation]) -> Result<ConfidenceInterval>;

    /// Calculate confidence intervals for many quantities that share a run count
    ///
    /// Implementations may compute shared factors once. The default calls
    /// [`confidence_interval`](Self::confidence_interval) for each slice.
    fn confidence_intervals<'a, I>(&self, buckets: I) -> Result<Vec<ConfidenceInterval>>
    where
        I: IntoIterator<Item = &'a [Observation]>,
    {
        buckets
            .into_iter()
            .map(|estimates| self.confidence_interval(estimates))
            .collect()
    }

    /// Get the confidence level
    fn confidence_level(&self) -> f64;
}
