//! Order-statistic quantile estimators
//!
//! Two rules are used across the workspace:
//!
//! - [`NearestRank`] picks the order statistic at `floor((n - 1) * p)`, with no
//!   interpolation. Cross-run aggregation uses it so that every per-run
//!   estimate is an actual observation and carries that observation's
//!   resolution.
//! - [`LinearInterpolation`] interpolates between the two neighbouring order
//!   statistics of rank `p * (n - 1)`. Summary reports and CDF range bands use it.

use crate::traits::{check_request, QuantileEstimator};
use runset_core::{Error, Observation, Result};

/// Index of the nearest-rank order statistic for probability `p` in a sample of `n`
///
/// `n` must be non-zero.
#[inline]
pub fn nearest_rank_index(n: usize, p: f64) -> usize {
    debug_assert!(n > 0, "nearest rank of an empty sample");
    (((n - 1) as f64) * p) as usize
}

/// Nearest-rank (lower) quantile estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestRank;

impl NearestRank {
    /// Select the observation at quantile `p` from observations sorted by value
    pub fn select<'a>(&self, sorted: &'a [Observation], p: f64) -> Result<&'a Observation> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_quantile(p));
        }
        if sorted.is_empty() {
            return Err(Error::empty_input("nearest-rank selection"));
        }
        Ok(&sorted[nearest_rank_index(sorted.len(), p)])
    }
}

impl QuantileEstimator for NearestRank {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        check_request(sorted_data, p)?;
        Ok(sorted_data[nearest_rank_index(sorted_data.len(), p)])
    }

    fn name(&self) -> &'static str {
        "nearest-rank"
    }
}

/// Linear interpolation between adjacent order statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolation;

impl LinearInterpolation {
    /// Percentile in `[0, 100]` of sorted data
    pub fn percentile_sorted(&self, sorted_data: &[f64], percent: f64) -> Result<f64> {
        self.quantile_sorted(sorted_data, percent / 100.0)
    }
}

impl QuantileEstimator for LinearInterpolation {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        check_request(sorted_data, p)?;

        let n = sorted_data.len();
        let rank = p * (n - 1) as f64;
        let lower_idx = rank.floor() as usize;
        let upper_idx = (lower_idx + 1).min(n - 1);
        let fraction = rank - lower_idx as f64;

        let lower = sorted_data[lower_idx];
        if fraction == 0.0 {
            return Ok(lower);
        }
        Ok(lower + fraction * (sorted_data[upper_idx] - lower))
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
