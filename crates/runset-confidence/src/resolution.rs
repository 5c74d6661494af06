//! Resolution-aware cross-run confidence intervals
//!
//! For one quantile, each of `k` runs contributes a point estimate `x_i` with a
//! measurement resolution `r_i`. The interval is
//!
//! ```text
//! mean = Σ x_i / k
//! var  = Σ (x_i - mean)² / k            (population variance)
//! rv   = Σ r_i² / 12                    (uniform quantization noise)
//! s    = sqrt(var + rv / k)
//! z    = t_inv(level / 2 + 0.5, k - 1) / sqrt(k - 1)
//! [max(0, mean - z s), mean + z s]
//! ```
//!
//! The population variance paired with a sample-variance t factor is kept for
//! compatibility with previously published figures; treat the interval as an
//! approximation.

use crate::student_t::error_factor;
use crate::{ConfidenceInterval, ConfidenceIntervalEstimator, ConfidenceLevel, LowerBound};
use runset_core::{utils, Error, Observation, Result};
use tracing::trace;

/// Cross-run moments of one quantile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossRunMoments {
    /// Number of contributing runs
    pub k: usize,
    pub mean: f64,
    /// Population variance of the point values
    pub variance: f64,
    /// `Σ resolution² / 12`
    pub resolution_variance: f64,
}

impl CrossRunMoments {
    /// Compute moments from per-run estimates
    pub fn from_estimates(estimates: &[Observation]) -> Result<Self> {
        if estimates.is_empty() {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: 0,
            });
        }

        let values: Vec<f64> = estimates.iter().map(Observation::value).collect();
        utils::check_finite(&values, "per-run estimates")?;

        let resolution_variance = estimates
            .iter()
            .map(|o| o.resolution() * o.resolution())
            .sum::<f64>()
            / 12.0;

        Ok(Self {
            k: estimates.len(),
            mean: utils::mean(&values),
            variance: utils::population_variance(&values),
            resolution_variance,
        })
    }

    /// Combined spread `sqrt(var + resolution_variance / k)`
    pub fn standard_error(&self) -> f64 {
        (self.variance + self.resolution_variance / self.k as f64).sqrt()
    }
}

/// Student-t interval over runs, widened by measurement resolution
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionAwareCI {
    confidence: ConfidenceLevel,
    lower_bound: LowerBound,
}

impl ResolutionAwareCI {
    /// Create an estimator with the default lower-bound clamp at zero
    pub fn new(confidence: ConfidenceLevel) -> Self {
        Self {
            confidence,
            lower_bound: LowerBound::default(),
        }
    }

    pub fn with_lower_bound(mut self, lower_bound: LowerBound) -> Self {
        self.lower_bound = lower_bound;
        self
    }

    pub fn confidence(&self) -> ConfidenceLevel {
        self.confidence
    }

    pub fn lower_bound(&self) -> LowerBound {
        self.lower_bound
    }

    /// Half-width multiplier for `k` runs at this confidence level
    pub fn error_factor(&self, k: usize) -> Result<f64> {
        error_factor(k, self.confidence)
    }

    /// Interval from precomputed moments and a precomputed factor `z`
    pub fn interval_from_moments(
        &self,
        moments: &CrossRunMoments,
        z: f64,
    ) -> Result<ConfidenceInterval> {
        let half_width = z * moments.standard_error();
        if !half_width.is_finite() {
            return Err(Error::Computation(format!(
                "half-width for k={} is not finite",
                moments.k
            )));
        }

        let lower = self.lower_bound.apply(moments.mean - half_width);
        let upper = moments.mean + half_width;
        trace!(k = moments.k, mean = moments.mean, half_width, "interval");

        Ok(ConfidenceInterval::new(
            lower,
            upper,
            moments.mean,
            self.confidence.value(),
        ))
    }

    /// Interval using a factor already computed for this run count
    ///
    /// The caller guarantees `z` was computed for `estimates.len()` runs.
    pub fn confidence_interval_with_factor(
        &self,
        estimates: &[Observation],
        z: f64,
    ) -> Result<ConfidenceInterval> {
        if estimates.len() <= 1 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: estimates.len(),
            });
        }
        let moments = CrossRunMoments::from_estimates(estimates)?;
        self.interval_from_moments(&moments, z)
    }
}

impl ConfidenceIntervalEstimator for ResolutionAwareCI {
    fn confidence_interval(&self, estimates: &[Observation]) -> Result<ConfidenceInterval> {
        let z = self.error_factor(estimates.len())?;
        self.confidence_interval_with_factor(estimates, z)
    }

    fn confidence_intervals<'a, I>(&self, buckets: I) -> Result<Vec<ConfidenceInterval>>
    where
        I: IntoIterator<Item = &'a [Observation]>,
    {
        let mut factor: Option<(usize, f64)> = None;
        buckets
            .into_iter()
            .map(|estimates| {
                let k = estimates.len();
                let z = match factor {
                    Some((cached_k, z)) if cached_k == k => z,
                    _ => {
                        let z = self.error_factor(k)?;
                        factor = Some((k, z));
                        z
                    }
                };
                self.confidence_interval_with_factor(estimates, z)
            })
            .collect()
    }

    fn confidence_level(&self) -> f64 {
        self.confidence.value()
    }
}
