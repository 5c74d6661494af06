//! Empirical CDF construction with bounded output size
//!
//! Samples can hold millions of observations. The builder thins the sorted
//! sample before emitting step coordinates so that output size grows with
//! `max_points`, not with the sample.

use crate::traits::CdfBuilder;
use crate::CdfCoordinates;
use runset_core::{utils::check_finite, Error, Result, Sample};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How source indices are thinned before emitting steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Thinning {
    /// Keep index `i` when `i mod (n / max_points) <= 1`
    ///
    /// Cheap and approximate: output grows roughly in proportion to
    /// `max_points` but is not capped by it.
    #[default]
    Stride,
    /// Keep at most `max_points` evenly spaced indices, always including the
    /// first and last processed index
    Bucketed,
}

/// Options for [`EmpiricalCdfBuilder`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdfOptions {
    /// Target number of retained source points
    pub max_points: usize,
    /// Fraction of the sorted sample to show, in `(0, 1]`
    pub shown_percentile: f64,
    pub thinning: Thinning,
}

impl Default for CdfOptions {
    fn default() -> Self {
        Self {
            max_points: 100_000,
            shown_percentile: 1.0,
            thinning: Thinning::Stride,
        }
    }
}

impl CdfOptions {
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Truncate the right tail, e.g. `0.99` to hide extreme outliers
    pub fn with_shown_percentile(mut self, shown_percentile: f64) -> Self {
        self.shown_percentile = shown_percentile;
        self
    }

    pub fn with_thinning(mut self, thinning: Thinning) -> Self {
        self.thinning = thinning;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.max_points == 0 {
            return Err(Error::InvalidParameter(
                "max_points must be at least 1".to_string(),
            ));
        }
        if !(self.shown_percentile > 0.0 && self.shown_percentile <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "shown percentile {} must be in (0, 1]",
                self.shown_percentile
            )));
        }
        Ok(())
    }
}

/// Step-function empirical CDF of a single sample
///
/// The cumulative fraction at sorted index `i` is `(i + 1) / n`. Resolutions
/// are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmpiricalCdfBuilder {
    options: CdfOptions,
}

impl EmpiricalCdfBuilder {
    pub fn new(options: CdfOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CdfOptions {
        &self.options
    }

    /// Number of sorted source points processed for a sample of `n`
    fn processed(&self, n: usize) -> usize {
        ((n as f64 * self.options.shown_percentile).floor() as usize).min(n)
    }

    fn build_sorted(&self, values: &[f64]) -> CdfCoordinates {
        let n = values.len();
        let limit = self.processed(n);
        let fraction = |i: usize| (i + 1) as f64 / n as f64;

        let mut coords;
        let mut last_y = 0.0;
        match self.options.thinning {
            Thinning::Stride => {
                let k = n as f64 / self.options.max_points as f64;
                coords = CdfCoordinates::with_capacity(limit.min(2 * self.options.max_points));
                for (i, &value) in values.iter().enumerate().take(limit) {
                    if (i as f64) % k > 1.0 {
                        continue;
                    }
                    let y = fraction(i);
                    coords.push_step(value, last_y, y);
                    last_y = y;
                }
            }
            Thinning::Bucketed => {
                let keep = limit.min(self.options.max_points);
                coords = CdfCoordinates::with_capacity(keep);
                for i in bucketed_indices(limit, keep) {
                    let y = fraction(i);
                    coords.push_step(values[i], last_y, y);
                    last_y = y;
                }
            }
        }
        coords
    }
}

/// `keep` evenly spaced, strictly increasing indices of `0..limit`
///
/// The last index is always included; the first is included when `keep > 1`.
fn bucketed_indices(limit: usize, keep: usize) -> impl Iterator<Item = usize> {
    let last = limit.saturating_sub(1);
    (0..keep).map(move |j| {
        if keep == 1 {
            last
        } else {
            // j * last / (keep - 1) without overflow for large samples
            ((j as u128 * last as u128) / (keep as u128 - 1)) as usize
        }
    })
}

impl CdfBuilder for EmpiricalCdfBuilder {
    fn build(&self, sample: &Sample) -> Result<CdfCoordinates> {
        self.options.validate()?;
        if sample.is_empty() {
            return Err(Error::empty_input("empirical CDF"));
        }

        let mut values: Vec<f64> = sample.values().collect();
        check_finite(&values, "CDF sample")?;
        values.sort_by(f64::total_cmp);

        let coords = self.build_sorted(&values);
        debug!(
            n = values.len(),
            steps = coords.steps(),
            thinning = ?self.options.thinning,
            "built empirical CDF"
        );
        Ok(coords)
    }
}
