//! Multi-level CDF confidence bands
//!
//! Each requested level `n` uses the first `n` runs of the run set (ascending
//! key order) and is rendered independently: per-run nearest-rank estimates
//! are gathered at every grid quantile, and the resolution-aware Student-t
//! interval of those estimates becomes one point of the band.

use crate::types::display_label;
use crate::{CiBand, LevelOutcome, RenderConfig, RenderedLevels};
use runset_confidence::{ConfidenceInterval, ResolutionAwareCI};
use runset_core::{Result, RunSet};
use runset_quantile::{QuantileBuckets, QuantileGrid};
use std::fmt;
use tracing::{debug, instrument, warn};

/// Renders confidence bands for several run counts over a shared grid
#[derive(Debug, Clone, Default)]
pub struct MultiLevelRenderer {
    config: RenderConfig,
}

impl MultiLevelRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn estimator(&self) -> ResolutionAwareCI {
        ResolutionAwareCI::new(self.config.confidence).with_lower_bound(self.config.lower_bound)
    }

    /// Render one band per distinct level, ascending
    ///
    /// A level that cannot be rendered (fewer than two contributing runs, a
    /// missing metric bucket, invalid data) is reported as a failed outcome;
    /// the other levels are unaffected. Only an invalid grid fails the call.
    #[instrument(level = "debug", skip(self, runs), fields(runs = runs.len()))]
    pub fn render<K>(
        &self,
        runs: &RunSet<K>,
        bucket: Option<&str>,
        levels: &[usize],
    ) -> Result<RenderedLevels>
    where
        K: Ord + fmt::Display,
    {
        let grid = self.config.grid.build()?;

        let mut sorted = levels.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let count = sorted.len();
        let levels = sorted
            .into_iter()
            .enumerate()
            .map(|(index, level)| LevelOutcome {
                requested: level,
                result: self.render_level(runs, bucket, &grid, level, index, count),
            })
            .collect();

        Ok(RenderedLevels { grid, levels })
    }

    /// Like [`render`](Self::render), but any failed level fails the call
    pub fn render_strict<K>(
        &self,
        runs: &RunSet<K>,
        bucket: Option<&str>,
        levels: &[usize],
    ) -> Result<RenderedLevels>
    where
        K: Ord + fmt::Display,
    {
        self.render(runs, bucket, levels)?.into_strict()
    }

    fn render_level<K>(
        &self,
        runs: &RunSet<K>,
        bucket: Option<&str>,
        grid: &QuantileGrid,
        level: usize,
        index: usize,
        count: usize,
    ) -> Result<CiBand>
    where
        K: Ord + fmt::Display,
    {
        let buckets = QuantileBuckets::collect(runs, bucket, level, grid.points())?;
        let effective = buckets.effective_level();
        if effective < level {
            warn!(
                requested = level,
                effective, "fewer runs with data than requested, using effective level"
            );
        }

        let ci = self.estimator();
        let z = ci.error_factor(effective)?;
        let intervals = interval_per_quantile(&ci, &buckets, z)?;

        let mut band = CiBand {
            level_requested: level,
            level_effective: effective,
            label: display_label(&self.config.label_prefix, effective),
            series_index: index,
            fill_opacity: fill_opacity(index, count),
            mean: Vec::with_capacity(intervals.len()),
            lower: Vec::with_capacity(intervals.len()),
            upper: Vec::with_capacity(intervals.len()),
        };
        for interval in intervals {
            band.mean.push(interval.estimate);
            band.lower.push(interval.lower);
            band.upper.push(interval.upper);
        }

        debug!(level, effective, z, label = %band.label, "rendered level");
        Ok(band)
    }
}

/// Opacity for series `index` of `count`: 0.5 alone, else ramping up to 0.6
fn fill_opacity(index: usize, count: usize) -> f64 {
    if count == 1 {
        0.5
    } else {
        0.6 / count as f64 * (index + 1) as f64
    }
}

#[cfg(not(feature = "parallel"))]
fn interval_per_quantile(
    ci: &ResolutionAwareCI,
    buckets: &QuantileBuckets,
    z: f64,
) -> Result<Vec<ConfidenceInterval>> {
    buckets
        .iter()
        .map(|(_, estimates)| ci.confidence_interval_with_factor(estimates, z))
        .collect()
}

#[cfg(feature = "parallel")]
fn interval_per_quantile(
    ci: &ResolutionAwareCI,
    buckets: &QuantileBuckets,
    z: f64,
) -> Result<Vec<ConfidenceInterval>> {
    use rayon::prelude::*;

    (0..buckets.len())
        .into_par_iter()
        .map(|i| ci.confidence_interval_with_factor(buckets.bucket(i), z))
        .collect()
}
