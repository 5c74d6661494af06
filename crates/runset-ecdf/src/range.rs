//! CDF range bands across runs
//!
//! Where the confidence band asks "where is the true CDF", the range band
//! shows how far apart the individual runs' CDFs are: at every cumulative
//! fraction it reports the minimum, quartiles and maximum of the runs' x
//! values.

use crate::traits::CdfBuilder;
use crate::{CdfRangeBand, EmpiricalCdfBuilder};
use runset_core::{Error, Result, RunSet};
use runset_quantile::{LinearInterpolation, QuantileEstimator};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Highest y bucket (in hundredths) that is reported
const MAX_BUCKET: u32 = 99;

const BAND_QUANTILES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Builds a [`CdfRangeBand`] from every run of a run set
#[derive(Debug, Clone, Default)]
pub struct CdfRangeBuilder<B: CdfBuilder = EmpiricalCdfBuilder> {
    builder: B,
}

impl<B: CdfBuilder> CdfRangeBuilder<B> {
    /// Use `builder` to construct each run's CDF
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Summarize all runs' CDFs, optionally restricted to one metric bucket
    ///
    /// Runs without observations are skipped. Each emitted CDF point is filed
    /// under its y value rounded to two decimals, halves to even (0.125 files
    /// under 0.12); fractions that round above 0.99 are dropped.
    pub fn build<K>(&self, runs: &RunSet<K>, bucket: Option<&str>) -> Result<CdfRangeBand>
    where
        K: Ord + fmt::Display,
    {
        let mut by_fraction: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        let mut contributing = 0;

        for (key, sample) in runs.samples(bucket, runs.len())? {
            if sample.is_empty() {
                debug!("run {} has no observations, skipping", key);
                continue;
            }
            let coords = self.builder.build(sample)?;
            for (x, y) in coords.points() {
                let hundredths = (y * 100.0).round_ties_even() as u32;
                if hundredths > MAX_BUCKET {
                    continue;
                }
                by_fraction.entry(hundredths).or_default().push(x);
            }
            contributing += 1;
        }

        if contributing == 0 {
            return Err(Error::empty_input("CDF range band"));
        }

        let estimator = LinearInterpolation;
        let mut band = CdfRangeBand {
            runs: contributing,
            ..CdfRangeBand::default()
        };
        for (hundredths, mut xs) in by_fraction {
            xs.sort_by(f64::total_cmp);
            let p = estimator.quantiles_sorted(&xs, &BAND_QUANTILES)?;
            band.y.push(hundredths as f64 / 100.0);
            band.p0.push(p[0]);
            band.p25.push(p[1]);
            band.p50.push(p[2]);
            band.p75.push(p[3]);
            band.p100.push(p[4]);
        }

        debug!(
            runs = contributing,
            buckets = band.len(),
            estimator = estimator.name(),
            "built CDF range band"
        );
        Ok(band)
    }
}
