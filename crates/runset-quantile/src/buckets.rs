//! Per-quantile cross-run aggregation
//!
//! For every quantile of a grid, collect one nearest-rank estimate per run.
//! Runs that recorded nothing are skipped rather than zero-filled, so the
//! number of estimates per quantile (the *effective level*) can be smaller
//! than the number of runs requested.

use crate::estimators::{nearest_rank_index, LinearInterpolation};
use crate::QuantileEstimator;
use runset_core::{Error, Observation, Result, RunSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Per-run estimates for each quantile of a grid
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileBuckets {
    quantiles: Vec<f64>,
    buckets: Vec<Vec<Observation>>,
    requested_level: usize,
    effective_level: usize,
}

impl QuantileBuckets {
    /// Collect estimates from the first `level` runs (ascending key order)
    ///
    /// Every sample is validated, then a sorted copy is indexed at
    /// `floor((n - 1) * q)` for each quantile `q`. The selected observation keeps
    /// its resolution.
    #[instrument(level = "debug", skip(runs, quantiles), fields(grid_points = quantiles.len()))]
    pub fn collect<K>(
        runs: &RunSet<K>,
        bucket: Option<&str>,
        level: usize,
        quantiles: &[f64],
    ) -> Result<Self>
    where
        K: Ord + fmt::Display,
    {
        if let Some(&p) = quantiles.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(Error::invalid_quantile(p));
        }

        let mut buckets: Vec<Vec<Observation>> =
            quantiles.iter().map(|_| Vec::with_capacity(level)).collect();
        let mut effective_level = 0;

        for (key, sample) in runs.samples(bucket, level)? {
            sample.validate(&format!("run {key}"))?;
            if sample.is_empty() {
                debug!("run {} has no observations, skipping", key);
                continue;
            }

            let sorted = sample.sorted();
            let observations = sorted.observations();
            for (slot, &q) in buckets.iter_mut().zip(quantiles) {
                slot.push(observations[nearest_rank_index(observations.len(), q)]);
            }
            effective_level += 1;
        }

        debug!(
            requested = level,
            effective = effective_level,
            "collected per-run quantile estimates"
        );

        Ok(Self {
            quantiles: quantiles.to_vec(),
            buckets,
            requested_level: level,
            effective_level,
        })
    }

    /// Number of runs asked for
    pub fn requested_level(&self) -> usize {
        self.requested_level
    }

    /// Number of runs that contributed an estimate to every quantile
    pub fn effective_level(&self) -> usize {
        self.effective_level
    }

    pub fn quantiles(&self) -> &[f64] {
        &self.quantiles
    }

    /// Estimates for the quantile at grid position `index`
    pub fn bucket(&self, index: usize) -> &[Observation] {
        &self.buckets[index]
    }

    /// Iterate `(quantile, estimates)` pairs in grid order
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[Observation])> {
        self.quantiles
            .iter()
            .copied()
            .zip(self.buckets.iter().map(Vec::as_slice))
    }

    pub fn len(&self) -> usize {
        self.quantiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantiles.is_empty()
    }
}

/// The run-to-run spread of one quantile
///
/// Plotting collaborators histogram `values` to show how much a single
/// quantile moves between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantileSpread {
    pub quantile: f64,
    /// Legend label, e.g. `p50.0`
    pub label: String,
    /// One value per contributing run, in run key order
    pub values: Vec<f64>,
}

impl QuantileSpread {
    /// Median of the per-run values (linear interpolation)
    pub fn median(&self) -> Result<f64> {
        let mut values = self.values.clone();
        LinearInterpolation.quantile(&mut values, 0.5)
    }
}

/// Collect per-run nearest-rank estimates for a few quantiles across all runs
pub fn quantile_spread<K>(
    runs: &RunSet<K>,
    bucket: Option<&str>,
    quantiles: &[f64],
) -> Result<Vec<QuantileSpread>>
where
    K: Ord + fmt::Display,
{
    let buckets = QuantileBuckets::collect(runs, bucket, runs.len(), quantiles)?;
    Ok(buckets
        .iter()
        .map(|(q, estimates)| QuantileSpread {
            quantile: q,
            label: format!("p{:?}", q * 100.0),
            values: estimates.iter().map(Observation::value).collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use runset_core::Sample;

    fn three_runs() -> RunSet {
        [
            ("A".to_string(), Sample::from(vec![3.0, 1.0, 2.0])),
            ("B".to_string(), Sample::from(vec![2.0, 3.0, 4.0])),
            ("C".to_string(), Sample::from(vec![5.0, 4.0, 3.0])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_collect_median() {
        let buckets = QuantileBuckets::collect(&three_runs(), None, 3, &[0.5]).unwrap();
        let values: Vec<f64> = buckets.bucket(0).iter().map(|o| o.value()).collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
        assert_eq!(buckets.effective_level(), 3);
    }

    #[test]
    fn test_level_truncates_by_key_order() {
        let buckets = QuantileBuckets::collect(&three_runs(), None, 2, &[0.0, 0.99]).unwrap();
        assert_eq!(buckets.effective_level(), 2);
        let lows: Vec<f64> = buckets.bucket(0).iter().map(|o| o.value()).collect();
        assert_eq!(lows, vec![1.0, 2.0]);
    }

    #[test]
    fn test_empty_runs_shrink_effective_level() {
        let mut runs = three_runs();
        runs.insert("AA".to_string(), Sample::default());

        let buckets = QuantileBuckets::collect(&runs, None, 4, &[0.5]).unwrap();
        assert_eq!(buckets.requested_level(), 4);
        assert_eq!(buckets.effective_level(), 3);
        assert_eq!(buckets.bucket(0).len(), 3);
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut runs = three_runs();
        runs.insert("D".to_string(), Sample::from(vec![1.0, f64::NAN]));
        let err = QuantileBuckets::collect(&runs, None, 4, &[0.5]).unwrap_err();
        assert!(matches!(err, Error::DataIntegrity { .. }));
    }

    #[test]
    fn test_resolution_is_carried() {
        let runs: RunSet = [(
            "A".to_string(),
            Sample::from(vec![(3.0, 0.3), (1.0, 0.1), (2.0, 0.2)]),
        )]
        .into_iter()
        .collect();
        let buckets = QuantileBuckets::collect(&runs, None, 1, &[0.5]).unwrap();
        assert_eq!(buckets.bucket(0)[0], Observation::new(2.0, 0.2));
    }

    #[test]
    fn test_quantile_spread_labels() {
        let spread = quantile_spread(&three_runs(), None, &[0.5, 0.0]).unwrap();
        assert_eq!(spread[0].label, "p50.0");
        assert_eq!(spread[0].values, vec![2.0, 3.0, 4.0]);
        assert_eq!(spread[0].median().unwrap(), 3.0);
        assert_eq!(spread[1].label, "p0.0");
    }

    #[test]
    fn test_invalid_quantile() {
        assert!(QuantileBuckets::collect(&three_runs(), None, 3, &[1.5]).is_err());
    }
}
