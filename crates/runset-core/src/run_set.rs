//! Run sets: samples keyed by run identifier
//!
//! A [`RunSet`] iterates its runs in sorted key order so that taking "the
//! first `level` runs" is reproducible across invocations.

use crate::{Error, Result, Sample};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The data recorded by a single run
///
/// Extractors either produce one flat sample per run, or a set of named metric
/// buckets (for example one sample per transfer size).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunRecord {
    /// One sample for the whole run
    Flat(Sample),
    /// Samples grouped by metric name
    Bucketed(BTreeMap<String, Sample>),
}

impl RunRecord {
    /// Resolve the sample to use, optionally narrowing to one bucket
    ///
    /// A flat run with no selector yields its sample. A bucketed run requires a
    /// selector naming one of its buckets.
    pub fn select(&self, bucket: Option<&str>) -> Result<&Sample> {
        match (self, bucket) {
            (RunRecord::Flat(sample), None) => Ok(sample),
            (RunRecord::Flat(_), Some(name)) => Err(Error::InvalidInput(format!(
                "bucket '{name}' requested from a run without buckets"
            ))),
            (RunRecord::Bucketed(buckets), Some(name)) => buckets
                .get(name)
                .ok_or_else(|| Error::InvalidInput(format!("run has no bucket '{name}'"))),
            (RunRecord::Bucketed(_), None) => Err(Error::InvalidInput(
                "bucketed run needs a bucket selector".to_string(),
            )),
        }
    }
}

impl From<Sample> for RunRecord {
    fn from(sample: Sample) -> Self {
        RunRecord::Flat(sample)
    }
}

impl From<BTreeMap<String, Sample>> for RunRecord {
    fn from(buckets: BTreeMap<String, Sample>) -> Self {
        RunRecord::Bucketed(buckets)
    }
}

/// All runs of one experiment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunSet<K: Ord = String> {
    runs: BTreeMap<K, RunRecord>,
}

impl<K: Ord> Default for RunSet<K> {
    fn default() -> Self {
        Self {
            runs: BTreeMap::new(),
        }
    }
}

impl<K: Ord + fmt::Display> RunSet<K> {
    /// Create an empty run set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a run
    pub fn insert(&mut self, key: K, record: impl Into<RunRecord>) -> Option<RunRecord> {
        self.runs.insert(key, record.into())
    }

    /// Number of runs, including runs that recorded nothing
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// True when there are no runs
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Look up one run
    pub fn get(&self, key: &K) -> Option<&RunRecord> {
        self.runs.get(key)
    }

    /// Iterate runs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &RunRecord)> {
        self.runs.iter()
    }

    /// The first `level` runs in ascending key order
    pub fn first(&self, level: usize) -> impl Iterator<Item = (&K, &RunRecord)> {
        self.runs.iter().take(level)
    }

    /// Resolve each of the first `level` runs to its (optionally bucketed) sample
    pub fn samples(&self, bucket: Option<&str>, level: usize) -> Result<Vec<(&K, &Sample)>> {
        self.first(level)
            .map(|(key, record)| {
                record
                    .select(bucket)
                    .map(|sample| (key, sample))
                    .map_err(|e| Error::InvalidInput(format!("run {key}: {e}")))
            })
            .collect()
    }
}

impl<K: Ord, R: Into<RunRecord>> FromIterator<(K, R)> for RunSet<K> {
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        Self {
            runs: iter.into_iter().map(|(k, r)| (k, r.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucketed(entries: &[(&str, Vec<f64>)]) -> RunRecord {
        RunRecord::Bucketed(
            entries
                .iter()
                .map(|(name, values)| (name.to_string(), Sample::from(values.clone())))
                .collect(),
        )
    }

    #[test]
    fn test_sorted_iteration_and_truncation() {
        let mut runs: RunSet<u32> = RunSet::new();
        runs.insert(10, Sample::from(vec![3.0]));
        runs.insert(2, Sample::from(vec![1.0]));
        runs.insert(5, Sample::from(vec![2.0]));

        let keys: Vec<u32> = runs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![2, 5, 10]);

        let first_two: Vec<u32> = runs.first(2).map(|(k, _)| *k).collect();
        assert_eq!(first_two, vec![2, 5]);

        // asking for more runs than exist is not an error here
        assert_eq!(runs.first(100).count(), 3);
    }

    #[test]
    fn test_select_bucket() {
        let record = bucketed(&[("51200", vec![1.0, 2.0]), ("1048576", vec![4.0])]);
        assert_eq!(record.select(Some("1048576")).unwrap().len(), 1);
        assert!(record.select(Some("missing")).is_err());
        assert!(record.select(None).is_err());

        let flat = RunRecord::Flat(Sample::from(vec![1.0]));
        assert_eq!(flat.select(None).unwrap().len(), 1);
        assert!(flat.select(Some("51200")).is_err());
    }

    #[test]
    fn test_samples_names_failing_run() {
        let runs: RunSet = [
            ("a".to_string(), bucketed(&[("x", vec![1.0])])),
            ("b".to_string(), bucketed(&[("y", vec![2.0])])),
        ]
        .into_iter()
        .collect();

        assert_eq!(runs.samples(Some("x"), 1).unwrap().len(), 1);
        let err = runs.samples(Some("x"), 2).unwrap_err();
        assert!(err.to_string().contains("run b"));
    }

    #[test]
    fn test_deserialize_mixed_records() {
        let json = r#"{
            "seed1": [{"value": 1.0}, {"value": 2.0, "resolution": 0.5}],
            "seed2": {"51200": [{"value": 3.0}]}
        }"#;
        let runs: RunSet = serde_json::from_str(json).unwrap();
        assert_eq!(runs.len(), 2);
        assert!(matches!(runs.get(&"seed1".to_string()), Some(RunRecord::Flat(_))));
        assert!(matches!(runs.get(&"seed2".to_string()), Some(RunRecord::Bucketed(_))));
    }
}
