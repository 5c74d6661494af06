//! Observations and samples
//!
//! An [`Observation`] is one measured value plus the quantization half-width
//! of the instrument that produced it. A [`Sample`] is the ordered list of
//! observations recorded by a single run.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single measured value with an optional resolution bound
///
/// The resolution is the half-width of the band the true value could lie in.
/// It is only consulted when estimating confidence intervals.
///
/// Deserializes from a bare number, a `[value, resolution]` pair or a
/// `{"value", "resolution"}` map; always serializes as the map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "ObservationRepr")]
pub struct Observation {
    value: f64,
    resolution: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ObservationRepr {
    Value(f64),
    Pair(f64, f64),
    Full {
        value: f64,
        #[serde(default)]
        resolution: f64,
    },
}

impl From<ObservationRepr> for Observation {
    fn from(repr: ObservationRepr) -> Self {
        match repr {
            ObservationRepr::Value(value) => Self::exact(value),
            ObservationRepr::Pair(value, resolution) | ObservationRepr::Full { value, resolution } => {
                Self::new(value, resolution)
            }
        }
    }
}

impl Observation {
    /// Create an observation with an explicit resolution
    pub fn new(value: f64, resolution: f64) -> Self {
        Self { value, resolution }
    }

    /// Create an observation with zero resolution
    pub fn exact(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// The measured value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The resolution half-width (0 when none was recorded)
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Ascending order by value only
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }

    fn is_valid(&self) -> bool {
        self.value.is_finite() && self.resolution.is_finite() && self.resolution >= 0.0
    }
}

impl From<f64> for Observation {
    fn from(value: f64) -> Self {
        Self::exact(value)
    }
}

impl From<(f64, f64)> for Observation {
    fn from((value, resolution): (f64, f64)) -> Self {
        Self::new(value, resolution)
    }
}

/// The observations recorded by one run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample {
    observations: Vec<Observation>,
}

impl Sample {
    /// Create a sample from observations in recording order
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Create a sample of exact values
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        values.into_iter().map(Observation::exact).collect()
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True when the run recorded nothing
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The observations in their current order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Iterate over the plain values
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.observations.iter().map(Observation::value)
    }

    /// Append an observation
    pub fn push(&mut self, observation: impl Into<Observation>) {
        self.observations.push(observation.into());
    }

    /// Stable ascending sort by value
    ///
    /// Equal values keep their recording order, so sorting twice is a no-op.
    pub fn sort(&mut self) {
        self.observations.sort_by(Observation::cmp_value);
    }

    /// Return a sorted copy, leaving `self` untouched
    pub fn sorted(&self) -> Sample {
        let mut copy = self.clone();
        copy.sort();
        copy
    }

    /// True when values are non-decreasing
    pub fn is_sorted(&self) -> bool {
        self.observations
            .windows(2)
            .all(|w| w[0].cmp_value(&w[1]) != Ordering::Greater)
    }

    /// Reject NaN/infinite values and negative or non-finite resolutions
    ///
    /// `context` names the sample in the returned error (typically the run key).
    pub fn validate(&self, context: &str) -> Result<()> {
        match self.observations.iter().position(|o| !o.is_valid()) {
            Some(index) => Err(Error::non_finite(context, index)),
            None => Ok(()),
        }
    }
}

impl FromIterator<Observation> for Sample {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

impl From<Vec<(f64, f64)>> for Sample {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        pairs.into_iter().map(Observation::from).collect()
    }
}

impl From<Vec<Observation>> for Sample {
    fn from(observations: Vec<Observation>) -> Self {
        Self::new(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_defaults() {
        let obs = Observation::from(2.5);
        assert_eq!(obs.value(), 2.5);
        assert_eq!(obs.resolution(), 0.0);

        let obs = Observation::from((2.5, 0.1));
        assert_eq!(obs.resolution(), 0.1);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut sample = Sample::from(vec![(3.0, 0.3), (1.0, 0.1), (3.0, 0.7), (2.0, 0.2)]);
        sample.sort();

        let resolutions: Vec<f64> = sample.observations().iter().map(|o| o.resolution()).collect();
        assert_eq!(resolutions, vec![0.1, 0.2, 0.3, 0.7]);
        assert!(sample.is_sorted());

        let again = sample.sorted();
        assert_eq!(again, sample);
    }

    #[test]
    fn test_sorted_preserves_original() {
        let sample = Sample::from(vec![3.0, 1.0, 2.0]);
        let sorted = sample.sorted();
        assert_eq!(sample.values().collect::<Vec<_>>(), vec![3.0, 1.0, 2.0]);
        assert_eq!(sorted.values().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_validate() {
        assert!(Sample::from(vec![1.0, 2.0]).validate("run").is_ok());
        assert!(Sample::default().validate("run").is_ok());

        match Sample::from(vec![1.0, f64::NAN, 3.0]).validate("run a") {
            Err(Error::DataIntegrity { context, index }) => {
                assert_eq!(context, "run a");
                assert_eq!(index, 1);
            }
            other => panic!("expected data integrity error, got {other:?}"),
        }

        assert!(Sample::from(vec![f64::INFINITY]).validate("run").is_err());
        assert!(Sample::from(vec![(1.0, -0.5)]).validate("run").is_err());
        assert!(Sample::from(vec![(1.0, f64::NAN)]).validate("run").is_err());
    }

    #[test]
    fn test_serde_shape() {
        let sample = Sample::from(vec![(1.0, 0.5)]);
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"[{"value":1.0,"resolution":0.5}]"#);

        let parsed: Sample = serde_json::from_str(r#"[{"value":2.0}]"#).unwrap();
        assert_eq!(parsed.observations()[0], Observation::exact(2.0));

        let mixed: Sample = serde_json::from_str(r#"[3.0, [4.0, 0.25]]"#).unwrap();
        assert_eq!(
            mixed.observations(),
            &[Observation::exact(3.0), Observation::new(4.0, 0.25)]
        );
    }
}
