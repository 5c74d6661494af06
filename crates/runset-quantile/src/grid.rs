//! The shared quantile grid
//!
//! Cross-run statistics are evaluated pointwise over a fixed grid of quantile
//! probabilities. The grid is the common x-domain of every run, independent of
//! any single run's data.

use runset_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Description of an evenly spaced grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of grid points
    pub points: usize,
    /// First quantile (inclusive)
    pub min: f64,
    /// Last quantile (inclusive)
    pub max: f64,
}

impl Default for GridSpec {
    /// 1000 points from 0 to 0.99
    fn default() -> Self {
        Self {
            points: 1000,
            min: 0.0,
            max: 0.99,
        }
    }
}

impl GridSpec {
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Materialize the grid
    pub fn build(&self) -> Result<QuantileGrid> {
        QuantileGrid::linspace(self.min, self.max, self.points)
    }
}

/// An ordered sequence of quantile probabilities in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantileGrid {
    points: Vec<f64>,
}

impl QuantileGrid {
    /// Evenly spaced points from `min` to `max` inclusive
    ///
    /// Point `i` is `min + i * step`; the last point is exactly `max`.
    pub fn linspace(min: f64, max: f64, points: usize) -> Result<Self> {
        if points == 0 {
            return Err(Error::InvalidParameter(
                "quantile grid needs at least one point".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&min) {
            return Err(Error::invalid_quantile(min));
        }
        if !(0.0..=1.0).contains(&max) {
            return Err(Error::invalid_quantile(max));
        }
        if min > max {
            return Err(Error::InvalidParameter(format!(
                "grid minimum {min} exceeds maximum {max}"
            )));
        }

        Ok(Self {
            points: evenly_spaced(min, max, points),
        })
    }

    /// Use caller-provided points
    ///
    /// Points must lie in `[0, 1]` and be non-decreasing.
    pub fn from_points(points: Vec<f64>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InvalidParameter(
                "quantile grid needs at least one point".to_string(),
            ));
        }
        if let Some(&p) = points.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(Error::invalid_quantile(p));
        }
        if points.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::InvalidParameter(
                "quantile grid points must be non-decreasing".to_string(),
            ));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for QuantileGrid {
    fn default() -> Self {
        let defaults = GridSpec::default();
        Self {
            points: evenly_spaced(defaults.min, defaults.max, defaults.points),
        }
    }
}

fn evenly_spaced(min: f64, max: f64, points: usize) -> Vec<f64> {
    if points <= 1 {
        return vec![min; points];
    }
    let step = (max - min) / (points - 1) as f64;
    let mut grid: Vec<f64> = (0..points).map(|i| min + i as f64 * step).collect();
    grid[points - 1] = max;
    grid
}
