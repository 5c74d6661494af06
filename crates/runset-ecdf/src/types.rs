//! Core types for step-function CDF representation

use serde::{Deserialize, Serialize};

/// A right-continuous step function as plot coordinates
///
/// Every retained data value appears twice: first at the previous cumulative
/// fraction, then at its own, so that drawing the points as a connected line
/// produces vertical risers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CdfCoordinates {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl CdfCoordinates {
    pub(crate) fn with_capacity(points: usize) -> Self {
        Self {
            x: Vec::with_capacity(2 * points),
            y: Vec::with_capacity(2 * points),
        }
    }

    /// Append the riser for `value`, moving from `previous_y` to `y`
    pub(crate) fn push_step(&mut self, value: f64, previous_y: f64, y: f64) {
        self.x.push(value);
        self.y.push(previous_y);
        self.x.push(value);
        self.y.push(y);
    }

    /// The x coordinates (data values)
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The y coordinates (cumulative fractions in `[0, 1]`)
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterate `(x, y)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Number of coordinate pairs (twice the number of retained values)
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of retained source values
    pub fn steps(&self) -> usize {
        self.x.len() / 2
    }

    /// The last cumulative fraction reached, 0 when empty
    pub fn max_y(&self) -> f64 {
        self.y.last().copied().unwrap_or(0.0)
    }
}

/// Spread of several runs' CDFs at each cumulative fraction
///
/// For every y bucket (fractions rounded to two decimals, at most 0.99) the
/// x values of all runs falling in that bucket are summarized by five
/// percentiles. Plotting collaborators shade `[p0, p100]` and `[p25, p75]`
/// and draw `p50` as a line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CdfRangeBand {
    pub y: Vec<f64>,
    pub p0: Vec<f64>,
    pub p25: Vec<f64>,
    pub p50: Vec<f64>,
    pub p75: Vec<f64>,
    pub p100: Vec<f64>,
    /// Number of runs that contributed
    pub runs: usize,
}

impl CdfRangeBand {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}
