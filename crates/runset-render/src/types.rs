//! Rendered band types

use runset_core::{Error, Result};
use runset_quantile::QuantileGrid;
use serde::{Deserialize, Serialize};

/// Effective levels that are displayed as 100 runs
///
/// A run set of 100 simulations in which a few runs failed outright still
/// describes the 100-run configuration.
const FULL_LEVEL_ALIASES: [usize; 2] = [97, 99];

/// Legend label for a band over `effective` runs
///
/// Only the label is affected; the band's numbers use `effective`.
pub fn display_label(prefix: &str, effective: usize) -> String {
    let shown = if FULL_LEVEL_ALIASES.contains(&effective) {
        100
    } else {
        effective
    };
    format!("{prefix}n={shown}")
}

/// Confidence band of one level, aligned with the quantile grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CiBand {
    /// Number of runs asked for
    pub level_requested: usize,
    /// Number of runs that contributed
    pub level_effective: usize,
    pub label: String,
    /// Position among the rendered levels, ascending
    pub series_index: usize,
    /// Suggested fill opacity in `(0, 1)`
    pub fill_opacity: f64,
    /// Cross-run mean at each grid point
    pub mean: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl CiBand {
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Iterate `(lower, mean, upper)` triples in grid order
    pub fn triples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.lower
            .iter()
            .zip(&self.mean)
            .zip(&self.upper)
            .map(|((&l, &m), &u)| (l, m, u))
    }
}

/// Result of rendering one requested level
#[derive(Debug)]
pub struct LevelOutcome {
    pub requested: usize,
    pub result: Result<CiBand>,
}

impl LevelOutcome {
    pub fn band(&self) -> Option<&CiBand> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

/// All levels of a render, ascending by requested level
#[derive(Debug)]
pub struct RenderedLevels {
    pub(crate) grid: QuantileGrid,
    pub(crate) levels: Vec<LevelOutcome>,
}

impl RenderedLevels {
    /// The shared y axis of every band
    pub fn grid(&self) -> &QuantileGrid {
        &self.grid
    }

    pub fn levels(&self) -> &[LevelOutcome] {
        &self.levels
    }

    /// Successfully rendered bands
    pub fn bands(&self) -> impl Iterator<Item = &CiBand> {
        self.levels.iter().filter_map(LevelOutcome::band)
    }

    /// `(requested level, error)` for every level that could not be rendered
    pub fn failures(&self) -> impl Iterator<Item = (usize, &Error)> {
        self.levels
            .iter()
            .filter_map(|outcome| outcome.error().map(|e| (outcome.requested, e)))
    }

    /// Band of the highest successful level
    pub fn center_band(&self) -> Option<&CiBand> {
        self.bands().last()
    }

    /// Mean curve of the highest successful level as `(x, y)`
    pub fn center_line(&self) -> Option<(&[f64], &[f64])> {
        self.center_band()
            .map(|band| (band.mean.as_slice(), self.grid.points()))
    }

    /// Fail with the first level's error, if any
    pub fn into_strict(self) -> Result<Self> {
        let mut levels = Vec::with_capacity(self.levels.len());
        for outcome in self.levels {
            let band = outcome.result?;
            levels.push(LevelOutcome {
                requested: outcome.requested,
                result: Ok(band),
            });
        }
        Ok(Self {
            grid: self.grid,
            levels,
        })
    }
}
