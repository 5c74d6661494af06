//! Interface to a plotting backend
//!
//! The renderer produces data only. A backend implements [`PlotSurface`] to
//! receive the bands through [`RenderedLevels::draw`](crate::RenderedLevels::draw).

use crate::{CiBand, RenderedLevels};
use runset_core::Result;

/// Receiver for rendered bands
pub trait PlotSurface {
    /// Shade the band between `band.lower` and `band.upper` along `grid`
    fn fill_band(&self, grid: &[f64], band: &CiBand) -> Result<()>;

    /// Draw the mean curve `(x, y)` of the highest level
    fn center_line(&self, x: &[f64], y: &[f64]) -> Result<()>;

    /// Check if this surface actually produces output
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Surface that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl PlotSurface for NullSurface {
    fn fill_band(&self, _grid: &[f64], _band: &CiBand) -> Result<()> {
        Ok(())
    }

    fn center_line(&self, _x: &[f64], _y: &[f64]) -> Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

impl RenderedLevels {
    /// Hand every band to `surface` in ascending level order, then the center line
    ///
    /// Failed levels are skipped. Nothing is sent to a disabled surface.
    pub fn draw<S: PlotSurface + ?Sized>(&self, surface: &S) -> Result<()> {
        if !surface.is_enabled() {
            return Ok(());
        }
        let grid = self.grid.points();
        for band in self.bands() {
            surface.fill_band(grid, band)?;
        }
        if let Some((x, y)) = self.center_line() {
            surface.center_line(x, y)?;
        }
        Ok(())
    }
}
