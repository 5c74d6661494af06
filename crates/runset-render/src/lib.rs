//! Multi-level CDF confidence band rendering
//!
//! Given a run set and a list of run counts ("levels"), the renderer produces
//! for each level a band of Student-t confidence intervals around the
//! cross-run mean at every point of a quantile grid. The output is plain data
//! that a [`PlotSurface`] implementation can draw.
//!
//! # Example
//!
//! ```rust
//! use runset_core::{RunSet, Sample};
//! use runset_render::{MultiLevelRenderer, NullSurface, RenderConfig};
//!
//! let runs: RunSet = (0..10)
//!     .map(|i| {
//!         let values: Vec<f64> = (1..=50).map(|x| (x * (i + 1)) as f64).collect();
//!         (format!("seed{i:02}"), Sample::from(values))
//!     })
//!     .collect();
//!
//! let renderer = MultiLevelRenderer::new(RenderConfig::default().with_label_prefix("sim "));
//! let rendered = renderer.render(&runs, None, &[10, 5]).unwrap();
//!
//! let labels: Vec<&str> = rendered.bands().map(|b| b.label.as_str()).collect();
//! assert_eq!(labels, ["sim n=5", "sim n=10"]);
//! rendered.draw(&NullSurface).unwrap();
//! ```

pub mod config;
pub mod renderer;
pub mod surface;
pub mod types;

pub use config::RenderConfig;
pub use renderer::MultiLevelRenderer;
pub use surface::{NullSurface, PlotSurface};
pub use types::{display_label, CiBand, LevelOutcome, RenderedLevels};

pub use runset_core::{Error, Result};
