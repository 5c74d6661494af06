//! Renderer configuration

use runset_confidence::{ConfidenceLevel, LowerBound};
use runset_quantile::GridSpec;
use serde::{Deserialize, Serialize};

/// Settings shared by every level of a render
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Confidence level of each band
    pub confidence: ConfidenceLevel,
    /// Quantile grid the bands are evaluated over
    pub grid: GridSpec,
    /// Policy for negative lower bounds
    pub lower_bound: LowerBound,
    /// Prepended to every band label, e.g. `"tor "`
    pub label_prefix: String,
}

impl RenderConfig {
    pub fn with_confidence(mut self, confidence: ConfidenceLevel) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_lower_bound(mut self, lower_bound: LowerBound) -> Self {
        self.lower_bound = lower_bound;
        self
    }

    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }
}
