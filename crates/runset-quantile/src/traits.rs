//! Core traits for quantile estimation

use runset_core::{utils::check_finite, Error, Result};

/// Point estimator of a single quantile from one sample
pub trait QuantileEstimator {
    /// Estimate a single quantile
    ///
    /// # Warning
    /// This method will sort the data in place! If you need to preserve the original
    /// order, use `quantile_sorted()` with pre-sorted data or make a copy first.
    fn quantile(&self, data: &mut [f64], p: f64) -> Result<f64> {
        check_finite(data, "quantile input")?;
        data.sort_by(f64::total_cmp);
        self.quantile_sorted(data, p)
    }

    /// Estimate a single quantile from pre-sorted data
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter().map(|&p| self.quantile_sorted(sorted_data, p)).collect()
    }

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Validate a probability and a non-empty sample
pub(crate) fn check_request(sorted_data: &[f64], p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }
    if sorted_data.is_empty() {
        return Err(Error::empty_input("quantile estimation"));
    }
    Ok(())
}
