//! Student-t critical values
//!
//! The half-width multiplier used by the cross-run engine is
//! `t_inv(level / 2 + 0.5, k - 1) / sqrt(k - 1)`: the two-sided t critical
//! value for `k - 1` degrees of freedom, scaled so that multiplying it by a
//! population (divide-by-`k`) standard deviation gives the usual
//! `t * sample_sd / sqrt(k)` half-width.

use crate::ConfidenceLevel;
use runset_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-sided Student-t critical value with `df` degrees of freedom
pub fn critical_value(df: f64, confidence: ConfidenceLevel) -> Result<f64> {
    if df.is_nan() || df <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "Student-t needs positive degrees of freedom, got {df}"
        )));
    }
    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("Failed to create t-distribution: {}", e)))?;
    Ok(t_dist.inverse_cdf(confidence.upper_tail_probability()))
}

/// Half-width multiplier for `k` contributing runs
///
/// Fails with an insufficient-data error for `k <= 1`, where the degrees of
/// freedom vanish.
pub fn error_factor(k: usize, confidence: ConfidenceLevel) -> Result<f64> {
    if k <= 1 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: k,
        });
    }
    let df = (k - 1) as f64;
    let z = critical_value(df, confidence)? / df.sqrt();
    if !z.is_finite() {
        return Err(Error::Computation(format!(
            "t error factor for k={k} is not finite"
        )));
    }
    Ok(z)
}
