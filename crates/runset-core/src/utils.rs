//! Utility functions for working with value slices

use crate::{Error, Result};

/// Sort values ascending and return a new vector
///
/// Uses the IEEE 754 total order, so positive NaN sorts last and negative
/// NaN first; callers that must reject NaN should run [`check_finite`] first.
///
/// # Examples
///
/// ```rust
/// use runset_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Arithmetic mean
///
/// Returns 0.0 for empty slices.
///
/// ```rust
/// use runset_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance (divides by `n`, not `n - 1`)
///
/// Returns 0.0 for empty slices.
///
/// ```rust
/// use runset_core::utils::population_variance;
///
/// let v = population_variance(&[2.0, 3.0, 4.0]);
/// assert!((v - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64
}

/// Population standard deviation
pub fn population_std_dev(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Fail with a data integrity error naming the first non-finite value
pub fn check_finite(data: &[f64], context: &str) -> Result<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(Error::non_finite(context, index)),
        None => Ok(()),
    }
}
