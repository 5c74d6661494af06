//! Five-number summary plus moments

use runset_core::utils::{check_finite, mean, population_std_dev, sorted};
use runset_core::{Error, Result, Sample};
use runset_quantile::{LinearInterpolation, QuantileEstimator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use tracing::trace;

/// Descriptive statistics of one sample
///
/// Quartiles use linear interpolation between order statistics; the standard
/// deviation is the population form (divisor `n`). Resolutions are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl SummaryStatistics {
    /// Summarize the values of a sample
    pub fn from_sample(sample: &Sample) -> Result<Self> {
        let values: Vec<f64> = sample.values().collect();
        Self::from_values(&values)
    }

    /// Summarize plain values in any order
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::empty_input("summary statistics"));
        }
        check_finite(values, "summary sample")?;

        let data = sorted(values);
        let quartiles = LinearInterpolation.quantiles_sorted(&data, &[0.25, 0.5, 0.75])?;
        let stats = Self {
            count: data.len(),
            min: data[0],
            q1: quartiles[0],
            median: quartiles[1],
            q3: quartiles[2],
            max: data[data.len() - 1],
            mean: mean(&data),
            std_dev: population_std_dev(&data),
        };
        trace!(count = stats.count, "computed summary statistics");
        Ok(stats)
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Append `message` and the statistics record as two lines
    pub fn write_record<W: io::Write>(&self, mut writer: W, message: &str) -> Result<()> {
        writeln!(writer, "{message}")?;
        writeln!(writer, "{self}")?;
        Ok(())
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={} q1={} median={} q3={} max={} mean={} stddev={}",
            self.min, self.q1, self.median, self.q3, self.max, self.mean, self.std_dev
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_to_five() {
        let stats = SummaryStatistics::from_values(&[5.0, 3.0, 1.0, 4.0, 2.0]).unwrap();
        assert_eq!(stats.count, 5);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.mean, 3.0);
        assert_relative_eq!(stats.std_dev, 2f64.sqrt(), epsilon = 1e-12);
        assert_eq!(stats.iqr(), 2.0);
    }

    #[test]
    fn test_interpolated_quartiles() {
        let stats = SummaryStatistics::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(stats.q1, 1.75);
        assert_relative_eq!(stats.median, 2.5);
        assert_relative_eq!(stats.q3, 3.25);
    }

    #[test]
    fn test_single_value() {
        let stats = SummaryStatistics::from_sample(&Sample::from(vec![(7.0, 0.5)])).unwrap();
        assert_eq!(stats.min, 7.0);
        assert_eq!(stats.max, 7.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            SummaryStatistics::from_values(&[]),
            Err(Error::EmptyInput(_))
        ));
        assert!(matches!(
            SummaryStatistics::from_values(&[1.0, f64::INFINITY]),
            Err(Error::DataIntegrity { index: 1, .. })
        ));
    }

    #[test]
    fn test_write_record() {
        let stats = SummaryStatistics::from_values(&[2.0, 2.0]).unwrap();
        let mut out = Vec::new();
        stats.write_record(&mut out, "download times").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "download times\nmin=2 q1=2 median=2 q3=2 max=2 mean=2 stddev=0\n"
        );
    }
}
