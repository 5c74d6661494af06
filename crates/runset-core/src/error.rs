//! Error types for cross-run CDF estimation
//!
//! Provides a unified error type for all runset crates.

use thiserror::Error;

/// Core error type for run-set statistics
#[derive(Error, Debug)]
pub enum Error {
    /// A sample holds a value that must never reach a computation
    #[error("Data integrity error: invalid value in {context} at index {index}")]
    DataIntegrity { context: String, index: usize },

    /// Too few contributing runs (or observations) for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// An operation that needs at least one observation received none
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input data has the wrong shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (for record writers)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyInput(format!("{operation} requires at least one observation"))
    }

    /// Create an error for an invalid quantile probability
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for a NaN/Inf value found at `index`
    pub fn non_finite(context: &str, index: usize) -> Self {
        Self::DataIntegrity {
            context: context.to_string(),
            index,
        }
    }

    /// True for errors caused by too few runs or observations
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientData { .. } | Self::EmptyInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DataIntegrity {
            context: "sample".to_string(),
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "Data integrity error: invalid value in sample at index 3"
        );

        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::InvalidParameter("max_points must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: max_points must be positive");

        let err = Error::Computation("half-width is not finite".to_string());
        assert_eq!(err.to_string(), "Computation error: half-width is not finite");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("summary statistics");
        assert_eq!(
            err.to_string(),
            "Empty input: summary statistics requires at least one observation"
        );
        assert!(err.is_insufficient());

        let err = Error::invalid_quantile(1.5);
        assert_eq!(err.to_string(), "Invalid parameter: Quantile 1.5 must be in [0, 1]");
        assert!(!err.is_insufficient());

        match Error::non_finite("run 7", 12) {
            Error::DataIntegrity { context, index } => {
                assert_eq!(context, "run 7");
                assert_eq!(index, 12);
            }
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("custom error message"));
    }
}
