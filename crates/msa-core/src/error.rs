//! Error types for measurement-system analysis
//!
//! Provides a unified error type for all msa-stats crates.

use thiserror::Error;

/// Core error type for MSA computations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A crossed study needs measurements from several operators
    #[error("Insufficient operators: expected at least {expected}, got {actual}")]
    InsufficientOperators { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper constructors for common validation patterns

impl Error {
    /// Create an error for a probability outside (0, 1)
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidParameter(format!("Probability {p} must be in (0, 1)"))
    }

    /// Create an error for a sample below a method's minimum size
    pub fn sample_too_small(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for a non-positive tuning parameter
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be positive, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("alpha must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: alpha must be positive");

        let err = Error::InsufficientData {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 3 samples, got 2"
        );

        let err = Error::InsufficientOperators {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient operators: expected at least 2, got 1"
        );

        let err = Error::Computation("convergence failed".to_string());
        assert_eq!(err.to_string(), "Computation error: convergence failed");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_probability(1.5);
        assert_eq!(err.to_string(), "Invalid parameter: Probability 1.5 must be in (0, 1)");

        let err = Error::sample_too_small(8, 5);
        match err {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 5);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::non_positive("threshold", -1.0);
        assert_eq!(err.to_string(), "Invalid parameter: threshold must be positive, got -1");
    }

    #[test]
    fn test_validation_patterns() {
        fn check_sample_size(data: &[f64], min_size: usize) -> Result<()> {
            if data.len() < min_size {
                return Err(Error::sample_too_small(min_size, data.len()));
            }
            Ok(())
        }

        assert!(check_sample_size(&[1.0, 2.0], 3).is_err());
        assert!(check_sample_size(&[1.0, 2.0, 3.0], 3).is_ok());

        fn validate_probability(p: f64) -> Result<()> {
            if !(p > 0.0 && p < 1.0) {
                return Err(Error::invalid_probability(p));
            }
            Ok(())
        }

        assert!(validate_probability(0.05).is_ok());
        assert!(validate_probability(0.0).is_err());
        assert!(validate_probability(1.0).is_err());
    }
}
