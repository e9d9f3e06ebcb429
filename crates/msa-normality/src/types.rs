//! Result types for normality testing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Significance level both tests are judged at
pub(crate) const SIGNIFICANCE: f64 = 0.05;

/// Outcome of a normality test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalityResult {
    /// Test statistic (W for Shapiro-Wilk, corrected A^2 for Anderson-Darling)
    pub statistic: f64,
    /// Approximate p-value, in [0, 1]
    pub p_value: f64,
    /// True when the sample is consistent with normality at the 5% level
    pub is_normal: bool,
}

impl NormalityResult {
    pub(crate) fn new(statistic: f64, p_value: f64) -> Self {
        let p_value = p_value.clamp(0.0, 1.0);
        Self {
            statistic,
            p_value,
            is_normal: p_value > SIGNIFICANCE,
        }
    }

    /// Degenerate outcome for a zero-variance sample: a constant sample
    /// carries no distributional information, so it is reported as
    /// non-normal with a zero statistic rather than as an error.
    pub(crate) fn degenerate() -> Self {
        Self {
            statistic: 0.0,
            p_value: 0.0,
            is_normal: false,
        }
    }
}

impl fmt::Display for NormalityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "statistic: {:.4}, p: {:.4} ({})",
            self.statistic,
            self.p_value,
            if self.is_normal { "normal" } else { "non-normal" }
        )
    }
}
