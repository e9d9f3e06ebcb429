//! Grubbs' test for outliers, applied iteratively

use crate::traits::OutlierDetectorProperties;
use crate::types::OutlierPartition;
use msa_core::stats::{mean, std_dev};
use msa_core::student_t_critical;
use serde::{Deserialize, Serialize};
use tracing::debug;

const MIN_SAMPLES: usize = 3;

/// Result of a Grubbs screening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrubbsResult {
    pub partition: OutlierPartition,
    /// Number of removal iterations performed (flagged points)
    pub iterations: usize,
    /// G statistic of the last point examined, if any
    pub last_statistic: Option<f64>,
    /// Critical value the last G was compared against
    pub last_critical: Option<f64>,
    pub alpha: f64,
}

/// Iterative Grubbs detector
///
/// Each round tests the single most deviant point of the remaining working
/// set: `G = max|x - mean| / sigma` against the critical value
/// `((n-1)/sqrt(n)) * sqrt(t^2 / (n - 2 + t^2))` where `t` is the Student-t
/// critical value at `alpha / (2n)` with `n - 2` degrees of freedom. A point
/// exceeding the critical value is removed and the round repeats; the loop
/// stops at the first non-rejection, when fewer than three points remain, or
/// when the working set degenerates to zero variance.
///
/// Assumes the inlier population is approximately normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrubbsDetector {
    alpha: f64,
}

impl Default for GrubbsDetector {
    fn default() -> Self {
        Self { alpha: 0.05 }
    }
}

impl GrubbsDetector {
    /// Create a detector at a custom significance level
    pub fn with_alpha(alpha: f64) -> msa_core::Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(msa_core::Error::invalid_probability(alpha));
        }
        Ok(Self { alpha })
    }

    /// The configured significance level
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Screen a sample. Inputs below three points pass through unflagged.
    pub fn detect(&self, sample: &[f64]) -> GrubbsResult {
        let mut working: Vec<(usize, f64)> = sample.iter().copied().enumerate().collect();
        let mut flags = vec![false; sample.len()];
        let mut iterations = 0;
        let mut last_statistic = None;
        let mut last_critical = None;

        while working.len() >= MIN_SAMPLES {
            let values: Vec<f64> = working.iter().map(|&(_, x)| x).collect();
            let m = mean(&values);
            let sd = std_dev(&values);
            if sd == 0.0 {
                break;
            }

            // Most deviant point of the working set
            let (pos, deviation) = values
                .iter()
                .map(|&x| (x - m).abs())
                .enumerate()
                .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
                .expect("working set is non-empty");

            let g = deviation / sd;
            let critical = match self.critical_value(values.len()) {
                Some(c) => c,
                None => break,
            };
            last_statistic = Some(g);
            last_critical = Some(critical);

            if g <= critical {
                break;
            }

            let (original_index, value) = working.remove(pos);
            flags[original_index] = true;
            iterations += 1;
            debug!(
                value,
                original_index,
                g,
                critical,
                remaining = working.len(),
                "grubbs removed outlier"
            );
        }

        GrubbsResult {
            partition: OutlierPartition::from_flags(sample, &flags),
            iterations,
            last_statistic,
            last_critical,
            alpha: self.alpha,
        }
    }

    /// Grubbs critical value for a working set of size `n`
    fn critical_value(&self, n: usize) -> Option<f64> {
        let t = student_t_critical(self.alpha / (2.0 * n as f64), n - 2).ok()?;
        let nf = n as f64;
        Some(((nf - 1.0) / nf.sqrt()) * (t * t / (nf - 2.0 + t * t)).sqrt())
    }
}

impl OutlierDetectorProperties for GrubbsDetector {
    fn name(&self) -> &'static str {
        "Grubbs"
    }

    fn minimum_sample_size(&self) -> usize {
        MIN_SAMPLES
    }
}

/// Screen at the conventional 5% significance level
pub fn detect_outliers_grubbs(sample: &[f64]) -> GrubbsResult {
    GrubbsDetector::default().detect(sample)
}
