//! Modified z-score (MAD-based) outlier detection

use crate::traits::OutlierDetectorProperties;
use crate::types::OutlierPartition;
use msa_core::stats::{mad, median};
use serde::{Deserialize, Serialize};

const MIN_SAMPLES: usize = 3;

/// Consistency factor relating the MAD to sigma under normality
/// (0.6745 = inverse normal CDF at 0.75).
const MAD_CONSISTENCY: f64 = 0.6745;

/// Result of a modified z-score screening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedZScoreResult {
    pub partition: OutlierPartition,
    pub median: f64,
    pub mad: f64,
    /// Per-point `0.6745 * (x - median) / MAD`, in original order
    pub scores: Vec<f64>,
    pub threshold: f64,
}

/// Modified z-score detector around the median
///
/// Iglewicz-Hoaglin score `0.6745 * (x - median) / MAD` compared against a
/// threshold, 3.5 by convention. With the median and MAD both at a 50%
/// breakdown point this survives contamination the classic z-score masks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifiedZScoreDetector {
    threshold: f64,
}

impl Default for ModifiedZScoreDetector {
    fn default() -> Self {
        Self { threshold: 3.5 }
    }
}

impl ModifiedZScoreDetector {
    /// Create a detector with a custom threshold
    pub fn with_threshold(threshold: f64) -> msa_core::Result<Self> {
        if threshold <= 0.0 {
            return Err(msa_core::Error::non_positive(
                "Modified z-score threshold",
                threshold,
            ));
        }
        Ok(Self { threshold })
    }

    /// The configured threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Screen a sample. Inputs below three points pass through unflagged.
    /// A MAD of exactly zero defines every score as 0, so nothing is
    /// flagged (avoids the division rather than special-casing NaN).
    pub fn detect(&self, sample: &[f64]) -> ModifiedZScoreResult {
        let med = median(sample);
        let mad_value = mad(sample);

        if sample.len() < MIN_SAMPLES || mad_value == 0.0 {
            return ModifiedZScoreResult {
                partition: OutlierPartition::pass_through(sample),
                median: med,
                mad: mad_value,
                scores: vec![0.0; sample.len()],
                threshold: self.threshold,
            };
        }

        let scores: Vec<f64> = sample
            .iter()
            .map(|&x| MAD_CONSISTENCY * (x - med) / mad_value)
            .collect();
        let flags: Vec<bool> = scores.iter().map(|&s| s.abs() > self.threshold).collect();

        ModifiedZScoreResult {
            partition: OutlierPartition::from_flags(sample, &flags),
            median: med,
            mad: mad_value,
            scores,
            threshold: self.threshold,
        }
    }
}

impl OutlierDetectorProperties for ModifiedZScoreDetector {
    fn name(&self) -> &'static str {
        "Modified z-score"
    }

    fn minimum_sample_size(&self) -> usize {
        MIN_SAMPLES
    }
}

/// Screen with the conventional threshold of 3.5
pub fn detect_outliers_modified_zscore(sample: &[f64]) -> ModifiedZScoreResult {
    ModifiedZScoreDetector::default().detect(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flags_outlier_classic_zscore_misses() {
        // Ten points, one spike: the classic z-score is capped below 3 here,
        // but the MAD is untouched by the spike.
        let sample = vec![10.0, 10.0, 11.0, 9.0, 10.0, 10.0, 11.0, 9.0, 10.0, 200.0];
        let result = detect_outliers_modified_zscore(&sample);
        assert_eq!(result.partition.outliers, vec![200.0]);
        assert_eq!(result.partition.outlier_indices, vec![9]);
    }

    #[test]
    fn test_median_and_mad_reported() {
        let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = detect_outliers_modified_zscore(&sample);
        assert_relative_eq!(result.median, 3.0);
        assert_relative_eq!(result.mad, 1.0);
        // score for the max: 0.6745 * 2 / 1
        assert_relative_eq!(result.scores[4], 1.349);
        assert!(result.partition.is_clean());
    }

    #[test]
    fn test_zero_mad_flags_nothing() {
        // Majority identical: MAD = 0 even though 100 is wild
        let sample = vec![5.0, 5.0, 5.0, 5.0, 100.0];
        let result = detect_outliers_modified_zscore(&sample);
        assert_eq!(result.mad, 0.0);
        assert!(result.partition.is_clean());
        assert_eq!(result.scores, vec![0.0; 5]);
    }

    #[test]
    fn test_low_side_outlier() {
        let sample = vec![-200.0, 10.0, 11.0, 9.0, 10.0, 10.0, 11.0, 9.0, 10.0];
        let result = detect_outliers_modified_zscore(&sample);
        assert_eq!(result.partition.outliers, vec![-200.0]);
        assert_eq!(result.partition.outlier_indices, vec![0]);
    }

    #[test]
    fn test_small_sample_passes_through() {
        let sample = vec![1.0, 1000.0];
        assert!(detect_outliers_modified_zscore(&sample).partition.is_clean());
    }

    #[test]
    fn test_threshold_validation() {
        assert!(ModifiedZScoreDetector::with_threshold(3.0).is_ok());
        assert!(ModifiedZScoreDetector::with_threshold(0.0).is_err());
    }
}
