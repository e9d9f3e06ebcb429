//! Z-score outlier detection

use crate::traits::OutlierDetectorProperties;
use crate::types::OutlierPartition;
use msa_core::stats::{mean, std_dev};
use serde::{Deserialize, Serialize};

const MIN_SAMPLES: usize = 3;

/// Result of a z-score screening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZScoreResult {
    pub partition: OutlierPartition,
    pub mean: f64,
    pub std_dev: f64,
    /// Per-point |x - mean| / sigma, in original order
    pub scores: Vec<f64>,
    pub threshold: f64,
}

/// Classic z-score detector around the sample mean
///
/// Flags `|x - mean| / sigma > threshold`. Not robust: a gross outlier
/// inflates sigma and can mask itself in small samples; prefer the modified
/// z-score when contamination is likely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreDetector {
    threshold: f64,
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self { threshold: 3.0 }
    }
}

impl ZScoreDetector {
    /// Create a detector with a custom threshold
    pub fn with_threshold(threshold: f64) -> msa_core::Result<Self> {
        if threshold <= 0.0 {
            return Err(msa_core::Error::non_positive("Z-score threshold", threshold));
        }
        Ok(Self { threshold })
    }

    /// The configured threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Screen a sample. Inputs below three points pass through unflagged;
    /// a zero-variance sample scores every point 0.
    pub fn detect(&self, sample: &[f64]) -> ZScoreResult {
        let m = mean(sample);
        let sd = std_dev(sample);

        if sample.len() < MIN_SAMPLES || sd == 0.0 {
            return ZScoreResult {
                partition: OutlierPartition::pass_through(sample),
                mean: m,
                std_dev: sd,
                scores: vec![0.0; sample.len()],
                threshold: self.threshold,
            };
        }

        let scores: Vec<f64> = sample.iter().map(|&x| (x - m).abs() / sd).collect();
        let flags: Vec<bool> = scores.iter().map(|&s| s > self.threshold).collect();

        ZScoreResult {
            partition: OutlierPartition::from_flags(sample, &flags),
            mean: m,
            std_dev: sd,
            scores,
            threshold: self.threshold,
        }
    }
}

impl OutlierDetectorProperties for ZScoreDetector {
    fn name(&self) -> &'static str {
        "Z-score"
    }

    fn minimum_sample_size(&self) -> usize {
        MIN_SAMPLES
    }
}

/// Screen with the conventional threshold of 3
pub fn detect_outliers_zscore(sample: &[f64]) -> ZScoreResult {
    ZScoreDetector::default().detect(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flags_extreme_value() {
        // A single outlier's z-score is bounded by (n-1)/sqrt(n), so ten
        // points can never cross 3.0; eleven just can.
        let mut sample = vec![10.0; 10];
        sample.push(200.0);
        let result = detect_outliers_zscore(&sample);
        assert_eq!(result.partition.outliers, vec![200.0]);
        assert_eq!(result.partition.outlier_indices, vec![10]);
        assert!(result.scores[10] > 3.0);
    }

    #[test]
    fn test_single_outlier_masked_at_n10() {
        // Same spike, one fewer inlier: max attainable z is 9/sqrt(10) ~ 2.85
        let sample = vec![10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 200.0];
        let result = detect_outliers_zscore(&sample);
        assert!(result.partition.is_clean());
        assert!(result.scores[9] > 2.8 && result.scores[9] < 3.0);

        // A lower threshold flags it unambiguously
        let result = ZScoreDetector::with_threshold(2.5).unwrap().detect(&sample);
        assert_eq!(result.partition.outliers, vec![200.0]);
        assert_eq!(result.partition.outlier_indices, vec![9]);
    }

    #[test]
    fn test_moderate_outlier_not_flagged_at_default() {
        // mean = 16.67, sigma ~ 16.3: z for 50 is only ~2.04
        let sample = vec![10.0, 10.0, 10.0, 10.0, 10.0, 50.0];
        let result = detect_outliers_zscore(&sample);
        assert!(result.partition.is_clean());
        assert!(result.scores[5] > 2.0 && result.scores[5] < 3.0);
    }

    #[test]
    fn test_scores_align_with_input_order() {
        let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = detect_outliers_zscore(&sample);
        assert_eq!(result.scores.len(), sample.len());
        assert_relative_eq!(result.mean, 3.0);
        // symmetric sample: first and last share a score
        assert_relative_eq!(result.scores[0], result.scores[4]);
    }

    #[test]
    fn test_zero_variance_is_clean() {
        let sample = vec![7.0, 7.0, 7.0, 7.0];
        let result = detect_outliers_zscore(&sample);
        assert!(result.partition.is_clean());
        assert_eq!(result.scores, vec![0.0; 4]);
    }

    #[test]
    fn test_small_sample_passes_through() {
        let sample = vec![1.0, 1000.0];
        let result = detect_outliers_zscore(&sample);
        assert!(result.partition.is_clean());
    }

    #[test]
    fn test_threshold_validation() {
        assert!(ZScoreDetector::with_threshold(2.0).is_ok());
        assert!(ZScoreDetector::with_threshold(0.0).is_err());
        assert!(ZScoreDetector::with_threshold(-3.0).is_err());
    }
}
