//! Consensus outlier detection across several methods

use crate::iqr::IqrDetector;
use crate::modified_zscore::ModifiedZScoreDetector;
use crate::traits::OutlierDetectorProperties;
use crate::types::{ConsensusConfidence, MethodCounts, OutlierPartition};
use crate::zscore::ZScoreDetector;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of a consensus screening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeResult {
    pub partition: OutlierPartition,
    /// Raw detection counts per underlying method
    pub method_counts: MethodCounts,
    /// Share of raw detections that landed on consensus points
    pub agreement_ratio: f64,
    pub confidence: ConsensusConfidence,
}

/// Consensus detector over IQR, z-score, and modified z-score
///
/// A point is a consensus outlier only when at least two of the three
/// methods flag it. The agreement ratio is the share of raw detections that
/// landed on consensus points; with no raw detections at all the methods
/// are in perfect (vacuous) agreement and confidence is high.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompositeDetector {
    iqr: IqrDetector,
    zscore: ZScoreDetector,
    modified_zscore: ModifiedZScoreDetector,
}

impl CompositeDetector {
    /// Build from pre-configured member detectors
    pub fn new(
        iqr: IqrDetector,
        zscore: ZScoreDetector,
        modified_zscore: ModifiedZScoreDetector,
    ) -> Self {
        Self {
            iqr,
            zscore,
            modified_zscore,
        }
    }

    /// Screen a sample by consensus of the three member methods
    pub fn detect(&self, sample: &[f64]) -> CompositeResult {
        let iqr = self.iqr.detect(sample);
        let zscore = self.zscore.detect(sample);
        let modified = self.modified_zscore.detect(sample);

        let mut votes = vec![0u8; sample.len()];
        for &i in &iqr.partition.outlier_indices {
            votes[i] += 1;
        }
        for &i in &zscore.partition.outlier_indices {
            votes[i] += 1;
        }
        for &i in &modified.partition.outlier_indices {
            votes[i] += 1;
        }

        let flags: Vec<bool> = votes.iter().map(|&v| v >= 2).collect();

        let method_counts = MethodCounts {
            iqr: iqr.partition.outlier_count(),
            z_score: zscore.partition.outlier_count(),
            modified_z_score: modified.partition.outlier_count(),
        };

        let total_raw = method_counts.total();
        let consensus_raw: usize = votes
            .iter()
            .zip(&flags)
            .filter(|&(_, &f)| f)
            .map(|(&v, _)| v as usize)
            .sum();
        let agreement_ratio = if total_raw == 0 {
            1.0
        } else {
            consensus_raw as f64 / total_raw as f64
        };

        debug!(
            total_raw,
            consensus_raw, agreement_ratio, "consensus screening complete"
        );

        CompositeResult {
            partition: OutlierPartition::from_flags(sample, &flags),
            method_counts,
            agreement_ratio,
            confidence: ConsensusConfidence::from_ratio(agreement_ratio),
        }
    }
}

impl OutlierDetectorProperties for CompositeDetector {
    fn name(&self) -> &'static str {
        "Consensus"
    }

    // Below the IQR minimum at most one member can fire, so no consensus
    fn minimum_sample_size(&self) -> usize {
        self.iqr.minimum_sample_size()
    }
}

/// Screen with all member methods at their conventional settings
pub fn detect_outliers_consensus(sample: &[f64]) -> CompositeResult {
    CompositeDetector::default().detect(sample)
}
