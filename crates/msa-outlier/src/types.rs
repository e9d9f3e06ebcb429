//! Shared result types for outlier detection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Partition of a sample into outliers and clean data
///
/// Indices refer to positions in the original, unsorted input, and
/// `outliers[k]` is the value at `outlier_indices[k]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierPartition {
    /// Values flagged as outliers, in original order
    pub outliers: Vec<f64>,
    /// Remaining values, in original order
    pub clean_data: Vec<f64>,
    /// Positions of the flagged values in the original input
    pub outlier_indices: Vec<usize>,
}

impl OutlierPartition {
    /// Build a partition from per-point flags (`true` = outlier).
    ///
    /// `flags` must be the same length as `sample`.
    pub(crate) fn from_flags(sample: &[f64], flags: &[bool]) -> Self {
        debug_assert_eq!(sample.len(), flags.len());
        let mut outliers = Vec::new();
        let mut clean_data = Vec::with_capacity(sample.len());
        let mut outlier_indices = Vec::new();
        for (i, (&x, &flagged)) in sample.iter().zip(flags).enumerate() {
            if flagged {
                outliers.push(x);
                outlier_indices.push(i);
            } else {
                clean_data.push(x);
            }
        }
        Self {
            outliers,
            clean_data,
            outlier_indices,
        }
    }

    /// Pass-through partition: nothing flagged.
    pub(crate) fn pass_through(sample: &[f64]) -> Self {
        Self {
            outliers: Vec::new(),
            clean_data: sample.to_vec(),
            outlier_indices: Vec::new(),
        }
    }

    /// Number of flagged values
    pub fn outlier_count(&self) -> usize {
        self.outliers.len()
    }

    /// True when nothing was flagged
    pub fn is_clean(&self) -> bool {
        self.outliers.is_empty()
    }

    /// Total input size this partition was derived from
    pub fn input_len(&self) -> usize {
        self.outliers.len() + self.clean_data.len()
    }
}

/// Quartiles of a sample, interpolated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Per-method raw detection counts from the consensus detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCounts {
    pub iqr: usize,
    pub z_score: usize,
    pub modified_z_score: usize,
}

impl MethodCounts {
    /// Total raw detections across the three methods
    pub fn total(&self) -> usize {
        self.iqr + self.z_score + self.modified_z_score
    }
}

/// Agreement band of a consensus screening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsensusConfidence {
    /// Agreement ratio above 0.8
    High,
    /// Agreement ratio above 0.5
    Medium,
    /// Methods mostly disagree
    Low,
}

impl ConsensusConfidence {
    /// Band for a given agreement ratio
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 0.8 {
            Self::High
        } else if ratio > 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for ConsensusConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        write!(f, "{}", s)
    }
}
