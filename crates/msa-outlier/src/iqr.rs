//! IQR (boxplot) outlier detection

use crate::traits::OutlierDetectorProperties;
use crate::types::{OutlierPartition, Quartiles};
use msa_core::stats::{percentile_sorted, sorted_copy};
use serde::{Deserialize, Serialize};

const MIN_SAMPLES: usize = 4;

/// Result of an IQR screening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IqrResult {
    pub partition: OutlierPartition,
    pub quartiles: Quartiles,
    /// Lower fence, `q1 - factor * IQR`
    pub lower_fence: f64,
    /// Upper fence, `q3 + factor * IQR`
    pub upper_fence: f64,
}

/// IQR fence detector
///
/// Flags values outside `[q1 - factor * IQR, q3 + factor * IQR]`. The
/// conventional boxplot factor is 1.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrDetector {
    factor: f64,
}

impl Default for IqrDetector {
    fn default() -> Self {
        Self { factor: 1.5 }
    }
}

impl IqrDetector {
    /// Create a detector with a custom fence factor
    pub fn with_factor(factor: f64) -> msa_core::Result<Self> {
        if factor <= 0.0 {
            return Err(msa_core::Error::non_positive("IQR fence factor", factor));
        }
        Ok(Self { factor })
    }

    /// The configured fence factor
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Screen a sample. Inputs below four points pass through unflagged.
    pub fn detect(&self, sample: &[f64]) -> IqrResult {
        let sorted = sorted_copy(sample);
        let quartiles = Quartiles {
            q1: percentile_sorted(&sorted, 25.0),
            median: percentile_sorted(&sorted, 50.0),
            q3: percentile_sorted(&sorted, 75.0),
        };

        let spread = self.factor * quartiles.iqr();
        let lower_fence = quartiles.q1 - spread;
        let upper_fence = quartiles.q3 + spread;

        if sample.len() < MIN_SAMPLES {
            return IqrResult {
                partition: OutlierPartition::pass_through(sample),
                quartiles,
                lower_fence,
                upper_fence,
            };
        }

        let flags: Vec<bool> = sample
            .iter()
            .map(|&x| x < lower_fence || x > upper_fence)
            .collect();

        IqrResult {
            partition: OutlierPartition::from_flags(sample, &flags),
            quartiles,
            lower_fence,
            upper_fence,
        }
    }
}

impl OutlierDetectorProperties for IqrDetector {
    fn name(&self) -> &'static str {
        "IQR"
    }

    fn minimum_sample_size(&self) -> usize {
        MIN_SAMPLES
    }
}

/// Screen with the conventional 1.5 fence factor
pub fn detect_outliers_iqr(sample: &[f64]) -> IqrResult {
    IqrDetector::default().detect(sample)
}
