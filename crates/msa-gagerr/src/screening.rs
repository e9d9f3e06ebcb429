//! Outlier-screened analysis pipeline

use crate::range_method::range_method_study;
use crate::types::GageRrAnalysis;
use msa_core::Result;
use msa_outlier::{CompositeDetector, CompositeResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A range-method analysis together with the screening that preceded it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenedAnalysis {
    /// Consensus screening applied to the raw sample
    pub screening: CompositeResult,
    /// Decomposition of the surviving values
    pub analysis: GageRrAnalysis,
}

impl ScreenedAnalysis {
    /// Number of values removed before decomposition
    pub fn removed(&self) -> usize {
        self.screening.partition.outlier_count()
    }
}

/// Screen a raw timing sample by consensus, then decompose what remains.
///
/// This is the standard sequence for a session's timings: gross recording
/// mistakes (an operator forgetting to stop the clock) would otherwise land
/// in the repeatability term and condemn a perfectly fine measurement
/// process. Screening is conservative — a point has to be flagged by two of
/// three methods to be dropped.
///
/// Fails like [`range_method_study`] when fewer than three analyzable
/// values survive the screen.
pub fn analyze_screened(sample: &[f64]) -> Result<ScreenedAnalysis> {
    analyze_screened_with(sample, &CompositeDetector::default())
}

/// Same as [`analyze_screened`], with a caller-configured detector.
pub fn analyze_screened_with(
    sample: &[f64],
    detector: &CompositeDetector,
) -> Result<ScreenedAnalysis> {
    let screening = detector.detect(sample);
    debug!(
        removed = screening.partition.outlier_count(),
        confidence = %screening.confidence,
        "screened sample before decomposition"
    );
    let analysis = range_method_study(&screening.partition.clean_data)?;
    Ok(ScreenedAnalysis {
        screening,
        analysis,
    })
}
