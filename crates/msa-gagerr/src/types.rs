//! Types for Gage R&R studies

use serde::{Deserialize, Serialize};
use std::fmt;

/// One timing measurement inside a crossed study
///
/// `value_ms` is elapsed time in milliseconds. Trial numbers are unique
/// within an operator-by-part cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub operator_id: String,
    pub part_id: String,
    pub trial: u32,
    pub value_ms: f64,
}

impl Measurement {
    pub fn new(
        operator_id: impl Into<String>,
        part_id: impl Into<String>,
        trial: u32,
        value_ms: f64,
    ) -> Self {
        Self {
            operator_id: operator_id.into(),
            part_id: part_id.into(),
            trial,
            value_ms,
        }
    }
}

/// Decomposition of study variation into measurement-system and part sources
///
/// Each source appears twice: as a standard-deviation equivalent in the
/// measurement unit, and as a percentage of total study variation. The
/// percentages live in [0, 100] and satisfy
/// `grr%^2 ~= repeatability%^2 + reproducibility%^2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceComponents {
    /// Equipment variation: same operator, same part, repeated trials
    pub repeatability: f64,
    /// Operator-to-operator variation
    pub reproducibility: f64,
    /// Genuine part-to-part (task-to-task) variation
    pub part_variation: f64,
    pub repeatability_percent: f64,
    pub reproducibility_percent: f64,
    pub part_percent: f64,
}

/// Computation path that produced an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudyMethod {
    /// Single-operator range method
    RangeMethod,
    /// Crossed multi-operator study
    Crossed,
}

impl fmt::Display for StudyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyMethod::RangeMethod => write!(f, "range method"),
            StudyMethod::Crossed => write!(f, "crossed study"),
        }
    }
}

/// Grouping metadata attached to every analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyDiagnostics {
    pub method: StudyMethod,
    /// Values that survived the finite/positive filter
    pub sample_size: usize,
    /// Non-finite or non-positive values dropped before analysis
    pub discarded: usize,
    pub operator_count: Option<usize>,
    pub part_count: Option<usize>,
}

/// Qualitative band for a GRR percentage, per MSA convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrrRating {
    /// Under 10%: measurement system is fine
    Acceptable,
    /// 10% to 30%: usable depending on the application
    Conditional,
    /// 30% and over: measurement system needs work
    Unacceptable,
}

impl GrrRating {
    /// Band for a given GRR percentage
    pub fn from_percent(grr_percent: f64) -> Self {
        if grr_percent < 10.0 {
            Self::Acceptable
        } else if grr_percent < 30.0 {
            Self::Conditional
        } else {
            Self::Unacceptable
        }
    }
}

impl fmt::Display for GrrRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Acceptable => "acceptable",
            Self::Conditional => "conditional",
            Self::Unacceptable => "unacceptable",
        };
        write!(f, "{}", s)
    }
}

/// Complete result of a Gage R&R analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GageRrAnalysis {
    pub components: VarianceComponents,
    /// Combined measurement-system share of study variation, in [0, 100]
    pub grr_percent: f64,
    /// True when `grr_percent < 30`
    pub is_acceptable: bool,
    pub rating: GrrRating,
    pub diagnostics: StudyDiagnostics,
}

impl GageRrAnalysis {
    pub(crate) fn new(
        components: VarianceComponents,
        grr_percent: f64,
        diagnostics: StudyDiagnostics,
    ) -> Self {
        Self {
            components,
            grr_percent,
            is_acceptable: grr_percent < 30.0,
            rating: GrrRating::from_percent(grr_percent),
            diagnostics,
        }
    }
}

impl fmt::Display for GageRrAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gage R&R ({})", self.diagnostics.method)?;
        writeln!(f, "  repeatability:   {:6.2}%", self.components.repeatability_percent)?;
        writeln!(f, "  reproducibility: {:6.2}%", self.components.reproducibility_percent)?;
        writeln!(f, "  part variation:  {:6.2}%", self.components.part_percent)?;
        writeln!(f, "  total GRR:       {:6.2}% ({})", self.grr_percent, self.rating)
    }
}
