//! Measurement systems analysis toolkit for work-timing studies
//!
//! `msa-stats` bundles the statistical core behind a depot's work-timing
//! ("man-hour") measurement workflow. Raw session timings, in milliseconds,
//! flow through three stages, each usable on its own:
//!
//! 1. **Screening** ([`msa_outlier`]) — IQR, z-score, modified z-score and
//!    Grubbs detectors, plus a two-of-three consensus screen.
//! 2. **Distribution checks** ([`msa_normality`]) — Shapiro-Wilk and
//!    Anderson-Darling, for deciding whether the normal-theory summaries
//!    downstream are trustworthy.
//! 3. **Variance decomposition** ([`msa_gagerr`]) — Gage R&R by the
//!    single-operator range method or a crossed multi-operator study,
//!    with a one-way ANOVA helper.
//!
//! Everything is a pure function over in-memory slices: no I/O, no shared
//! state, nothing to configure. Callers own persistence and presentation.
//!
//! # Example
//!
//! ```rust
//! use msa_stats::prelude::*;
//!
//! let timings_ms = vec![
//!     41_200.0, 43_500.0, 42_100.0, 44_800.0, 40_900.0,
//!     42_700.0, 43_100.0, 41_800.0, 44_100.0, 142_400.0,
//! ];
//!
//! let screened = analyze_screened(&timings_ms)?;
//! println!("dropped {} of {} timings", screened.removed(), timings_ms.len());
//! println!("{}", screened.analysis);
//! # Ok::<(), msa_stats::Error>(())
//! ```

pub use msa_core::{Error, Result};

pub use msa_gagerr::{
    analyze_screened, analyze_screened_with, crossed_study, one_way_anova, range_method_study,
    AnovaTable, GageRrAnalysis, GrrRating, Measurement, ScreenedAnalysis, StudyDiagnostics,
    StudyMethod, VarianceComponents,
};
pub use msa_normality::{anderson_darling, shapiro_wilk, NormalityResult};
pub use msa_outlier::{
    detect_outliers_consensus, detect_outliers_grubbs, detect_outliers_iqr,
    detect_outliers_modified_zscore, detect_outliers_zscore, CompositeDetector, CompositeResult,
    ConsensusConfidence, GrubbsDetector, GrubbsResult, IqrDetector, IqrResult,
    ModifiedZScoreDetector, ModifiedZScoreResult, OutlierDetectorProperties, OutlierPartition,
    ZScoreDetector, ZScoreResult,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        analyze_screened, anderson_darling, crossed_study, detect_outliers_consensus,
        one_way_anova, range_method_study, shapiro_wilk, Error, GageRrAnalysis, Measurement,
        NormalityResult, Result, ScreenedAnalysis,
    };
}
