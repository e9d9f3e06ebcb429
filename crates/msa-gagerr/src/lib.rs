//! Gage R&R variance decomposition for work-timing studies
//!
//! A timing study asks one question: how much of the variation we record is
//! the measurement process, and how much is the work itself? This crate
//! answers it along the usual MSA axes — repeatability (equipment),
//! reproducibility (operators), and part variation — through two paths:
//!
//! - [`range_method_study`]: a single operator's repeated timings. Quick,
//!   needs as few as three values, estimates what it cannot observe.
//! - [`crossed_study`]: every operator times every part. Needs at least two
//!   operators; separates reproducibility from repeatability properly.
//!
//! [`one_way_anova`] backs ad-hoc between-group comparisons, and
//! [`analyze_screened`] chains consensus outlier screening in front of the
//! range method, which is how session data normally flows in.
//!
//! # Example
//!
//! ```rust
//! use msa_gagerr::range_method_study;
//!
//! let timings_ms = vec![
//!     41_200.0, 43_500.0, 42_100.0, 44_800.0, 40_900.0,
//!     42_700.0, 43_100.0, 41_800.0, 44_100.0, 42_400.0,
//! ];
//! let analysis = range_method_study(&timings_ms).unwrap();
//! println!("{analysis}");
//! assert!(analysis.grr_percent <= 100.0);
//! ```

pub mod anova;
pub mod crossed;
pub mod range_method;
pub mod screening;
pub mod types;

// Re-exports
pub use anova::{one_way_anova, AnovaTable};
pub use crossed::crossed_study;
pub use range_method::range_method_study;
pub use screening::{analyze_screened, analyze_screened_with, ScreenedAnalysis};
pub use types::{
    GageRrAnalysis, GrrRating, Measurement, StudyDiagnostics, StudyMethod, VarianceComponents,
};
