//! Outlier detection for timing measurements
//!
//! This crate provides the screening methods applied to raw work-timing
//! samples before variance decomposition:
//! - IQR fences (boxplot rule)
//! - Z-score around the mean
//! - Modified z-score around the median (MAD-based)
//! - Grubbs' iterative single-outlier test
//! - A consensus detector combining the first three
//!
//! # Method Properties
//!
//! | Method | Min n | Robust | Use When |
//! |--------|-------|--------|----------|
//! | IQR | 4 | yes | No distributional assumption wanted |
//! | Z-score | 3 | no | Data roughly normal, moderate n |
//! | Modified z-score | 3 | yes | Heavy contamination possible |
//! | Grubbs | 3 | no | Formal test at a chosen significance |
//! | Consensus | 4 | yes | Screening before a downstream analysis |
//!
//! # Contract
//!
//! Every detector partitions its input into outliers and clean data while
//! tracking positions in the *original* (unsorted) sample, so
//! `outliers.len() + clean_data.len() == input.len()` always holds. Inputs
//! below a method's minimum size are not errors: the detector degrades to an
//! empty-outlier pass-through, which callers must treat as a valid (if
//! uninformative) result.
//!
//! # Example
//!
//! ```rust
//! use msa_outlier::{IqrDetector, OutlierDetectorProperties};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 100.0];
//! let detector = IqrDetector::default();
//! let result = detector.detect(&sample);
//!
//! assert_eq!(result.partition.outliers, vec![100.0]);
//! assert_eq!(result.partition.outlier_indices, vec![6]);
//! assert_eq!(detector.minimum_sample_size(), 4);
//! ```

pub mod composite;
pub mod grubbs;
pub mod iqr;
pub mod modified_zscore;
pub mod traits;
pub mod types;
pub mod zscore;

// Re-exports
pub use composite::{detect_outliers_consensus, CompositeDetector, CompositeResult};
pub use grubbs::{detect_outliers_grubbs, GrubbsDetector, GrubbsResult};
pub use iqr::{detect_outliers_iqr, IqrDetector, IqrResult};
pub use modified_zscore::{detect_outliers_modified_zscore, ModifiedZScoreDetector, ModifiedZScoreResult};
pub use traits::OutlierDetectorProperties;
pub use types::{ConsensusConfidence, MethodCounts, OutlierPartition, Quartiles};
pub use zscore::{detect_outliers_zscore, ZScoreDetector, ZScoreResult};
