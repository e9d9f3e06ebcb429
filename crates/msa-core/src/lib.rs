//! Core numeric primitives for measurement-system analysis
//!
//! This crate holds the pieces shared by the MSA analysis crates: the unified
//! error type, descriptive statistics over `f64` samples, the normal and
//! Student-t distribution approximations, and the range-to-sigma control
//! chart factors.
//!
//! # Design notes
//!
//! The distribution routines here are deliberate *approximations* (Acklam's
//! rational inverse normal CDF, the Abramowitz-Stegun error function). The
//! p-value formulas in `msa-normality` and the Grubbs critical values in
//! `msa-outlier` are calibrated against these exact polynomials, so they must
//! not be swapped for exact implementations.
//!
//! # Example
//!
//! ```rust
//! use msa_core::stats::{mean, sample_variance, percentile_sorted};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(mean(&sample), 3.0);
//! assert_eq!(sample_variance(&sample), 2.5);
//!
//! let q1 = percentile_sorted(&sample, 25.0);
//! assert_eq!(q1, 2.0);
//! ```

pub mod constants;
pub mod distribution;
pub mod error;
pub mod stats;

// Re-export core types
pub use error::{Error, Result};

pub use constants::{d2_for_subgroup, D2_TWO_TRIALS};
pub use distribution::{erf, inverse_normal_cdf, standard_normal_cdf, student_t_critical};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
