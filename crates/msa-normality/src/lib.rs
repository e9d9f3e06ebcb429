//! Normality testing for timing samples
//!
//! Two tests with complementary strengths:
//! - **Shapiro-Wilk** (3 <= n <= 5000): the usual first choice at the sample
//!   sizes a timing study produces.
//! - **Anderson-Darling** (n >= 8): weights the tails more heavily, which is
//!   where timing data typically departs from normality.
//!
//! Both report `is_normal = p_value > 0.05`. The p-value formulas are
//! regression approximations (Royston's log-transform for Shapiro-Wilk, the
//! D'Agostino-Stephens piecewise exponentials for Anderson-Darling)
//! calibrated against the approximations in [`msa_core::distribution`].
//!
//! # Example
//!
//! ```rust
//! use msa_normality::shapiro_wilk;
//!
//! let sample = vec![4.9, 5.1, 5.0, 4.8, 5.2, 5.0, 4.95, 5.05];
//! let result = shapiro_wilk(&sample).unwrap();
//! assert!(result.is_normal);
//! ```

pub mod anderson_darling;
pub mod shapiro_wilk;
pub mod types;

pub use anderson_darling::anderson_darling;
pub use shapiro_wilk::shapiro_wilk;
pub use types::NormalityResult;
