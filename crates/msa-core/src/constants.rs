//! Control chart factors for range-based sigma estimation
//!
//! The d2 factor is the expected value of the range of a standard normal
//! subgroup; dividing an observed range by d2 yields an unbiased standard
//! deviation estimate (sigma-hat = R / d2). Values are sourced from ASTM
//! E2587, Standard Practice for Use of Control Charts in Statistical
//! Process Control.

/// d2 factor for two observations per cell.
///
/// Used by the crossed-study repeatability estimate, where each
/// operator-by-part cell nominally holds two trials.
pub const D2_TWO_TRIALS: f64 = 1.128;

/// d2 factor for a single subgroup of size `n`.
///
/// The breakpoints are fixed by the measurement protocol this toolkit
/// serves: subgroups above six observations all use the n = 7 factor.
pub fn d2_for_subgroup(n: usize) -> f64 {
    match n {
        0..=3 => 1.693,
        4 => 2.059,
        5 => 2.326,
        6 => 2.534,
        _ => 2.704,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d2_breakpoints() {
        assert_eq!(d2_for_subgroup(2), 1.693);
        assert_eq!(d2_for_subgroup(3), 1.693);
        assert_eq!(d2_for_subgroup(4), 2.059);
        assert_eq!(d2_for_subgroup(5), 2.326);
        assert_eq!(d2_for_subgroup(6), 2.534);
        assert_eq!(d2_for_subgroup(7), 2.704);
        assert_eq!(d2_for_subgroup(50), 2.704);
    }

    #[test]
    fn test_two_trial_factor() {
        assert_eq!(D2_TWO_TRIALS, 1.128);
    }
}
