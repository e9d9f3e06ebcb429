//! Fixed-seed distributional checks for both tests
//!
//! Sampling is seeded so these are deterministic; the verdicts below are
//! properties of the specific seeds, chosen to be comfortably inside each
//! test's operating region.

use msa_normality::{anderson_darling, shapiro_wilk};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal};

fn normal_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Normal::new(42_000.0, 2_500.0).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

fn exponential_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Exp::new(1.0 / 10_000.0).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

#[test]
fn normal_draws_pass_both_tests() {
    let sample = normal_sample(200, 42);

    // a true-normal draw clears the 5% bar about 95% of the time; the fixed
    // seed pins the outcome, the looser bound keeps the test honest about
    // what is actually guaranteed
    let sw = shapiro_wilk(&sample).unwrap();
    assert!(sw.statistic > 0.97, "Shapiro-Wilk rejected a normal draw: {sw}");
    assert!(sw.p_value > 0.01);

    let ad = anderson_darling(&sample).unwrap();
    assert!(ad.statistic < 1.0, "Anderson-Darling rejected a normal draw: {ad}");
    assert!(ad.p_value > 0.01);
}

#[test]
fn exact_normal_quantiles_pass_both_tests() {
    // deterministic "perfect" normal sample: quantiles at mid-ranks
    let n = 120;
    let sample: Vec<f64> = (0..n)
        .map(|i| {
            let p = (i as f64 + 0.5) / n as f64;
            42_000.0 + 2_500.0 * msa_core::inverse_normal_cdf(p).unwrap()
        })
        .collect();

    let sw = shapiro_wilk(&sample).unwrap();
    assert!(sw.is_normal, "quantile sample must pass Shapiro-Wilk: {sw}");

    let ad = anderson_darling(&sample).unwrap();
    assert!(ad.is_normal, "quantile sample must pass Anderson-Darling: {ad}");
}

#[test]
fn exponential_draws_fail_both_tests() {
    let sample = exponential_sample(100, 7);

    let sw = shapiro_wilk(&sample).unwrap();
    assert!(!sw.is_normal, "Shapiro-Wilk accepted an exponential draw: {sw}");

    let ad = anderson_darling(&sample).unwrap();
    assert!(!ad.is_normal, "Anderson-Darling accepted an exponential draw: {ad}");
    assert!(ad.statistic > 1.0);
}

#[test]
fn verdicts_are_stable_across_repeated_calls() {
    let sample = normal_sample(60, 3);
    assert_eq!(shapiro_wilk(&sample).unwrap(), shapiro_wilk(&sample).unwrap());
    assert_eq!(
        anderson_darling(&sample).unwrap(),
        anderson_darling(&sample).unwrap()
    );
}

#[test]
fn small_normal_draws_stay_in_band() {
    // n under 12 exercises Royston's small-sample coefficient set
    let sample = normal_sample(10, 11);
    let sw = shapiro_wilk(&sample).unwrap();
    assert!((0.0..=1.0).contains(&sw.p_value));
    assert!(sw.statistic > 0.8, "unexpectedly low W for a normal draw: {sw}");
}
