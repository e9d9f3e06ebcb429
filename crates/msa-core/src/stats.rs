//! Descriptive statistics over `f64` samples
//!
//! Small, allocation-light building blocks used throughout the analysis
//! crates. Percentiles use linear interpolation between closest ranks
//! (`rank = p/100 * (n-1)`); the same interpolation is shared by quartiles,
//! the median, and the MAD so that every robust statistic in the workspace
//! agrees on what a quantile is.
//!
//! Callers are responsible for ensuring samples are non-empty and finite;
//! these functions return 0.0 for degenerate inputs rather than panicking.

/// Arithmetic mean. Returns 0.0 for an empty sample.
pub fn mean(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Sample variance with the n-1 denominator. Returns 0.0 for n < 2.
pub fn sample_variance(sample: &[f64]) -> f64 {
    let n = sample.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(sample);
    sample.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n - 1) as f64
}

/// Sample standard deviation (square root of [`sample_variance`]).
pub fn std_dev(sample: &[f64]) -> f64 {
    sample_variance(sample).sqrt()
}

/// Range (max - min). Returns 0.0 for an empty sample.
pub fn range(sample: &[f64]) -> f64 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &x in sample {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }
    if min > max {
        return 0.0;
    }
    max - min
}

/// Ascending copy of the sample, NaN-tolerant total order.
pub fn sorted_copy(sample: &[f64]) -> Vec<f64> {
    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Percentile of pre-sorted data by linear interpolation between closest
/// ranks: `rank = p/100 * (n-1)`, interpolating between the floor and ceil
/// ranks.
///
/// `p` is expressed in percent, e.g. 25.0 for the first quartile.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Median of pre-sorted data.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    percentile_sorted(sorted, 50.0)
}

/// Median of an unsorted sample.
pub fn median(sample: &[f64]) -> f64 {
    median_sorted(&sorted_copy(sample))
}

/// Median absolute deviation around the median.
///
/// Unscaled: multiply by 1.4826 for a standard-deviation-consistent
/// estimate under normality.
pub fn mad(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    let med = median(sample);
    let deviations: Vec<f64> = sample.iter().map(|&x| (x - med).abs()).collect();
    median(&deviations)
}
