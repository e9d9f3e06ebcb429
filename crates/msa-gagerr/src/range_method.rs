//! Single-operator range-method study

use crate::types::{GageRrAnalysis, StudyDiagnostics, StudyMethod, VarianceComponents};
use msa_core::constants::d2_for_subgroup;
use msa_core::stats::{range, sample_variance};
use msa_core::{Error, Result};
use tracing::debug;

const MIN_SAMPLES: usize = 3;

/// Share of total variance attributed to reproducibility when no second
/// operator exists to measure it: higher for small samples, where the
/// estimate is shakier.
fn estimated_reproducibility_fraction(n: usize) -> f64 {
    if n < 10 {
        0.15
    } else {
        0.05
    }
}

/// Gage R&R decomposition for a single operator's repeated timings.
///
/// With only one operator, reproducibility cannot be observed; it is
/// estimated as a fixed fraction of total variance, and part variation takes
/// the remainder with a floor of 20% of total variance. The combined GRR%
/// carries a small-sample penalty of `1 + 0.1 * (10 - n)` below ten samples.
///
/// Non-finite and non-positive values are dropped before analysis. Fewer
/// than three surviving values is an error; a zero-variance sample is not —
/// degenerate ratios are substituted (components to 0, GRR% to 100, the
/// worst case) rather than returned as NaN.
pub fn range_method_study(sample: &[f64]) -> Result<GageRrAnalysis> {
    let data: Vec<f64> = sample
        .iter()
        .copied()
        .filter(|&x| x.is_finite() && x > 0.0)
        .collect();
    let discarded = sample.len() - data.len();

    let n = data.len();
    if n < MIN_SAMPLES {
        return Err(Error::sample_too_small(MIN_SAMPLES, n));
    }

    let total_variance = sample_variance(&data);
    let observed_range = range(&data);
    let d2 = d2_for_subgroup(n);

    let repeatability_sd = observed_range / d2;
    let repeatability_variance = repeatability_sd * repeatability_sd;
    let reproducibility_variance = total_variance * estimated_reproducibility_fraction(n);
    let part_variance = (total_variance - repeatability_variance - reproducibility_variance)
        .max(total_variance * 0.2);
    let study_variance = repeatability_variance + reproducibility_variance + part_variance;

    let percent_of_study = |component: f64| -> f64 {
        let pct = (component / study_variance).sqrt() * 100.0;
        // NaN from 0/0 falls through the clamp; substitute zero
        if pct.is_nan() {
            0.0
        } else {
            pct.clamp(0.0, 100.0)
        }
    };

    let repeatability_percent = percent_of_study(repeatability_variance);
    let reproducibility_percent = percent_of_study(reproducibility_variance);
    let part_percent = percent_of_study(part_variance);

    let mut grr_percent = {
        let pct = ((repeatability_variance + reproducibility_variance) / study_variance).sqrt()
            * 100.0;
        if pct.is_nan() {
            // zero-variance study: worst case, not a pass
            100.0
        } else {
            pct.clamp(0.0, 100.0)
        }
    };
    // Penalty applies to the combined score only, never the components
    if n < 10 {
        grr_percent = (grr_percent * (1.0 + 0.1 * (10 - n) as f64)).min(100.0);
    }

    debug!(
        n,
        discarded,
        total_variance,
        repeatability_percent,
        reproducibility_percent,
        part_percent,
        grr_percent,
        "range-method decomposition complete"
    );

    let components = VarianceComponents {
        repeatability: repeatability_sd,
        reproducibility: reproducibility_variance.sqrt(),
        part_variation: part_variance.sqrt(),
        repeatability_percent,
        reproducibility_percent,
        part_percent,
    };
    let diagnostics = StudyDiagnostics {
        method: StudyMethod::RangeMethod,
        sample_size: n,
        discarded,
        operator_count: None,
        part_count: None,
    };

    Ok(GageRrAnalysis::new(components, grr_percent, diagnostics))
}
