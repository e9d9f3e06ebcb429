//! Crossed multi-operator study

use crate::types::{
    GageRrAnalysis, Measurement, StudyDiagnostics, StudyMethod, VarianceComponents,
};
use msa_core::constants::D2_TWO_TRIALS;
use msa_core::stats::{mean, range, sample_variance};
use msa_core::{Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

const MIN_OPERATORS: usize = 2;

/// Gage R&R decomposition for a crossed operator-by-part study.
///
/// Every operator times every part, nominally twice. Repeatability comes
/// from the average within-cell range over the two-trial d2 factor;
/// reproducibility and part variation come from the spread of operator and
/// part means, each corrected for the repeatability leaking into those
/// means and floored at zero. Components are expressed as 6-sigma study
/// variations and normalized against their combined total.
///
/// Requires at least two distinct operators among the analyzable
/// measurements; zero-variance studies substitute (components 0, GRR% 100)
/// instead of producing NaN.
pub fn crossed_study(measurements: &[Measurement]) -> Result<GageRrAnalysis> {
    let data: Vec<&Measurement> = measurements
        .iter()
        .filter(|m| m.value_ms.is_finite() && m.value_ms > 0.0)
        .collect();
    let discarded = measurements.len() - data.len();

    // BTreeMaps keep the grouping order deterministic
    let mut cells: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    let mut by_operator: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    let mut by_part: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for m in &data {
        cells
            .entry((m.operator_id.as_str(), m.part_id.as_str()))
            .or_default()
            .push(m.value_ms);
        by_operator
            .entry(m.operator_id.as_str())
            .or_default()
            .push(m.value_ms);
        by_part.entry(m.part_id.as_str()).or_default().push(m.value_ms);
    }

    let operator_count = by_operator.len();
    if operator_count < MIN_OPERATORS {
        return Err(Error::InsufficientOperators {
            expected: MIN_OPERATORS,
            actual: operator_count,
        });
    }
    let part_count = by_part.len();
    let n = data.len();

    // Repeatability from within-cell ranges
    let avg_range = mean(&cells.values().map(|cell| range(cell)).collect::<Vec<f64>>());
    let repeatability_sd = avg_range / D2_TWO_TRIALS;
    let repeatability_variance = repeatability_sd * repeatability_sd;

    // Spread of the operator and part means, with the repeatability
    // contribution to those means removed
    let operator_means: Vec<f64> = by_operator.values().map(|v| mean(v)).collect();
    let part_means: Vec<f64> = by_part.values().map(|v| mean(v)).collect();

    let per_operator_n = n as f64 / operator_count as f64;
    let reproducibility_variance =
        (sample_variance(&operator_means) - repeatability_variance / per_operator_n).max(0.0);

    let per_part_n = n as f64 / part_count as f64;
    let part_variance =
        (sample_variance(&part_means) - repeatability_variance / per_part_n).max(0.0);

    // 6-sigma study variations
    let ev = 6.0 * repeatability_sd;
    let av = 6.0 * reproducibility_variance.sqrt();
    let pv = 6.0 * part_variance.sqrt();
    let total_variation = (ev * ev + av * av + pv * pv).sqrt();

    let percent_of_total = |component: f64| -> f64 {
        let pct = component / total_variation * 100.0;
        if pct.is_nan() {
            0.0
        } else {
            pct.clamp(0.0, 100.0)
        }
    };

    let repeatability_percent = percent_of_total(ev);
    let reproducibility_percent = percent_of_total(av);
    let part_percent = percent_of_total(pv);

    let grr_percent = {
        let pct = (repeatability_percent * repeatability_percent
            + reproducibility_percent * reproducibility_percent)
            .sqrt();
        if pct.is_nan() {
            100.0
        } else if total_variation == 0.0 {
            // all-identical study: nothing measurable, worst case
            100.0
        } else {
            pct.min(100.0)
        }
    };

    debug!(
        n,
        discarded,
        operator_count,
        part_count,
        avg_range,
        repeatability_percent,
        reproducibility_percent,
        part_percent,
        grr_percent,
        "crossed-study decomposition complete"
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
        method: StudyMethod::Crossed,
        sample_size: n,
        discarded,
        operator_count: Some(operator_count),
        part_count: Some(part_count),
    };

    Ok(GageRrAnalysis::new(components, grr_percent, diagnostics))
}
