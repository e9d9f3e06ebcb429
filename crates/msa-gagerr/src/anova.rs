//! One-way ANOVA over pre-grouped samples

use msa_core::stats::mean;
use msa_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Classical one-way ANOVA table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnovaTable {
    pub ss_between: f64,
    pub ss_within: f64,
    pub df_between: usize,
    pub df_within: usize,
    pub ms_between: f64,
    pub ms_within: f64,
    pub f_statistic: f64,
    /// Coarse p-value, see [`one_way_anova`]
    pub p_value: f64,
    /// Share of total variation explained by the grouping
    pub variance_explained: f64,
}

impl AnovaTable {
    /// True when the grouping effect is significant at the coarse 5% level
    pub fn is_significant(&self) -> bool {
        self.p_value <= 0.05
    }
}

/// One-way ANOVA over pre-grouped measurement arrays.
///
/// Requires at least two non-empty groups and three values overall. The
/// p-value is a deliberate coarse approximation (F > 4 maps to 0.05,
/// F > 2 to 0.1, anything else to 0.5): the callers of this path only need
/// a significant / not-significant split, not a calibrated tail
/// probability, and the thresholds are kept as-is for compatibility with
/// the studies recorded by earlier versions.
pub fn one_way_anova(groups: &[Vec<f64>]) -> Result<AnovaTable> {
    let groups: Vec<&Vec<f64>> = groups.iter().filter(|g| !g.is_empty()).collect();
    if groups.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: groups.len(),
        });
    }
    let n: usize = groups.iter().map(|g| g.len()).sum();
    if n < 3 {
        return Err(Error::sample_too_small(3, n));
    }

    let grand_mean = mean(
        &groups
            .iter()
            .flat_map(|g| g.iter().copied())
            .collect::<Vec<f64>>(),
    );

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in &groups {
        let group_mean = mean(group);
        ss_between += group.len() as f64 * (group_mean - grand_mean).powi(2);
        ss_within += group
            .iter()
            .map(|&x| (x - group_mean) * (x - group_mean))
            .sum::<f64>();
    }

    let df_between = groups.len() - 1;
    let df_within = n - groups.len();
    let ms_between = ss_between / df_between as f64;
    let ms_within = if df_within == 0 {
        0.0
    } else {
        ss_within / df_within as f64
    };

    let f_statistic = if ms_within == 0.0 {
        // identical values within every group: either a perfect separation
        // or no signal at all
        if ms_between > 0.0 {
            f64::INFINITY
        } else {
            0.0
        }
    } else {
        ms_between / ms_within
    };

    let p_value = if f_statistic > 4.0 {
        0.05
    } else if f_statistic > 2.0 {
        0.1
    } else {
        0.5
    };

    let ss_total = ss_between + ss_within;
    let variance_explained = if ss_total == 0.0 {
        0.0
    } else {
        ss_between / ss_total
    };

    Ok(AnovaTable {
        ss_between,
        ss_within,
        df_between,
        df_within,
        ms_between,
        ms_within,
        f_statistic,
        p_value,
        variance_explained,
    })
}
