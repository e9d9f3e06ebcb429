//! Cross-method invariants for the outlier detectors
//!
//! Every detector must partition its input exactly, keep indices valid
//! against the original ordering, and behave as a pure function.

use msa_outlier::{
    detect_outliers_consensus, detect_outliers_grubbs, detect_outliers_iqr,
    detect_outliers_modified_zscore, detect_outliers_zscore, OutlierPartition,
};
use proptest::prelude::*;

fn check_partition(sample: &[f64], partition: &OutlierPartition) {
    // Sizes add up
    assert_eq!(
        partition.outliers.len() + partition.clean_data.len(),
        sample.len()
    );
    assert_eq!(partition.outliers.len(), partition.outlier_indices.len());

    // Indices are valid, strictly increasing, and reference the flagged values
    let mut last = None;
    for (&idx, &value) in partition.outlier_indices.iter().zip(&partition.outliers) {
        assert!(idx < sample.len());
        assert_eq!(sample[idx], value);
        if let Some(prev) = last {
            assert!(idx > prev);
        }
        last = Some(idx);
    }

    // Clean data is the original sample minus the flagged positions, in order
    let expected_clean: Vec<f64> = sample
        .iter()
        .enumerate()
        .filter(|(i, _)| !partition.outlier_indices.contains(i))
        .map(|(_, &x)| x)
        .collect();
    assert_eq!(partition.clean_data, expected_clean);
}

proptest! {
    #[test]
    fn prop_partition_invariant_holds_for_all_methods(
        sample in prop::collection::vec(-1.0e6f64..1.0e6, 0..60)
    ) {
        check_partition(&sample, &detect_outliers_iqr(&sample).partition);
        check_partition(&sample, &detect_outliers_zscore(&sample).partition);
        check_partition(&sample, &detect_outliers_modified_zscore(&sample).partition);
        check_partition(&sample, &detect_outliers_grubbs(&sample).partition);
        check_partition(&sample, &detect_outliers_consensus(&sample).partition);
    }

    #[test]
    fn prop_detection_is_idempotent(
        sample in prop::collection::vec(-1.0e6f64..1.0e6, 0..40)
    ) {
        prop_assert_eq!(detect_outliers_iqr(&sample), detect_outliers_iqr(&sample));
        prop_assert_eq!(detect_outliers_zscore(&sample), detect_outliers_zscore(&sample));
        prop_assert_eq!(
            detect_outliers_modified_zscore(&sample),
            detect_outliers_modified_zscore(&sample)
        );
        prop_assert_eq!(detect_outliers_grubbs(&sample), detect_outliers_grubbs(&sample));
        prop_assert_eq!(detect_outliers_consensus(&sample), detect_outliers_consensus(&sample));
    }

    #[test]
    fn prop_consensus_needs_two_votes(
        sample in prop::collection::vec(-1.0e4f64..1.0e4, 4..50)
    ) {
        let result = detect_outliers_consensus(&sample);
        let consensus = result.partition.outlier_count();
        // Each consensus point carries at least two raw detections
        prop_assert!(consensus * 2 <= result.method_counts.total());
    }

    #[test]
    fn prop_small_inputs_never_flag(
        sample in prop::collection::vec(-1.0e6f64..1.0e6, 0..3)
    ) {
        prop_assert!(detect_outliers_iqr(&sample).partition.is_clean());
        prop_assert!(detect_outliers_zscore(&sample).partition.is_clean());
        prop_assert!(detect_outliers_modified_zscore(&sample).partition.is_clean());
        prop_assert!(detect_outliers_grubbs(&sample).partition.is_clean());
        prop_assert!(detect_outliers_consensus(&sample).partition.is_clean());
    }
}

#[test]
fn iqr_flags_the_textbook_boxplot_outlier() {
    let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 100.0];
    let result = detect_outliers_iqr(&sample);
    assert_eq!(result.partition.outliers, vec![100.0]);
    assert_eq!(result.quartiles.iqr(), 3.0);
}
