//! Common traits for outlier detectors

/// Descriptive properties shared by all detectors
pub trait OutlierDetectorProperties {
    /// Human-readable method name
    fn name(&self) -> &'static str;

    /// Smallest sample the method produces a meaningful verdict for.
    ///
    /// Below this size `detect` returns a pass-through partition with no
    /// outliers rather than an error.
    fn minimum_sample_size(&self) -> usize;
}
