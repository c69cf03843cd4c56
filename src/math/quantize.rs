//! Threshold binning of continuous design fields into palette indices

/// Ascending bin edges splitting a field into seven palette indices
pub type Thresholds = [f64; 6];

/// Index of the first threshold `value` falls below
///
/// Thresholds must be ascending. Values at or above the last threshold map
/// to `thresholds.len()`, so six thresholds produce indices 0 through 6.
pub fn quantize(value: f64, thresholds: &[f64]) -> usize {
    thresholds
        .iter()
        .position(|&threshold| value < threshold)
        .unwrap_or(thresholds.len())
}

/// Quantize into a color index as returned by design rules
pub fn color_bin(value: f64, thresholds: &Thresholds) -> i32 {
    quantize(value, thresholds) as i32
}
