/// Percentile helpers for already-sorted slices.
///
/// - Empty input => `None`.
/// - `fraction` is in `[0, 1]`; the value is taken at index
///   `floor(len * fraction)`, clamped to the last element.

/// Returns the percentile value from a slice that is already sorted in
/// ascending order.
pub fn value_sorted<T: Copy>(sorted_values: &[T], fraction: f64) -> Option<T> {
    if sorted_values.is_empty() {
        return None;
    }

    let last = sorted_values.len() - 1;
    let index = if fraction <= 0.0 {
        0
    } else {
        ((sorted_values.len() as f64 * fraction).floor() as usize).min(last)
    };

    sorted_values.get(index).copied()
}

/// Sorts a copy of the samples in ascending order, NaN last.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}
