//! Nearest-rank percentile helpers for already-sorted slices.
//!
//! The rank is `floor(len * fraction)`, clamped to the last element. There
//! is no interpolation between neighbouring ranks.

/// Returns the element at `floor(len * fraction)` of a slice sorted in
/// ascending order, or `None` when the slice is empty.
pub fn nearest_rank<T: Copy>(sorted_values: &[T], fraction: f64) -> Option<T> {
    if sorted_values.is_empty() {
        return None;
    }

    let index = if fraction <= 0.0 {
        0
    } else {
        ((sorted_values.len() as f64 * fraction).floor() as usize).min(sorted_values.len() - 1)
    };

    sorted_values.get(index).copied()
}

/// Collects `values` and sorts them ascending by `f64::total_cmp`.
pub fn sorted_ascending(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.into_iter().collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}
