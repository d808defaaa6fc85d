//! Min-max normalization for engagement metric series

/// Normalize a numeric series to [0, 1], preserving index correspondence.
///
/// A degenerate series (all values identical, including a single element)
/// maps to all 1.0 rather than dividing by zero. Callers rely on this exact
/// policy: when one metric is constant and another is not, the constant
/// metric contributes its full weight to every post.
pub fn min_max(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![1.0; values.len()];
    }

    values.iter().map(|v| (v - min) / (max - min)).collect()
}
