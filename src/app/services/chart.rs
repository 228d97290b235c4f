//! Percentage helpers for chart and progress widgets.

fn sanitize_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Convert raw values into shares of the total, in percent.
///
/// Negative or non-finite values count as zero. If nothing is positive the
/// result is all zeros.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().copied().map(sanitize_value).sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| sanitize_value(*v) / total * 100.0)
        .collect()
}

/// `value` as a percentage of `max`, clamped to `[0, 100]`.
pub fn percent_of(value: f64, max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Bar lengths relative to the largest value (which becomes 100).
pub fn bar_widths(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().map(sanitize_value).fold(0.0, f64::max);
    values.iter().map(|v| percent_of(sanitize_value(*v), max)).collect()
}
