//! Utility functions for analysis module
//!
//! Shared helper functions used across analysis submodules.

/// `1 / sqrt(2π)`, the normalizing constant of the standard normal density.
pub const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Copy and sort values in ascending order.
///
/// NaN values sort last under `total_cmp`; callers reject non-finite input
/// before relying on the order.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Quantile of already sorted data using linear interpolation between
/// order statistics (Hyndman & Fan type 7, the NumPy default).
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    Some(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}

/// Standard normal density.
#[inline]
pub fn standard_normal_pdf(z: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Evenly spaced points from `lo` to `hi`, both included.
pub fn linspace(lo: f64, hi: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (points - 1) as f64;
            (0..points)
                .map(|i| if i == points - 1 { hi } else { lo + step * i as f64 })
                .collect()
        }
    }
}
