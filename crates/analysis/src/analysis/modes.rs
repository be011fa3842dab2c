//! Mode detection on density curves
//!
//! Used to tell a two-humped sampling distribution (n = 1 on a bimodal
//! population) from the single bell the CLT predicts for larger n.

/// Fraction of the smaller peak a valley must fall below for two peaks to
/// count as separate modes.
pub const VALLEY_RATIO: f64 = 0.9;

/// Locate the modes of a sampled curve.
///
/// `curve` holds `(x, y)` pairs in increasing `x`. A point is a candidate if
/// it is a local maximum (plateaus count once, endpoints included). Candidates
/// lower than `min_prominence × global max` are dropped, and neighbouring
/// candidates are merged into the higher one unless the curve between them
/// dips below [`VALLEY_RATIO`] of the lower peak.
///
/// Returns the `x` position of each mode in increasing order.
pub fn find_modes(curve: &[(f64, f64)], min_prominence: f64) -> Vec<f64> {
    let global_max = curve
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    if !global_max.is_finite() || global_max <= 0.0 {
        return Vec::new();
    }
    let threshold = min_prominence * global_max;

    let candidates: Vec<usize> = local_maxima(curve)
        .into_iter()
        .filter(|&i| curve[i].1 >= threshold)
        .collect();

    let mut modes: Vec<usize> = Vec::new();
    for idx in candidates {
        let Some(&prev) = modes.last() else {
            modes.push(idx);
            continue;
        };
        let valley = curve[prev..=idx]
            .iter()
            .map(|&(_, y)| y)
            .fold(f64::INFINITY, f64::min);
        let lower_peak = curve[prev].1.min(curve[idx].1);
        if valley < VALLEY_RATIO * lower_peak {
            modes.push(idx);
        } else if curve[idx].1 > curve[prev].1 {
            if let Some(last) = modes.last_mut() {
                *last = idx;
            }
        }
    }

    modes.into_iter().map(|i| curve[i].0).collect()
}

fn local_maxima(curve: &[(f64, f64)]) -> Vec<usize> {
    let n = curve.len();
    let mut maxima = Vec::new();
    let mut i = 0;
    while i < n {
        // Collapse a plateau of equal values into its first index.
        let mut end = i;
        while end + 1 < n && curve[end + 1].1 == curve[i].1 {
            end += 1;
        }
        let left_lower = i == 0 || curve[i - 1].1 < curve[i].1;
        let right_lower = end == n - 1 || curve[end + 1].1 < curve[i].1;
        if left_lower && right_lower {
            maxima.push(i);
        }
        i = end + 1;
    }
    maxima
}
