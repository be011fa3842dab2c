//! Descriptive statistics
//!
//! Moments and extrema used to summarize both the population and the
//! sampling distribution. Every function returns `None` instead of a
//! meaningless number when the input is too short or contains NaN/Inf.

use serde::{Deserialize, Serialize};

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|x| x.is_finite())
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() || !all_finite(values) {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance with Bessel's correction (denominator `n - 1`).
///
/// Uses Welford's online update to avoid the cancellation of the naive
/// `E[X²] - E[X]²` formula.
///
/// # References
///
/// Welford, B. P. (1962). Note on a method for calculating corrected sums of
/// squares and products. Technometrics, 4(3), 419-420.
pub fn variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 || !all_finite(values) {
        return None;
    }
    let mut running_mean = 0.0;
    let mut m2 = 0.0;
    for (i, &x) in values.iter().enumerate() {
        let delta = x - running_mean;
        running_mean += delta / (i + 1) as f64;
        m2 += delta * (x - running_mean);
    }
    Some(m2 / (values.len() - 1) as f64)
}

/// Sample standard deviation.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Adjusted Fisher-Pearson skewness (G₁).
///
/// # Formula
///
/// $$G_1 = \frac{\sqrt{n(n-1)}}{n-2} \cdot \frac{m_3}{m_2^{3/2}}$$
///
/// where $m_k$ is the k-th biased central moment. Returns `None` for fewer
/// than three values or zero spread.
///
/// # References
///
/// Joanes, D. N., & Gill, C. A. (1998). Comparing measures of sample
/// skewness and kurtosis. The Statistician, 47(1), 183-189.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    let mu = mean(values)?;
    let nf = n as f64;
    let (m2, m3) = values.iter().fold((0.0, 0.0), |(m2, m3), &x| {
        let d = x - mu;
        (m2 + d * d, m3 + d * d * d)
    });
    let m2 = m2 / nf;
    let m3 = m3 / nf;
    if m2 <= 0.0 {
        return None;
    }
    let g1 = m3 / m2.powf(1.5);
    Some((nf * (nf - 1.0)).sqrt() / (nf - 2.0) * g1)
}

/// Smallest value.
pub fn min(values: &[f64]) -> Option<f64> {
    if !all_finite(values) {
        return None;
    }
    values.iter().copied().reduce(f64::min)
}

/// Largest value.
pub fn max(values: &[f64]) -> Option<f64> {
    if !all_finite(values) {
        return None;
    }
    values.iter().copied().reduce(f64::max)
}

/// Summary of a set of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Undefined for fewer than three values or zero spread
    pub skewness: Option<f64>,
}

impl Summary {
    /// Summarize `values`. Requires at least two finite values.
    pub fn from_data(values: &[f64]) -> Option<Self> {
        Some(Self {
            count: values.len(),
            mean: mean(values)?,
            std_dev: std_dev(values)?,
            min: min(values)?,
            max: max(values)?,
            skewness: skewness(values),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, f64::NAN]), None);
    }

    #[test]
    fn test_variance_matches_textbook_example() {
        // Population variance 4.0, sample variance 32/7
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let var = variance(&data).unwrap();
        assert!((var - 32.0 / 7.0).abs() < 1e-12);
        assert!((std_dev(&data).unwrap() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_variance_needs_two_values() {
        assert_eq!(variance(&[1.0]), None);
        assert_eq!(variance(&[]), None);
    }

    #[test]
    fn test_variance_is_shift_invariant() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let shifted: Vec<f64> = data.iter().map(|x| x + 1e9).collect();
        let a = variance(&data).unwrap();
        let b = variance(&shifted).unwrap();
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn test_skewness_symmetric_is_zero() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!(skewness(&data).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_skewness_sign() {
        let right = [1.0, 1.0, 1.0, 2.0, 10.0];
        let left = [-10.0, -2.0, -1.0, -1.0, -1.0];
        assert!(skewness(&right).unwrap() > 0.0);
        assert!(skewness(&left).unwrap() < 0.0);
    }

    #[test]
    fn test_skewness_undefined_cases() {
        assert_eq!(skewness(&[1.0, 2.0]), None);
        assert_eq!(skewness(&[3.0, 3.0, 3.0]), None);
    }

    #[test]
    fn test_min_max() {
        let data = [3.0, -1.0, 7.5, 0.0];
        assert_eq!(min(&data), Some(-1.0));
        assert_eq!(max(&data), Some(7.5));
        assert_eq!(min(&[]), None);
    }

    #[test]
    fn test_summary() {
        let s = Summary::from_data(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.count, 3);
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.std_dev, 1.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
        assert!(s.skewness.unwrap().abs() < 1e-12);
        assert!(Summary::from_data(&[1.0]).is_none());
    }
}
