//! Distance between empirical distributions

use crate::analysis::utils::sorted;

/// Two-sample Kolmogorov-Smirnov statistic.
///
/// The largest absolute difference between the empirical CDFs of `a` and
/// `b`. Ties across samples are stepped together so identical samples
/// score exactly zero.
///
/// Returns `None` if either sample is empty or contains NaN/Inf.
pub fn ks_statistic(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    if !a.iter().chain(b).all(|x| x.is_finite()) {
        return None;
    }

    let a = sorted(a);
    let b = sorted(b);
    let (na, nb) = (a.len() as f64, b.len() as f64);
    let (mut i, mut j) = (0usize, 0usize);
    let mut d: f64 = 0.0;

    while i < a.len() && j < b.len() {
        let x = a[i].min(b[j]);
        while i < a.len() && a[i] <= x {
            i += 1;
        }
        while j < b.len() && b[j] <= x {
            j += 1;
        }
        d = d.max((i as f64 / na - j as f64 / nb).abs());
    }

    Some(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_samples() {
        let a = [3.0, 1.0, 2.0, 2.0];
        assert_eq!(ks_statistic(&a, &a), Some(0.0));
    }

    #[test]
    fn test_disjoint_samples() {
        assert_eq!(ks_statistic(&[1.0, 2.0], &[10.0, 11.0, 12.0]), Some(1.0));
    }

    #[test]
    fn test_partial_overlap() {
        // CDFs differ most just after 2.0: a is at 1.0, b is at 0.5
        let d = ks_statistic(&[1.0, 2.0], &[2.0, 3.0]).unwrap();
        assert!((d - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let a = [0.1, 0.5, 0.9, 1.3];
        let b = [0.2, 0.4, 1.8];
        assert_eq!(ks_statistic(&a, &b), ks_statistic(&b, &a));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(ks_statistic(&[], &[1.0]), None);
        assert_eq!(ks_statistic(&[1.0], &[f64::NAN]), None);
    }
}
