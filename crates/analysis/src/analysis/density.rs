//! Kernel density estimation
//!
//! One-dimensional Gaussian KDE with Scott's bandwidth rule, the estimator
//! drawn over each histogram.

use crate::analysis::descriptive::std_dev;
use crate::analysis::utils::{linspace, standard_normal_pdf};

/// Gaussian kernel density estimate of a one-dimensional sample.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    data: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fit a KDE to `values` using Scott's rule.
    ///
    /// # Formula
    ///
    /// $$h = \hat\sigma \cdot n^{-1/5}$$
    ///
    /// Returns `None` for fewer than two values, non-finite values, or zero
    /// spread, where no bandwidth can be chosen.
    pub fn new(values: &[f64]) -> Option<Self> {
        let sigma = std_dev(values)?;
        if sigma <= 0.0 {
            return None;
        }
        let bandwidth = sigma * (values.len() as f64).powf(-0.2);
        Some(Self {
            data: values.to_vec(),
            bandwidth,
        })
    }

    /// Fit a KDE with an explicit bandwidth.
    pub fn with_bandwidth(values: &[f64], bandwidth: f64) -> Option<Self> {
        if values.is_empty()
            || !(bandwidth.is_finite() && bandwidth > 0.0)
            || !values.iter().all(|x| x.is_finite())
        {
            return None;
        }
        Some(Self {
            data: values.to_vec(),
            bandwidth,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Number of points the estimate was fitted to.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Density at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let sum: f64 = self
            .data
            .iter()
            .map(|&xi| standard_normal_pdf((x - xi) / h))
            .sum();
        sum / (self.data.len() as f64 * h)
    }

    /// Evaluate the density at `points` evenly spaced positions on
    /// `[lo, hi]`, returning `(x, density)` pairs.
    pub fn curve(&self, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
        linspace(lo, hi, points)
            .into_iter()
            .map(|x| (x, self.evaluate(x)))
            .collect()
    }
}
