//! Histogram binning
//!
//! Equal-width histograms with automatic bin selection. The automatic rule
//! is the one NumPy calls `"auto"`: the narrower of the Freedman-Diaconis
//! and Sturges bin widths, falling back to Sturges when the interquartile
//! range is zero.

use crate::analysis::utils::{quantile_sorted, sorted};

/// Equal-width histogram over `[edges[0], edges[bins]]`.
///
/// Bins are half-open `[lo, hi)` except the last, which also contains the
/// maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Build a histogram with an automatically chosen number of bins.
    ///
    /// Returns `None` for empty input or input containing NaN/Inf.
    pub fn auto(values: &[f64]) -> Option<Self> {
        let bins = auto_bin_count(values)?;
        log::debug!("Automatic binning chose {} bins for {} values", bins, values.len());
        Self::with_bins(values, bins)
    }

    /// Build a histogram with exactly `bins` equal-width bins spanning the
    /// data range.
    ///
    /// Constant data gets a single bin of width one centred on the value.
    pub fn with_bins(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 || !values.iter().all(|x| x.is_finite()) {
            return None;
        }
        let (lo, hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        if lo == hi {
            return Some(Self {
                edges: vec![lo - 0.5, lo + 0.5],
                counts: vec![values.len()],
            });
        }

        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
        edges.push(hi);

        let mut counts = vec![0usize; bins];
        for &x in values {
            let idx = (((x - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Self { edges, counts })
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Bin edges; one more than the number of bins.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Width shared by every bin.
    pub fn bin_width(&self) -> f64 {
        (self.range().1 - self.range().0) / self.bins() as f64
    }

    /// Lower and upper edge of the whole histogram.
    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterate over `(lower_edge, upper_edge, count)` for every bin.
    pub fn iter_bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }
}

/// Number of bins selected by NumPy's `"auto"` rule.
///
/// # Formula
///
/// - Sturges: $h_S = \frac{\max - \min}{\log_2 n + 1}$
/// - Freedman-Diaconis: $h_{FD} = 2 \cdot IQR \cdot n^{-1/3}$
///
/// The bin width is $\min(h_S, h_{FD})$ when $h_{FD} > 0$ and $h_S$
/// otherwise; the bin count is $\lceil (\max - \min) / h \rceil$.
pub fn auto_bin_count(values: &[f64]) -> Option<usize> {
    if values.is_empty() || !values.iter().all(|x| x.is_finite()) {
        return None;
    }
    let data = sorted(values);
    let n = data.len() as f64;
    let span = data[data.len() - 1] - data[0];
    if span == 0.0 {
        return Some(1);
    }

    let sturges = span / (n.log2() + 1.0);
    let iqr = quantile_sorted(&data, 0.75)? - quantile_sorted(&data, 0.25)?;
    let fd = 2.0 * iqr * n.powf(-1.0 / 3.0);
    let width = if fd > 0.0 { fd.min(sturges) } else { sturges };

    Some(((span / width).ceil() as usize).max(1))
}
