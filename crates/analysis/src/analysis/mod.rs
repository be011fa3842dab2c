//! Statistical analysis of CLT simulation output
//!
//! This module provides:
//! - Descriptive statistics (mean, variance, skewness, summaries)
//! - Histogram binning with NumPy's automatic bin rule
//! - Gaussian kernel density estimation
//! - Two-sample Kolmogorov-Smirnov distance
//! - Mode detection on density curves
//! - The CLT report comparing observed and predicted spread

pub mod density;
pub mod descriptive;
pub mod distance;
pub mod histogram;
pub mod modes;
pub mod report;
pub mod utils;

// Re-export commonly used items
pub use density::GaussianKde;
pub use descriptive::{mean, skewness, std_dev, variance, Summary};
pub use distance::ks_statistic;
pub use histogram::{auto_bin_count, Histogram};
pub use modes::find_modes;
pub use report::CltReport;
