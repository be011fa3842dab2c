//! # Analysis Crate
//!
//! Statistics, binning and density estimation used to summarize and draw
//! the population and the sampling distribution of the mean.

pub mod analysis;

pub use analysis::*;
