//! CLT summary report
//!
//! Compares the observed spread of the sample means with the spread the
//! Central Limit Theorem predicts, `σ / √n`.

use crate::analysis::descriptive::Summary;
use cltm_sim::base::DistributionKind;
use cltm_sim::simulation::SimulationOutcome;
use serde::{Deserialize, Serialize};

/// Summary of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CltReport {
    pub kind: DistributionKind,
    pub sample_size: usize,
    pub num_simulations: usize,
    pub seed: u64,
    /// Summary of the generated population
    pub population: Summary,
    /// Summary of the sample means
    pub means: Summary,
    /// Mean of the parent distribution
    pub theoretical_mean: f64,
    /// Standard deviation of the parent distribution
    pub theoretical_std_dev: f64,
    /// `σ / √n` using the parent distribution's σ
    pub expected_standard_error: f64,
    /// Observed standard deviation of the means divided by the expected
    /// standard error; close to 1.0 when the CLT holds
    pub spread_ratio: f64,
}

impl CltReport {
    /// Build the report for `outcome`.
    ///
    /// Returns `None` if either the population or the means cannot be
    /// summarized (fewer than two finite values).
    pub fn from_outcome(outcome: &SimulationOutcome) -> Option<Self> {
        let config = &outcome.config;
        let population = Summary::from_data(outcome.population.values())?;
        let means = Summary::from_data(&outcome.means)?;

        let kind = config.kind;
        let theoretical_std_dev = kind.theoretical_std_dev();
        let expected_standard_error = theoretical_std_dev / (config.sample_size as f64).sqrt();

        Some(Self {
            kind,
            sample_size: config.sample_size,
            num_simulations: config.num_simulations,
            seed: config.seed,
            spread_ratio: means.std_dev / expected_standard_error,
            population,
            means,
            theoretical_mean: kind.theoretical_mean(),
            theoretical_std_dev,
            expected_standard_error,
        })
    }
}
