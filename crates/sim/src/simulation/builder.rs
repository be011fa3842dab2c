//! Builder pattern for creating simulations.
//!
//! Provides a fluent API on top of [`Configuration`] with the same defaults
//! as the command-line controls.

use crate::base::DistributionKind;
use crate::errors::SimulationError;
use crate::simulation::{Configuration, Simulation};

/// Builder for constructing [`Simulation`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use cltm_sim::base::DistributionKind;
/// use cltm_sim::simulation::SimulationBuilder;
///
/// let outcome = SimulationBuilder::new()
///     .kind(DistributionKind::Uniform)
///     .sample_size(30)
///     .simulations(2000)
///     .seed(42)
///     .build()
///     .unwrap()
///     .into_outcome()
///     .unwrap();
///
/// assert_eq!(outcome.means.len(), 2000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    config: Configuration,
}

impl SimulationBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: Configuration) -> Self {
        Self { config }
    }

    /// Set the parent distribution.
    pub fn kind(mut self, kind: DistributionKind) -> Self {
        self.config.kind = kind;
        self
    }

    /// Set the number of draws per sample (n).
    pub fn sample_size(mut self, n: usize) -> Self {
        self.config.sample_size = n;
        self
    }

    /// Set the number of sample means to draw (m).
    pub fn simulations(mut self, m: usize) -> Self {
        self.config.num_simulations = m;
        self
    }

    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// The configuration built so far.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Validate the configuration and create the simulation.
    pub fn build(self) -> Result<Simulation, SimulationError> {
        Simulation::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    #[test]
    fn test_defaults() {
        let builder = SimulationBuilder::new();
        assert_eq!(builder.configuration(), &Configuration::default());
    }

    #[test]
    fn test_setters() {
        let builder = SimulationBuilder::new()
            .kind(DistributionKind::Bimodal)
            .sample_size(1)
            .simulations(5000)
            .seed(99);
        let config = builder.configuration();
        assert_eq!(config.kind, DistributionKind::Bimodal);
        assert_eq!(config.sample_size, 1);
        assert_eq!(config.num_simulations, 5000);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_build_validates() {
        let err = SimulationBuilder::new().simulations(10).build().unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Config(ConfigError::SimulationsOutOfRange { value: 10, .. })
        ));
    }

    #[test]
    fn test_from_config() {
        let config = Configuration::new(DistributionKind::Uniform, 12, 400);
        let sim = SimulationBuilder::from_config(config.clone()).build().unwrap();
        assert_eq!(sim.configuration(), &config);
    }
}
