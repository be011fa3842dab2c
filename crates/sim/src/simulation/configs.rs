//! Simulation configuration.
//!
//! A [`Configuration`] carries the three user-facing controls plus the
//! random seed. It can be deserialized from a file to reproduce a run
//! exactly.

use crate::base::DistributionKind;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of values in every generated population.
pub const POPULATION_SIZE: usize = 10_000;

/// Allowed sample sizes (values averaged per mean).
pub const SAMPLE_SIZE_RANGE: RangeInclusive<usize> = 1..=100;

/// Allowed numbers of simulated sample means.
pub const SIMULATIONS_RANGE: RangeInclusive<usize> = 100..=10_000;

pub const DEFAULT_SAMPLE_SIZE: usize = 30;
pub const DEFAULT_SIMULATIONS: usize = 2000;
pub const DEFAULT_SEED: u64 = 42;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// The master configuration struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Parent distribution of the population
    pub kind: DistributionKind,
    /// Number of draws averaged into each sample mean (n)
    pub sample_size: usize,
    /// Number of sample means to simulate (m)
    pub num_simulations: usize,
    /// RNG seed; the same seed always yields the same population and means
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            kind: DistributionKind::default(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            num_simulations: DEFAULT_SIMULATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl Configuration {
    /// Create a configuration with the default seed.
    pub fn new(kind: DistributionKind, sample_size: usize, num_simulations: usize) -> Self {
        Self {
            kind,
            sample_size,
            num_simulations,
            seed: DEFAULT_SEED,
        }
    }

    /// Replace the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that `sample_size` and `num_simulations` lie within their
    /// supported ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SAMPLE_SIZE_RANGE.contains(&self.sample_size) {
            return Err(ConfigError::SampleSizeOutOfRange {
                value: self.sample_size,
                min: *SAMPLE_SIZE_RANGE.start(),
                max: *SAMPLE_SIZE_RANGE.end(),
            });
        }
        if !SIMULATIONS_RANGE.contains(&self.num_simulations) {
            return Err(ConfigError::SimulationsOutOfRange {
                value: self.num_simulations,
                min: *SIMULATIONS_RANGE.start(),
                max: *SIMULATIONS_RANGE.end(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_controls() {
        let config = Configuration::default();
        assert_eq!(config.kind, DistributionKind::Exponential);
        assert_eq!(config.sample_size, 30);
        assert_eq!(config.num_simulations, 2000);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds_are_inclusive() {
        for (n, m) in [(1, 100), (100, 10_000), (1, 10_000), (100, 100)] {
            let config = Configuration::new(DistributionKind::Uniform, n, m);
            assert!(config.validate().is_ok(), "n={n}, m={m} should be valid");
        }
    }

    #[test]
    fn test_validate_rejects_sample_size() {
        let config = Configuration::new(DistributionKind::Uniform, 0, 2000);
        assert_eq!(
            config.validate(),
            Err(ConfigError::SampleSizeOutOfRange {
                value: 0,
                min: 1,
                max: 100
            })
        );

        let config = Configuration::new(DistributionKind::Uniform, 101, 2000);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SampleSizeOutOfRange { value: 101, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_simulations() {
        let config = Configuration::new(DistributionKind::Bimodal, 30, 99);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SimulationsOutOfRange { value: 99, .. })
        ));

        let config = Configuration::new(DistributionKind::Bimodal, 30, 10_001);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SimulationsOutOfRange { value: 10_001, .. })
        ));
    }

    #[test]
    fn test_seed_defaults_when_missing_from_json() {
        let json = r#"{"kind":"uniform","sample_size":10,"num_simulations":500}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.kind, DistributionKind::Uniform);
    }

    #[test]
    fn test_json_rejects_unknown_kind() {
        let json = r#"{"kind":"poisson","sample_size":10,"num_simulations":500}"#;
        let err = serde_json::from_str::<Configuration>(json).unwrap_err();
        assert!(err.to_string().contains("poisson"));
    }

    #[test]
    fn test_with_seed() {
        let config = Configuration::default().with_seed(7);
        assert_eq!(config.seed, 7);
    }
}
