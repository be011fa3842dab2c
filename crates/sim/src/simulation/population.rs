//! Population generation.
//!
//! A population is a fixed-size set of draws from one of the parent
//! distributions. It is generated once per run and never mutated.

use crate::base::distribution::{
    BIMODAL_MEANS, BIMODAL_STD_DEV, EXPONENTIAL_SCALE, UNIFORM_HIGH, UNIFORM_LOW,
};
use crate::base::DistributionKind;
use crate::errors::SimulationError;
use crate::simulation::POPULATION_SIZE;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp, Normal, Uniform};
use rand_xoshiro::Xoshiro256PlusPlus;

/// A synthetic population of [`POPULATION_SIZE`] values.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    /// Distribution the values were drawn from
    kind: DistributionKind,
    /// The draws, in generation order
    values: Vec<f64>,
}

impl Population {
    /// Generate a population by drawing from `rng`.
    ///
    /// For [`DistributionKind::Bimodal`] the first half of the values comes
    /// from the lower component and the second half from the upper one.
    pub fn generate<R: Rng + ?Sized>(
        kind: DistributionKind,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        let values = match kind {
            DistributionKind::Exponential => {
                let exp = Exp::new(1.0 / EXPONENTIAL_SCALE)
                    .map_err(|e| SimulationError::Distribution(e.to_string()))?;
                draw(&exp, POPULATION_SIZE, rng)
            }
            DistributionKind::Uniform => {
                let uniform = Uniform::new(UNIFORM_LOW, UNIFORM_HIGH)
                    .map_err(|e| SimulationError::Distribution(e.to_string()))?;
                draw(&uniform, POPULATION_SIZE, rng)
            }
            DistributionKind::Bimodal => {
                let half = POPULATION_SIZE / 2;
                let mut values = Vec::with_capacity(POPULATION_SIZE);
                for (i, &mu) in BIMODAL_MEANS.iter().enumerate() {
                    let normal = Normal::new(mu, BIMODAL_STD_DEV)
                        .map_err(|e| SimulationError::Distribution(e.to_string()))?;
                    // The upper component absorbs any odd remainder.
                    let count = if i == 0 { half } else { POPULATION_SIZE - half };
                    values.extend(draw(&normal, count, rng));
                }
                values
            }
        };

        log::debug!("Generated {} {} population values", values.len(), kind);

        Ok(Self { kind, values })
    }

    /// Generate a population from a fresh RNG seeded with `seed`.
    pub fn from_seed(kind: DistributionKind, seed: u64) -> Result<Self, SimulationError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        Self::generate(kind, &mut rng)
    }

    /// Build a population from existing values.
    pub fn from_values(kind: DistributionKind, values: Vec<f64>) -> Self {
        Self { kind, values }
    }

    /// Get the distribution kind.
    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    /// Get the number of values.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all values as a slice.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get a specific value by index.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Consume the population and return its values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

fn draw<D, R>(dist: &D, count: usize, rng: &mut R) -> Vec<f64>
where
    D: Distribution<f64>,
    R: Rng + ?Sized,
{
    (0..count).map(|_| dist.sample(rng)).collect()
}
