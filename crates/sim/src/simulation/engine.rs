//! Simulation engine.
//!
//! This module ties the generator and the sampler together. [`simulate`] is
//! the pure entry point; [`Simulation`] exposes the same pipeline one sample
//! mean at a time so callers can report progress.

use crate::errors::SimulationError;
use crate::simulation::sampler::sample_mean;
use crate::simulation::{Configuration, Population};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Everything produced by one run of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    /// Configuration the outcome was produced with
    pub config: Configuration,
    /// The generated population
    pub population: Population,
    /// One mean per simulated sample, in draw order
    pub means: Vec<f64>,
}

/// Run the whole pipeline: validate, generate the population, and draw all
/// sample means.
///
/// The population and the means come from a single RNG stream seeded with
/// `config.seed`, so equal configurations always produce equal outcomes.
pub fn simulate(config: &Configuration) -> Result<SimulationOutcome, SimulationError> {
    Simulation::new(config.clone())?.into_outcome()
}

/// Stepwise simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Validated configuration
    config: Configuration,
    /// Population sampled from
    population: Population,
    /// Means drawn so far
    means: Vec<f64>,
    /// Random number generator, shared by generation and sampling
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Validate `config` and generate the population.
    pub fn new(config: Configuration) -> Result<Self, SimulationError> {
        config.validate()?;

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
        let population = Population::generate(config.kind, &mut rng)?;

        log::info!(
            "Initialized {} simulation (n={}, m={}, seed={})",
            config.kind,
            config.sample_size,
            config.num_simulations,
            config.seed
        );

        Ok(Self {
            means: Vec::with_capacity(config.num_simulations),
            config,
            population,
            rng,
        })
    }

    /// Draw the next sample mean.
    ///
    /// Returns `Ok(None)` once all `num_simulations` means have been drawn.
    pub fn step(&mut self) -> Result<Option<f64>, SimulationError> {
        if self.is_complete() {
            return Ok(None);
        }
        let mean = sample_mean(
            self.population.values(),
            self.config.sample_size,
            &mut self.rng,
        )?;
        self.means.push(mean);
        Ok(Some(mean))
    }

    /// Draw all remaining sample means.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        while self.step()?.is_some() {}
        log::info!("Drew {} sample means", self.means.len());
        Ok(())
    }

    /// Finish any remaining draws and return the outcome.
    pub fn into_outcome(mut self) -> Result<SimulationOutcome, SimulationError> {
        if !self.is_complete() {
            self.run()?;
        }
        Ok(SimulationOutcome {
            config: self.config,
            population: self.population,
            means: self.means,
        })
    }

    /// Number of means drawn so far.
    pub fn progress(&self) -> usize {
        self.means.len()
    }

    /// Whether all means have been drawn.
    pub fn is_complete(&self) -> bool {
        self.means.len() >= self.config.num_simulations
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Means drawn so far.
    pub fn means(&self) -> &[f64] {
        &self.means
    }
}
