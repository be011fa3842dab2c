//! Population generation and the sampling simulation.
//!
//! - `Population`: fixed-size draws from one parent distribution.
//! - `sample_mean` / `sample_means`: sampling with replacement.
//! - `simulate`: the full pipeline as a pure function of a `Configuration`.
//! - `Simulation`: the same pipeline driven one sample mean at a time.
//! - `SimulationBuilder`: fluent construction with validation.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod population;
pub mod sampler;

pub use builder::SimulationBuilder;
pub use configs::{
    Configuration, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED, DEFAULT_SIMULATIONS, POPULATION_SIZE,
    SAMPLE_SIZE_RANGE, SIMULATIONS_RANGE,
};
pub use engine::{simulate, Simulation, SimulationOutcome};
pub use population::Population;
pub use sampler::{sample_mean, sample_means};
