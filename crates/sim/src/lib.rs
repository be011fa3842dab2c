//! # Simulation Crate
//!
//! The `sim` crate provides the core logic of the CLT machine. It draws a
//! synthetic population from a non-normal parent distribution, repeatedly
//! samples from it with replacement, and records the sample means.
//!
//! ```
//! use cltm_sim::prelude::*;
//!
//! let config = Configuration::new(DistributionKind::Exponential, 30, 2000);
//! let outcome = simulate(&config).unwrap();
//! assert_eq!(outcome.population.size(), POPULATION_SIZE);
//! assert_eq!(outcome.means.len(), 2000);
//! ```

pub mod base;
pub mod errors;
pub mod prelude;
pub mod simulation;

pub use base::DistributionKind;
pub use errors::{ConfigError, SimulationError};
pub use simulation::{simulate, Configuration, Population, SimulationOutcome};
