//! Commonly used imports for convenience.
//!
//! ```
//! use cltm_sim::prelude::*;
//!
//! let kind: DistributionKind = "bimodal".parse().unwrap();
//! let population = Population::from_seed(kind, DEFAULT_SEED).unwrap();
//! assert_eq!(population.size(), POPULATION_SIZE);
//! ```

pub use crate::base::DistributionKind;
pub use crate::errors::{ConfigError, SimulationError};
pub use crate::simulation::{
    simulate, Configuration, Population, Simulation, SimulationBuilder, SimulationOutcome,
    DEFAULT_SEED, POPULATION_SIZE,
};
