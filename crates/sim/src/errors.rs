use thiserror::Error;

/// Errors raised while validating a simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A distribution name that is not one of the supported kinds.
    #[error("Unknown distribution kind '{value}' (expected one of: exponential, uniform, bimodal)")]
    UnknownDistribution { value: String },

    /// Sample size outside the supported range.
    #[error("Sample size {value} out of range (must be between {min} and {max})")]
    SampleSizeOutOfRange { value: usize, min: usize, max: usize },

    /// Number of simulations outside the supported range.
    #[error("Number of simulations {value} out of range (must be between {min} and {max})")]
    SimulationsOutOfRange { value: usize, min: usize, max: usize },
}

/// Errors that can occur while generating a population or drawing samples.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Sampling was requested from a population with no values.
    #[error("Cannot sample from an empty population")]
    EmptyPopulation,

    /// A sample must contain at least one draw.
    #[error("Invalid sample size: {0} (must be at least 1)")]
    InvalidSampleSize(usize),

    /// The underlying distribution rejected its parameters.
    #[error("Distribution error: {0}")]
    Distribution(String),
}
