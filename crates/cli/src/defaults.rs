//! Shared default values for the command line.
//! These values are used by both the `init` and the `run` commands.

use cltm_sim::simulation::{DEFAULT_SAMPLE_SIZE, DEFAULT_SEED, DEFAULT_SIMULATIONS};

pub const CONFIG_FILE: &str = "clt.json";
pub const OUTPUT_DIR: &str = "clt_charts";

pub const KIND: &str = "exponential";
pub const SAMPLE_SIZE: usize = DEFAULT_SAMPLE_SIZE;
pub const SIMULATIONS: usize = DEFAULT_SIMULATIONS;
pub const SEED: u64 = DEFAULT_SEED;

pub const OUTPUT_FORMAT: &str = "pretty";

// Control help text, used as the clap `help` of each control flag and by `describe`
pub const KIND_HELP: &str = "Pick a population: exponential, uniform or bimodal.";
pub const SAMPLE_SIZE_HELP: &str = "How many data points we average together to get ONE mean.";
pub const SIMULATIONS_HELP: &str = "How many times we repeat the sampling process.";
