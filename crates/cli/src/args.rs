use clap::Args;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration file
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,

    #[arg(short, long, default_value = defaults::KIND, help = defaults::KIND_HELP)]
    pub kind: String,

    #[arg(short = 'n', long, default_value_t = defaults::SAMPLE_SIZE, help = defaults::SAMPLE_SIZE_HELP)]
    pub sample_size: usize,

    #[arg(short = 'm', long, default_value_t = defaults::SIMULATIONS, help = defaults::SIMULATIONS_HELP)]
    pub simulations: usize,

    /// Random seed
    #[arg(long, default_value_t = defaults::SEED)]
    pub seed: u64,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Load the configuration from a JSON file
    ///
    /// Values given as flags override the ones in the file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = defaults::KIND_HELP)]
    pub kind: Option<String>,

    #[arg(short = 'n', long, help = defaults::SAMPLE_SIZE_HELP)]
    pub sample_size: Option<usize>,

    #[arg(short = 'm', long, help = defaults::SIMULATIONS_HELP)]
    pub simulations: Option<usize>,

    /// Random seed [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory the charts are written to
    #[arg(short, long, default_value = defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Summary format (pretty, json)
    #[arg(short, long, default_value = defaults::OUTPUT_FORMAT)]
    pub format: String,

    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}
