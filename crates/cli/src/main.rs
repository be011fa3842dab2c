mod args;
mod commands;
pub mod defaults;
mod printing;
mod render;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use args::{InitArgs, RunArgs};
use commands::{describe, init, run};

/// The CLT Machine: watch the Central Limit Theorem at work
///
/// Draws a skewed, flat or two-humped population, repeatedly averages random
/// samples from it, and charts how the sample means pile up into a bell curve.
#[derive(Parser, Debug)]
#[command(name = "clt-machine")]
#[command(author, version, about = "Demonstrates the Central Limit Theorem by simulation", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a simulation configuration file.
    ///
    /// Captures the population kind, sample size, number of simulations and
    /// seed so a run can be repeated later with `run --config`.
    Init(InitArgs),

    /// Run the simulation and draw both charts.
    ///
    /// Prints summary statistics of the population and of the sample means,
    /// and writes the two histograms as SVG files.
    Run(RunArgs),

    /// Explain the Central Limit Theorem and the available controls.
    Describe,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init(args) => {
            init::init_config(&args)?;
        }
        Commands::Run(args) => {
            run::run_simulation(&args)?;
        }
        Commands::Describe => {
            describe::describe()?;
        }
    }

    Ok(())
}
