use anyhow::{Context, Result};
use cltm_analysis::CltReport;
use cltm_sim::base::DistributionKind;
use cltm_sim::simulation::{simulate, Configuration, Simulation, SimulationOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::args::RunArgs;
use crate::printing::{
    print_banner, print_charts, print_explanation, print_parameters, print_report,
};
use crate::render::{write_charts, RenderedCharts};

/// How the run summary is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format '{other}' (expected pretty or json)"),
        }
    }
}

#[derive(Serialize)]
struct RunSummary<'a> {
    report: &'a CltReport,
    charts: Option<&'a RenderedCharts>,
}

/// Load the configuration file if one was given, then apply flag overrides.
pub fn resolve_configuration(args: &RunArgs) -> Result<Configuration> {
    let mut config = match &args.config {
        Some(path) => load_configuration(path)?,
        None => Configuration::default(),
    };

    if let Some(kind) = &args.kind {
        config.kind = kind.parse::<DistributionKind>()?;
    }
    if let Some(n) = args.sample_size {
        config.sample_size = n;
    }
    if let Some(m) = args.simulations {
        config.num_simulations = m;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    config.validate()?;
    Ok(config)
}

fn load_configuration(path: &Path) -> Result<Configuration> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;
    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    let config = resolve_configuration(args)?;

    if format == OutputFormat::Pretty {
        print_banner();
        print_explanation();
        print_parameters(&config);
    }

    let outcome = if args.progress {
        simulate_with_progress(&config)?
    } else {
        simulate(&config).context("Simulation failed")?
    };

    let report =
        CltReport::from_outcome(&outcome).context("Failed to summarize the simulation output")?;

    let charts = if args.no_charts {
        None
    } else {
        Some(write_charts(&outcome, &args.output_dir)?)
    };

    match format {
        OutputFormat::Pretty => {
            print_report(&report);
            if let Some(charts) = &charts {
                print_charts(charts);
            }
            println!("\n✓ Simulation complete!");
        }
        OutputFormat::Json => {
            let summary = RunSummary {
                report: &report,
                charts: charts.as_ref(),
            };
            let json =
                serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn simulate_with_progress(config: &Configuration) -> Result<SimulationOutcome> {
    let mut sim = Simulation::new(config.clone()).context("Simulation failed")?;

    let pb = ProgressBar::new(config.num_simulations as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}")?
            .progress_chars("#>-"),
    );

    while sim.step().context("Simulation failed")?.is_some() {
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    Ok(sim.into_outcome()?)
}
