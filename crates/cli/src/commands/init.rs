use anyhow::{Context, Result};
use cltm_sim::base::DistributionKind;
use cltm_sim::simulation::Configuration;
use std::fs;

use crate::args::InitArgs;
use crate::printing::{print_banner, print_parameters};

/// Build the configuration described by `args`, failing on unknown kinds or
/// out-of-range values.
pub fn build_config(args: &InitArgs) -> Result<Configuration> {
    let kind: DistributionKind = args.kind.parse()?;
    let config =
        Configuration::new(kind, args.sample_size, args.simulations).with_seed(args.seed);
    config.validate()?;
    Ok(config)
}

pub fn init_config(args: &InitArgs) -> Result<()> {
    print_banner();

    let config = build_config(args)?;
    let output = &args.output;

    if output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            output.display()
        );
    }

    let json = serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
    fs::write(output, json)
        .with_context(|| format!("Failed to write configuration to {}", output.display()))?;

    print_parameters(&config);
    println!("\n✓ Configuration written to {}", output.display());
    println!(
        "\n💡 Use 'clt-machine run --config {}' to run it",
        output.display()
    );

    Ok(())
}
