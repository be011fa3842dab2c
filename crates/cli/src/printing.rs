use cltm_analysis::CltReport;
use cltm_sim::base::DistributionKind;
use cltm_sim::simulation::{Configuration, SAMPLE_SIZE_RANGE, SIMULATIONS_RANGE};

use crate::defaults;
use crate::render::RenderedCharts;

pub const TITLE: &str = "The Central Limit Theorem (CLT) Machine";

pub const EXPLANATION: &str = "\
The Central Limit Theorem (CLT) means that as long as you have a
large enough sample size, the distribution of the sample means will be
normally distributed, no matter what the original distribution was.";

pub fn print_banner() {
    println!("📊 {TITLE}");
    println!("============================================\n");
}

pub fn print_explanation() {
    println!("{EXPLANATION}");
}

pub fn print_parameters(config: &Configuration) {
    println!("\n📋 Settings");
    println!(
        "  • Population: {} [-k, --kind]",
        config.kind.label()
    );
    println!(
        "  • Sample Size (n): {} [-n, --sample-size]",
        config.sample_size
    );
    println!(
        "  • Number of Simulations (m): {} [-m, --simulations]",
        config.num_simulations
    );
    println!("  • Random Seed: {} [--seed]", config.seed);
}

pub fn print_report(report: &CltReport) {
    let pop = &report.population;
    let means = &report.means;

    println!("\n🟠 The Parent Population");
    println!("  • Values: {}", pop.count);
    println!(
        "  • Mean: {:.4} (theoretical {:.4})",
        pop.mean, report.theoretical_mean
    );
    println!(
        "  • Std Dev: {:.4} (theoretical {:.4})",
        pop.std_dev, report.theoretical_std_dev
    );
    println!("  • Range: [{:.4}, {:.4}]", pop.min, pop.max);
    print_skewness(pop.skewness);

    println!(
        "\n🔵 The Sampling Distribution (n={})",
        report.sample_size
    );
    println!("  • Sample Means: {}", means.count);
    println!("  • Mean of Means: {:.4}", means.mean);
    println!(
        "  • Std Dev of Means: {:.4} (expected σ/√n = {:.4})",
        means.std_dev, report.expected_standard_error
    );
    println!("  • Spread Ratio: {:.3}", report.spread_ratio);
    print_skewness(means.skewness);
}

fn print_skewness(skewness: Option<f64>) {
    match skewness {
        Some(s) => println!("  • Skewness: {s:.4}"),
        None => println!("  • Skewness: undefined"),
    }
}

pub fn print_charts(charts: &RenderedCharts) {
    println!("\n🖼  Charts");
    println!("  • Population: {}", charts.population.display());
    println!("  • Sample Means: {}", charts.sample_means.display());
}

pub fn print_controls() {
    println!("\n⚙️  Controls");
    println!(
        "  • Population kind [-k, --kind] (default: {})",
        defaults::KIND
    );
    println!("    {}", defaults::KIND_HELP);
    for kind in DistributionKind::ALL {
        println!(
            "    - {:<12} {:<22} mean {:.3}, sd {:.3}",
            kind.name(),
            kind.label(),
            kind.theoretical_mean(),
            kind.theoretical_std_dev()
        );
    }
    println!(
        "  • Sample size n [-n, --sample-size] ({}-{}, default: {})",
        SAMPLE_SIZE_RANGE.start(),
        SAMPLE_SIZE_RANGE.end(),
        defaults::SAMPLE_SIZE
    );
    println!("    {}", defaults::SAMPLE_SIZE_HELP);
    println!(
        "  • Number of simulations m [-m, --simulations] ({}-{}, default: {})",
        SIMULATIONS_RANGE.start(),
        SIMULATIONS_RANGE.end(),
        defaults::SIMULATIONS
    );
    println!("    {}", defaults::SIMULATIONS_HELP);
}
