//! Chart rendering.
//!
//! Each chart is a count histogram with a Gaussian KDE overlay scaled to the
//! same axis, drawn to SVG with plotters. Both charts are rendered in memory,
//! staged next to their targets and only then moved into place, so a failure
//! leaves neither chart behind.

use anyhow::{Context, Result};
use cltm_analysis::{GaussianKde, Histogram};
use cltm_sim::simulation::SimulationOutcome;
use plotters::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CHART_SIZE: (u32, u32) = (800, 600);
/// Points at which the density curve is evaluated.
pub const KDE_POINTS: usize = 200;

pub const POPULATION_COLOR: RGBColor = RGBColor(255, 165, 0);
pub const MEANS_COLOR: RGBColor = RGBColor(0, 128, 128);

pub const POPULATION_FILE: &str = "population.svg";
pub const MEANS_FILE: &str = "sample_means.svg";

/// Text and colour of one chart.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub heading: String,
    pub caption: String,
    pub x_desc: String,
    pub color: RGBColor,
}

impl ChartSpec {
    pub fn population(outcome: &SimulationOutcome) -> Self {
        Self {
            heading: "The Parent Population".into(),
            caption: "Original Data Distribution".into(),
            x_desc: format!("Value ({})", outcome.config.kind.label()),
            color: POPULATION_COLOR,
        }
    }

    pub fn sample_means(outcome: &SimulationOutcome) -> Self {
        Self {
            heading: "The Sampling Distribution".into(),
            caption: format!(
                "Distribution of Sample Means (n={}, m={})",
                outcome.config.sample_size, outcome.config.num_simulations
            ),
            x_desc: "Sample mean".into(),
            color: MEANS_COLOR,
        }
    }
}

/// Paths of the charts written for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCharts {
    pub population: PathBuf,
    pub sample_means: PathBuf,
}

/// Render a histogram with density overlay to an SVG document.
pub fn render_histogram_svg(values: &[f64], spec: &ChartSpec) -> Result<String> {
    let hist = Histogram::auto(values)
        .context("Cannot draw a histogram of empty or non-finite data")?;
    let (lo, hi) = hist.range();

    // Scale the density to counts so it overlays the bars.
    let scale = hist.total() as f64 * hist.bin_width();
    let density: Vec<(f64, f64)> = GaussianKde::new(values)
        .map(|kde| {
            kde.curve(lo, hi, KDE_POINTS)
                .into_iter()
                .map(|(x, d)| (x, d * scale))
                .collect()
        })
        .unwrap_or_default();

    let y_top = density
        .iter()
        .map(|&(_, y)| y)
        .fold(hist.max_count() as f64, f64::max)
        .max(1.0)
        * 1.1;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(&spec.heading, ("sans-serif", 26))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.caption, ("sans-serif", 20))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(lo..hi, 0.0..y_top)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(spec.x_desc.as_str())
            .y_desc("Count")
            .x_label_formatter(&|x: &f64| format!("{x:.1}"))
            .y_label_formatter(&|y: &f64| format!("{y:.0}"))
            .draw()?;

        chart.draw_series(hist.iter_bins().map(|(x0, x1, count)| {
            Rectangle::new([(x0, 0.0), (x1, count as f64)], spec.color.mix(0.6).filled())
        }))?;
        chart.draw_series(hist.iter_bins().map(|(x0, x1, count)| {
            Rectangle::new([(x0, 0.0), (x1, count as f64)], WHITE.stroke_width(1))
        }))?;

        if !density.is_empty() {
            chart.draw_series(LineSeries::new(density, spec.color.stroke_width(2)))?;
        }

        root.present()?;
    }

    Ok(svg)
}

/// Render both charts of `outcome` without touching the filesystem.
///
/// Returns `(population_svg, sample_means_svg)`.
pub fn render_charts(outcome: &SimulationOutcome) -> Result<(String, String)> {
    let population = render_histogram_svg(
        outcome.population.values(),
        &ChartSpec::population(outcome),
    )
    .context("Failed to render the population chart")?;
    let means = render_histogram_svg(&outcome.means, &ChartSpec::sample_means(outcome))
        .context("Failed to render the sample means chart")?;
    Ok((population, means))
}

/// Render both charts and write them into `dir`.
pub fn write_charts(outcome: &SimulationOutcome, dir: &Path) -> Result<RenderedCharts> {
    let (population_svg, means_svg) = render_charts(outcome)?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let charts = RenderedCharts {
        population: dir.join(POPULATION_FILE),
        sample_means: dir.join(MEANS_FILE),
    };
    let staged_population = staging_path(&charts.population);
    let staged_means = staging_path(&charts.sample_means);

    let result = stage(&staged_population, &population_svg)
        .and_then(|()| stage(&staged_means, &means_svg))
        .and_then(|()| publish(&staged_means, &charts.sample_means))
        .and_then(|()| {
            publish(&staged_population, &charts.population).inspect_err(|_| {
                let _ = fs::remove_file(&charts.sample_means);
            })
        });

    if let Err(err) = result {
        let _ = fs::remove_file(&staged_population);
        let _ = fs::remove_file(&staged_means);
        return Err(err);
    }

    log::info!("Wrote charts to {}", dir.display());
    Ok(charts)
}

/// Hidden sibling that a chart is written to before it is moved into place.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

fn stage(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))
}

fn publish(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).with_context(|| format!("Failed to write {}", to.display()))
}
