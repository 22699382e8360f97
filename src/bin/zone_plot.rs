use std::f64::consts::TAU;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use impact_assessment::config::{find_scenario, load_scenarios};
use impact_assessment::simulation::{SimulationRequest, run_simulation};
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render concentric impact zones for a scenario as a PNG"
)]
struct Cli {
    #[arg(long, default_value = "configs/scenarios")]
    scenarios: PathBuf,
    /// Scenario name (case-insensitive)
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "artifacts/impact_zones.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 800)]
    height: u32,
}

const RING_SEGMENTS: usize = 180;
const ORANGE: RGBColor = RGBColor(255, 165, 0);

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let scenarios = load_scenarios(&cli.scenarios)
        .with_context(|| format!("loading scenarios from {}", cli.scenarios.display()))?;
    let scenario = find_scenario(&scenarios, &cli.name)?;
    let report = run_simulation(&SimulationRequest::try_from(scenario)?)?;
    let impact = &report.impact;

    // Outermost first so inner rings paint over it.
    let rings = [
        (impact.evacuation_radius_m, RED, 0.1),
        (impact.thermal_radius_m, ORANGE, 0.2),
        (impact.blast_radius_m, YELLOW, 0.3),
        (impact.crater_diameter_m / 2.0, BLACK, 0.5),
    ];
    let extent_km = impact.evacuation_radius_m / 1_000.0 * 1.5;
    if !(extent_km.is_finite() && extent_km > 0.0) {
        return Err(anyhow::anyhow!("evacuation radius is not drawable"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(-extent_km..extent_km, -extent_km..extent_km)?;

    for (radius_m, color, alpha) in rings {
        if radius_m <= 0.0 {
            continue;
        }
        chart.draw_series(std::iter::once(Polygon::new(
            ring(radius_m / 1_000.0),
            color.mix(alpha).filled(),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            closed(ring(radius_m / 1_000.0)),
            ShapeStyle::from(&color).stroke_width(1),
        )))?;
    }
    chart.draw_series(std::iter::once(Cross::new(
        (0.0, 0.0),
        6,
        ShapeStyle::from(&RED).stroke_width(2),
    )))?;

    root.present()?;
    println!(
        "Wrote {} ({} zones, evacuation radius {:.2} km)",
        cli.output.display(),
        impact.impact_zones.len(),
        impact.evacuation_radius_m / 1_000.0
    );
    Ok(())
}

fn ring(radius_km: f64) -> Vec<(f64, f64)> {
    (0..RING_SEGMENTS)
        .map(|i| {
            let theta = TAU * i as f64 / RING_SEGMENTS as f64;
            (radius_km * theta.cos(), radius_km * theta.sin())
        })
        .collect()
}

fn closed(mut points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}
