use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use impact_assessment::config::{ScenarioConfig, find_scenario, load_scenarios};
use impact_assessment::export::{self, report, summary, zones};
use impact_assessment::mitigation::DeflectionMethod;
use impact_assessment::model::{
    Asteroid, AsteroidParams, Composition, ImpactLocation, LocationParams, TerrainType,
};
use impact_assessment::simulation::{SimulationReport, SimulationRequest, run_batch};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Simulate an asteroid impact and assess the damage"
)]
struct Cli {
    /// Scenario catalogue: YAML list, TOML file, or directory of TOML files
    #[arg(long, default_value = "configs/scenarios")]
    scenarios: PathBuf,

    /// Scenario name (case-insensitive); all scenarios run when omitted
    #[arg(long)]
    name: Option<String>,

    /// Inline asteroid mass in kg (switches to inline mode)
    #[arg(long, requires_all = ["diameter", "velocity", "terrain"])]
    mass: Option<f64>,

    /// Inline asteroid diameter in m
    #[arg(long)]
    diameter: Option<f64>,

    /// Inline entry velocity in m/s
    #[arg(long)]
    velocity: Option<f64>,

    /// Inline impact angle from horizontal in degrees
    #[arg(long, default_value_t = 45.0)]
    angle: f64,

    #[arg(long, default_value = "stony")]
    composition: Composition,

    #[arg(long, default_value_t = 0.0)]
    latitude: f64,

    #[arg(long, default_value_t = 0.0)]
    longitude: f64,

    #[arg(long)]
    terrain: Option<TerrainType>,

    /// People per km²
    #[arg(long, default_value_t = 0.0)]
    population: f64,

    /// Infrastructure density in [0, 1]
    #[arg(long, default_value_t = 0.0)]
    infrastructure: f64,

    /// Water depth in m (ocean sites)
    #[arg(long)]
    water_depth: Option<f64>,

    /// Deflection delta-v in m/s; overrides the scenario value when > 0
    #[arg(long, default_value_t = 0.0)]
    dv: f64,

    /// Deflection method label, e.g. gravity_tractor
    #[arg(long)]
    method: Option<String>,

    /// Apply the heuristic damage enhancer
    #[arg(long)]
    enhance: bool,

    /// Omit impact zones from the report
    #[arg(long)]
    no_zones: bool,

    /// Write the JSON report here (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the Parameter,Value,Unit summary here (first report only)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write one CSV row per impact zone here (first report only)
    #[arg(long)]
    zones_csv: Option<PathBuf>,

    /// Print the deflection method catalogue and exit
    #[arg(long)]
    list_methods: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_methods {
        print_methods();
        return Ok(());
    }
    if let Some(method) = cli.method.as_deref() {
        if DeflectionMethod::from_label(method).is_none() {
            log::warn!("'{method}' is not a catalogued deflection method");
        }
    }

    let mut requests = if cli.mass.is_some() {
        vec![inline_request(&cli)?]
    } else {
        scenario_requests(&cli)?
    };
    for request in &mut requests {
        apply_overrides(&cli, request);
    }

    let reports = run_batch(&requests)?;

    let json_to_stdout = cli.json.as_deref() == Some(Path::new("-"));
    if !json_to_stdout {
        for report in &reports {
            print_report(report);
        }
    }
    write_outputs(&cli, &reports)?;
    Ok(())
}

fn inline_request(cli: &Cli) -> anyhow::Result<SimulationRequest> {
    let (Some(mass_kg), Some(diameter_m), Some(velocity_m_s), Some(terrain_type)) =
        (cli.mass, cli.diameter, cli.velocity, cli.terrain)
    else {
        bail!("inline mode needs --mass, --diameter, --velocity and --terrain");
    };
    let asteroid = Asteroid::new(AsteroidParams {
        mass_kg,
        diameter_m,
        velocity_m_s,
        impact_angle_deg: cli.angle,
        composition: cli.composition,
        density_kg_m3: None,
        porosity: None,
        strength_pa: None,
    })?;
    let location = ImpactLocation::new(LocationParams {
        latitude_deg: cli.latitude,
        longitude_deg: cli.longitude,
        elevation_m: 0.0,
        terrain_type,
        water_depth_m: cli.water_depth,
        population_density_per_km2: cli.population,
        infrastructure_density: cli.infrastructure,
        soil_type: None,
        bedrock_depth_m: None,
    })?;
    Ok(SimulationRequest::new(asteroid, location))
}

fn scenario_requests(cli: &Cli) -> anyhow::Result<Vec<SimulationRequest>> {
    let scenarios = load_scenarios(&cli.scenarios)
        .with_context(|| format!("loading scenarios from {}", cli.scenarios.display()))?;
    let selected: Vec<&ScenarioConfig> = match cli.name.as_deref() {
        Some(name) => vec![find_scenario(&scenarios, name)?],
        None => scenarios.iter().collect(),
    };
    if selected.is_empty() {
        bail!("no scenarios found in {}", cli.scenarios.display());
    }
    selected
        .into_iter()
        .map(|scenario| {
            SimulationRequest::try_from(scenario)
                .with_context(|| format!("scenario '{}'", scenario.name))
        })
        .collect()
}

fn apply_overrides(cli: &Cli, request: &mut SimulationRequest) {
    let options = &mut request.options;
    if cli.dv > 0.0 {
        options.dv_mps = cli.dv;
    }
    if cli.method.is_some() {
        options.deflection_method = cli.method.clone();
    }
    options.use_enhancer |= cli.enhance;
    if cli.no_zones {
        options.include_zones = false;
    }
}

fn write_outputs(cli: &Cli, reports: &[SimulationReport]) -> anyhow::Result<()> {
    if let Some(path) = &cli.json {
        let writer = export::writer_for_path(path)?;
        if let [report] = reports {
            report::write_json(writer, "simulate", report)?;
        } else {
            report::write_json(writer, "simulate", &reports)?;
        }
    }

    let Some(first) = reports.first() else {
        return Ok(());
    };
    if let Some(path) = &cli.csv {
        let rows = summary::summary_rows(&first.asteroid, &first.impact, &first.damage);
        summary::write_csv(export::writer_for_path(path)?, &rows)?;
    }
    if let Some(path) = &cli.zones_csv {
        zones::write_csv(export::writer_for_path(path)?, &first.impact.impact_zones)?;
    }
    Ok(())
}

fn print_report(report: &SimulationReport) {
    let impact = &report.impact;
    let damage = &report.damage;

    println!(
        "=== {} ===",
        report.name.as_deref().unwrap_or("Inline impact")
    );
    println!(
        "Energy: {:.4e} J ({:.4} Mt) - {}",
        report.energy.joules,
        report.energy.megatons,
        report.energy.class.label()
    );
    if let Some(mitigation) = &report.mitigation {
        println!(
            "Deflection ({}): dv = {:.1} m/s, success {:.0}%, energy -{:.1}%",
            mitigation.method,
            mitigation.dv_applied_mps,
            mitigation.success_probability * 100.0,
            mitigation.energy_reduction_pct
        );
    }
    println!(
        "Crater: {:.1} m wide, {:.1} m deep",
        impact.crater_diameter_m, impact.crater_depth_m
    );
    println!(
        "Blast radius: {:.2} km, thermal radius: {:.2} km, seismic magnitude {:.2}",
        impact.blast_radius_m / 1_000.0,
        impact.thermal_radius_m / 1_000.0,
        impact.seismic_magnitude
    );
    if impact.tsunami_height_m > 0.0 {
        println!(
            "Tsunami: {:.1} m wave, {:.0} km reach",
            impact.tsunami_height_m, impact.tsunami_radius_km
        );
    }
    println!(
        "Evacuation radius: {:.2} km ({:.1} km²)",
        impact.evacuation_radius_m / 1_000.0,
        impact.affected_area_km2
    );
    println!(
        "Casualties: {}, injured: {}, displaced: {}",
        damage.estimated_casualties, damage.injured_count, damage.displaced_count
    );
    println!(
        "Buildings destroyed: {}, damaged: {}",
        damage.buildings_destroyed, damage.buildings_damaged
    );
    println!(
        "Economic cost: ${:.3e}, recovery {:.1} years",
        damage.total_economic_cost_usd, damage.recovery_time_years
    );
    for zone in &impact.impact_zones {
        println!("  - {}", zone.description);
    }
    for warning in &report.warnings {
        println!("Warning [{:?}]: {}", warning.code, warning.message);
    }
}

fn print_methods() {
    for method in DeflectionMethod::ALL {
        let (min_years, max_years) = method.lead_time_years();
        println!(
            "{:<18} {:<18} effectiveness {:.0}%, TRL {}, {}-{} years, {}",
            method.label(),
            method.display_name(),
            method.effectiveness() * 100.0,
            method.technology_readiness_level(),
            min_years,
            max_years,
            method.cost_estimate()
        );
    }
}
