use std::process::ExitCode;

use clap::Parser;
use impact_assessment::model::{Asteroid, AsteroidParams, Composition};
use impact_assessment::physics::EnergyClass;
use impact_assessment::simulation::DIAMETER_MISMATCH_TOLERANCE;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Validate asteroid parameters and report their energy class"
)]
struct Cli {
    /// Mass in kg
    #[arg(long)]
    mass: f64,

    /// Diameter in m
    #[arg(long)]
    diameter: f64,

    /// Entry velocity in m/s
    #[arg(long)]
    velocity: f64,

    /// Impact angle from horizontal in degrees
    #[arg(long, default_value_t = 45.0)]
    angle: f64,

    #[arg(long, default_value = "stony")]
    composition: Composition,

    /// Bulk density in kg/m³ (defaults to the composition value)
    #[arg(long)]
    density: Option<f64>,

    #[arg(long)]
    porosity: Option<f64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let asteroid = match Asteroid::new(AsteroidParams {
        mass_kg: cli.mass,
        diameter_m: cli.diameter,
        velocity_m_s: cli.velocity,
        impact_angle_deg: cli.angle,
        composition: cli.composition,
        density_kg_m3: cli.density,
        porosity: cli.porosity,
        strength_pa: None,
    }) {
        Ok(asteroid) => asteroid,
        Err(err) => {
            println!("valid: false");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let megatons = asteroid.kinetic_energy_megatons();
    println!("valid: true");
    println!("kinetic_energy_joules: {:.6e}", asteroid.kinetic_energy_joules());
    println!("kinetic_energy_megatons: {megatons:.6}");
    println!(
        "energy_classification: {}",
        EnergyClass::classify(megatons).label()
    );

    let mismatch = asteroid.diameter_mismatch();
    let verdict = if mismatch > DIAMETER_MISMATCH_TOLERANCE {
        "inconsistent"
    } else {
        "consistent"
    };
    println!(
        "diameter_check: {verdict} (expected {:.1} m, deviation {:.1}%)",
        asteroid.expected_diameter_m(),
        mismatch * 100.0
    );
    ExitCode::SUCCESS
}
