//! Wave height and reach for ocean impacts.

use impact_core::constants::WATER_DENSITY;
use impact_core::units::joules_to_megatons;
use impact_model::ImpactLocation;
use serde::{Deserialize, Serialize};

use crate::calculator::ImpactError;

/// Water depth assumed when an ocean site carries no (or zero) bathymetry.
pub const DEFAULT_WATER_DEPTH_M: f64 = 1_000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TsunamiEffects {
    pub height_m: f64,
    pub radius_km: f64,
}

/// Tsunami estimate; zero on every terrain except ocean.
///
/// `H = 0.5 · (E / ρ_water)^(1/4) · (depth / D_crater)^(1/2)`, `R = 1000 · Mt^(1/3)` km.
pub fn tsunami_effects(
    energy_joules: f64,
    location: &ImpactLocation,
    crater_diameter_m: f64,
) -> Result<TsunamiEffects, ImpactError> {
    if !location.terrain_type().is_ocean() {
        return Ok(TsunamiEffects::default());
    }
    if crater_diameter_m <= 0.0 {
        return Err(ImpactError::DegenerateCrater {
            diameter_m: crater_diameter_m,
        });
    }

    // Zero depth counts as uncharted.
    let water_depth_m = location
        .water_depth_m()
        .filter(|depth| *depth > 0.0)
        .unwrap_or(DEFAULT_WATER_DEPTH_M);
    let height_m = 0.5
        * (energy_joules / WATER_DENSITY).powf(0.25)
        * (water_depth_m / crater_diameter_m).sqrt();
    let radius_km = 1_000.0 * joules_to_megatons(energy_joules).cbrt();

    Ok(TsunamiEffects {
        height_m,
        radius_km,
    })
}
