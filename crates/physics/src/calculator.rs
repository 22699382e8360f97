//! Impact calculator: sequences the physics stages into one [`ImpactResult`].

use impact_model::{Asteroid, ImpactLocation};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::atmosphere::{self, AtmosphericEntry, DEFAULT_REFERENCE_ALTITUDE_M};
use crate::blast;
use crate::crater;
use crate::energy;
use crate::evacuation;
use crate::tsunami;
use crate::zones::{self, ImpactZone};

/// Fatal computation errors. Validated inputs never produce these; they flag a
/// degenerate body handed in by a preceding stage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImpactError {
    #[error("kinetic energy must be finite and positive (got {energy_joules} J)")]
    NonPositiveEnergy { energy_joules: f64 },
    #[error("ocean impact produced a degenerate crater (diameter {diameter_m} m)")]
    DegenerateCrater { diameter_m: f64 },
}

/// Physical consequences of a single impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub crater_diameter_m: f64,
    pub crater_depth_m: f64,
    pub crater_volume_m3: f64,
    pub blast_radius_m: f64,
    pub thermal_radius_m: f64,
    pub fireball_radius_m: f64,
    pub seismic_magnitude: f64,
    /// Zero for every terrain except ocean.
    pub tsunami_height_m: f64,
    pub tsunami_radius_km: f64,
    pub atmospheric_entry: AtmosphericEntry,
    pub evacuation_radius_m: f64,
    pub affected_area_km2: f64,
    pub impact_zones: Vec<ImpactZone>,
}

/// Run the physics chain for `asteroid` striking `location`.
///
/// Stage order is fixed: atmospheric entry, crater, blast, tsunami, evacuation,
/// zones. Entry drag is reported only and does not alter later stages.
pub fn compute_impact(
    asteroid: &Asteroid,
    location: &ImpactLocation,
) -> Result<ImpactResult, ImpactError> {
    let energy_joules = energy::kinetic_energy(asteroid.mass_kg(), asteroid.velocity_m_s());
    if !(energy_joules.is_finite() && energy_joules > 0.0) {
        return Err(ImpactError::NonPositiveEnergy { energy_joules });
    }

    let atmospheric_entry = atmosphere::entry_effects(asteroid, DEFAULT_REFERENCE_ALTITUDE_M);
    debug!(
        "entry: drag {:.3e} N, deceleration {:.3e} m/s^2",
        atmospheric_entry.drag_force_n, atmospheric_entry.deceleration_m_s2
    );

    let crater = crater::crater_formation(
        energy_joules,
        asteroid.impact_angle_deg(),
        location.terrain_type(),
    );
    debug!(
        "crater: diameter {:.1} m, depth {:.1} m",
        crater.diameter_m, crater.depth_m
    );

    let blast = blast::blast_effects(energy_joules);
    debug!(
        "blast: radius {:.1} m, thermal {:.1} m, magnitude {:.2}",
        blast.blast_radius_m, blast.thermal_radius_m, blast.seismic_magnitude
    );

    let tsunami = tsunami::tsunami_effects(energy_joules, location, crater.diameter_m)?;
    if tsunami.height_m > 0.0 {
        debug!(
            "tsunami: height {:.2} m, reach {:.1} km",
            tsunami.height_m, tsunami.radius_km
        );
    }

    let evacuation_radius_m = evacuation::evacuation_radius(
        blast.blast_radius_m,
        blast.thermal_radius_m,
        blast.seismic_magnitude,
    );
    let affected_area_km2 = evacuation::affected_area_km2(evacuation_radius_m);
    let impact_zones = zones::impact_zones(&blast, &tsunami, location);

    Ok(ImpactResult {
        crater_diameter_m: crater.diameter_m,
        crater_depth_m: crater.depth_m,
        crater_volume_m3: crater.volume_m3,
        blast_radius_m: blast.blast_radius_m,
        thermal_radius_m: blast.thermal_radius_m,
        fireball_radius_m: blast.fireball_radius_m,
        seismic_magnitude: blast.seismic_magnitude,
        tsunami_height_m: tsunami.height_m,
        tsunami_radius_km: tsunami.radius_km,
        atmospheric_entry,
        evacuation_radius_m,
        affected_area_km2,
        impact_zones,
    })
}
