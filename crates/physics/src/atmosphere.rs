//! Atmospheric entry snapshot at a single reference altitude.
//!
//! The drag figures are reported alongside the impact result but are not fed back
//! into the crater or blast models; the energy used downstream is the full kinetic
//! energy at entry.

use impact_core::constants::{
    ATMOSPHERE_SCALE_HEIGHT_M, SEA_LEVEL_AIR_DENSITY, SPHERE_DRAG_COEFFICIENT,
};
use impact_core::geometry::cross_section_from_diameter;
use impact_model::Asteroid;
use serde::{Deserialize, Serialize};

/// Altitude at which entry drag is evaluated unless the caller overrides it.
pub const DEFAULT_REFERENCE_ALTITUDE_M: f64 = 100_000.0;

/// Drag state of the body at the reference altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericEntry {
    pub drag_force_n: f64,
    pub deceleration_m_s2: f64,
    /// `drag_force · altitude`, not an integrated loss.
    pub energy_lost_j: f64,
    pub atmospheric_density_kg_m3: f64,
}

/// Exponential atmosphere density at `altitude_m`.
#[inline]
pub fn density_at(altitude_m: f64) -> f64 {
    SEA_LEVEL_AIR_DENSITY * f64::exp(-altitude_m / ATMOSPHERE_SCALE_HEIGHT_M)
}

/// Evaluate sphere drag on the asteroid at `altitude_m`.
pub fn entry_effects(asteroid: &Asteroid, altitude_m: f64) -> AtmosphericEntry {
    let rho = density_at(altitude_m);
    let area = cross_section_from_diameter(asteroid.diameter_m());
    let v = asteroid.velocity_m_s();
    let drag_force_n = 0.5 * rho * v * v * SPHERE_DRAG_COEFFICIENT * area;

    AtmosphericEntry {
        drag_force_n,
        deceleration_m_s2: drag_force_n / asteroid.mass_kg(),
        energy_lost_j: drag_force_n * altitude_m,
        atmospheric_density_kg_m3: rho,
    }
}
