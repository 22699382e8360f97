//! Blast, thermal, fireball and seismic scaling from yield.

use impact_core::units::{joules_to_megatons, km_to_m};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlastEffects {
    pub blast_radius_m: f64,
    pub thermal_radius_m: f64,
    pub fireball_radius_m: f64,
    pub seismic_magnitude: f64,
}

/// Cube-root yield scaling for the radii and a log-energy seismic magnitude.
pub fn blast_effects(energy_joules: f64) -> BlastEffects {
    let yield_scale = joules_to_megatons(energy_joules).cbrt();
    let blast_radius_m = km_to_m(yield_scale);

    BlastEffects {
        blast_radius_m,
        thermal_radius_m: 1.5 * blast_radius_m,
        fireball_radius_m: 100.0 * yield_scale,
        seismic_magnitude: seismic_magnitude(energy_joules),
    }
}

/// Richter-like magnitude: `0.67·log10(E) + 4.4`.
#[inline]
pub fn seismic_magnitude(energy_joules: f64) -> f64 {
    0.67 * energy_joules.log10() + 4.4
}
