//! Recommended evacuation radius.

use impact_core::geometry::disc_area;
use impact_core::units::m_to_km;

/// Magnitudes above this widen the evacuation ring.
pub const SEISMIC_WIDENING_THRESHOLD: f64 = 6.0;
const SEISMIC_WIDENING_FACTOR: f64 = 1.5;
const SAFETY_MARGIN: f64 = 1.2;

/// Evacuation radius in metres from the blast/thermal radii and seismic magnitude.
pub fn evacuation_radius(blast_radius_m: f64, thermal_radius_m: f64, seismic_magnitude: f64) -> f64 {
    let mut radius = blast_radius_m.max(thermal_radius_m);
    if seismic_magnitude > SEISMIC_WIDENING_THRESHOLD {
        radius *= SEISMIC_WIDENING_FACTOR;
    }
    radius * SAFETY_MARGIN
}

/// Area of the evacuation disc in km².
pub fn affected_area_km2(evacuation_radius_m: f64) -> f64 {
    disc_area(m_to_km(evacuation_radius_m))
}
