//! Simple transient crater scaling.

use impact_core::constants::CRUST_DENSITY;
use impact_model::TerrainType;
use serde::{Deserialize, Serialize};

const OCEAN_DIAMETER_FACTOR: f64 = 1.2;
const OCEAN_DEPTH_FACTOR: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraterGeometry {
    pub diameter_m: f64,
    pub depth_m: f64,
    pub volume_m3: f64,
}

/// Crater size from impact energy and entry angle.
///
/// `D = 1.25 · (E / ρ_crust)^(1/3) · sin(θ)^(1/3)`. Volume is taken from the
/// unadjusted bowl; ocean sites then widen the diameter and shallow the depth.
pub fn crater_formation(
    energy_joules: f64,
    impact_angle_deg: f64,
    terrain: TerrainType,
) -> CraterGeometry {
    let angle_rad = impact_angle_deg.to_radians();
    let mut diameter_m =
        1.25 * (energy_joules / CRUST_DENSITY).cbrt() * angle_rad.sin().cbrt();
    let mut depth_m = diameter_m / 5.0;
    let volume_m3 = (std::f64::consts::PI / 6.0) * diameter_m * diameter_m * depth_m;

    if terrain.is_ocean() {
        diameter_m *= OCEAN_DIAMETER_FACTOR;
        depth_m *= OCEAN_DEPTH_FACTOR;
    }

    CraterGeometry {
        diameter_m,
        depth_m,
        volume_m3,
    }
}
