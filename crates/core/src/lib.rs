//! Core units, constants, and shared primitives for the impact assessment workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Joules per megaton of TNT.
    pub const JOULES_PER_MEGATON: f64 = 4.184e15;
    /// Earth sea-level atmospheric density (kg/m³).
    pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225;
    /// Earth atmospheric scale height (m).
    pub const ATMOSPHERE_SCALE_HEIGHT_M: f64 = 8_000.0;
    /// Drag coefficient of a sphere.
    pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47;
    /// Average continental crust density (kg/m³).
    pub const CRUST_DENSITY: f64 = 2_700.0;
    /// Sea water density used by the tsunami model (kg/m³).
    pub const WATER_DENSITY: f64 = 1_000.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::JOULES_PER_MEGATON;

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert joules to megatons of TNT.
    #[inline]
    pub fn joules_to_megatons(joules: f64) -> f64 {
        joules / JOULES_PER_MEGATON
    }
}

/// Planar geometry helpers for radius/area bookkeeping.
pub mod geometry {
    use std::f64::consts::PI;

    /// Area of a circle of the given radius.
    #[inline]
    pub fn disc_area(radius: f64) -> f64 {
        PI * radius * radius
    }

    /// Cross-sectional area of a sphere from its diameter.
    #[inline]
    pub fn cross_section_from_diameter(diameter: f64) -> f64 {
        disc_area(diameter / 2.0)
    }
}
