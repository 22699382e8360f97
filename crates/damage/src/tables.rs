//! Terrain-keyed scaling factors and unit costs.
//!
//! `Land` has no dedicated entry in any table and takes the table default.

use impact_model::TerrainType;

/// Fraction of the computed casualties that applies on a terrain.
pub fn casualty_factor(terrain: TerrainType) -> f64 {
    match terrain {
        TerrainType::Urban => 1.0,
        TerrainType::Rural => 0.3,
        TerrainType::Mountain => 0.1,
        TerrainType::Desert => 0.05,
        TerrainType::Forest => 0.2,
        TerrainType::Ice => 0.1,
        TerrainType::Ocean => 0.0,
        TerrainType::Land => 0.5,
    }
}

/// Building exposure relative to a dense urban grid.
pub fn infrastructure_factor(terrain: TerrainType) -> f64 {
    match terrain {
        TerrainType::Urban => 1.0,
        TerrainType::Rural => 0.4,
        TerrainType::Mountain => 0.2,
        TerrainType::Desert => 0.1,
        TerrainType::Forest => 0.3,
        TerrainType::Ice => 0.1,
        TerrainType::Ocean => 0.0,
        TerrainType::Land => 0.5,
    }
}

/// Ecological sensitivity multiplier for the environmental score.
pub fn environmental_factor(terrain: TerrainType) -> f64 {
    match terrain {
        TerrainType::Urban => 0.8,
        TerrainType::Rural => 1.0,
        TerrainType::Mountain => 1.2,
        TerrainType::Desert => 0.6,
        TerrainType::Forest => 1.5,
        TerrainType::Ice => 2.0,
        TerrainType::Ocean => 1.0,
        TerrainType::Land => 1.0,
    }
}

/// Unit costs in USD.
pub mod costs {
    pub const PER_CASUALTY: f64 = 1_000_000.0;
    pub const PER_INJURY: f64 = 100_000.0;
    pub const PER_DISPLACED: f64 = 50_000.0;
    pub const PER_DESTROYED_BUILDING: f64 = 500_000.0;
    pub const PER_DAMAGED_BUILDING: f64 = 100_000.0;
    /// Per point of environmental impact score.
    pub const PER_ENVIRONMENT_POINT: f64 = 1.0e9;
}
