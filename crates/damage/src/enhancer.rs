//! Heuristic corrections applied on top of a baseline assessment.
//!
//! Only the human figures move. Infrastructure and environmental costs stay
//! frozen at their baseline values.

use impact_model::{Asteroid, ImpactLocation, TerrainType};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::assessor::DamageAssessment;
use crate::stages::{CostBreakdown, HumanImpact};

const INJURY_DENSITY_SCALE: f64 = 20_000.0;
const MAX_INJURY_BOOST: f64 = 1.0;
const URBAN_CASUALTY_FACTOR: f64 = 0.9;
const LARGE_YIELD_MEGATONS: f64 = 100.0;
const LARGE_YIELD_DISPLACEMENT_FACTOR: f64 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnhancerFeatures {
    pub energy_megatons: f64,
    pub terrain_type: TerrainType,
    pub population_density_per_km2: f64,
}

impl EnhancerFeatures {
    pub fn from_inputs(asteroid: &Asteroid, location: &ImpactLocation) -> Self {
        Self {
            energy_megatons: asteroid.kinetic_energy_megatons(),
            terrain_type: location.terrain_type(),
            population_density_per_km2: location.population_density_per_km2(),
        }
    }
}

/// Adjust `baseline` with density, terrain, and yield corrections.
pub fn enhance_damage(features: &EnhancerFeatures, baseline: &DamageAssessment) -> DamageAssessment {
    let injury_boost =
        (features.population_density_per_km2 / INJURY_DENSITY_SCALE).min(MAX_INJURY_BOOST);
    let injured_count = (baseline.injured_count as f64 * (1.0 + injury_boost)) as u64;

    let estimated_casualties = if features.terrain_type == TerrainType::Urban {
        (baseline.estimated_casualties as f64 * URBAN_CASUALTY_FACTOR).max(0.0) as u64
    } else {
        baseline.estimated_casualties
    };

    let displaced_count = if features.energy_megatons > LARGE_YIELD_MEGATONS {
        (baseline.displaced_count as f64 * LARGE_YIELD_DISPLACEMENT_FACTOR) as u64
    } else {
        baseline.displaced_count
    };

    let human = HumanImpact {
        estimated_casualties,
        injured_count,
        displaced_count,
    };
    let cost_breakdown = CostBreakdown::new(
        &human,
        baseline.infrastructure_damage_cost_usd,
        baseline.environmental_impact_score,
    );
    debug!(
        "enhancer: casualties {} -> {}, injured {} -> {}, displaced {} -> {}",
        baseline.estimated_casualties,
        estimated_casualties,
        baseline.injured_count,
        injured_count,
        baseline.displaced_count,
        displaced_count
    );

    DamageAssessment {
        estimated_casualties,
        injured_count,
        displaced_count,
        total_economic_cost_usd: cost_breakdown.total(),
        cost_breakdown,
        ..baseline.clone()
    }
}
