//! The four assessment stages. Each consumes upstream values only.

use impact_core::geometry::disc_area;
use impact_core::units::m_to_km;
use impact_model::ImpactLocation;
use impact_physics::ImpactResult;
use serde::{Deserialize, Serialize};

use crate::tables::{self, costs};

const BLAST_LETHALITY: f64 = 0.9;
const THERMAL_LETHALITY: f64 = 0.3;
const INJURED_PER_CASUALTY: u64 = 3;
const DISPLACED_PER_CASUALTY: u64 = 10;

const BUILDINGS_PER_KM2: f64 = 1_000.0;
const DESTROYED_SHARE: f64 = 0.3;
const DAMAGED_SHARE: f64 = 0.7;

/// Magnitude below which the environment is untouched.
const ENVIRONMENT_MAGNITUDE_FLOOR: f64 = 4.0;
const MAX_ENVIRONMENT_SCORE: f64 = 10.0;
const ECOSYSTEM_AREA_FACTOR: f64 = 1.5;
const DUST_CLOUD_KM_PER_KM2: f64 = 10.0;
const MAX_TEMPERATURE_DROP_C: f64 = 5.0;
const PRECIPITATION_PCT_PER_MAGNITUDE: f64 = 0.1;

const RECOVERY_YEARS_PER_POINT: f64 = 5.0;
const MAX_RECOVERY_YEARS: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanImpact {
    pub estimated_casualties: u64,
    pub injured_count: u64,
    pub displaced_count: u64,
}

/// Casualties from the blast disc and the thermal ring outside it.
pub fn human_casualties(impact: &ImpactResult, location: &ImpactLocation) -> HumanImpact {
    let density = location.population_density_per_km2();
    let population_blast = density * disc_area(m_to_km(impact.blast_radius_m));
    let population_thermal = density * disc_area(m_to_km(impact.thermal_radius_m));

    let blast = (population_blast * BLAST_LETHALITY) as u64;
    let thermal = ((population_thermal - population_blast) * THERMAL_LETHALITY) as u64;
    let factor = tables::casualty_factor(location.terrain_type());
    let estimated_casualties = (blast.saturating_add(thermal) as f64 * factor) as u64;

    HumanImpact {
        estimated_casualties,
        injured_count: estimated_casualties.saturating_mul(INJURED_PER_CASUALTY),
        displaced_count: estimated_casualties.saturating_mul(DISPLACED_PER_CASUALTY),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureDamage {
    pub infrastructure_damage_cost_usd: f64,
    pub buildings_destroyed: u64,
    pub buildings_damaged: u64,
}

/// Building losses over the evacuation area.
pub fn infrastructure_damage(
    impact: &ImpactResult,
    location: &ImpactLocation,
) -> InfrastructureDamage {
    let exposure =
        location.infrastructure_density() * tables::infrastructure_factor(location.terrain_type());
    let buildings_affected = (impact.affected_area_km2 * BUILDINGS_PER_KM2 * exposure) as u64;
    let buildings_destroyed = (buildings_affected as f64 * DESTROYED_SHARE) as u64;
    let buildings_damaged = (buildings_affected as f64 * DAMAGED_SHARE) as u64;

    InfrastructureDamage {
        infrastructure_damage_cost_usd: buildings_destroyed as f64
            * costs::PER_DESTROYED_BUILDING
            + buildings_damaged as f64 * costs::PER_DAMAGED_BUILDING,
        buildings_destroyed,
        buildings_damaged,
    }
}

/// Large-scale atmospheric consequences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericAftermath {
    pub dust_cloud_radius_km: f64,
    pub temperature_drop_c: f64,
    pub precipitation_change_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    /// 0–10 nominally; weak impacts (magnitude below 4) score negative.
    pub environmental_impact_score: f64,
    pub ecosystem_affected_area_km2: f64,
    pub atmospheric_aftermath: AtmosphericAftermath,
}

pub fn environmental_impact(
    impact: &ImpactResult,
    location: &ImpactLocation,
) -> EnvironmentalImpact {
    let excess_magnitude = impact.seismic_magnitude - ENVIRONMENT_MAGNITUDE_FLOOR;
    let base = excess_magnitude.min(MAX_ENVIRONMENT_SCORE);
    let score = (base * tables::environmental_factor(location.terrain_type()))
        .min(MAX_ENVIRONMENT_SCORE);

    EnvironmentalImpact {
        environmental_impact_score: score,
        ecosystem_affected_area_km2: impact.affected_area_km2 * ECOSYSTEM_AREA_FACTOR,
        atmospheric_aftermath: AtmosphericAftermath {
            dust_cloud_radius_km: impact.affected_area_km2 * DUST_CLOUD_KM_PER_KM2,
            temperature_drop_c: excess_magnitude.min(MAX_TEMPERATURE_DROP_C),
            precipitation_change_pct: PRECIPITATION_PCT_PER_MAGNITUDE * excess_magnitude,
        },
    }
}

/// Itemised economic losses in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub casualty_cost_usd: f64,
    pub injury_cost_usd: f64,
    pub displacement_cost_usd: f64,
    pub infrastructure_cost_usd: f64,
    pub environmental_cost_usd: f64,
}

impl CostBreakdown {
    pub fn new(human: &HumanImpact, infrastructure_cost_usd: f64, environment_score: f64) -> Self {
        Self {
            casualty_cost_usd: human.estimated_casualties as f64 * costs::PER_CASUALTY,
            injury_cost_usd: human.injured_count as f64 * costs::PER_INJURY,
            displacement_cost_usd: human.displaced_count as f64 * costs::PER_DISPLACED,
            infrastructure_cost_usd,
            environmental_cost_usd: environment_score * costs::PER_ENVIRONMENT_POINT,
        }
    }

    pub fn total(&self) -> f64 {
        self.casualty_cost_usd
            + self.injury_cost_usd
            + self.displacement_cost_usd
            + self.infrastructure_cost_usd
            + self.environmental_cost_usd
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicImpact {
    pub total_economic_cost_usd: f64,
    pub recovery_time_years: f64,
    pub cost_breakdown: CostBreakdown,
}

pub fn economic_impact(
    human: &HumanImpact,
    infrastructure: &InfrastructureDamage,
    environment: &EnvironmentalImpact,
) -> EconomicImpact {
    let score = environment.environmental_impact_score;
    let cost_breakdown =
        CostBreakdown::new(human, infrastructure.infrastructure_damage_cost_usd, score);

    EconomicImpact {
        total_economic_cost_usd: cost_breakdown.total(),
        recovery_time_years: (score * RECOVERY_YEARS_PER_POINT).min(MAX_RECOVERY_YEARS),
        cost_breakdown,
    }
}
