//! Damage assessor: runs the four stages and flattens their outputs.

use impact_model::{Asteroid, ImpactLocation};
use impact_physics::ImpactResult;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::stages::{
    self, AtmosphericAftermath, CostBreakdown, EconomicImpact, EnvironmentalImpact, HumanImpact,
    InfrastructureDamage,
};

/// Consequences of an impact for people, buildings, environment, and economy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageAssessment {
    pub estimated_casualties: u64,
    pub injured_count: u64,
    pub displaced_count: u64,
    pub infrastructure_damage_cost_usd: f64,
    pub buildings_destroyed: u64,
    pub buildings_damaged: u64,
    pub environmental_impact_score: f64,
    pub ecosystem_affected_area_km2: f64,
    pub atmospheric_aftermath: AtmosphericAftermath,
    pub total_economic_cost_usd: f64,
    pub recovery_time_years: f64,
    pub cost_breakdown: CostBreakdown,
}

impl DamageAssessment {
    fn from_stages(
        human: HumanImpact,
        infrastructure: InfrastructureDamage,
        environment: EnvironmentalImpact,
        economy: EconomicImpact,
    ) -> Self {
        Self {
            estimated_casualties: human.estimated_casualties,
            injured_count: human.injured_count,
            displaced_count: human.displaced_count,
            infrastructure_damage_cost_usd: infrastructure.infrastructure_damage_cost_usd,
            buildings_destroyed: infrastructure.buildings_destroyed,
            buildings_damaged: infrastructure.buildings_damaged,
            environmental_impact_score: environment.environmental_impact_score,
            ecosystem_affected_area_km2: environment.ecosystem_affected_area_km2,
            atmospheric_aftermath: environment.atmospheric_aftermath,
            total_economic_cost_usd: economy.total_economic_cost_usd,
            recovery_time_years: economy.recovery_time_years,
            cost_breakdown: economy.cost_breakdown,
        }
    }

    pub fn human_impact(&self) -> HumanImpact {
        HumanImpact {
            estimated_casualties: self.estimated_casualties,
            injured_count: self.injured_count,
            displaced_count: self.displaced_count,
        }
    }
}

/// Assess damage for an already computed impact.
///
/// The asteroid only labels the log output; every figure derives from `impact`
/// and `location`.
pub fn assess_damage(
    asteroid: &Asteroid,
    location: &ImpactLocation,
    impact: &ImpactResult,
) -> DamageAssessment {
    debug!(
        "assessing {} impact ({:.3e} Mt) on {} terrain",
        asteroid.composition().label(),
        asteroid.kinetic_energy_megatons(),
        location.terrain_type().label()
    );

    let human = stages::human_casualties(impact, location);
    debug!(
        "human: {} casualties, {} injured, {} displaced",
        human.estimated_casualties, human.injured_count, human.displaced_count
    );

    let infrastructure = stages::infrastructure_damage(impact, location);
    debug!(
        "infrastructure: {} destroyed, {} damaged",
        infrastructure.buildings_destroyed, infrastructure.buildings_damaged
    );

    let environment = stages::environmental_impact(impact, location);
    debug!(
        "environment: score {:.2}",
        environment.environmental_impact_score
    );

    let economy = stages::economic_impact(&human, &infrastructure, &environment);
    debug!(
        "economy: total {:.3e} USD, recovery {:.1} years",
        economy.total_economic_cost_usd, economy.recovery_time_years
    );

    DamageAssessment::from_stages(human, infrastructure, environment, economy)
}
