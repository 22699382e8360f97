use approx::assert_relative_eq;
use impact_assessment::damage::stages::{
    economic_impact, environmental_impact, human_casualties, infrastructure_damage,
};
use impact_assessment::damage::tables;
use impact_assessment::damage::{EnhancerFeatures, assess_damage, enhance_damage};
use impact_assessment::model::{
    Asteroid, AsteroidParams, Composition, ImpactLocation, LocationParams, TerrainType,
};
use impact_assessment::physics::{AtmosphericEntry, ImpactResult};

/// Blast 2 km, thermal 3 km, magnitude 6.5, 10 km² evacuation area.
fn fixed_impact(seismic_magnitude: f64) -> ImpactResult {
    ImpactResult {
        crater_diameter_m: 300.0,
        crater_depth_m: 60.0,
        crater_volume_m3: 2.8e6,
        blast_radius_m: 2_000.0,
        thermal_radius_m: 3_000.0,
        fireball_radius_m: 200.0,
        seismic_magnitude,
        tsunami_height_m: 0.0,
        tsunami_radius_km: 0.0,
        atmospheric_entry: AtmosphericEntry {
            drag_force_n: 0.0,
            deceleration_m_s2: 0.0,
            energy_lost_j: 0.0,
            atmospheric_density_kg_m3: 0.0,
        },
        evacuation_radius_m: 1_784.0,
        affected_area_km2: 10.0,
        impact_zones: Vec::new(),
    }
}

fn site(terrain_type: TerrainType, density: f64, infrastructure: f64) -> ImpactLocation {
    ImpactLocation::new(LocationParams {
        latitude_deg: 0.0,
        longitude_deg: 0.0,
        elevation_m: 0.0,
        terrain_type,
        water_depth_m: None,
        population_density_per_km2: density,
        infrastructure_density: infrastructure,
        soil_type: None,
        bedrock_depth_m: None,
    })
    .expect("valid location")
}

fn chelyabinsk() -> Asteroid {
    Asteroid::new(AsteroidParams {
        mass_kg: 1.0e7,
        diameter_m: 20.0,
        velocity_m_s: 19_000.0,
        impact_angle_deg: 20.0,
        composition: Composition::Stony,
        density_kg_m3: None,
        porosity: None,
        strength_pa: None,
    })
    .expect("valid asteroid")
}

#[test]
fn casualties_truncate_each_ring_before_scaling() {
    let human = human_casualties(&fixed_impact(6.5), &site(TerrainType::Urban, 1_000.0, 0.5));
    // blast: trunc(0.9 · 1000 · 4π) = 11309; thermal ring: trunc(0.3 · 1000 · 5π) = 4712
    assert_eq!(human.estimated_casualties, 16_021);
    assert_eq!(human.injured_count, 48_063);
    assert_eq!(human.displaced_count, 160_210);
}

#[test]
fn casualty_factor_scales_the_total() {
    let rural = human_casualties(&fixed_impact(6.5), &site(TerrainType::Rural, 1_000.0, 0.5));
    assert_eq!(rural.estimated_casualties, (16_021.0 * 0.3) as u64);

    let ocean = human_casualties(&fixed_impact(6.5), &site(TerrainType::Ocean, 1_000.0, 0.5));
    assert_eq!(ocean.estimated_casualties, 0);
    assert_eq!(ocean.displaced_count, 0);
}

#[test]
fn infrastructure_counts_buildings_over_the_evacuation_area() {
    let damage = infrastructure_damage(&fixed_impact(6.5), &site(TerrainType::Urban, 0.0, 0.5));
    assert_eq!(damage.buildings_destroyed, 1_500);
    assert_eq!(damage.buildings_damaged, 3_500);
    assert_relative_eq!(damage.infrastructure_damage_cost_usd, 1.1e9, max_relative = 1e-12);

    let desert = infrastructure_damage(&fixed_impact(6.5), &site(TerrainType::Desert, 0.0, 0.5));
    assert_eq!(desert.buildings_destroyed, 150);
    assert_eq!(desert.buildings_damaged, 350);
}

#[test]
fn environment_scores_excess_magnitude() {
    let env = environmental_impact(&fixed_impact(6.5), &site(TerrainType::Urban, 0.0, 0.0));
    assert_relative_eq!(env.environmental_impact_score, 2.0, max_relative = 1e-12);
    assert_relative_eq!(env.ecosystem_affected_area_km2, 15.0, max_relative = 1e-12);
    assert_relative_eq!(env.atmospheric_aftermath.dust_cloud_radius_km, 100.0, max_relative = 1e-12);
    assert_relative_eq!(env.atmospheric_aftermath.temperature_drop_c, 2.5, max_relative = 1e-12);
    assert_relative_eq!(
        env.atmospheric_aftermath.precipitation_change_pct,
        0.25,
        max_relative = 1e-12
    );
}

#[test]
fn environment_caps_at_ten_and_temperature_at_five() {
    let env = environmental_impact(&fixed_impact(20.0), &site(TerrainType::Ice, 0.0, 0.0));
    assert_eq!(env.environmental_impact_score, 10.0);
    assert_eq!(env.atmospheric_aftermath.temperature_drop_c, 5.0);
}

#[test]
fn weak_impacts_score_below_zero() {
    let env = environmental_impact(&fixed_impact(3.0), &site(TerrainType::Rural, 0.0, 0.0));
    assert_relative_eq!(env.environmental_impact_score, -1.0, max_relative = 1e-12);
}

#[test]
fn economics_price_every_loss() {
    let impact = fixed_impact(6.5);
    let location = site(TerrainType::Urban, 1_000.0, 0.5);
    let human = human_casualties(&impact, &location);
    let infrastructure = infrastructure_damage(&impact, &location);
    let environment = environmental_impact(&impact, &location);
    let economy = economic_impact(&human, &infrastructure, &environment);

    let breakdown = economy.cost_breakdown;
    assert_eq!(breakdown.casualty_cost_usd, 16_021.0 * 1.0e6);
    assert_eq!(breakdown.injury_cost_usd, 48_063.0 * 1.0e5);
    assert_eq!(breakdown.displacement_cost_usd, 160_210.0 * 5.0e4);
    assert_relative_eq!(breakdown.environmental_cost_usd, 2.0e9, max_relative = 1e-12);
    assert_relative_eq!(
        economy.total_economic_cost_usd,
        1.6021e10 + 4.8063e9 + 8.0105e9 + 1.1e9 + 2.0e9,
        max_relative = 1e-12
    );
    assert_relative_eq!(economy.recovery_time_years, 10.0, max_relative = 1e-12);
}

#[test]
fn recovery_time_is_capped() {
    let impact = fixed_impact(30.0);
    let location = site(TerrainType::Forest, 0.0, 0.0);
    let human = human_casualties(&impact, &location);
    let infrastructure = infrastructure_damage(&impact, &location);
    let environment = environmental_impact(&impact, &location);
    let economy = economic_impact(&human, &infrastructure, &environment);
    assert_eq!(economy.recovery_time_years, 50.0);
}

#[test]
fn land_takes_the_default_factors() {
    assert_eq!(tables::casualty_factor(TerrainType::Land), 0.5);
    assert_eq!(tables::infrastructure_factor(TerrainType::Land), 0.5);
    assert_eq!(tables::environmental_factor(TerrainType::Land), 1.0);
}

#[test]
fn assessor_flattens_the_stages() {
    let impact = fixed_impact(6.5);
    let location = site(TerrainType::Urban, 1_000.0, 0.5);
    let damage = assess_damage(&chelyabinsk(), &location, &impact);

    assert_eq!(damage.estimated_casualties, 16_021);
    assert_eq!(damage.buildings_destroyed, 1_500);
    assert_relative_eq!(damage.environmental_impact_score, 2.0, max_relative = 1e-12);
    assert_eq!(damage.cost_breakdown.total(), damage.total_economic_cost_usd);
    assert_eq!(damage.human_impact().injured_count, damage.injured_count);
}

#[test]
fn enhancer_trims_urban_casualties_and_freezes_other_costs() {
    let impact = fixed_impact(6.5);
    let location = site(TerrainType::Urban, 1_000.0, 0.5);
    let baseline = assess_damage(&chelyabinsk(), &location, &impact);
    let features = EnhancerFeatures {
        energy_megatons: 50.0,
        terrain_type: TerrainType::Urban,
        population_density_per_km2: 10_000.0,
    };
    let enhanced = enhance_damage(&features, &baseline);

    assert_eq!(enhanced.estimated_casualties, (16_021.0 * 0.9) as u64);
    assert_eq!(enhanced.injured_count, (48_063.0 * 1.5) as u64);
    assert_eq!(enhanced.displaced_count, baseline.displaced_count);

    assert_eq!(
        enhanced.infrastructure_damage_cost_usd,
        baseline.infrastructure_damage_cost_usd
    );
    assert_eq!(
        enhanced.cost_breakdown.infrastructure_cost_usd,
        baseline.cost_breakdown.infrastructure_cost_usd
    );
    assert_eq!(
        enhanced.cost_breakdown.environmental_cost_usd,
        baseline.cost_breakdown.environmental_cost_usd
    );
    assert_eq!(enhanced.buildings_destroyed, baseline.buildings_destroyed);
    assert_eq!(enhanced.recovery_time_years, baseline.recovery_time_years);

    let expected_total = enhanced.estimated_casualties as f64 * 1.0e6
        + enhanced.injured_count as f64 * 1.0e5
        + enhanced.displaced_count as f64 * 5.0e4
        + baseline.infrastructure_damage_cost_usd
        + baseline.environmental_impact_score * 1.0e9;
    assert_relative_eq!(enhanced.total_economic_cost_usd, expected_total, max_relative = 1e-12);
}

#[test]
fn enhancer_boosts_displacement_for_large_yields() {
    let impact = fixed_impact(6.5);
    let location = site(TerrainType::Rural, 1_000.0, 0.5);
    let baseline = assess_damage(&chelyabinsk(), &location, &impact);
    let features = EnhancerFeatures {
        energy_megatons: 150.0,
        terrain_type: TerrainType::Rural,
        population_density_per_km2: 40_000.0,
    };
    let enhanced = enhance_damage(&features, &baseline);

    assert_eq!(enhanced.estimated_casualties, baseline.estimated_casualties);
    assert_eq!(enhanced.injured_count, baseline.injured_count * 2);
    assert_eq!(
        enhanced.displaced_count,
        (baseline.displaced_count as f64 * 1.25) as u64
    );
}

#[test]
fn enhancer_features_read_the_inputs() {
    let asteroid = chelyabinsk();
    let location = site(TerrainType::Forest, 12.0, 0.1);
    let features = EnhancerFeatures::from_inputs(&asteroid, &location);
    assert_eq!(features.energy_megatons, asteroid.kinetic_energy_megatons());
    assert_eq!(features.terrain_type, TerrainType::Forest);
    assert_eq!(features.population_density_per_km2, 12.0);
}
