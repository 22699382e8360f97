//! End-to-end simulation: deflection, physics, damage, and optional enhancement.

use impact_config::ScenarioConfig;
use impact_damage::tables::casualty_factor;
use impact_damage::{DamageAssessment, EnhancerFeatures, assess_damage, enhance_damage};
use impact_mitigation::{DEFAULT_METHOD_LABEL, MitigationError, MitigationResult};
use impact_model::{Asteroid, ImpactLocation, ModelError};
use impact_physics::{EnergyClass, ImpactError, ImpactResult, compute_impact};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Relative diameter deviation above which a body is flagged as inconsistent.
pub const DIAMETER_MISMATCH_TOLERANCE: f64 = 0.1;

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid input: {0}")]
    Model(#[from] ModelError),
    #[error("impact computation failed: {0}")]
    Impact(#[from] ImpactError),
    #[error("deflection failed: {0}")]
    Mitigation(#[from] MitigationError),
}

/// Run-time switches for a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOptions {
    pub dv_mps: f64,
    pub deflection_method: Option<String>,
    pub use_enhancer: bool,
    pub include_zones: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            dv_mps: 0.0,
            deflection_method: None,
            use_enhancer: false,
            include_zones: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    pub name: Option<String>,
    pub asteroid: Asteroid,
    pub location: ImpactLocation,
    pub options: SimulationOptions,
}

impl SimulationRequest {
    pub fn new(asteroid: Asteroid, location: ImpactLocation) -> Self {
        Self {
            name: None,
            asteroid,
            location,
            options: SimulationOptions::default(),
        }
    }
}

impl TryFrom<&ScenarioConfig> for SimulationRequest {
    type Error = SimulationError;

    /// Validate the scenario's parameter blocks and merge any enrichment data.
    fn try_from(scenario: &ScenarioConfig) -> Result<Self, Self::Error> {
        let asteroid = Asteroid::new(scenario.asteroid.clone())?;
        let mut location = ImpactLocation::new(scenario.location.clone())?;
        if let Some(enrichment) = &scenario.enrichment {
            location = location.enriched(enrichment)?;
        }
        let (dv_mps, deflection_method) = match &scenario.mitigation {
            Some(mitigation) => (mitigation.dv_mps, mitigation.method.clone()),
            None => (0.0, None),
        };

        Ok(Self {
            name: Some(scenario.name.clone()),
            asteroid,
            location,
            options: SimulationOptions {
                dv_mps,
                deflection_method,
                use_enhancer: scenario.enhance,
                include_zones: scenario.include_zones,
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    DiameterMismatch,
    ZeroDamageTerrain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationWarning {
    pub code: WarningCode,
    pub message: String,
}

/// Yield of the body that actually reached the ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySummary {
    pub joules: f64,
    pub megatons: f64,
    pub class: EnergyClass,
}

impl EnergySummary {
    pub fn of(asteroid: &Asteroid) -> Self {
        let megatons = asteroid.kinetic_energy_megatons();
        Self {
            joules: asteroid.kinetic_energy_joules(),
            megatons,
            class: EnergyClass::classify(megatons),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetadata {
    pub engine_version: String,
    pub enhanced: bool,
    pub deflection_applied: bool,
    pub dv_mps: f64,
    pub deflection_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub name: Option<String>,
    /// Body as submitted, before any deflection.
    pub asteroid: Asteroid,
    pub location: ImpactLocation,
    pub energy: EnergySummary,
    pub impact: ImpactResult,
    pub damage: DamageAssessment,
    pub mitigation: Option<MitigationResult>,
    pub warnings: Vec<SimulationWarning>,
    pub metadata: SimulationMetadata,
}

/// Run one simulation.
///
/// Physics and damage are evaluated on the deflected body when `dv_mps > 0`.
/// A deflection that stops the body entirely fails with
/// [`ImpactError::NonPositiveEnergy`].
pub fn run_simulation(request: &SimulationRequest) -> Result<SimulationReport, SimulationError> {
    let options = &request.options;
    let method = options
        .deflection_method
        .as_deref()
        .unwrap_or(DEFAULT_METHOD_LABEL);
    let deflection =
        impact_mitigation::apply_mitigation_with_method(&request.asteroid, options.dv_mps, method)?;
    let simulated = &deflection.asteroid;

    let mut impact = compute_impact(simulated, &request.location)?;
    let mut damage = assess_damage(simulated, &request.location, &impact);
    if options.use_enhancer {
        let features = EnhancerFeatures::from_inputs(simulated, &request.location);
        damage = enhance_damage(&features, &damage);
    }
    if !options.include_zones {
        impact.impact_zones.clear();
    }

    let warnings = collect_warnings(&request.asteroid, &request.location);
    for warning in &warnings {
        warn!("{:?}: {}", warning.code, warning.message);
    }

    let energy = EnergySummary::of(simulated);
    info!(
        "simulated {}: {:.3e} Mt ({}), {} casualties, {:.3e} USD",
        request.name.as_deref().unwrap_or("impact"),
        energy.megatons,
        energy.class.label(),
        damage.estimated_casualties,
        damage.total_economic_cost_usd
    );

    let deflection_applied = deflection.result.is_some();
    Ok(SimulationReport {
        name: request.name.clone(),
        asteroid: request.asteroid.clone(),
        location: request.location.clone(),
        energy,
        impact,
        damage,
        warnings,
        metadata: SimulationMetadata {
            engine_version: crate::version().to_string(),
            enhanced: options.use_enhancer,
            deflection_applied,
            dv_mps: options.dv_mps,
            deflection_method: deflection_applied.then(|| method.to_string()),
        },
        mitigation: deflection.result,
    })
}

/// Run every request; the first failure aborts the batch.
pub fn run_batch(requests: &[SimulationRequest]) -> Result<Vec<SimulationReport>, SimulationError> {
    requests.iter().map(run_simulation).collect()
}

fn collect_warnings(asteroid: &Asteroid, location: &ImpactLocation) -> Vec<SimulationWarning> {
    let mut warnings = Vec::new();

    let mismatch = asteroid.diameter_mismatch();
    if mismatch > DIAMETER_MISMATCH_TOLERANCE {
        warnings.push(SimulationWarning {
            code: WarningCode::DiameterMismatch,
            message: format!(
                "stated diameter {:.1} m deviates {:.0}% from the {:.1} m implied by mass and density",
                asteroid.diameter_m(),
                mismatch * 100.0,
                asteroid.expected_diameter_m()
            ),
        });
    }

    let terrain = location.terrain_type();
    if casualty_factor(terrain) == 0.0 {
        warnings.push(SimulationWarning {
            code: WarningCode::ZeroDamageTerrain,
            message: format!(
                "{} impacts carry no direct casualty or infrastructure estimate",
                terrain.label()
            ),
        });
    }

    warnings
}
