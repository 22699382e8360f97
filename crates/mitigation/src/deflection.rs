use impact_model::Asteroid;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Method label reported when the caller does not name one.
pub const DEFAULT_METHOD_LABEL: &str = "kinetic_impactor";
/// Delta-v equal to this share of the remaining velocity counts as a certain deflection.
const CERTAIN_DEFLECTION_RATIO: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MitigationError {
    #[error("delta-v must be finite and non-negative (got {0} m/s)")]
    InvalidDeltaV(f64),
}

/// Outcome of a deflection attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigationResult {
    pub method: String,
    pub dv_applied_mps: f64,
    /// In [0, 1].
    pub success_probability: f64,
    pub energy_reduction_pct: f64,
}

/// The asteroid to simulate plus the mitigation record, if any was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Deflection {
    pub asteroid: Asteroid,
    pub result: Option<MitigationResult>,
}

/// Reduce the asteroid's velocity by `dv_mps` using the default method label.
pub fn apply_mitigation(asteroid: &Asteroid, dv_mps: f64) -> Result<Deflection, MitigationError> {
    apply_mitigation_with_method(asteroid, dv_mps, DEFAULT_METHOD_LABEL)
}

/// Reduce the asteroid's velocity by `dv_mps`, recording `method` on the result.
///
/// A zero delta-v returns the asteroid unchanged with no result. The velocity is
/// floored at zero, so a delta-v at or above it removes all kinetic energy. The
/// success probability is measured against the *adjusted* velocity.
pub fn apply_mitigation_with_method(
    asteroid: &Asteroid,
    dv_mps: f64,
    method: &str,
) -> Result<Deflection, MitigationError> {
    if !dv_mps.is_finite() || dv_mps < 0.0 {
        return Err(MitigationError::InvalidDeltaV(dv_mps));
    }
    if dv_mps == 0.0 {
        return Ok(Deflection {
            asteroid: asteroid.clone(),
            result: None,
        });
    }

    let adjusted = asteroid.decelerated(dv_mps);
    // v' = 0 divides to +inf, which min() caps at certainty.
    let success_probability =
        (dv_mps / (adjusted.velocity_m_s() * CERTAIN_DEFLECTION_RATIO)).min(1.0);
    let original_energy = asteroid.kinetic_energy_joules();
    let energy_reduction_pct =
        (original_energy - adjusted.kinetic_energy_joules()) / original_energy * 100.0;

    debug!(
        "{method}: dv {dv_mps} m/s, velocity {:.1} -> {:.1} m/s, energy -{energy_reduction_pct:.2}%",
        asteroid.velocity_m_s(),
        adjusted.velocity_m_s()
    );

    Ok(Deflection {
        asteroid: adjusted,
        result: Some(MitigationResult {
            method: method.to_string(),
            dv_applied_mps: dv_mps,
            success_probability,
            energy_reduction_pct,
        }),
    })
}
