//! Asteroid body description and derived energetics.

use std::f64::consts::PI;

use impact_core::units::joules_to_megatons;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, positive, within};
use crate::material::Composition;

/// Raw asteroid parameters as supplied by callers and scenario files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidParams {
    pub mass_kg: f64,
    pub diameter_m: f64,
    pub velocity_m_s: f64,
    pub impact_angle_deg: f64,
    pub composition: Composition,
    #[serde(default)]
    pub density_kg_m3: Option<f64>,
    #[serde(default)]
    pub porosity: Option<f64>,
    #[serde(default)]
    pub strength_pa: Option<f64>,
}

/// Validated asteroid. Construct through [`Asteroid::new`] or deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AsteroidParams", into = "AsteroidParams")]
pub struct Asteroid {
    mass_kg: f64,
    diameter_m: f64,
    velocity_m_s: f64,
    impact_angle_deg: f64,
    composition: Composition,
    density_kg_m3: f64,
    porosity: f64,
    strength_pa: Option<f64>,
}

impl Asteroid {
    /// Validate parameters and fill composition defaults.
    pub fn new(params: AsteroidParams) -> Result<Self, ModelError> {
        let mass_kg = positive("mass_kg", params.mass_kg)?;
        let diameter_m = positive("diameter_m", params.diameter_m)?;
        let velocity_m_s = positive("velocity_m_s", params.velocity_m_s)?;
        let impact_angle_deg = within(
            "impact_angle_deg",
            "within [0, 90]",
            params.impact_angle_deg,
            0.0,
            90.0,
        )?;
        let density_kg_m3 = match params.density_kg_m3 {
            Some(density) => positive("density_kg_m3", density)?,
            None => params.composition.material().density_kg_m3,
        };
        let porosity = within(
            "porosity",
            "within [0, 1]",
            params.porosity.unwrap_or(0.0),
            0.0,
            1.0,
        )?;
        let strength_pa = params
            .strength_pa
            .map(|s| positive("strength_pa", s))
            .transpose()?;

        Ok(Self {
            mass_kg,
            diameter_m,
            velocity_m_s,
            impact_angle_deg,
            composition: params.composition,
            density_kg_m3,
            porosity,
            strength_pa,
        })
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn diameter_m(&self) -> f64 {
        self.diameter_m
    }

    pub fn velocity_m_s(&self) -> f64 {
        self.velocity_m_s
    }

    pub fn impact_angle_deg(&self) -> f64 {
        self.impact_angle_deg
    }

    pub fn composition(&self) -> Composition {
        self.composition
    }

    pub fn density_kg_m3(&self) -> f64 {
        self.density_kg_m3
    }

    pub fn porosity(&self) -> f64 {
        self.porosity
    }

    pub fn strength_pa(&self) -> Option<f64> {
        self.strength_pa
    }

    /// Explicit strength, or the composition default when none was given.
    pub fn effective_strength_pa(&self) -> f64 {
        self.strength_pa
            .unwrap_or_else(|| self.composition.material().strength_pa)
    }

    /// Kinetic energy in joules (`0.5·m·v²`).
    pub fn kinetic_energy_joules(&self) -> f64 {
        0.5 * self.mass_kg * self.velocity_m_s * self.velocity_m_s
    }

    /// Kinetic energy in megatons of TNT.
    pub fn kinetic_energy_megatons(&self) -> f64 {
        joules_to_megatons(self.kinetic_energy_joules())
    }

    /// Diameter of a solid sphere with this mass and bulk density.
    pub fn expected_diameter_m(&self) -> f64 {
        2.0 * ((3.0 * self.mass_kg) / (4.0 * PI * self.density_kg_m3)).cbrt()
    }

    /// Relative deviation of the stated diameter from [`Self::expected_diameter_m`].
    pub fn diameter_mismatch(&self) -> f64 {
        let expected = self.expected_diameter_m();
        (self.diameter_m - expected).abs() / expected
    }

    /// Copy of this body slowed by `delta_v_m_s`, floored at rest.
    ///
    /// This is the only path to a zero-velocity asteroid; it models a deflection
    /// that removes all closing speed. A body at rest serializes but does not
    /// deserialize, since [`Asteroid::new`] requires a positive velocity. Reports
    /// therefore serialize the submitted body, never the decelerated one.
    pub fn decelerated(&self, delta_v_m_s: f64) -> Self {
        Self {
            velocity_m_s: (self.velocity_m_s - delta_v_m_s).max(0.0),
            ..self.clone()
        }
    }
}

impl TryFrom<AsteroidParams> for Asteroid {
    type Error = ModelError;

    fn try_from(value: AsteroidParams) -> Result<Self, Self::Error> {
        Asteroid::new(value)
    }
}

impl From<Asteroid> for AsteroidParams {
    fn from(value: Asteroid) -> Self {
        Self {
            mass_kg: value.mass_kg,
            diameter_m: value.diameter_m,
            velocity_m_s: value.velocity_m_s,
            impact_angle_deg: value.impact_angle_deg,
            composition: value.composition,
            density_kg_m3: Some(value.density_kg_m3),
            porosity: Some(value.porosity),
            strength_pa: value.strength_pa,
        }
    }
}
