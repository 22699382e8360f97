//! Named hazard rings reported with the impact result.

use impact_core::units::{km_to_m, m_to_km};
use impact_model::ImpactLocation;
use serde::{Deserialize, Serialize};

use crate::blast::BlastEffects;
use crate::tsunami::TsunamiEffects;

/// Waves at or below this height do not get a tsunami zone.
pub const TSUNAMI_ZONE_MIN_HEIGHT_M: f64 = 1.0;
const MAX_INTENSITY: f64 = 10.0;
const THERMAL_INTENSITY: f64 = 8.0;
const BLAST_INTENSITY: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    Tsunami,
    Seismic,
    Thermal,
    Blast,
}

impl ZoneKind {
    pub fn label(self) -> &'static str {
        match self {
            ZoneKind::Tsunami => "tsunami",
            ZoneKind::Seismic => "seismic",
            ZoneKind::Thermal => "thermal",
            ZoneKind::Blast => "blast",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactZone {
    #[serde(rename = "zone_type")]
    pub kind: ZoneKind,
    pub radius_m: f64,
    /// 0–10 scale.
    pub intensity: f64,
    pub affected_population: u64,
    pub description: String,
}

impl ImpactZone {
    fn new(
        kind: ZoneKind,
        radius_m: f64,
        intensity: f64,
        location: &ImpactLocation,
        description: String,
    ) -> Self {
        Self {
            kind,
            radius_m,
            intensity,
            affected_population: linear_population(radius_m, location),
            description,
        }
    }
}

/// Population estimate along the zone radius: `radius_km · density`, truncated.
///
/// This is a linear figure, not an area integral.
fn linear_population(radius_m: f64, location: &ImpactLocation) -> u64 {
    (m_to_km(radius_m) * location.population_density_per_km2()) as u64
}

/// Build the hazard zones in reporting order: tsunami (if any), seismic, thermal, blast.
pub fn impact_zones(
    blast: &BlastEffects,
    tsunami: &TsunamiEffects,
    location: &ImpactLocation,
) -> Vec<ImpactZone> {
    let mut zones = Vec::with_capacity(4);

    if location.terrain_type().is_ocean() && tsunami.height_m > TSUNAMI_ZONE_MIN_HEIGHT_M {
        zones.push(ImpactZone::new(
            ZoneKind::Tsunami,
            km_to_m(tsunami.height_m),
            tsunami.height_m.min(MAX_INTENSITY),
            location,
            format!("Tsunami zone with {:.1}m wave height", tsunami.height_m),
        ));
    }

    zones.push(ImpactZone::new(
        ZoneKind::Seismic,
        blast.blast_radius_m * 2.0,
        blast.seismic_magnitude.min(MAX_INTENSITY),
        location,
        format!("Seismic zone with magnitude {:.1}", blast.seismic_magnitude),
    ));

    zones.push(ImpactZone::new(
        ZoneKind::Thermal,
        blast.thermal_radius_m,
        THERMAL_INTENSITY,
        location,
        format!(
            "Thermal radiation zone with {:.1}km radius",
            m_to_km(blast.thermal_radius_m)
        ),
    ));

    zones.push(ImpactZone::new(
        ZoneKind::Blast,
        blast.blast_radius_m,
        BLAST_INTENSITY,
        location,
        format!("Blast zone with {:.1}km radius", m_to_km(blast.blast_radius_m)),
    ));

    zones
}
