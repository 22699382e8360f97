//! Material property table keyed by asteroid composition.

use serde::{Deserialize, Serialize};

/// Bulk composition classes accepted by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    Iron,
    Stony,
    Carbonaceous,
    Mixed,
}

/// Default material properties for a composition class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    pub density_kg_m3: f64,
    pub strength_pa: f64,
    pub thermal_conductivity_w_mk: f64,
}

const IRON: MaterialProperties = MaterialProperties {
    density_kg_m3: 7_800.0,
    strength_pa: 1.0e9,
    thermal_conductivity_w_mk: 80.0,
};

const STONY: MaterialProperties = MaterialProperties {
    density_kg_m3: 3_000.0,
    strength_pa: 1.0e8,
    thermal_conductivity_w_mk: 2.0,
};

const CARBONACEOUS: MaterialProperties = MaterialProperties {
    density_kg_m3: 2_000.0,
    strength_pa: 1.0e7,
    thermal_conductivity_w_mk: 1.0,
};

const MIXED: MaterialProperties = MaterialProperties {
    density_kg_m3: 4_000.0,
    strength_pa: 5.0e8,
    thermal_conductivity_w_mk: 10.0,
};

impl Composition {
    /// Look up the default material properties for this composition.
    pub fn material(self) -> MaterialProperties {
        match self {
            Composition::Iron => IRON,
            Composition::Stony => STONY,
            Composition::Carbonaceous => CARBONACEOUS,
            Composition::Mixed => MIXED,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Composition::Iron => "iron",
            Composition::Stony => "stony",
            Composition::Carbonaceous => "carbonaceous",
            Composition::Mixed => "mixed",
        }
    }
}

impl std::str::FromStr for Composition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iron" => Ok(Composition::Iron),
            "stony" => Ok(Composition::Stony),
            "carbonaceous" => Ok(Composition::Carbonaceous),
            "mixed" => Ok(Composition::Mixed),
            other => Err(format!("unknown composition '{other}'")),
        }
    }
}
