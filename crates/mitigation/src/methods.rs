//! Reference catalogue of planetary-defence deflection techniques.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeflectionMethod {
    KineticImpactor,
    GravityTractor,
    NuclearExplosive,
    LaserAblation,
}

impl DeflectionMethod {
    pub const ALL: [DeflectionMethod; 4] = [
        DeflectionMethod::KineticImpactor,
        DeflectionMethod::GravityTractor,
        DeflectionMethod::NuclearExplosive,
        DeflectionMethod::LaserAblation,
    ];

    /// Parse a snake_case label such as `gravity_tractor`. Case and dashes are tolerated.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL.into_iter().find(|method| method.label() == normalized)
    }

    pub fn label(self) -> &'static str {
        match self {
            DeflectionMethod::KineticImpactor => "kinetic_impactor",
            DeflectionMethod::GravityTractor => "gravity_tractor",
            DeflectionMethod::NuclearExplosive => "nuclear_explosive",
            DeflectionMethod::LaserAblation => "laser_ablation",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DeflectionMethod::KineticImpactor => "Kinetic Impactor",
            DeflectionMethod::GravityTractor => "Gravity Tractor",
            DeflectionMethod::NuclearExplosive => "Nuclear Explosive",
            DeflectionMethod::LaserAblation => "Laser Ablation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DeflectionMethod::KineticImpactor => {
                "Direct collision with asteroid to change velocity"
            }
            DeflectionMethod::GravityTractor => {
                "Use spacecraft gravity to gradually deflect asteroid"
            }
            DeflectionMethod::NuclearExplosive => {
                "Nuclear detonation to fragment or deflect asteroid"
            }
            DeflectionMethod::LaserAblation => "Use focused laser to vaporize asteroid material",
        }
    }

    /// Nominal effectiveness in [0, 1].
    pub fn effectiveness(self) -> f64 {
        match self {
            DeflectionMethod::KineticImpactor => 0.8,
            DeflectionMethod::GravityTractor => 0.6,
            DeflectionMethod::NuclearExplosive => 0.9,
            DeflectionMethod::LaserAblation => 0.4,
        }
    }

    pub fn cost_estimate(self) -> &'static str {
        match self {
            DeflectionMethod::KineticImpactor => "$500M - $1B",
            DeflectionMethod::GravityTractor => "$1B - $2B",
            DeflectionMethod::NuclearExplosive => "$2B - $5B",
            DeflectionMethod::LaserAblation => "$3B - $10B",
        }
    }

    /// Mission lead time in years, as an inclusive (min, max) range.
    pub fn lead_time_years(self) -> (u32, u32) {
        match self {
            DeflectionMethod::KineticImpactor => (5, 10),
            DeflectionMethod::GravityTractor => (10, 20),
            DeflectionMethod::NuclearExplosive => (3, 7),
            DeflectionMethod::LaserAblation => (15, 25),
        }
    }

    /// Technology readiness level (1–9).
    pub fn technology_readiness_level(self) -> u8 {
        match self {
            DeflectionMethod::KineticImpactor => 9,
            DeflectionMethod::GravityTractor => 6,
            DeflectionMethod::NuclearExplosive => 4,
            DeflectionMethod::LaserAblation => 3,
        }
    }

    pub fn pros(self) -> &'static [&'static str] {
        match self {
            DeflectionMethod::KineticImpactor => {
                &["Proven technology", "High effectiveness", "Relatively simple"]
            }
            DeflectionMethod::GravityTractor => {
                &["Non-destructive", "Works on larger asteroids", "Precise control"]
            }
            DeflectionMethod::NuclearExplosive => &[
                "High effectiveness",
                "Works on large asteroids",
                "Fast implementation",
            ],
            DeflectionMethod::LaserAblation => &["Precise control", "No debris", "Scalable"],
        }
    }

    pub fn cons(self) -> &'static [&'static str] {
        match self {
            DeflectionMethod::KineticImpactor => {
                &["Requires precise targeting", "Limited to smaller asteroids"]
            }
            DeflectionMethod::GravityTractor => {
                &["Requires long lead time", "Complex mission design"]
            }
            DeflectionMethod::NuclearExplosive => &[
                "Creates debris",
                "Political complications",
                "Uncertain outcomes",
            ],
            DeflectionMethod::LaserAblation => &[
                "High power requirements",
                "Limited range",
                "Experimental technology",
            ],
        }
    }
}

impl fmt::Display for DeflectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeflectionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("unknown deflection method '{s}'"))
    }
}
