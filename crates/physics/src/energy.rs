//! Kinetic energy and yield classification.

use serde::{Deserialize, Serialize};

/// Kinetic energy in joules (`0.5·m·v²`).
#[inline]
pub fn kinetic_energy(mass_kg: f64, velocity_m_s: f64) -> f64 {
    0.5 * mass_kg * velocity_m_s * velocity_m_s
}

/// Coarse severity band for an impact yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyClass {
    Fireball,
    LocalDamage,
    RegionalDamage,
    ContinentalDamage,
    GlobalEffects,
}

impl EnergyClass {
    /// Band a yield given in megatons. Bounds are exclusive upper limits.
    pub fn classify(megatons: f64) -> Self {
        if megatons < 0.001 {
            EnergyClass::Fireball
        } else if megatons < 0.1 {
            EnergyClass::LocalDamage
        } else if megatons < 10.0 {
            EnergyClass::RegionalDamage
        } else if megatons < 1_000.0 {
            EnergyClass::ContinentalDamage
        } else {
            EnergyClass::GlobalEffects
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnergyClass::Fireball => "Small (Fireball)",
            EnergyClass::LocalDamage => "Medium (Local Damage)",
            EnergyClass::RegionalDamage => "Large (Regional Damage)",
            EnergyClass::ContinentalDamage => "Very Large (Continental Damage)",
            EnergyClass::GlobalEffects => "Extreme (Global Effects)",
        }
    }
}
