//! Impact physics chain: kinetic energy through evacuation radius.
//!
//! Each stage is a pure function of its inputs. [`compute_impact`] sequences them
//! in a fixed order and assembles the [`ImpactResult`].

pub mod atmosphere;
pub mod blast;
pub mod calculator;
pub mod crater;
pub mod energy;
pub mod evacuation;
pub mod tsunami;
pub mod zones;

pub use atmosphere::AtmosphericEntry;
pub use blast::BlastEffects;
pub use calculator::{ImpactError, ImpactResult, compute_impact};
pub use crater::CraterGeometry;
pub use energy::EnergyClass;
pub use tsunami::TsunamiEffects;
pub use zones::{ImpactZone, ZoneKind};
