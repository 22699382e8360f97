//! Asteroid impact assessment.
//!
//! The member crates each own one stage of the pipeline: validated inputs
//! (`model`), impact physics (`physics`), damage estimates (`damage`), and
//! deflection (`mitigation`). [`simulation`] chains them end to end for the
//! binaries and for library callers that want the whole report.

pub mod simulation;

pub use impact_config as config;
pub use impact_damage as damage;
pub use impact_export as export;
pub use impact_mitigation as mitigation;
pub use impact_model as model;
pub use impact_physics as physics;

pub use impact_core::{constants, geometry, units};
pub use impact_damage::{assess_damage, enhance_damage};
pub use impact_mitigation::apply_mitigation;
pub use impact_physics::compute_impact;

/// Returns the version of the library, reported as the engine version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
