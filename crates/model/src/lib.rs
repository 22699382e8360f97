//! Input models for impact simulation: asteroid bodies, impact sites, and material defaults.
//!
//! Every value here is validated once at construction. Downstream physics and damage
//! code can therefore assume positive masses, velocities, and in-range angles.

pub mod asteroid;
pub mod location;
pub mod material;

mod error;

pub use asteroid::{Asteroid, AsteroidParams};
pub use error::ModelError;
pub use location::{GeoEnrichment, ImpactLocation, LocationParams, TerrainType};
pub use material::{Composition, MaterialProperties};
