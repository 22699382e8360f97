//! Damage assessment for a computed impact.
//!
//! The assessor runs four stages in order (casualties, infrastructure, environment,
//! economics). Each stage is public so it can be checked against fixed upstream
//! values. The optional [`enhancer`] applies heuristic corrections afterwards.

pub mod assessor;
pub mod enhancer;
pub mod stages;
pub mod tables;

pub use assessor::{DamageAssessment, assess_damage};
pub use enhancer::{EnhancerFeatures, enhance_damage};
pub use stages::{
    AtmosphericAftermath, CostBreakdown, EconomicImpact, EnvironmentalImpact, HumanImpact,
    InfrastructureDamage,
};
