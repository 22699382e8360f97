//! Deflection adjustments applied to an asteroid before the impact physics runs.

pub mod deflection;
pub mod methods;

pub use deflection::{
    DEFAULT_METHOD_LABEL, Deflection, MitigationError, MitigationResult, apply_mitigation,
    apply_mitigation_with_method,
};
pub use methods::DeflectionMethod;
