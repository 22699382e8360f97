use thiserror::Error;

/// Validation failures raised while building model values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{field} must be {constraint} (got {value})")]
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
        value: f64,
    },
}

/// Require a finite value strictly greater than zero.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::OutOfRange {
            field,
            constraint: "finite and > 0",
            value,
        })
    }
}

/// Require a finite value that is zero or greater.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ModelError::OutOfRange {
            field,
            constraint: "finite and >= 0",
            value,
        })
    }
}

/// Require a value inside the closed interval `[min, max]`.
pub(crate) fn within(
    field: &'static str,
    constraint: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ModelError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ModelError::OutOfRange {
            field,
            constraint,
            value,
        })
    }
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::OutOfRange {
            field,
            constraint: "finite",
            value,
        })
    }
}
