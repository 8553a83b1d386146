//! Field checks applied to a person record before it is written.
//!
//! Only the first failing check is reported, in the order name, height,
//! mass.

use crate::error::CoreError;

/// Validate the constrained fields of a candidate person.
pub fn validate_person(name: &str, height: Option<i64>, mass: Option<f64>) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation("name cannot be empty".into()));
    }

    if matches!(height, Some(h) if h <= 0) {
        return Err(CoreError::Validation(
            "height must be greater than 0 if provided".into(),
        ));
    }

    // `!(m > 0.0)` also rejects NaN.
    if matches!(mass, Some(m) if !(m > 0.0)) {
        return Err(CoreError::Validation(
            "mass must be greater than 0 if provided".into(),
        ));
    }

    Ok(())
}
