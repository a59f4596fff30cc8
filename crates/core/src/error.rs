//! The single error kind raised by the physics core.

use thiserror::Error;

/// A physical input outside its documented valid range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ParameterError {
    /// Name of the offending parameter.
    pub fn name(&self) -> &'static str {
        match self {
            ParameterError::InvalidParameter { name, .. } => name,
        }
    }
}

/// Reject non-finite or non-positive values.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(ParameterError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

/// Reject non-finite or negative values.
pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ParameterError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

/// Reject values outside the inclusive range `[min, max]`.
pub fn ensure_in_range(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ParameterError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ParameterError::InvalidParameter {
            name,
            value,
            reason: "outside the supported range",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check_rejects_zero_and_nan() {
        assert!(ensure_positive("velocity_km_s", 12.7).is_ok());
        let err = ensure_positive("velocity_km_s", 0.0).unwrap_err();
        assert_eq!(err.name(), "velocity_km_s");
        assert!(ensure_positive("diameter_m", f64::NAN).is_err());
        assert!(ensure_positive("diameter_m", -1.0).is_err());
    }

    #[test]
    fn non_negative_check_accepts_zero() {
        assert_eq!(ensure_non_negative("deflection_cm_s", 0.0), Ok(0.0));
        assert!(ensure_non_negative("warning_years", -0.5).is_err());
        assert!(ensure_non_negative("warning_years", f64::INFINITY).is_err());
    }

    #[test]
    fn range_check_is_inclusive() {
        assert!(ensure_in_range("velocity_km_s", 5.0, 5.0, 30.0).is_ok());
        assert!(ensure_in_range("velocity_km_s", 30.0, 5.0, 30.0).is_ok());
        assert!(ensure_in_range("velocity_km_s", 30.1, 5.0, 30.0).is_err());
        assert!(ensure_in_range("velocity_km_s", f64::NAN, 5.0, 30.0).is_err());
    }
}
