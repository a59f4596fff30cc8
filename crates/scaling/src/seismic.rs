//! Seismic magnitude and shaking radii.

use impact_core::constants::seismic::{
    FELT_INTERCEPT, MAGNITUDE_CAP, MAGNITUDE_OFFSET, MAGNITUDE_SLOPE, RADIUS_SLOPE,
    STRONG_SHAKING_INTERCEPT,
};

/// Richter-like magnitude from the energy in joules, capped at 9.9.
pub fn magnitude(energy_joules: f64) -> f64 {
    (MAGNITUDE_SLOPE * energy_joules.log10() - MAGNITUDE_OFFSET).min(MAGNITUDE_CAP)
}

pub fn strong_shaking_radius_km(magnitude: f64) -> f64 {
    10f64.powf(RADIUS_SLOPE * magnitude + STRONG_SHAKING_INTERCEPT)
}

pub fn felt_radius_km(magnitude: f64) -> f64 {
    10f64.powf(RADIUS_SLOPE * magnitude + FELT_INTERCEPT)
}
