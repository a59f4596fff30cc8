//! Fireball, overpressure and thermal radii (km) from yield in megatons.

use std::f64::consts::PI;

use impact_core::constants::blast::{
    FIREBALL_COEFFICIENT, FIREBALL_EXPONENT, MODERATE_COEFFICIENT, OVERPRESSURE_EXPONENT,
    SEVERE_COEFFICIENT, THERMAL_COEFFICIENT, THERMAL_EXPONENT,
};

pub fn fireball_radius_km(megatons: f64) -> f64 {
    FIREBALL_COEFFICIENT * megatons.powf(FIREBALL_EXPONENT)
}

/// 20 psi ring: reinforced structures destroyed.
pub fn severe_radius_km(megatons: f64) -> f64 {
    SEVERE_COEFFICIENT * megatons.powf(OVERPRESSURE_EXPONENT)
}

/// 1 psi ring: residential structures collapse.
pub fn moderate_radius_km(megatons: f64) -> f64 {
    MODERATE_COEFFICIENT * megatons.powf(OVERPRESSURE_EXPONENT)
}

/// Radius at which vegetation ignites and third-degree burns occur.
pub fn thermal_radius_km(megatons: f64) -> f64 {
    THERMAL_COEFFICIENT * megatons.powf(THERMAL_EXPONENT)
}

pub fn affected_area_km2(moderate_radius_km: f64) -> f64 {
    PI * moderate_radius_km * moderate_radius_km
}
