//! Tsunami source and coastal run-up for deep-water impacts.

use impact_config::TsunamiConfig;
use impact_core::units::m_to_km;
use serde::Serialize;

/// Ocean-only consequence fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OceanEffects {
    /// Deep-water wave height above the impact point (m).
    pub initial_height_m: f64,
    /// Wave height after shoaling at the coast (m).
    pub coastal_height_m: f64,
    /// Distance the wave runs inland (km).
    pub coastal_inundation_km: f64,
}

/// Tsunami metrics for an impactor of the given diameter.
///
/// The source amplitude is `f·D·(D/h)^k` with `D` in metres and `h` the water depth
/// in kilometres, the form the reduced law was calibrated in. The amplitude is capped
/// before the coastal scaling is applied.
pub fn tsunami(impactor_diameter_m: f64, config: &TsunamiConfig) -> OceanEffects {
    let amplitude_m = config.amplitude_fraction
        * impactor_diameter_m
        * (impactor_diameter_m / config.water_depth_km).powf(config.depth_ratio_exponent);
    let initial_height_m = amplitude_m.min(config.initial_height_cap_m);
    let coastal_height_m = initial_height_m * config.amplification;
    OceanEffects {
        initial_height_m,
        coastal_height_m,
        coastal_inundation_km: m_to_km(coastal_height_m) * config.inundation_factor,
    }
}
