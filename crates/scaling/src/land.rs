//! Ejecta deposits and thermal ignition for land impacts.

use impact_config::EjectaConfig;
use serde::Serialize;

use crate::{blast, crater};

/// Land-only consequence fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LandEffects {
    /// Ejecta thickness at the near reference distance (m).
    pub ejecta_thickness_near_m: f64,
    /// Ejecta thickness at the far reference distance (m).
    pub ejecta_thickness_far_m: f64,
    /// Near reference distance (km).
    pub near_distance_km: f64,
    /// Far reference distance (km).
    pub far_distance_km: f64,
    /// Radius within which vegetation ignites (km).
    pub vegetation_ignition_radius_km: f64,
}

pub fn effects(
    megatons: f64,
    crater_diameter_km: f64,
    crater_depth_km: f64,
    config: &EjectaConfig,
) -> LandEffects {
    let volume_m3 = crater::volume_m3(crater_diameter_km, crater_depth_km);
    LandEffects {
        ejecta_thickness_near_m: ejecta_thickness_m(
            volume_m3,
            config.near_distance_m,
            config.near_retention,
        )
        .max(config.near_floor_m),
        ejecta_thickness_far_m: ejecta_thickness_m(
            volume_m3,
            config.far_distance_m,
            config.far_retention,
        )
        .max(config.far_floor_m),
        near_distance_km: config.near_distance_m / 1000.0,
        far_distance_km: config.far_distance_m / 1000.0,
        vegetation_ignition_radius_km: blast::thermal_radius_km(megatons),
    }
}

/// Excavated volume spread over a disc of the given radius, scaled by retention².
fn ejecta_thickness_m(volume_m3: f64, distance_m: f64, retention: f64) -> f64 {
    let disc_area = std::f64::consts::PI * distance_m * distance_m;
    volume_m3 / disc_area * retention * retention
}
