//! Reduced crater scaling law with per-medium coefficient sets.

use std::f64::consts::PI;

use impact_config::CraterCoefficients;
use impact_core::units::km_to_m;

/// Final crater diameter (km).
pub fn diameter_km(megatons: f64, c: &CraterCoefficients) -> f64 {
    c.coefficient
        * megatons.powf(c.energy_exponent)
        * c.target_term.powf(c.target_exponent)
        * c.projectile_density_kg_m3.powf(c.projectile_density_exponent)
        * c.secondary_term.powf(c.secondary_exponent)
}

/// Crater depth (km) as a fixed fraction of the diameter.
pub fn depth_km(diameter_km: f64, c: &CraterCoefficients) -> f64 {
    c.depth_ratio * diameter_km
}

/// Excavated volume treating the crater as a cone (km³).
pub fn volume_km3(diameter_km: f64, depth_km: f64) -> f64 {
    volume_m3(diameter_km, depth_km) / 1.0e9
}

/// Excavated volume treating the crater as a cone (m³).
pub fn volume_m3(diameter_km: f64, depth_km: f64) -> f64 {
    let radius_m = km_to_m(diameter_km) / 2.0;
    (PI / 3.0) * radius_m * radius_m * km_to_m(depth_km)
}

pub fn ejecta_blanket_radius_km(diameter_km: f64, ratio: f64) -> f64 {
    ratio * diameter_km
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bennu_land_crater_is_kilometre_scale() {
        let d = diameter_km(1430.0, &CraterCoefficients::land());
        assert!((3.5..4.5).contains(&d), "land crater = {d}");
        let d = diameter_km(1430.0, &CraterCoefficients::ocean());
        assert!((1.5..2.0).contains(&d), "ocean crater = {d}");
    }

    #[test]
    fn volume_units_agree() {
        assert_relative_eq!(volume_km3(2.0, 0.5), (PI / 3.0) * 0.5, max_relative = 1e-12);
    }
}
