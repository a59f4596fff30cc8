//! Mass and impact-energy calculations for a spherical impactor.
//!
//! Inputs use the workspace unit contract: diameter in metres, density in kg/m³,
//! velocity in km/s. Energies are returned in joules unless a function says otherwise.

use std::f64::consts::PI;

use impact_config::ReferenceBody;
use impact_core::constants::JOULES_PER_MEGATON;
use impact_core::units::kms_to_ms;
use impact_core::{ParameterError, ensure_positive};
use serde::Serialize;

/// Mass of a homogeneous sphere (kg).
pub fn mass_kg(diameter_m: f64, density_kg_m3: f64) -> Result<f64, ParameterError> {
    let diameter_m = ensure_positive("diameter_m", diameter_m)?;
    let density_kg_m3 = ensure_positive("density_kg_m3", density_kg_m3)?;
    Ok(sphere_mass(diameter_m, density_kg_m3))
}

/// Kinetic energy `½·m·v²` in joules, with `v` given in km/s.
pub fn kinetic_energy_joules(mass_kg: f64, velocity_km_s: f64) -> Result<f64, ParameterError> {
    let mass_kg = ensure_positive("mass_kg", mass_kg)?;
    let velocity_km_s = ensure_positive("velocity_km_s", velocity_km_s)?;
    Ok(kinetic_energy(mass_kg, velocity_km_s))
}

fn sphere_mass(diameter_m: f64, density_kg_m3: f64) -> f64 {
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3) * density_kg_m3
}

fn kinetic_energy(mass_kg: f64, velocity_km_s: f64) -> f64 {
    let v = kms_to_ms(velocity_km_s);
    0.5 * mass_kg * v * v
}

/// Convert joules to megatons of TNT.
#[inline]
pub fn energy_to_megatons(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON
}

/// Convert megatons of TNT to joules.
#[inline]
pub fn megatons_to_energy(megatons: f64) -> f64 {
    megatons * JOULES_PER_MEGATON
}

/// Validated physical description of an impactor.
///
/// Fields are only reachable through the validating constructors, so every
/// value held here is finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AsteroidProperties {
    diameter_m: f64,
    velocity_km_s: f64,
    density_kg_m3: f64,
    mass_kg: f64,
    /// True when `mass_kg` came from the caller instead of the sphere formula.
    mass_supplied: bool,
}

impl AsteroidProperties {
    /// Build from size, speed and density; mass is derived from the spherical volume.
    pub fn new(
        diameter_m: f64,
        velocity_km_s: f64,
        density_kg_m3: f64,
    ) -> Result<Self, ParameterError> {
        let mass_kg = mass_kg(diameter_m, density_kg_m3)?;
        let velocity_km_s = ensure_positive("velocity_km_s", velocity_km_s)?;
        Ok(Self {
            diameter_m,
            velocity_km_s,
            density_kg_m3,
            mass_kg,
            mass_supplied: false,
        })
    }

    /// Replace the derived mass with a measured one.
    pub fn with_mass(mut self, mass_kg: f64) -> Result<Self, ParameterError> {
        self.mass_kg = ensure_positive("mass_kg", mass_kg)?;
        self.mass_supplied = true;
        Ok(self)
    }

    /// Properties of the configured reference body, using its derived mass.
    pub fn reference(body: &ReferenceBody) -> Result<Self, ParameterError> {
        Self::new(body.diameter_m, body.velocity_km_s, body.density_kg_m3)
    }

    /// Same body arriving at a different speed.
    pub fn with_velocity(mut self, velocity_km_s: f64) -> Result<Self, ParameterError> {
        self.velocity_km_s = ensure_positive("velocity_km_s", velocity_km_s)?;
        Ok(self)
    }

    pub fn diameter_m(&self) -> f64 {
        self.diameter_m
    }

    pub fn velocity_km_s(&self) -> f64 {
        self.velocity_km_s
    }

    pub fn density_kg_m3(&self) -> f64 {
        self.density_kg_m3
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn mass_supplied(&self) -> bool {
        self.mass_supplied
    }

    /// Mass implied by diameter and density alone.
    pub fn derived_mass_kg(&self) -> f64 {
        sphere_mass(self.diameter_m, self.density_kg_m3)
    }

    /// Relative difference between the stored mass and the sphere-derived mass.
    pub fn mass_consistency(&self) -> f64 {
        let derived = self.derived_mass_kg();
        (self.mass_kg - derived).abs() / derived
    }

    /// Kinetic energy at impact (J).
    pub fn kinetic_energy_joules(&self) -> f64 {
        kinetic_energy(self.mass_kg, self.velocity_km_s)
    }

    /// Kinetic energy at impact (Mt TNT).
    pub fn kinetic_energy_megatons(&self) -> f64 {
        energy_to_megatons(self.kinetic_energy_joules())
    }
}
