//! Consequence scaling for an impact of known energy.
//!
//! Every relation is closed-form and order-of-magnitude accurate, which is what
//! public-facing visualisation needs. Coefficients come from
//! [`impact_core::constants`] or from the swappable sets in [`impact_config`].

pub mod blast;
pub mod crater;
pub mod land;
pub mod ocean;
pub mod seismic;

use impact_config::{ModelConfig, SiteKind};
use impact_core::{ParameterError, ensure_positive};
use impact_energy::energy_to_megatons;
use serde::{Deserialize, Serialize};

pub use land::LandEffects;
pub use ocean::OceanEffects;

/// Impact target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    Ocean,
    Land,
}

impl Medium {
    pub fn as_str(self) -> &'static str {
        match self {
            Medium::Ocean => "ocean",
            Medium::Land => "land",
        }
    }
}

impl From<SiteKind> for Medium {
    /// Free-simulation sites resolve over land.
    fn from(kind: SiteKind) -> Self {
        match kind {
            SiteKind::Ocean => Medium::Ocean,
            SiteKind::Land | SiteKind::Simulation => Medium::Land,
        }
    }
}

/// Consequence fields that only exist for one medium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "medium", rename_all = "lowercase")]
pub enum MediumEffects {
    Ocean(OceanEffects),
    Land(LandEffects),
}

/// Full set of consequence metrics for one impact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Consequences {
    pub energy_megatons: f64,
    pub fireball_radius_km: f64,
    pub severe_damage_radius_km: f64,
    pub moderate_damage_radius_km: f64,
    pub affected_area_km2: f64,
    pub crater_diameter_km: f64,
    pub crater_depth_km: f64,
    pub crater_volume_km3: f64,
    pub ejecta_blanket_radius_km: f64,
    pub earthquake_magnitude: f64,
    pub strong_shaking_radius_km: f64,
    pub felt_radius_km: f64,
    pub effects: MediumEffects,
}

impl Consequences {
    /// Medium selected by the populated field group.
    pub fn medium(&self) -> Medium {
        match self.effects {
            MediumEffects::Ocean(_) => Medium::Ocean,
            MediumEffects::Land(_) => Medium::Land,
        }
    }

    pub fn ocean(&self) -> Option<&OceanEffects> {
        match &self.effects {
            MediumEffects::Ocean(effects) => Some(effects),
            MediumEffects::Land(_) => None,
        }
    }

    pub fn land(&self) -> Option<&LandEffects> {
        match &self.effects {
            MediumEffects::Land(effects) => Some(effects),
            MediumEffects::Ocean(_) => None,
        }
    }
}

/// Compute every consequence metric for an impact of `energy_joules` into `medium`.
///
/// `impactor_diameter_m` only feeds the tsunami source term.
pub fn calculate_impact_consequences(
    energy_joules: f64,
    medium: Medium,
    impactor_diameter_m: f64,
    model: &ModelConfig,
) -> Result<Consequences, ParameterError> {
    let energy_joules = ensure_positive("energy_joules", energy_joules)?;
    let impactor_diameter_m = ensure_positive("impactor_diameter_m", impactor_diameter_m)?;
    let megatons = energy_to_megatons(energy_joules);

    let coefficients = match medium {
        Medium::Ocean => &model.crater.ocean,
        Medium::Land => &model.crater.land,
    };
    let crater_diameter_km = crater::diameter_km(megatons, coefficients);
    let crater_depth_km = crater::depth_km(crater_diameter_km, coefficients);
    let crater_volume_km3 = crater::volume_km3(crater_diameter_km, crater_depth_km);
    let ejecta_blanket_radius_km =
        crater::ejecta_blanket_radius_km(crater_diameter_km, model.crater.ejecta_blanket_ratio);

    let moderate_damage_radius_km = blast::moderate_radius_km(megatons);
    let earthquake_magnitude = seismic::magnitude(energy_joules);

    let effects = match medium {
        Medium::Ocean => {
            MediumEffects::Ocean(ocean::tsunami(impactor_diameter_m, &model.tsunami))
        }
        Medium::Land => MediumEffects::Land(land::effects(
            megatons,
            crater_diameter_km,
            crater_depth_km,
            &model.ejecta,
        )),
    };

    Ok(Consequences {
        energy_megatons: megatons,
        fireball_radius_km: blast::fireball_radius_km(megatons),
        severe_damage_radius_km: blast::severe_radius_km(megatons),
        moderate_damage_radius_km,
        affected_area_km2: blast::affected_area_km2(moderate_damage_radius_km),
        crater_diameter_km,
        crater_depth_km,
        crater_volume_km3,
        ejecta_blanket_radius_km,
        earthquake_magnitude,
        strong_shaking_radius_km: seismic::strong_shaking_radius_km(earthquake_magnitude),
        felt_radius_km: seismic::felt_radius_km(earthquake_magnitude),
        effects,
    })
}
