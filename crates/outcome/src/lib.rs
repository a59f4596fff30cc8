//! Simulation pipeline that turns asteroid and deflection parameters into an [`ImpactOutcome`].
//!
//! Stages run in a fixed order: mass, energy, displacement and miss distance,
//! the safe/impact branch, the ocean/land branch, consequences, and finally the
//! narrative, which is formatted from the finished numeric fields.

pub mod mission;
pub mod narrative;
pub mod session;

use impact_config::{ImpactSite, ModelConfig};
use impact_core::constants::ranges;
use impact_core::{ParameterError, ensure_in_range};
use impact_deflection::{DeflectionScenario, MissBand};
use impact_energy::{AsteroidProperties, energy_to_megatons};
use impact_scaling::{Consequences, Medium, calculate_impact_consequences};
use serde::Serialize;
use tracing::{debug, info};

pub use mission::{Mission, MissionError, MissionStatus};
pub use narrative::Narrative;
pub use session::{SessionError, SessionPhase, SessionState, SimulationSession};

/// Everything a single simulation run needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationParams {
    pub asteroid: AsteroidProperties,
    pub deflection: DeflectionScenario,
    pub medium: Medium,
}

impl SimulationParams {
    pub fn new(
        asteroid: AsteroidProperties,
        deflection: DeflectionScenario,
        medium: Medium,
    ) -> Self {
        Self {
            asteroid,
            deflection,
            medium,
        }
    }

    /// Reference body with the default deflection over land.
    pub fn reference(model: &ModelConfig) -> Result<Self, ParameterError> {
        Ok(Self {
            asteroid: AsteroidProperties::reference(&model.reference_body)?,
            deflection: DeflectionScenario::new(
                ranges::DEFAULT_DEFLECTION_CM_S,
                ranges::DEFAULT_WARNING_YEARS,
            )?,
            medium: Medium::Land,
        })
    }

    /// Check the inputs against the ranges the interactive simulator supports.
    pub fn check_ranges(&self) -> Result<(), ParameterError> {
        ensure_in_range(
            "diameter_m",
            self.asteroid.diameter_m(),
            ranges::MIN_DIAMETER_M,
            ranges::MAX_DIAMETER_M,
        )?;
        ensure_in_range(
            "velocity_km_s",
            self.asteroid.velocity_km_s(),
            ranges::MIN_VELOCITY_KM_S,
            ranges::MAX_VELOCITY_KM_S,
        )?;
        ensure_in_range(
            "deflection_cm_s",
            self.deflection.deflection_cm_s(),
            ranges::MIN_DEFLECTION_CM_S,
            ranges::MAX_DEFLECTION_CM_S,
        )?;
        ensure_in_range(
            "warning_years",
            self.deflection.warning_years(),
            ranges::MIN_WARNING_YEARS,
            ranges::MAX_WARNING_YEARS,
        )?;
        Ok(())
    }
}

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactOutcome {
    pub params: SimulationParams,
    pub will_impact: bool,
    /// Signed miss distance (km); below the safe threshold means impact.
    pub miss_distance_km: f64,
    pub safe_threshold_km: f64,
    pub displacement_km: f64,
    pub band: MissBand,
    pub impact_energy_joules: f64,
    pub impact_energy_megatons: f64,
    /// Present exactly when `will_impact` is true.
    pub consequences: Option<Consequences>,
    pub headline: String,
    pub narrative: Vec<String>,
}

/// Run the full pipeline for one set of parameters.
pub fn simulate_impact(
    params: &SimulationParams,
    model: &ModelConfig,
) -> Result<ImpactOutcome, ParameterError> {
    let asteroid = &params.asteroid;
    debug!(
        diameter_m = asteroid.diameter_m(),
        mass_kg = asteroid.mass_kg(),
        mass_supplied = asteroid.mass_supplied(),
        "impactor mass"
    );

    let impact_energy_joules = asteroid.kinetic_energy_joules();
    let impact_energy_megatons = energy_to_megatons(impact_energy_joules);
    debug!(
        joules = impact_energy_joules,
        megatons = impact_energy_megatons,
        "impact energy"
    );

    let deflection = params.deflection.evaluate(&model.trajectory);
    debug!(
        displacement_km = deflection.displacement_km,
        miss_distance_km = deflection.miss_distance_km,
        threshold_km = model.trajectory.safe_threshold_km,
        "deflection resolved"
    );

    let consequences = if deflection.will_impact {
        Some(calculate_impact_consequences(
            impact_energy_joules,
            params.medium,
            asteroid.diameter_m(),
            model,
        )?)
    } else {
        None
    };

    let mut outcome = ImpactOutcome {
        params: *params,
        will_impact: deflection.will_impact,
        miss_distance_km: deflection.miss_distance_km,
        safe_threshold_km: model.trajectory.safe_threshold_km,
        displacement_km: deflection.displacement_km,
        band: deflection.band,
        impact_energy_joules,
        impact_energy_megatons,
        consequences,
        headline: String::new(),
        narrative: Vec::new(),
    };
    let Narrative { headline, lines } = narrative::compose(&outcome, &model.reference_body.name);
    outcome.headline = headline;
    outcome.narrative = lines;

    info!(
        will_impact = outcome.will_impact,
        miss_distance_km = outcome.miss_distance_km,
        medium = params.medium.as_str(),
        "simulation complete"
    );
    Ok(outcome)
}

/// Assess a catalog site. Fixed sites get no deflection; free-simulation sites use `deflection`.
pub fn assess_site(
    site: &ImpactSite,
    asteroid: AsteroidProperties,
    deflection: DeflectionScenario,
    model: &ModelConfig,
) -> Result<ImpactOutcome, ParameterError> {
    let deflection = if site.allow_deflection {
        deflection
    } else {
        deflection.with_deflection(0.0)?
    };
    debug!(site = %site.name, allow_deflection = site.allow_deflection, "assessing site");
    simulate_impact(
        &SimulationParams::new(asteroid, deflection, Medium::from(site.kind)),
        model,
    )
}
