//! Asteroid impact consequence modelling.
//!
//! The physics lives in the member crates; this crate ties them together so
//! front-ends (CLI, web, tests) can depend on a single path.

pub mod scenario;

pub use impact_config as config;
pub use impact_core as base;
pub use impact_deflection as deflection;
pub use impact_energy as energy;
pub use impact_export as export;
pub use impact_outcome as outcome;
pub use impact_scaling as scaling;

pub use impact_core::ParameterError;
pub use impact_outcome::{ImpactOutcome, SimulationParams, assess_site, simulate_impact};
pub use impact_scaling::{Consequences, Medium, calculate_impact_consequences};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
