//! Named parameter variants that older revisions of the simulator disagreed on.

use impact_core::constants::{trajectory, tsunami};
use serde::{Deserialize, Serialize};

/// Safe-miss threshold presets (km).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SafeThresholdVariant {
    /// Parameter simulator (2500 km).
    Simulator,
    /// Countdown mission (2000 km).
    Mission,
    /// Extended margin (2700 km).
    Extended,
}

impl SafeThresholdVariant {
    pub const ALL: [SafeThresholdVariant; 3] = [Self::Simulator, Self::Mission, Self::Extended];

    pub fn km(self) -> f64 {
        match self {
            Self::Simulator => trajectory::SIMULATOR_SAFE_THRESHOLD_KM,
            Self::Mission => trajectory::MISSION_SAFE_THRESHOLD_KM,
            Self::Extended => trajectory::EXTENDED_SAFE_THRESHOLD_KM,
        }
    }
}

/// Shallow-water amplification presets for coastal tsunami height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoastalAmplificationVariant {
    /// ×5, used by the parameter simulator.
    Simulator,
    /// ×20, low end of the run-up range.
    RunUpLow,
    /// ×50, high end of the run-up range.
    RunUpHigh,
}

impl CoastalAmplificationVariant {
    pub fn factor(self) -> f64 {
        match self {
            Self::Simulator => tsunami::SIMULATOR_AMPLIFICATION,
            Self::RunUpLow => tsunami::RUN_UP_LOW_AMPLIFICATION,
            Self::RunUpHigh => tsunami::RUN_UP_HIGH_AMPLIFICATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_variants_are_distinct() {
        let values: Vec<f64> = SafeThresholdVariant::ALL.iter().map(|v| v.km()).collect();
        assert_eq!(values, vec![2500.0, 2000.0, 2700.0]);
    }
}
