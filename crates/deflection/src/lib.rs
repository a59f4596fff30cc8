//! Deflection displacement and miss-distance classification.
//!
//! The displacement model is a linear drift: a small velocity change `Δv`
//! applied `t` before encounter shifts the arrival point by `Δv·t`. This holds
//! while `Δv` is tiny next to the orbital speed and ignores the along-track
//! amplification a full orbit propagation would show.

use impact_config::TrajectoryPolicy;
use impact_core::constants::trajectory::MARGINAL_MISS_KM;
use impact_core::time::years_to_seconds;
use impact_core::units::{cms_to_ms, m_to_km};
use impact_core::{ParameterError, ensure_non_negative};
use serde::Serialize;

/// Lateral displacement (km) from a velocity change (cm/s) held over the warning time (years).
pub fn displacement_km(
    deflection_cm_s: f64,
    warning_years: f64,
) -> Result<f64, ParameterError> {
    let delta_v = cms_to_ms(ensure_non_negative("deflection_cm_s", deflection_cm_s)?);
    let seconds = years_to_seconds(ensure_non_negative("warning_years", warning_years)?);
    Ok(m_to_km(delta_v * seconds))
}

/// Final signed miss distance (km).
#[inline]
pub fn miss_distance_km(baseline_offset_km: f64, displacement_km: f64) -> f64 {
    baseline_offset_km + displacement_km
}

/// Impact occurs when the miss distance falls short of the threshold; equality is safe.
#[inline]
pub fn will_impact(miss_distance_km: f64, safe_threshold_km: f64) -> bool {
    miss_distance_km < safe_threshold_km
}

/// A velocity nudge and the lead time it is applied with.
///
/// Both values are finite and non-negative; [`DeflectionScenario::new`] is the
/// only way in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeflectionScenario {
    deflection_cm_s: f64,
    warning_years: f64,
}

impl DeflectionScenario {
    pub fn new(deflection_cm_s: f64, warning_years: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            deflection_cm_s: ensure_non_negative("deflection_cm_s", deflection_cm_s)?,
            warning_years: ensure_non_negative("warning_years", warning_years)?,
        })
    }

    /// Velocity change (cm/s).
    pub fn deflection_cm_s(&self) -> f64 {
        self.deflection_cm_s
    }

    /// Lead time before encounter (years).
    pub fn warning_years(&self) -> f64 {
        self.warning_years
    }

    /// Same lead time with a different velocity change.
    pub fn with_deflection(self, deflection_cm_s: f64) -> Result<Self, ParameterError> {
        Self::new(deflection_cm_s, self.warning_years)
    }

    /// Displacement accumulated over the full warning time (km).
    pub fn displacement_km(&self) -> f64 {
        m_to_km(cms_to_ms(self.deflection_cm_s) * years_to_seconds(self.warning_years))
    }

    /// Miss distance once `elapsed_years` of the warning time have passed (km).
    ///
    /// Elapsed time is limited to `[0, warning_years]`; NaN counts as no time.
    pub fn miss_distance_at(&self, policy: &TrajectoryPolicy, elapsed_years: f64) -> f64 {
        let years = elapsed_years.max(0.0).min(self.warning_years);
        let drift = m_to_km(cms_to_ms(self.deflection_cm_s) * years_to_seconds(years));
        miss_distance_km(policy.baseline_offset_km, drift)
    }

    /// Resolve this scenario against a trajectory policy.
    pub fn evaluate(&self, policy: &TrajectoryPolicy) -> DeflectionResult {
        let displacement_km = self.displacement_km();
        let miss_distance_km = miss_distance_km(policy.baseline_offset_km, displacement_km);
        DeflectionResult {
            displacement_km,
            miss_distance_km,
            will_impact: will_impact(miss_distance_km, policy.safe_threshold_km),
            band: MissBand::classify(miss_distance_km, policy.safe_threshold_km),
        }
    }
}

/// Outcome of applying a deflection scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeflectionResult {
    pub displacement_km: f64,
    pub miss_distance_km: f64,
    pub will_impact: bool,
    pub band: MissBand,
}

/// Coarse status of a miss distance, used for display colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissBand {
    /// At or beyond the safe threshold.
    Safe,
    /// Clear of Earth but short of the threshold by a wide margin.
    Marginal,
    /// Positive but under the marginal distance.
    Close,
    /// Still on a collision course.
    Collision,
}

impl MissBand {
    pub fn classify(miss_distance_km: f64, safe_threshold_km: f64) -> Self {
        if miss_distance_km >= safe_threshold_km {
            MissBand::Safe
        } else if miss_distance_km >= MARGINAL_MISS_KM {
            MissBand::Marginal
        } else if miss_distance_km >= 0.0 {
            MissBand::Close
        } else {
            MissBand::Collision
        }
    }
}

/// One cell of a deflection sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub deflection_cm_s: f64,
    pub warning_years: f64,
    pub displacement_km: f64,
    pub miss_distance_km: f64,
    pub will_impact: bool,
}

/// Evaluate every combination of deflection force and warning time, force-major.
pub fn sweep(
    forces_cm_s: &[f64],
    warnings_years: &[f64],
    policy: &TrajectoryPolicy,
) -> Result<Vec<SweepPoint>, ParameterError> {
    let mut points = Vec::with_capacity(forces_cm_s.len() * warnings_years.len());
    for &force in forces_cm_s {
        for &years in warnings_years {
            let scenario = DeflectionScenario::new(force, years)?;
            let result = scenario.evaluate(policy);
            points.push(SweepPoint {
                deflection_cm_s: force,
                warning_years: years,
                displacement_km: result.displacement_km,
                miss_distance_km: result.miss_distance_km,
                will_impact: result.will_impact,
            });
        }
    }
    Ok(points)
}

/// Evenly spaced samples from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn one_cm_s_over_ten_years() {
        let d = displacement_km(1.0, 10.0).unwrap();
        assert_relative_eq!(d, 3155.76, epsilon = 1e-6);
        assert!((d - 3153.0).abs() < 5.0);
    }

    #[test]
    fn miss_distance_grows_with_elapsed_time() {
        let policy = TrajectoryPolicy::default();
        let scenario = DeflectionScenario::new(1.0, 10.0).unwrap();
        assert_eq!(scenario.miss_distance_at(&policy, 0.0), -500.0);
        assert_relative_eq!(
            scenario.miss_distance_at(&policy, 5.0),
            -500.0 + 3155.76 / 2.0,
            epsilon = 1e-6
        );
        assert_eq!(
            scenario.miss_distance_at(&policy, 20.0),
            scenario.evaluate(&policy).miss_distance_km
        );
    }

    #[test]
    fn miss_distance_at_tolerates_odd_elapsed_times() {
        let policy = TrajectoryPolicy::default();
        let scenario = DeflectionScenario::new(1.0, 10.0).unwrap();
        assert_eq!(scenario.miss_distance_at(&policy, -3.0), -500.0);
        assert_eq!(scenario.miss_distance_at(&policy, f64::NAN), -500.0);
        assert_eq!(
            scenario.miss_distance_at(&policy, f64::INFINITY),
            scenario.evaluate(&policy).miss_distance_km
        );
    }

    #[test]
    fn scenarios_only_come_from_validated_values() {
        assert_eq!(
            DeflectionScenario::new(1.0, -1.0).unwrap_err().name(),
            "warning_years"
        );
        assert!(DeflectionScenario::new(f64::NAN, 10.0).is_err());
        let scenario = DeflectionScenario::new(1.0, 10.0).unwrap();
        assert!(scenario.with_deflection(-0.5).is_err());
        let stronger = scenario.with_deflection(2.0).unwrap();
        assert_eq!(stronger.deflection_cm_s(), 2.0);
        assert_eq!(stronger.warning_years(), 10.0);
    }

    #[test]
    fn default_simulator_deflection_is_safe() {
        let policy = TrajectoryPolicy {
            baseline_offset_km: -500.0,
            safe_threshold_km: 2500.0,
        };
        let result = DeflectionScenario::new(2.5, 10.0).unwrap().evaluate(&policy);
        assert!((result.displacement_km - 7884.0).abs() < 10.0);
        assert!((result.miss_distance_km - 7384.0).abs() < 10.0);
        assert!(!result.will_impact);
        assert_eq!(result.band, MissBand::Safe);
    }

    #[test]
    fn threshold_boundary_is_safe() {
        assert!(!will_impact(2500.0, 2500.0));
        assert!(will_impact(2499.999, 2500.0));
        assert!(!will_impact(2500.001, 2500.0));
    }

    #[test]
    fn bands_follow_distance() {
        assert_eq!(MissBand::classify(2000.0, 2000.0), MissBand::Safe);
        assert_eq!(MissBand::classify(1500.0, 2000.0), MissBand::Marginal);
        assert_eq!(MissBand::classify(0.0, 2000.0), MissBand::Close);
        assert_eq!(MissBand::classify(-0.1, 2000.0), MissBand::Collision);
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(displacement_km(-1.0, 10.0).is_err());
        assert!(DeflectionScenario::new(1.0, -1.0).is_err());
    }

    #[test]
    fn sweep_is_force_major() {
        let policy = TrajectoryPolicy::default();
        let points = sweep(&[0.0, 2.5], &[1.0, 10.0], &policy).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[1].deflection_cm_s, 0.0);
        assert_eq!(points[1].warning_years, 10.0);
        assert!(points[0].will_impact);
        assert!(!points[3].will_impact);
        assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
    }

    proptest! {
        #[test]
        fn prop_displacement_is_monotone(
            force in 0.0f64..10.0,
            years in 0.0f64..50.0,
            extra in 0.0f64..5.0,
        ) {
            let base = displacement_km(force, years).unwrap();
            prop_assert!(displacement_km(force + extra, years).unwrap() >= base);
            prop_assert!(displacement_km(force, years + extra).unwrap() >= base);
            prop_assert_eq!(displacement_km(0.0, years).unwrap(), 0.0);
        }
    }
}
