//! Countdown mission: commit a deflection, let the warning clock run out, and see
//! whether the asteroid ends up far enough from Earth.

use impact_config::TrajectoryPolicy;
use impact_core::constants::ranges::{MISSION_MAX_DEFLECTION_CM_S, MISSION_MIN_DEFLECTION_CM_S};
use impact_core::{ParameterError, ensure_in_range, ensure_positive};
use impact_deflection::{DeflectionScenario, MissBand, will_impact};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionStatus {
    /// Deflection can still be adjusted.
    Ready,
    Running,
    Paused,
    Won,
    Lost,
}

impl MissionStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, MissionStatus::Won | MissionStatus::Lost)
    }
}

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("the deflection has already been launched")]
    AlreadyLaunched,
    #[error("the mission has not been launched")]
    NotLaunched,
    #[error("the mission is over")]
    AlreadyFinished,
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

#[derive(Debug, Clone)]
pub struct Mission {
    policy: TrajectoryPolicy,
    plan: DeflectionScenario,
    remaining_years: f64,
    time_speed: f64,
    status: MissionStatus,
}

impl Mission {
    pub fn new(
        warning_years: f64,
        deflection_cm_s: f64,
        policy: TrajectoryPolicy,
    ) -> Result<Self, MissionError> {
        let warning_years = ensure_positive("warning_years", warning_years)?;
        let deflection_cm_s = ensure_in_range(
            "deflection_cm_s",
            deflection_cm_s,
            MISSION_MIN_DEFLECTION_CM_S,
            MISSION_MAX_DEFLECTION_CM_S,
        )?;
        Ok(Self {
            policy,
            plan: DeflectionScenario::new(deflection_cm_s, warning_years)?,
            remaining_years: warning_years,
            time_speed: 1.0,
            status: MissionStatus::Ready,
        })
    }

    pub fn status(&self) -> MissionStatus {
        self.status
    }

    pub fn remaining_years(&self) -> f64 {
        self.remaining_years
    }

    pub fn elapsed_years(&self) -> f64 {
        self.plan.warning_years() - self.remaining_years
    }

    pub fn deflection_cm_s(&self) -> f64 {
        self.plan.deflection_cm_s()
    }

    pub fn is_launched(&self) -> bool {
        self.status != MissionStatus::Ready
    }

    /// Fraction of the approach already flown, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.elapsed_years() / self.plan.warning_years()).clamp(0.0, 1.0)
    }

    /// Adjust the planned deflection before launch.
    pub fn set_deflection(&mut self, deflection_cm_s: f64) -> Result<(), MissionError> {
        if self.is_launched() {
            return Err(MissionError::AlreadyLaunched);
        }
        let deflection_cm_s = ensure_in_range(
            "deflection_cm_s",
            deflection_cm_s,
            MISSION_MIN_DEFLECTION_CM_S,
            MISSION_MAX_DEFLECTION_CM_S,
        )?;
        self.plan = self.plan.with_deflection(deflection_cm_s)?;
        Ok(())
    }

    /// Multiplier applied to every clock advance.
    pub fn set_time_speed(&mut self, speed: f64) -> Result<(), MissionError> {
        self.time_speed = ensure_positive("time_speed", speed)?;
        Ok(())
    }

    /// Miss distance right now: the baseline until launch, then the drift so far.
    pub fn miss_distance_km(&self) -> f64 {
        if !self.is_launched() {
            return self.policy.baseline_offset_km;
        }
        self.plan.miss_distance_at(&self.policy, self.elapsed_years())
    }

    /// Miss distance the current plan reaches when the clock runs out.
    pub fn predicted_miss_km(&self) -> f64 {
        self.plan.evaluate(&self.policy).miss_distance_km
    }

    pub fn band(&self) -> MissBand {
        MissBand::classify(self.miss_distance_km(), self.policy.safe_threshold_km)
    }

    pub fn launch(&mut self) -> Result<(), MissionError> {
        match self.status {
            MissionStatus::Ready => {
                info!(deflection_cm_s = self.plan.deflection_cm_s(), "deflection launched");
                self.status = MissionStatus::Running;
                Ok(())
            }
            status if status.is_finished() => Err(MissionError::AlreadyFinished),
            _ => Err(MissionError::AlreadyLaunched),
        }
    }

    pub fn pause(&mut self) -> Result<(), MissionError> {
        match self.status {
            MissionStatus::Running | MissionStatus::Paused => {
                self.status = MissionStatus::Paused;
                Ok(())
            }
            MissionStatus::Ready => Err(MissionError::NotLaunched),
            _ => Err(MissionError::AlreadyFinished),
        }
    }

    pub fn resume(&mut self) -> Result<(), MissionError> {
        match self.status {
            MissionStatus::Running | MissionStatus::Paused => {
                self.status = MissionStatus::Running;
                Ok(())
            }
            MissionStatus::Ready => Err(MissionError::NotLaunched),
            _ => Err(MissionError::AlreadyFinished),
        }
    }

    /// Run the clock forward by `dt_years` of wall time (scaled by the time speed).
    ///
    /// Paused and unlaunched missions do not move. Reaching zero resolves the mission.
    pub fn advance(&mut self, dt_years: f64) -> Result<MissionStatus, MissionError> {
        let dt_years = ensure_positive("dt_years", dt_years)?;
        if self.status != MissionStatus::Running {
            return Ok(self.status);
        }
        self.remaining_years = (self.remaining_years - dt_years * self.time_speed).max(0.0);
        debug!(
            remaining_years = self.remaining_years,
            miss_distance_km = self.miss_distance_km(),
            "mission clock"
        );
        if self.remaining_years == 0.0 {
            let miss = self.miss_distance_km();
            self.status = if will_impact(miss, self.policy.safe_threshold_km) {
                MissionStatus::Lost
            } else {
                MissionStatus::Won
            };
            info!(status = ?self.status, miss_distance_km = miss, "mission resolved");
        }
        Ok(self.status)
    }

    /// Back to a full clock with the same plan.
    pub fn reset(&mut self) {
        self.remaining_years = self.plan.warning_years();
        self.status = MissionStatus::Ready;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mission(force: f64) -> Mission {
        Mission::new(10.0, force, TrajectoryPolicy::mission()).unwrap()
    }

    #[test]
    fn prediction_uses_full_warning_time() {
        let m = mission(1.0);
        assert_relative_eq!(m.predicted_miss_km(), -500.0 + 3155.76, epsilon = 1e-6);
        assert_eq!(m.miss_distance_km(), -500.0);
        assert_eq!(m.band(), MissBand::Collision);
    }

    #[test]
    fn changing_the_plan_moves_the_prediction() {
        let mut m = mission(1.0);
        m.set_deflection(2.0).unwrap();
        assert_eq!(m.deflection_cm_s(), 2.0);
        assert_relative_eq!(m.predicted_miss_km(), -500.0 + 2.0 * 3155.76, epsilon = 1e-6);
        assert!(m.set_deflection(6.0).is_err());
        assert_eq!(m.deflection_cm_s(), 2.0);
    }

    #[test]
    fn clock_only_runs_after_launch() {
        let mut m = mission(1.0);
        assert_eq!(m.advance(1.0).unwrap(), MissionStatus::Ready);
        assert_eq!(m.remaining_years(), 10.0);
        assert!(matches!(m.pause(), Err(MissionError::NotLaunched)));
    }

    #[test]
    fn strong_deflection_wins() {
        let mut m = mission(2.5);
        m.launch().unwrap();
        assert!(matches!(m.set_deflection(5.0), Err(MissionError::AlreadyLaunched)));
        m.advance(4.0).unwrap();
        assert_relative_eq!(m.progress(), 0.4, epsilon = 1e-12);
        assert!(m.miss_distance_km() > -500.0);

        m.pause().unwrap();
        assert_eq!(m.advance(100.0).unwrap(), MissionStatus::Paused);
        m.resume().unwrap();

        m.set_time_speed(2.0).unwrap();
        assert_eq!(m.advance(3.0).unwrap(), MissionStatus::Won);
        assert_eq!(m.remaining_years(), 0.0);
        assert!(matches!(m.launch(), Err(MissionError::AlreadyFinished)));
    }

    #[test]
    fn weak_deflection_loses() {
        let mut m = mission(0.5);
        m.launch().unwrap();
        assert_eq!(m.advance(10.0).unwrap(), MissionStatus::Lost);
        m.reset();
        assert_eq!(m.status(), MissionStatus::Ready);
        m.set_deflection(0.8).unwrap();
        assert!(m.set_deflection(6.0).is_err());
    }
}
