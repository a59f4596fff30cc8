//! Explicit state machine for an interactive simulation session.
//!
//! `Idle` → `ParametersSet` on [`SimulationSession::set_parameters`],
//! `ParametersSet` → `Simulated` on [`SimulationSession::run`], and any state
//! back to `Idle` on [`SimulationSession::reset`]. Changing parameters after a
//! run discards the stale outcome.

use impact_config::ModelConfig;
use impact_core::ParameterError;
use thiserror::Error;
use tracing::debug;

use crate::{ImpactOutcome, SimulationParams, simulate_impact};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    ParametersSet(SimulationParams),
    Simulated {
        params: SimulationParams,
        outcome: Box<ImpactOutcome>,
    },
}

/// Tag of a [`SessionState`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    ParametersSet,
    Simulated,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no parameters have been set")]
    NotConfigured,
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

#[derive(Debug, Clone)]
pub struct SimulationSession {
    model: ModelConfig,
    state: SessionState,
}

impl SimulationSession {
    pub fn new(model: ModelConfig) -> Self {
        Self {
            model,
            state: SessionState::Idle,
        }
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        match self.state {
            SessionState::Idle => SessionPhase::Idle,
            SessionState::ParametersSet(_) => SessionPhase::ParametersSet,
            SessionState::Simulated { .. } => SessionPhase::Simulated,
        }
    }

    /// Parameters currently held, if any.
    pub fn params(&self) -> Option<&SimulationParams> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::ParametersSet(params) | SessionState::Simulated { params, .. } => {
                Some(params)
            }
        }
    }

    /// Outcome of the last run, if the parameters have not changed since.
    pub fn outcome(&self) -> Option<&ImpactOutcome> {
        match &self.state {
            SessionState::Simulated { outcome, .. } => Some(&**outcome),
            _ => None,
        }
    }

    /// Store new parameters after checking them against the supported ranges.
    pub fn set_parameters(&mut self, params: SimulationParams) -> Result<(), SessionError> {
        params.check_ranges()?;
        debug!(from = ?self.phase(), "parameters set");
        self.state = SessionState::ParametersSet(params);
        Ok(())
    }

    /// Run the simulation for the held parameters.
    pub fn run(&mut self) -> Result<&ImpactOutcome, SessionError> {
        let params = *self.params().ok_or(SessionError::NotConfigured)?;
        let outcome = simulate_impact(&params, &self.model)?;
        debug!(will_impact = outcome.will_impact, "session simulated");
        self.state = SessionState::Simulated {
            params,
            outcome: Box::new(outcome),
        };
        self.outcome().ok_or(SessionError::NotConfigured)
    }

    /// Drop parameters and results.
    pub fn reset(&mut self) {
        debug!(from = ?self.phase(), "session reset");
        self.state = SessionState::Idle;
    }
}
