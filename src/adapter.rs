//! Gym-style adapter over [`PcpEnvironment`].
//!
//! Accepts raw action ids, returns per-robot tuples, and describes the
//! per-robot action and observation spaces.

use crate::env::{Action, PcpConfig, PcpEnvironment, StepInfo, SteppingEngine};
use crate::error::Result;
use crate::spaces::{BoxSpace, Discrete};

/// Per-robot observations, rewards, terminal flags and infos.
pub type StepTuple = (Vec<Vec<f64>>, Vec<f64>, Vec<bool>, Vec<StepInfo>);

/// Thin reset/step wrapper speaking action ids.
#[derive(Debug)]
pub struct GymAdapter<E: SteppingEngine> {
    env: PcpEnvironment<E>,
    action_space: Vec<Discrete>,
    observation_space: Vec<BoxSpace>,
}

impl<E: SteppingEngine> GymAdapter<E> {
    pub fn new(env: PcpEnvironment<E>) -> Self {
        let n = env.n_agents();
        let config = env.config();
        let obs = BoxSpace::uniform(&[env.observation_dim()], config.obs_low, config.obs_high);
        Self {
            action_space: vec![Discrete::new(PcpConfig::ACTION_DIM); n],
            observation_space: vec![obs; n],
            env,
        }
    }

    /// Starts a new episode; returns zero-filled observations.
    pub fn reset(&mut self) -> Result<Vec<Vec<f64>>> {
        self.env.reset()
    }

    /// Steps with one action id per robot.
    ///
    /// Ids outside `0..=4` are rejected with
    /// [`EnvError::InvalidAction`](crate::EnvError::InvalidAction).
    pub fn step(&mut self, action_ids: &[usize]) -> Result<StepTuple> {
        let actions = Action::decode_all(action_ids)?;
        let result = self.env.step(&actions)?;
        Ok((
            result.observations,
            result.rewards,
            result.terminals,
            result.infos,
        ))
    }

    pub fn action_space(&self) -> &[Discrete] {
        &self.action_space
    }

    pub fn observation_space(&self) -> &[BoxSpace] {
        &self.observation_space
    }

    pub fn n_agents(&self) -> usize {
        self.env.n_agents()
    }

    /// The wrapped environment.
    pub fn env(&self) -> &PcpEnvironment<E> {
        &self.env
    }

    pub fn into_inner(self) -> PcpEnvironment<E> {
        self.env
    }
}
