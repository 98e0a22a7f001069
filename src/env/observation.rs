//! Observation encoding for the environment.
//!
//! Each robot observes its own 6-feature block followed by the blocks of its
//! neighbors, nearest first.

use super::agent::Agent;
use super::config::PcpConfig;
use super::neighbors::NeighborStrategy;
use super::state::StateSnapshot;
use crate::error::Result;

/// Builds observation vectors for agents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationBuilder {
    strategy: NeighborStrategy,
    slots: usize,
}

impl ObservationBuilder {
    /// Creates a builder for a validated configuration.
    pub fn new(config: &PcpConfig) -> Self {
        let strategy = config.neighbor_strategy();
        Self {
            strategy,
            slots: strategy.slots(config.num_robots()),
        }
    }

    /// Width of every observation vector this builder produces.
    pub fn dim(&self) -> usize {
        PcpConfig::AGENT_FEATURE_DIM * (self.slots + 1)
    }

    /// Builds the observations of all agents.
    ///
    /// Layout per agent:
    /// ```text
    /// [own(6)] ++ [neighbor_1(6)] ++ ... ++ [neighbor_k(6)]
    /// ```
    /// Neighbor slots the strategy leaves empty are zero-padded.
    pub fn build_all(&self, agents: &[Agent], snapshot: &StateSnapshot) -> Result<Vec<Vec<f64>>> {
        let blocks = agents
            .iter()
            .map(|a| a.observation(snapshot))
            .collect::<Result<Vec<_>>>()?;

        agents
            .iter()
            .map(|agent| {
                let mut obs = Vec::with_capacity(self.dim());
                obs.extend_from_slice(&blocks[agent.index]);
                let neighbors = self.strategy.select(&snapshot.poses, agent.index)?;
                for &n in &neighbors {
                    obs.extend_from_slice(&blocks[n]);
                }
                let missing = self.slots - neighbors.len();
                obs.extend(std::iter::repeat_n(
                    0.0,
                    missing * PcpConfig::AGENT_FEATURE_DIM,
                ));
                Ok(obs)
            })
            .collect()
    }

    /// Zero-filled observations handed out by `reset`.
    pub fn placeholder(&self, num_robots: usize) -> Vec<Vec<f64>> {
        vec![vec![0.0; self.dim()]; num_robots]
    }
}
