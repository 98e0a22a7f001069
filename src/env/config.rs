//! Configuration for the predator-capture-prey environment.

use super::neighbors::NeighborStrategy;
use super::types::ArenaBounds;
use crate::error::{EnvError, Result};

/// Options record for the environment.
///
/// Loaded by the caller (file formats are not this crate's concern) and
/// treated as immutable once handed to
/// [`PcpEnvironment::new`](super::environment::PcpEnvironment::new), which
/// runs [`PcpConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PcpConfig {
    // --- Population ---
    /// Number of predators (sensing-only robots).
    pub num_predators: usize,
    /// Number of capture agents (capture-only robots).
    pub num_capture: usize,
    /// Number of prey placed each episode.
    pub num_prey: usize,

    // --- Capabilities ---
    /// Sensing radius shared by all predators.
    pub predator_radius: f64,
    /// Capture radius shared by all capture agents.
    pub capture_radius: f64,

    // --- Arena and placement ---
    pub bounds: ArenaBounds,
    /// Robots spawn with `x >= robot_init_right_thresh`.
    pub robot_init_right_thresh: f64,
    /// Prey spawn with `x <= prey_init_left_thresh`.
    pub prey_init_left_thresh: f64,
    /// Minimum spacing between sampled locations of the same kind.
    pub start_dist: f64,
    /// Goal displacement of one movement action.
    pub step_size: f64,

    // --- Observation ---
    /// Number of neighbor blocks appended to each observation.
    pub num_neighbors: usize,
    /// Neighborhood radius; a positive value selects radius-based neighbors.
    pub delta: f64,
    /// Lower bound advertised by the observation space.
    pub obs_low: f64,
    /// Upper bound advertised by the observation space.
    pub obs_high: f64,

    // --- Reward ---
    /// Reward per newly sensed prey.
    pub sense_reward: f64,
    /// Reward per newly captured prey.
    pub capture_reward: f64,
    /// Added every step (normally negative).
    pub time_penalty: f64,

    /// The episode terminates once the step counter exceeds this value.
    pub max_episode_steps: u32,
}

impl PcpConfig {
    /// Number of features in one agent block.
    pub const AGENT_FEATURE_DIM: usize = 6;

    /// Number of discrete actions per robot.
    pub const ACTION_DIM: usize = 5;

    /// Total number of robots.
    pub fn num_robots(&self) -> usize {
        self.num_predators + self.num_capture
    }

    /// Observation width per robot: own block plus `num_neighbors` blocks.
    pub fn observation_dim(&self) -> usize {
        Self::AGENT_FEATURE_DIM * (self.num_neighbors + 1)
    }

    /// Neighbor selection implied by `delta` and `num_neighbors`.
    pub fn neighbor_strategy(&self) -> NeighborStrategy {
        if self.delta > 0.0 {
            NeighborStrategy::Radius {
                delta: self.delta,
                slots: self.num_neighbors,
            }
        } else if self.num_robots() > 0 && self.num_neighbors >= self.num_robots() - 1 {
            NeighborStrategy::AllOthers
        } else {
            NeighborStrategy::Nearest(self.num_neighbors)
        }
    }

    /// Checks every option, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        let n = self.num_robots();
        if n == 0 {
            return Err(invalid("num_predators", "at least one robot is required"));
        }
        if self.num_prey == 0 {
            return Err(invalid("num_prey", "at least one prey is required"));
        }
        non_negative("predator_radius", self.predator_radius)?;
        non_negative("capture_radius", self.capture_radius)?;
        non_negative("start_dist", self.start_dist)?;
        non_negative("delta", self.delta)?;
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(invalid("step_size", "must be positive"));
        }

        let b = &self.bounds;
        for (field, value) in [
            ("bounds.left", b.left),
            ("bounds.right", b.right),
            ("bounds.up", b.up),
            ("bounds.down", b.down),
            ("robot_init_right_thresh", self.robot_init_right_thresh),
            ("prey_init_left_thresh", self.prey_init_left_thresh),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        if !(b.left < b.right) {
            return Err(invalid("bounds", "left must be smaller than right"));
        }
        if !(b.up < b.down) {
            return Err(invalid("bounds", "up must be smaller than down"));
        }
        if !(b.width().is_finite() && b.height().is_finite()) {
            return Err(invalid("bounds", "arena extent must be finite"));
        }
        if !(self.robot_init_right_thresh >= b.left && self.robot_init_right_thresh <= b.right) {
            return Err(invalid("robot_init_right_thresh", "must lie inside the arena"));
        }
        if !(self.prey_init_left_thresh >= b.left && self.prey_init_left_thresh <= b.right) {
            return Err(invalid("prey_init_left_thresh", "must lie inside the arena"));
        }

        if self.num_neighbors > n - 1 {
            return Err(EnvError::InvalidConfig {
                field: "num_neighbors",
                reason: format!(
                    "{} neighbors requested but only {} other robots exist",
                    self.num_neighbors,
                    n - 1
                ),
            });
        }
        if !(self.obs_low.is_finite() && self.obs_high.is_finite()) {
            return Err(invalid("obs_low", "observation bounds must be finite"));
        }
        if !(self.obs_low < self.obs_high) {
            return Err(invalid("obs_low", "must be smaller than obs_high"));
        }
        for (field, value) in [
            ("sense_reward", self.sense_reward),
            ("capture_reward", self.capture_reward),
            ("time_penalty", self.time_penalty),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> EnvError {
    EnvError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite, non-negative number"))
    }
}

impl Default for PcpConfig {
    fn default() -> Self {
        Self {
            num_predators: 2,
            num_capture: 2,
            num_prey: 6,
            predator_radius: 0.45,
            capture_radius: 0.25,
            bounds: ArenaBounds::default(),
            robot_init_right_thresh: 0.5,
            prey_init_left_thresh: -0.5,
            start_dist: 0.2,
            step_size: 0.2,
            num_neighbors: 3,
            delta: 0.0,
            obs_low: -1.5,
            obs_high: 3.0,
            sense_reward: 1.0,
            capture_reward: 5.0,
            time_penalty: -0.05,
            max_episode_steps: 80,
        }
    }
}
