//! Shared reward for the cooperative task.

use super::config::PcpConfig;
use super::state::StateSnapshot;

/// Computes rewards for the environment.
pub struct RewardComputer;

impl RewardComputer {
    /// Reward for the transition `prior → next`, identical for every agent.
    ///
    /// # Components
    ///
    /// 1. **Sensing**: `sense_reward` per prey sensed during the transition.
    /// 2. **Capture**: `capture_reward` per prey captured during the transition.
    /// 3. **Time penalty**: `time_penalty`, added once per step.
    pub fn compute(prior: &StateSnapshot, next: &StateSnapshot, config: &PcpConfig) -> f64 {
        let newly_sensed = prior.unsensed.saturating_sub(next.unsensed);
        let newly_captured = prior.uncaptured.saturating_sub(next.uncaptured);
        newly_sensed as f64 * config.sense_reward
            + newly_captured as f64 * config.capture_reward
            + config.time_penalty
    }
}
