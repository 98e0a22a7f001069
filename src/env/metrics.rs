//! Evaluation metrics for the predator-capture-prey environment.
//!
//! Runs a policy for a number of episodes and aggregates reward, episode
//! length, prey progress and distance travelled.

use std::fmt;

use tracing::info;

use super::engine::SteppingEngine;
use super::environment::PcpEnvironment;
use super::policy::Policy;
use crate::error::Result;

/// Aggregated evaluation metrics over multiple episodes.
#[derive(Debug, Clone)]
pub struct EvaluationMetrics {
    /// Mean cumulative reward per episode.
    pub mean_reward: f64,
    /// Standard deviation of the cumulative reward.
    pub std_reward: f64,
    /// Mean episode length in steps.
    pub mean_steps: f64,
    /// Mean number of prey sensed per episode.
    pub mean_prey_sensed: f64,
    /// Mean number of prey captured per episode.
    pub mean_prey_captured: f64,
    /// Percentage of episodes in which every prey was captured.
    pub pct_cleared: f64,
    /// Mean distance travelled per robot, averaged over episodes.
    pub mean_distance_per_agent: Vec<f64>,
    /// Number of episodes evaluated.
    pub n_episodes: usize,
}

/// Tracks per-episode statistics during evaluation.
#[derive(Debug, Default)]
struct EpisodeStats {
    reward: f64,
    steps: u32,
    sensed: usize,
    captured: usize,
    cleared: bool,
    distance: Vec<f64>,
}

impl EvaluationMetrics {
    /// Evaluates a policy over multiple episodes and returns aggregated metrics.
    ///
    /// # Arguments
    ///
    /// * `env` - The environment to evaluate in
    /// * `policy` - The policy to evaluate
    /// * `n_episodes` - Number of episodes to run
    pub fn evaluate<E: SteppingEngine>(
        env: &mut PcpEnvironment<E>,
        policy: &mut dyn Policy,
        n_episodes: usize,
    ) -> Result<Self> {
        let n_agents = env.n_agents();
        let mut all_stats = Vec::with_capacity(n_episodes);

        for episode in 0..n_episodes {
            let mut obs = env.reset()?;
            let mut stats = EpisodeStats {
                distance: vec![0.0; n_agents],
                ..EpisodeStats::default()
            };

            loop {
                let actions = policy.select_actions(&obs);
                let before = env.poses().to_vec();
                let result = env.step(&actions)?;

                for (d, (a, b)) in stats
                    .distance
                    .iter_mut()
                    .zip(before.iter().zip(env.poses()))
                {
                    *d += a.position().distance_to(&b.position());
                }
                stats.reward += result.reward();
                stats.sensed += result.newly_sensed;
                stats.captured += result.newly_captured;
                stats.steps = result.step_count;

                let done = result.done();
                obs = result.observations;
                if done {
                    stats.cleared = env.snapshot().uncaptured == 0;
                    break;
                }
            }

            info!(
                episode = episode + 1,
                policy = policy.name(),
                reward = stats.reward,
                steps = stats.steps,
                captured = stats.captured,
                "Evaluation episode"
            );
            all_stats.push(stats);
        }

        let mean_reward = mean_of(&all_stats, |s| s.reward);
        let std_reward = mean_of(&all_stats, |s| (s.reward - mean_reward).powi(2)).sqrt();
        let mean_distance_per_agent = (0..n_agents)
            .map(|i| mean_of(&all_stats, |s| s.distance[i]))
            .collect();

        Ok(Self {
            mean_reward,
            std_reward,
            mean_steps: mean_of(&all_stats, |s| s.steps as f64),
            mean_prey_sensed: mean_of(&all_stats, |s| s.sensed as f64),
            mean_prey_captured: mean_of(&all_stats, |s| s.captured as f64),
            pct_cleared: mean_of(&all_stats, |s| if s.cleared { 100.0 } else { 0.0 }),
            mean_distance_per_agent,
            n_episodes,
        })
    }

    /// Mean distance travelled by all robots together per episode.
    pub fn mean_total_distance(&self) -> f64 {
        self.mean_distance_per_agent.iter().sum()
    }
}

fn mean_of(stats: &[EpisodeStats], f: impl Fn(&EpisodeStats) -> f64) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }
    stats.iter().map(f).sum::<f64>() / stats.len() as f64
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} episodes) ===",
            self.n_episodes
        )?;
        writeln!(
            f,
            "  Mean reward:             {:.2} (std {:.2})",
            self.mean_reward, self.std_reward
        )?;
        writeln!(f, "  Mean steps:              {:.1}", self.mean_steps)?;
        writeln!(f, "  Mean prey sensed:        {:.1}", self.mean_prey_sensed)?;
        writeln!(f, "  Mean prey captured:      {:.1}", self.mean_prey_captured)?;
        writeln!(f, "  Episodes cleared:        {:.1}%", self.pct_cleared)?;
        writeln!(
            f,
            "  Mean distance travelled: {:.2}",
            self.mean_total_distance()
        )
    }
}
