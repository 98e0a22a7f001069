//! Greedy pursuit policy baseline.
//!
//! Robots share what their neighbors see: every non-sentinel prey location in
//! an observation is a known target.

use super::trait_::Policy;
use crate::env::agent::SENTINEL_PREY;
use crate::env::config::PcpConfig;
use crate::env::types::{Action, Position};

/// One decoded 6-feature block.
#[derive(Debug, Clone, Copy)]
struct Block {
    position: Position,
    prey: Option<Position>,
    capture_radius: f64,
}

impl Block {
    fn decode(chunk: &[f64]) -> Option<Self> {
        let [x, y, px, py, _sensing, capture] = chunk else {
            return None;
        };
        let prey = ([*px, *py] != SENTINEL_PREY).then(|| Position::new(*px, *py));
        Some(Self {
            position: Position::new(*x, *y),
            prey,
            capture_radius: *capture,
        })
    }

    /// `None` for zero-padded neighbor slots.
    fn decode_neighbor(chunk: &[f64]) -> Option<Self> {
        if chunk.iter().all(|v| *v == 0.0) {
            return None;
        }
        Self::decode(chunk)
    }
}

/// Heuristic pursuit of known prey.
///
/// - A capture agent stops (`NoAction`) when a known prey is inside its
///   capture radius.
/// - A predator holding a prey in its own sensing range stops, keeping the
///   prey visible to its neighbors.
/// - Otherwise a robot steps along the dominant axis toward the closest
///   known prey.
/// - With nothing known, robots sweep left (prey start on the left), and
///   slide vertically once they reach the left edge.
pub struct PursuitPolicy {
    config: PcpConfig,
}

impl PursuitPolicy {
    /// Creates a new pursuit policy with the given configuration.
    pub fn new(config: PcpConfig) -> Self {
        Self { config }
    }

    fn act(&self, robot: usize, obs: &[f64]) -> Action {
        let mut chunks = obs.chunks(PcpConfig::AGENT_FEATURE_DIM);
        let Some(own) = chunks.next().and_then(Block::decode) else {
            return Action::NoAction;
        };
        let neighbors: Vec<Block> = chunks.filter_map(Block::decode_neighbor).collect();

        let target = std::iter::once(&own)
            .chain(&neighbors)
            .filter_map(|b| b.prey)
            .min_by(|a, b| {
                own.position
                    .distance_to(a)
                    .total_cmp(&own.position.distance_to(b))
            });

        match target {
            Some(t) if own.capture_radius > 0.0 => {
                if own.position.distance_to(&t) <= own.capture_radius {
                    Action::NoAction
                } else {
                    toward(&own.position, &t)
                }
            }
            Some(_) if own.prey.is_some() => Action::NoAction,
            Some(t) => toward(&own.position, &t),
            None => self.sweep(robot, &own.position),
        }
    }

    fn sweep(&self, robot: usize, at: &Position) -> Action {
        if at.x - self.config.step_size >= self.config.bounds.left {
            Action::Left
        } else if robot % 2 == 0 {
            Action::Down
        } else {
            Action::Up
        }
    }
}

/// Movement along the axis with the larger gap to `target`.
fn toward(from: &Position, target: &Position) -> Action {
    let dx = target.x - from.x;
    let dy = target.y - from.y;
    if dx.abs() >= dy.abs() {
        if dx > 0.0 {
            Action::Right
        } else {
            Action::Left
        }
    } else if dy > 0.0 {
        Action::Down
    } else {
        Action::Up
    }
}

impl Policy for PursuitPolicy {
    fn select_actions(&mut self, observations: &[Vec<f64>]) -> Vec<Action> {
        observations
            .iter()
            .enumerate()
            .map(|(i, obs)| self.act(i, obs))
            .collect()
    }

    fn name(&self) -> &str {
        "pursuit"
    }
}
