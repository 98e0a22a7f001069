//! Random policy for testing and baselines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::trait_::Policy;
use crate::env::types::Action;

/// Uniformly random action selection.
///
/// Each robot independently picks one of the five actions. Used for sanity
/// checks and as a lower-bound baseline.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a new random policy with its own seeded generator.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select_actions(&mut self, observations: &[Vec<f64>]) -> Vec<Action> {
        let actions = Action::all();
        (0..observations.len())
            .map(|_| actions[self.rng.gen_range(0..Action::COUNT)])
            .collect()
    }

    fn name(&self) -> &str {
        "random"
    }
}
