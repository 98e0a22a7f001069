//! Policy trait for the environment.

use crate::env::types::Action;

/// A policy that selects actions for robots based on observations.
pub trait Policy: Send + Sync {
    /// Selects one action per robot given their observations.
    ///
    /// # Arguments
    ///
    /// * `observations` - Per-robot observation vectors (from [`ObservationBuilder`](crate::env::ObservationBuilder))
    ///
    /// # Returns
    ///
    /// A vector of actions, one per robot.
    fn select_actions(&mut self, observations: &[Vec<f64>]) -> Vec<Action>;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
