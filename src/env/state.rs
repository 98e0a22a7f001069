//! Prey bookkeeping and the per-step state snapshot.

use super::agent::Agent;
use super::types::{Action, Pose, Position};
use crate::error::{EnvError, Result};

/// Sensed/captured flags, one entry per prey.
///
/// Flags only ever go from `false` to `true` within an episode, and a prey
/// is only captured after it has been sensed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreyStatus {
    sensed: Vec<bool>,
    captured: Vec<bool>,
}

/// Prey flipped by one [`PreyStatus::update`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusChanges {
    pub sensed: Vec<usize>,
    pub captured: Vec<usize>,
}

impl PreyStatus {
    /// All-false flags for `num_prey` prey.
    pub fn new(num_prey: usize) -> Self {
        Self {
            sensed: vec![false; num_prey],
            captured: vec![false; num_prey],
        }
    }

    pub fn sensed(&self) -> &[bool] {
        &self.sensed
    }

    pub fn captured(&self) -> &[bool] {
        &self.captured
    }

    pub fn unsensed_count(&self) -> usize {
        self.sensed.iter().filter(|s| !**s).count()
    }

    pub fn uncaptured_count(&self) -> usize {
        self.captured.iter().filter(|c| !**c).count()
    }

    /// Applies one step of sensing followed by capture.
    ///
    /// A prey becomes sensed when any agent's sensing radius covers it. A
    /// sensed prey becomes captured when an agent whose action is
    /// [`Action::NoAction`] has it within its capture radius. Sensing runs
    /// first, so a prey can be sensed and captured in the same step.
    ///
    /// Fails without touching any flag if an agent has no pose.
    pub fn update(
        &mut self,
        prey: &[Position],
        poses: &[Pose],
        agents: &[Agent],
        actions: &[Action],
    ) -> Result<StatusChanges> {
        if let Some(agent) = agents.iter().find(|a| a.index >= poses.len()) {
            return Err(EnvError::AgentIndexOutOfRange {
                index: agent.index,
                len: poses.len(),
            });
        }

        let mut changes = StatusChanges::default();
        for (i, location) in prey.iter().enumerate() {
            if self.captured[i] {
                continue;
            }
            if !self.sensed[i] && any_agent(agents, |a| a.senses(poses, location))? {
                self.sensed[i] = true;
                changes.sensed.push(i);
            }
            if self.sensed[i] {
                let stationary = agents
                    .iter()
                    .zip(actions)
                    .filter(|(_, action)| **action == Action::NoAction)
                    .map(|(a, _)| a);
                if any_agent(stationary, |a| a.captures(poses, location))? {
                    self.captured[i] = true;
                    changes.captured.push(i);
                }
            }
        }
        Ok(changes)
    }
}

fn any_agent<'a>(
    agents: impl IntoIterator<Item = &'a Agent>,
    mut check: impl FnMut(&Agent) -> Result<bool>,
) -> Result<bool> {
    for agent in agents {
        if check(agent)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Derived view of the episode after a step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateSnapshot {
    /// Realized robot poses.
    pub poses: Vec<Pose>,
    /// Number of prey not yet captured.
    pub uncaptured: usize,
    /// Number of prey not yet sensed.
    pub unsensed: usize,
    /// Locations of uncaptured prey, in prey-index order.
    pub prey: Vec<Position>,
}

impl StateSnapshot {
    pub fn build(poses: &[Pose], prey: &[Position], status: &PreyStatus) -> Self {
        let remaining = prey
            .iter()
            .zip(status.captured())
            .filter(|(_, captured)| !**captured)
            .map(|(p, _)| *p)
            .collect();
        Self {
            poses: poses.to_vec(),
            uncaptured: status.uncaptured_count(),
            unsensed: status.unsensed_count(),
            prey: remaining,
        }
    }
}
