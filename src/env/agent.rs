//! Agent descriptors and their local observation.

use super::geometry::is_close;
use super::state::StateSnapshot;
use super::types::{Pose, Position};
use crate::error::{EnvError, Result};

/// Prey location reported when nothing is in sensing range.
///
/// Lies outside any arena produced by the default configuration.
pub const SENTINEL_PREY: [f64; 2] = [-5.0, -5.0];

/// A robot's capabilities.
///
/// Predators carry a positive sensing radius and a zero capture radius;
/// capture agents the reverse. A zero radius disables that capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    /// Index into the pose matrix.
    pub index: usize,
    pub sensing_radius: f64,
    pub capture_radius: f64,
}

impl Agent {
    pub fn new(index: usize, sensing_radius: f64, capture_radius: f64) -> Self {
        Self {
            index,
            sensing_radius,
            capture_radius,
        }
    }

    /// True if `location` is inside this agent's sensing radius.
    pub fn senses(&self, poses: &[Pose], location: &Position) -> Result<bool> {
        is_close(poses, self.index, location, self.sensing_radius).map(|(close, _)| close)
    }

    /// True if `location` is inside this agent's capture radius.
    pub fn captures(&self, poses: &[Pose], location: &Position) -> Result<bool> {
        is_close(poses, self.index, location, self.capture_radius).map(|(close, _)| close)
    }

    /// Builds `[x, y, prey_x, prey_y, sensing_radius, capture_radius]`.
    ///
    /// The prey is the closest uncaptured prey within sensing range; on equal
    /// distance the earlier prey wins. Without one, the prey slot holds
    /// [`SENTINEL_PREY`].
    pub fn observation(&self, snapshot: &StateSnapshot) -> Result<[f64; 6]> {
        let mut closest: Option<(f64, Position)> = None;
        for prey in &snapshot.prey {
            let (in_range, dist) = is_close(&snapshot.poses, self.index, prey, self.sensing_radius)?;
            if in_range && closest.is_none_or(|(best, _)| dist < best) {
                closest = Some((dist, *prey));
            }
        }
        let [px, py] = closest.map_or(SENTINEL_PREY, |(_, p)| [p.x, p.y]);
        let pose = snapshot
            .poses
            .get(self.index)
            .ok_or(EnvError::AgentIndexOutOfRange {
                index: self.index,
                len: snapshot.poses.len(),
            })?;
        Ok([
            pose.x,
            pose.y,
            px,
            py,
            self.sensing_radius,
            self.capture_radius,
        ])
    }
}
