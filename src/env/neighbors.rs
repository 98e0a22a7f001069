//! Neighbor selection strategy for observation composition.

use super::geometry;
use super::types::Pose;
use crate::error::Result;

/// How each agent picks the neighbors whose blocks follow its own.
///
/// Chosen once from the configuration. Every variant fills a fixed number of
/// slots so observation width never changes within a configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NeighborStrategy {
    /// The `k` nearest robots.
    Nearest(usize),
    /// Every other robot, nearest first.
    AllOthers,
    /// Up to `slots` robots within `delta`, nearest first; unused slots stay empty.
    Radius { delta: f64, slots: usize },
}

impl NeighborStrategy {
    /// Number of neighbor slots in an observation for `num_robots` robots.
    pub fn slots(&self, num_robots: usize) -> usize {
        match self {
            NeighborStrategy::Nearest(k) => *k,
            NeighborStrategy::AllOthers => num_robots.saturating_sub(1),
            NeighborStrategy::Radius { slots, .. } => *slots,
        }
    }

    /// Neighbor indices for `agent_index`, nearest first.
    ///
    /// The result never exceeds [`NeighborStrategy::slots`]; only the radius
    /// strategy can return fewer.
    pub fn select(&self, poses: &[Pose], agent_index: usize) -> Result<Vec<usize>> {
        match self {
            NeighborStrategy::Nearest(k) => geometry::nearest_neighbors(poses, agent_index, *k),
            NeighborStrategy::AllOthers => geometry::all_neighbors(poses, agent_index),
            NeighborStrategy::Radius { delta, slots } => {
                let mut within = geometry::radius_neighbors(poses, agent_index, *delta)?;
                within.truncate(*slots);
                Ok(within)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poses() -> Vec<Pose> {
        [0.0, 0.3, 1.0, 0.1]
            .iter()
            .map(|&x| Pose::new(x, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn all_others_sorted_by_distance() {
        let s = NeighborStrategy::AllOthers;
        assert_eq!(s.select(&poses(), 0).unwrap(), vec![3, 1, 2]);
        assert_eq!(s.slots(4), 3);
    }

    #[test]
    fn nearest_takes_k() {
        let s = NeighborStrategy::Nearest(1);
        assert_eq!(s.select(&poses(), 2).unwrap(), vec![1]);
    }

    #[test]
    fn radius_truncates_to_slots() {
        let s = NeighborStrategy::Radius {
            delta: 0.5,
            slots: 1,
        };
        assert_eq!(s.select(&poses(), 0).unwrap(), vec![3]);
        let s = NeighborStrategy::Radius {
            delta: 0.05,
            slots: 2,
        };
        assert!(s.select(&poses(), 0).unwrap().is_empty());
        assert_eq!(s.slots(4), 2);
    }
}
