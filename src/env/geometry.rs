//! Distance and neighborhood queries over a pose matrix.

use super::types::{Pose, Position};
use crate::error::{EnvError, Result};

fn pose_of(poses: &[Pose], agent_index: usize) -> Result<&Pose> {
    poses.get(agent_index).ok_or(EnvError::AgentIndexOutOfRange {
        index: agent_index,
        len: poses.len(),
    })
}

/// Tests whether `point` lies within `radius` of robot `agent_index`.
///
/// Returns `(in_range, distance)`; the boundary counts as in range.
pub fn is_close(
    poses: &[Pose],
    agent_index: usize,
    point: &Position,
    radius: f64,
) -> Result<(bool, f64)> {
    let dist = pose_of(poses, agent_index)?.position().distance_to(point);
    Ok((dist <= radius, dist))
}

/// Other robots sorted by ascending distance to `agent_index`, ties by index.
fn ranked_others(poses: &[Pose], agent_index: usize) -> Result<Vec<(usize, f64)>> {
    let origin = pose_of(poses, agent_index)?.position();
    let mut ranked: Vec<(usize, f64)> = poses
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != agent_index)
        .map(|(i, p)| (i, origin.distance_to(&p.position())))
        .collect();
    // Stable sort keeps index order among equal distances.
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    Ok(ranked)
}

/// The `k` robots closest to `agent_index`, nearest first.
///
/// `k` must be smaller than the number of other robots; callers wanting
/// every other robot use [`all_neighbors`].
pub fn nearest_neighbors(poses: &[Pose], agent_index: usize, k: usize) -> Result<Vec<usize>> {
    let others = poses.len().saturating_sub(1);
    if k >= others {
        return Err(EnvError::InvalidArgument(format!(
            "requested {k} nearest neighbors but only {others} other robots exist"
        )));
    }
    let ranked = ranked_others(poses, agent_index)?;
    Ok(ranked.into_iter().take(k).map(|(i, _)| i).collect())
}

/// Every other robot, nearest first.
pub fn all_neighbors(poses: &[Pose], agent_index: usize) -> Result<Vec<usize>> {
    Ok(ranked_others(poses, agent_index)?
        .into_iter()
        .map(|(i, _)| i)
        .collect())
}

/// Robots within `delta` of `agent_index`, nearest first.
pub fn radius_neighbors(poses: &[Pose], agent_index: usize, delta: f64) -> Result<Vec<usize>> {
    Ok(ranked_others(poses, agent_index)?
        .into_iter()
        .take_while(|(_, d)| *d <= delta)
        .map(|(i, _)| i)
        .collect())
}
