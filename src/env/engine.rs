//! Stepping engines: turn commanded goal poses into realized poses.
//!
//! The environment treats the engine's output as ground truth. Physical
//! modelling (collisions, kinematics) belongs to the engine, not the core.

use super::types::Pose;

/// Converts goal poses into the poses robots actually reach in one step.
pub trait SteppingEngine {
    /// Starts a new episode with robots at `poses`.
    fn reset(&mut self, poses: &[Pose]);

    /// Advances one step toward `goals`, returning one pose per robot.
    fn step(&mut self, goals: &[Pose]) -> Vec<Pose>;

    /// Returns a human-readable name for this engine.
    fn name(&self) -> &str;
}

/// Robots arrive exactly at their goals every step.
#[derive(Debug, Clone, Default)]
pub struct TeleportEngine;

impl SteppingEngine for TeleportEngine {
    fn reset(&mut self, _poses: &[Pose]) {}

    fn step(&mut self, goals: &[Pose]) -> Vec<Pose> {
        goals.to_vec()
    }

    fn name(&self) -> &str {
        "teleport"
    }
}

/// Speed-limited point robots.
///
/// Each step a robot moves straight toward its goal by at most `max_speed`
/// and turns to face its direction of travel. A robot that does not move
/// keeps its heading.
#[derive(Debug, Clone)]
pub struct KinematicEngine {
    max_speed: f64,
    poses: Vec<Pose>,
}

impl KinematicEngine {
    pub fn new(max_speed: f64) -> Self {
        Self {
            max_speed,
            poses: Vec::new(),
        }
    }
}

impl SteppingEngine for KinematicEngine {
    fn reset(&mut self, poses: &[Pose]) {
        self.poses = poses.to_vec();
    }

    fn step(&mut self, goals: &[Pose]) -> Vec<Pose> {
        // Robots the engine has not seen yet start at their goals.
        let known = self.poses.len().min(goals.len());
        self.poses.truncate(known);
        self.poses.extend_from_slice(&goals[known..]);
        for (current, goal) in self.poses.iter_mut().zip(goals) {
            let from = current.position();
            let to = from.step_toward(&goal.position(), self.max_speed);
            let dx = to.x - from.x;
            let dy = to.y - from.y;
            let theta = if dx.abs() + dy.abs() > 1e-12 {
                dy.atan2(dx)
            } else {
                current.theta
            };
            *current = Pose::new(to.x, to.y, theta);
        }
        self.poses.clone()
    }

    fn name(&self) -> &str {
        "kinematic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teleport_returns_goals() {
        let mut engine = TeleportEngine;
        let goals = vec![Pose::new(1.0, 2.0, 0.0), Pose::new(-1.0, 0.5, 0.0)];
        engine.reset(&goals);
        assert_eq!(engine.step(&goals), goals);
    }

    #[test]
    fn kinematic_limits_speed() {
        let mut engine = KinematicEngine::new(0.1);
        engine.reset(&[Pose::new(0.0, 0.0, 0.0)]);
        let next = engine.step(&[Pose::new(1.0, 0.0, 0.0)]);
        assert!((next[0].x - 0.1).abs() < 1e-12);
        assert!(next[0].theta.abs() < 1e-12);
    }

    #[test]
    fn kinematic_reaches_near_goal_and_faces_travel() {
        let mut engine = KinematicEngine::new(0.5);
        engine.reset(&[Pose::new(0.0, 0.0, 0.0)]);
        let next = engine.step(&[Pose::new(0.0, 0.2, 0.0)]);
        assert_eq!(next[0].position().y, 0.2);
        assert!((next[0].theta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn kinematic_unseen_robots_start_at_goals() {
        let mut engine = KinematicEngine::new(0.1);
        engine.reset(&[Pose::new(0.0, 0.0, 0.0)]);
        let next = engine.step(&[Pose::new(1.0, 0.0, 0.0), Pose::new(0.75, -0.5, 0.25)]);
        assert_eq!(next.len(), 2);
        assert_eq!(next[1], Pose::new(0.75, -0.5, 0.25));
    }

    #[test]
    fn kinematic_idle_keeps_heading() {
        let mut engine = KinematicEngine::new(0.5);
        engine.reset(&[Pose::new(0.3, 0.3, 1.0)]);
        let next = engine.step(&[Pose::new(0.3, 0.3, 0.0)]);
        assert_eq!(next[0].theta, 1.0);
    }
}
