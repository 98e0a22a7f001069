//! Core value types for the predator-capture-prey arena.
//!
//! Defines planar positions, robot poses, the arena rectangle and the five
//! discrete actions every robot chooses from.

use crate::error::{EnvError, Result};

/// A 2D location in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns the unit direction vector from `self` toward `target`.
    ///
    /// Returns `(0, 0)` if positions are coincident.
    pub fn direction_to(&self, target: &Position) -> (f64, f64) {
        let dx = target.x - self.x;
        let dy = target.y - self.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < 1e-12 {
            (0.0, 0.0)
        } else {
            (dx / dist, dy / dist)
        }
    }

    /// Returns the position reached by moving toward `target` by at most `max_dist`.
    pub fn step_toward(&self, target: &Position, max_dist: f64) -> Position {
        let dist = self.distance_to(target);
        if dist <= max_dist {
            return *target;
        }
        let (dx, dy) = self.direction_to(target);
        Position::new(self.x + dx * max_dist, self.y + dy * max_dist)
    }
}

/// Robot pose: planar position plus heading in radians.
///
/// Only `x` and `y` take part in sensing, capture and observations; the
/// heading is carried for stepping engines that model orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Pose at `position` with zero heading.
    pub fn at(position: Position) -> Self {
        Self::new(position.x, position.y, 0.0)
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Axis-aligned arena rectangle.
///
/// Naming follows screen coordinates: `up` is the smallest y the robots may
/// reach and `down` the largest.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaBounds {
    pub left: f64,
    pub right: f64,
    pub up: f64,
    pub down: f64,
}

impl ArenaBounds {
    pub fn new(left: f64, right: f64, up: f64, down: f64) -> Self {
        Self {
            left,
            right,
            up,
            down,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.down - self.up
    }

    /// Returns true if `p` lies inside the rectangle, edges included.
    pub fn contains(&self, p: &Position) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.up && p.y <= self.down
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::new(-1.5, 1.5, -1.0, 1.0)
    }
}

/// Discrete robot action.
///
/// `NoAction` keeps the robot in place and doubles as the capture attempt:
/// a capture agent that stops within its capture radius of a sensed prey
/// captures it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    NoAction,
}

impl Action {
    /// Number of discrete actions.
    pub const COUNT: usize = 5;

    /// Returns all actions in id order.
    pub fn all() -> [Action; 5] {
        [
            Action::Left,
            Action::Right,
            Action::Up,
            Action::Down,
            Action::NoAction,
        ]
    }

    /// Decodes an action id, rejecting anything outside `0..=4`.
    pub fn from_id(id: usize) -> Result<Self> {
        Self::all()
            .get(id)
            .copied()
            .ok_or(EnvError::InvalidAction(id))
    }

    /// Stable action id (0=left, 1=right, 2=up, 3=down, 4=no_action).
    pub fn id(&self) -> usize {
        match self {
            Action::Left => 0,
            Action::Right => 1,
            Action::Up => 2,
            Action::Down => 3,
            Action::NoAction => 4,
        }
    }

    /// Decodes a full per-robot action id list.
    pub fn decode_all(ids: &[usize]) -> Result<Vec<Action>> {
        ids.iter().map(|&id| Self::from_id(id)).collect()
    }
}
