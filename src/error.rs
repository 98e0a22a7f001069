use thiserror::Error;

/// Errors raised by the predator-capture-prey environment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Unknown action id {0}: expected 0..=4")]
    InvalidAction(usize),

    #[error("Expected {expected} actions (one per robot), got {got}")]
    ActionCountMismatch { expected: usize, got: usize },

    #[error("Agent index {index} out of range for {len} robots")]
    AgentIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Environment must be reset before stepping")]
    NotReset,

    #[error("Episode has terminated; call reset to start a new one")]
    EpisodeTerminated,

    #[error("Stepping engine returned {got} poses for {expected} robots")]
    EngineShapeMismatch { expected: usize, got: usize },

    #[error("Could not place {count} locations with spacing {spacing} after {attempts} attempts")]
    PlacementFailed {
        count: usize,
        spacing: f64,
        attempts: usize,
    },

    #[error("Layout provides {got} {what}, expected {expected}")]
    LayoutMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Location ({x:.3}, {y:.3}) lies outside the arena")]
    OutOfBounds { x: f64, y: f64 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnvError>;
