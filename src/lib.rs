//! pcp_arena - cooperative predator-capture-prey environment for
//! multi-agent reinforcement learning.
//!
//! Predators sense prey within a radius, capture agents capture sensed prey
//! by stopping next to them, and all robots share one reward. The crate
//! provides the environment core, a Gym-style adapter, stepping engines,
//! baseline policies and evaluation metrics.

pub mod adapter;
pub mod env;
pub mod error;
pub mod spaces;

pub use adapter::GymAdapter;
pub use env::{Action, PcpConfig, PcpEnvironment, StepResult};
pub use error::{EnvError, Result};
