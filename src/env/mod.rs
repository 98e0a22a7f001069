//! Predator-capture-prey environment.
//!
//! Predators sense prey, capture agents capture sensed prey, and every robot
//! shares one reward. Motion is delegated to a [`SteppingEngine`]; the
//! [`PcpEnvironment`] owns episode state and turns actions into
//! observations and rewards.

pub mod agent;
pub mod config;
pub mod engine;
pub mod environment;
pub mod geometry;
pub mod metrics;
pub mod neighbors;
pub mod observation;
pub mod policy;
pub mod reward;
pub mod spawn;
pub mod state;
pub mod types;


pub use agent::{Agent, SENTINEL_PREY};
pub use config::PcpConfig;
pub use engine::{KinematicEngine, SteppingEngine, TeleportEngine};
pub use environment::{EpisodePhase, PcpEnvironment, StepInfo, StepResult};
pub use metrics::EvaluationMetrics;
pub use neighbors::NeighborStrategy;
pub use observation::ObservationBuilder;
pub use policy::{Policy, PursuitPolicy, RandomPolicy};
pub use reward::RewardComputer;
pub use state::{PreyStatus, StateSnapshot};
pub use types::{Action, ArenaBounds, Pose, Position};
