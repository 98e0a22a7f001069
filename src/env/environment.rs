//! The predator-capture-prey environment.
//!
//! Each step runs: resolve goals → engine step → sense → capture →
//! snapshot → observe → reward → termination check.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use super::agent::Agent;
use super::config::PcpConfig;
use super::engine::{KinematicEngine, SteppingEngine};
use super::observation::ObservationBuilder;
use super::reward::RewardComputer;
use super::spawn;
use super::state::{PreyStatus, StateSnapshot};
use super::types::{Action, Pose, Position};
use crate::error::{EnvError, Result};

/// Lifecycle of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodePhase {
    /// Constructed, never reset.
    Uninitialized,
    /// Reset, no step taken yet.
    Ready,
    /// At least one non-terminal step taken.
    Running,
    /// The last step was terminal; only `reset` is accepted.
    Terminated,
}

/// Auxiliary per-robot step information. The environment reports nothing
/// beyond reward and termination, so the record is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInfo;

/// Result of a single environment step.
///
/// Reward, terminal flag and info are shared by all robots and replicated
/// once per robot.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Per-robot observations after the step.
    pub observations: Vec<Vec<f64>>,
    /// Shared reward, one copy per robot.
    pub rewards: Vec<f64>,
    /// Shared terminal flag, one copy per robot.
    pub terminals: Vec<bool>,
    /// One (empty) info record per robot.
    pub infos: Vec<StepInfo>,
    /// Steps taken since the last reset, this one included.
    pub step_count: u32,
    /// Prey sensed for the first time during this step.
    pub newly_sensed: usize,
    /// Prey captured during this step.
    pub newly_captured: usize,
}

impl StepResult {
    /// The shared reward.
    pub fn reward(&self) -> f64 {
        self.rewards.first().copied().unwrap_or(0.0)
    }

    /// The shared terminal flag.
    pub fn done(&self) -> bool {
        self.terminals.first().copied().unwrap_or(false)
    }
}

/// The multi-robot predator-capture-prey environment.
///
/// Predators sense prey, capture agents capture sensed prey by stopping
/// within their capture radius. All robots share one reward.
///
/// # Lifecycle
///
/// 1. Call [`PcpEnvironment::new`] with configuration, engine and seed.
/// 2. Call [`PcpEnvironment::reset`] to start an episode.
/// 3. Call [`PcpEnvironment::step`] with one action per robot until done.
/// 4. Reset again; nothing but the configuration carries over.
#[derive(Debug)]
pub struct PcpEnvironment<E: SteppingEngine = KinematicEngine> {
    config: PcpConfig,
    agents: Vec<Agent>,
    engine: E,
    observer: ObservationBuilder,
    /// Random number generator, reseeded on every reset.
    rng: StdRng,
    /// Seed of the next episode.
    seed: u64,
    poses: Vec<Pose>,
    prey: Vec<Position>,
    status: PreyStatus,
    /// Snapshot after the last step; the reward baseline for the next one.
    snapshot: StateSnapshot,
    step_count: u32,
    phase: EpisodePhase,
    episode: u64,
    /// Cumulative reward this episode.
    cumulative_reward: f64,
}

impl PcpEnvironment<KinematicEngine> {
    /// Environment driven by a [`KinematicEngine`] whose speed matches one
    /// movement action.
    pub fn kinematic(config: PcpConfig, seed: u64) -> Result<Self> {
        let engine = KinematicEngine::new(config.step_size);
        Self::new(config, engine, seed)
    }
}

impl<E: SteppingEngine> PcpEnvironment<E> {
    /// Creates an environment after validating `config`.
    ///
    /// Predators take indices `0..num_predators`, capture agents the rest.
    pub fn new(config: PcpConfig, engine: E, seed: u64) -> Result<Self> {
        config.validate()?;

        let agents = (0..config.num_predators)
            .map(|i| Agent::new(i, config.predator_radius, 0.0))
            .chain(
                (config.num_predators..config.num_robots())
                    .map(|i| Agent::new(i, 0.0, config.capture_radius)),
            )
            .collect();
        let observer = ObservationBuilder::new(&config);

        Ok(Self {
            agents,
            engine,
            observer,
            rng: StdRng::seed_from_u64(seed),
            seed,
            poses: Vec::new(),
            prey: Vec::new(),
            status: PreyStatus::new(config.num_prey),
            snapshot: StateSnapshot::default(),
            step_count: 0,
            phase: EpisodePhase::Uninitialized,
            episode: 0,
            cumulative_reward: 0.0,
            config,
        })
    }

    /// Starts a new episode at a freshly sampled layout.
    ///
    /// Returns zero-filled observations; the first real observations come
    /// from the first [`step`](Self::step).
    pub fn reset(&mut self) -> Result<Vec<Vec<f64>>> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.seed = self.seed.wrapping_add(1); // different seed each episode
        let poses = spawn::spawn_robots(&self.config, &mut self.rng)?;
        let prey = spawn::spawn_prey(&self.config, &mut self.rng)?;
        Ok(self.begin_episode(poses, prey))
    }

    /// Starts a new episode at an explicit layout.
    ///
    /// Expects one pose per robot and one location per prey, all inside the
    /// arena.
    pub fn reset_with(&mut self, poses: Vec<Pose>, prey: Vec<Position>) -> Result<Vec<Vec<f64>>> {
        if poses.len() != self.config.num_robots() {
            return Err(EnvError::LayoutMismatch {
                what: "robot poses",
                expected: self.config.num_robots(),
                got: poses.len(),
            });
        }
        if prey.len() != self.config.num_prey {
            return Err(EnvError::LayoutMismatch {
                what: "prey locations",
                expected: self.config.num_prey,
                got: prey.len(),
            });
        }
        let outside = poses
            .iter()
            .map(Pose::position)
            .chain(prey.iter().copied())
            .find(|p| !self.config.bounds.contains(p));
        if let Some(p) = outside {
            return Err(EnvError::OutOfBounds { x: p.x, y: p.y });
        }
        Ok(self.begin_episode(poses, prey))
    }

    fn begin_episode(&mut self, poses: Vec<Pose>, prey: Vec<Position>) -> Vec<Vec<f64>> {
        self.status = PreyStatus::new(prey.len());
        self.snapshot = StateSnapshot::build(&poses, &prey, &self.status);
        self.engine.reset(&poses);
        self.poses = poses;
        self.prey = prey;
        self.step_count = 0;
        self.cumulative_reward = 0.0;
        self.episode += 1;
        self.phase = EpisodePhase::Ready;

        debug!(
            episode = self.episode,
            robots = self.poses.len(),
            prey = self.prey.len(),
            engine = self.engine.name(),
            "Episode reset"
        );
        self.observer.placeholder(self.agents.len())
    }

    /// Goal pose for each robot under `actions`.
    ///
    /// Movement actions shift one coordinate by `step_size`, clamped to the
    /// arena; `NoAction` keeps the current pose.
    pub fn resolve_goals(&self, actions: &[Action]) -> Result<Vec<Pose>> {
        if actions.len() != self.poses.len() {
            return Err(EnvError::ActionCountMismatch {
                expected: self.poses.len(),
                got: actions.len(),
            });
        }
        let b = &self.config.bounds;
        let step = self.config.step_size;
        Ok(self
            .poses
            .iter()
            .zip(actions)
            .map(|(pose, action)| {
                let mut goal = *pose;
                match action {
                    Action::Left => goal.x = (goal.x - step).max(b.left),
                    Action::Right => goal.x = (goal.x + step).min(b.right),
                    Action::Up => goal.y = (goal.y - step).max(b.up),
                    Action::Down => goal.y = (goal.y + step).min(b.down),
                    Action::NoAction => {}
                }
                goal
            })
            .collect())
    }

    /// Executes one environment step.
    ///
    /// Sensing and capture are evaluated on the realized poses, sensing
    /// first. The step is terminal once every prey is captured or the step
    /// counter exceeds `max_episode_steps`.
    ///
    /// # Arguments
    ///
    /// * `actions` - One action per robot, in robot index order.
    pub fn step(&mut self, actions: &[Action]) -> Result<StepResult> {
        match self.phase {
            EpisodePhase::Uninitialized => return Err(EnvError::NotReset),
            EpisodePhase::Terminated => return Err(EnvError::EpisodeTerminated),
            EpisodePhase::Ready | EpisodePhase::Running => {}
        }

        // 1. Goals and motion
        let goals = self.resolve_goals(actions)?;
        let realized = self.engine.step(&goals);
        if realized.len() != goals.len() {
            return Err(EnvError::EngineShapeMismatch {
                expected: goals.len(),
                got: realized.len(),
            });
        }
        self.poses = realized;
        self.step_count += 1;

        // 2. Sensing, then capture
        let changes = self
            .status
            .update(&self.prey, &self.poses, &self.agents, actions)?;
        for &i in &changes.sensed {
            debug!(episode = self.episode, step = self.step_count, prey = i, "Prey sensed");
        }
        for &i in &changes.captured {
            debug!(episode = self.episode, step = self.step_count, prey = i, "Prey captured");
        }

        // 3. Snapshot
        let next = StateSnapshot::build(&self.poses, &self.prey, &self.status);

        // 4. Observations
        let observations = self.observer.build_all(&self.agents, &next)?;

        // 5. Reward against the previous snapshot
        let reward = RewardComputer::compute(&self.snapshot, &next, &self.config);
        self.cumulative_reward += reward;

        // 6. Termination
        let done = self.step_count > self.config.max_episode_steps || next.uncaptured == 0;
        trace!(
            step = self.step_count,
            reward,
            uncaptured = next.uncaptured,
            unsensed = next.unsensed,
            "Step"
        );
        if done {
            self.phase = EpisodePhase::Terminated;
            info!(
                episode = self.episode,
                steps = self.step_count,
                reward = self.cumulative_reward,
                captured = self.config.num_prey - next.uncaptured,
                "Episode finished"
            );
        } else {
            self.phase = EpisodePhase::Running;
        }
        self.snapshot = next;

        let n = self.agents.len();
        Ok(StepResult {
            observations,
            rewards: vec![reward; n],
            terminals: vec![done; n],
            infos: vec![StepInfo; n],
            step_count: self.step_count,
            newly_sensed: changes.sensed.len(),
            newly_captured: changes.captured.len(),
        })
    }

    /// Observations of every robot for `snapshot`.
    pub fn observations(&self, snapshot: &StateSnapshot) -> Result<Vec<Vec<f64>>> {
        self.observer.build_all(&self.agents, snapshot)
    }

    pub fn config(&self) -> &PcpConfig {
        &self.config
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Returns the number of robots.
    pub fn n_agents(&self) -> usize {
        self.agents.len()
    }

    /// Width of every observation vector.
    pub fn observation_dim(&self) -> usize {
        self.observer.dim()
    }

    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    pub fn prey(&self) -> &[Position] {
        &self.prey
    }

    pub fn prey_status(&self) -> &PreyStatus {
        &self.status
    }

    /// Snapshot after the most recent reset or step.
    pub fn snapshot(&self) -> &StateSnapshot {
        &self.snapshot
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    pub fn cumulative_reward(&self) -> f64 {
        self.cumulative_reward
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::engine::TeleportEngine;
    use crate::env::types::ArenaBounds;

    fn make_env() -> PcpEnvironment<TeleportEngine> {
        PcpEnvironment::new(PcpConfig::default(), TeleportEngine, 42).unwrap()
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = PcpConfig {
            predator_radius: -1.0,
            ..PcpConfig::default()
        };
        assert!(PcpEnvironment::new(config, TeleportEngine, 0).is_err());
    }

    #[test]
    fn unbounded_arena_rejected_before_reset() {
        let config = PcpConfig {
            bounds: ArenaBounds::new(-1e308, 1e308, -1.0, 1.0),
            ..PcpConfig::default()
        };
        assert!(matches!(
            PcpEnvironment::new(config, TeleportEngine, 0),
            Err(EnvError::InvalidConfig { field: "bounds", .. })
        ));
    }

    #[test]
    fn agents_ordered_predators_first() {
        let env = make_env();
        let agents = env.agents();
        assert_eq!(agents.len(), 4);
        assert!(agents[..2]
            .iter()
            .all(|a| a.sensing_radius > 0.0 && a.capture_radius == 0.0));
        assert!(agents[2..]
            .iter()
            .all(|a| a.sensing_radius == 0.0 && a.capture_radius > 0.0));
        assert!(agents.iter().enumerate().all(|(i, a)| a.index == i));
    }

    #[test]
    fn reset_returns_placeholder_observations() {
        let mut env = make_env();
        let obs = env.reset().unwrap();
        assert_eq!(obs.len(), 4);
        for o in &obs {
            assert_eq!(o.len(), env.observation_dim());
            assert!(o.iter().all(|v| *v == 0.0));
        }
        assert_eq!(env.phase(), EpisodePhase::Ready);
        assert_eq!(env.step_count(), 0);
        assert!(env.prey_status().sensed().iter().all(|s| !s));
        assert_eq!(env.snapshot().uncaptured, env.config().num_prey);
    }

    #[test]
    fn step_before_reset_fails() {
        let mut env = make_env();
        assert_eq!(
            env.step(&[Action::NoAction; 4]).unwrap_err(),
            EnvError::NotReset
        );
    }

    #[test]
    fn action_count_checked() {
        let mut env = make_env();
        env.reset().unwrap();
        assert_eq!(
            env.step(&[Action::Left]).unwrap_err(),
            EnvError::ActionCountMismatch {
                expected: 4,
                got: 1
            }
        );
    }

    #[test]
    fn resolve_goals_moves_and_clamps() {
        let mut env = make_env();
        let b = env.config().bounds;
        env.reset_with(
            vec![
                Pose::new(0.0, 0.0, 0.0),
                Pose::new(b.right - 0.05, 0.0, 0.0),
                Pose::new(0.0, b.up + 0.1, 0.0),
                Pose::new(0.3, 0.4, 0.0),
            ],
            vec![Position::new(-1.0, 0.0); 6],
        )
        .unwrap();
        let goals = env
            .resolve_goals(&[Action::Left, Action::Right, Action::Up, Action::NoAction])
            .unwrap();
        assert!((goals[0].x + 0.2).abs() < 1e-12);
        assert_eq!(goals[1].x, b.right);
        assert_eq!(goals[2].y, b.up);
        assert_eq!(goals[3], Pose::new(0.3, 0.4, 0.0));

        let goals = env.resolve_goals(&[Action::Down; 4]).unwrap();
        assert!((goals[0].y - 0.2).abs() < 1e-12);
    }

    #[test]
    fn reset_with_validates_layout() {
        let mut env = make_env();
        assert!(matches!(
            env.reset_with(vec![Pose::default(); 3], vec![Position::default(); 6]),
            Err(EnvError::LayoutMismatch { .. })
        ));
        assert!(matches!(
            env.reset_with(vec![Pose::default(); 4], vec![Position::new(9.0, 0.0); 6]),
            Err(EnvError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn episode_terminates_after_max_steps() {
        let config = PcpConfig {
            max_episode_steps: 3,
            ..PcpConfig::default()
        };
        let mut env = PcpEnvironment::new(config, TeleportEngine, 1).unwrap();
        env.reset_with(
            vec![Pose::new(1.0, 0.0, 0.0); 4],
            vec![Position::new(-1.0, 0.0); 6],
        )
        .unwrap();
        for t in 1..=4 {
            let result = env.step(&[Action::NoAction; 4]).unwrap();
            assert_eq!(result.step_count, t);
            assert_eq!(result.done(), t == 4);
            assert!(result.terminals.iter().all(|d| *d == result.done()));
        }
        assert_eq!(env.phase(), EpisodePhase::Terminated);
        assert_eq!(
            env.step(&[Action::NoAction; 4]).unwrap_err(),
            EnvError::EpisodeTerminated
        );
        env.reset().unwrap();
        assert_eq!(env.phase(), EpisodePhase::Ready);
    }

    #[test]
    fn idle_step_replicates_time_penalty() {
        let mut env = make_env();
        env.reset_with(
            vec![Pose::new(1.0, 0.0, 0.0); 4],
            vec![Position::new(-1.0, 0.0); 6],
        )
        .unwrap();
        let result = env.step(&[Action::NoAction; 4]).unwrap();
        assert_eq!(result.rewards, vec![env.config().time_penalty; 4]);
        assert_eq!(result.infos, vec![StepInfo; 4]);
        assert_eq!(env.phase(), EpisodePhase::Running);
    }

    #[test]
    fn consecutive_resets_differ() {
        let mut env = make_env();
        env.reset().unwrap();
        let first = env.prey().to_vec();
        env.reset().unwrap();
        assert_ne!(first, env.prey());
    }

    #[test]
    fn kinematic_environment_steps() {
        let mut env = PcpEnvironment::kinematic(PcpConfig::default(), 5).unwrap();
        env.reset().unwrap();
        let result = env.step(&[Action::Left; 4]).unwrap();
        assert_eq!(result.observations.len(), 4);
        assert_eq!(env.engine().name(), "kinematic");
    }
}
