//! Episode start placement for robots and prey.
//!
//! Robots start in the right part of the arena and prey in the left part, so
//! every episode begins with a chase across the arena.

use rand::Rng;

use super::config::PcpConfig;
use super::types::{Pose, Position};
use crate::error::{EnvError, Result};

/// Attempts per location before placement gives up.
const MAX_ATTEMPTS: usize = 1000;

/// Samples `count` locations uniformly inside the given ranges, keeping
/// every pair at least `spacing` apart.
pub fn sample_locations<R: Rng>(
    rng: &mut R,
    count: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
    spacing: f64,
) -> Result<Vec<Position>> {
    let mut placed: Vec<Position> = Vec::with_capacity(count);
    for _ in 0..count {
        let mut attempts = 0;
        loop {
            if attempts == MAX_ATTEMPTS {
                return Err(EnvError::PlacementFailed {
                    count,
                    spacing,
                    attempts: MAX_ATTEMPTS,
                });
            }
            attempts += 1;
            let candidate = Position::new(
                rng.gen_range(x_range.0..=x_range.1),
                rng.gen_range(y_range.0..=y_range.1),
            );
            if placed.iter().all(|p| p.distance_to(&candidate) >= spacing) {
                placed.push(candidate);
                break;
            }
        }
    }
    Ok(placed)
}

/// Robot start poses, right of `robot_init_right_thresh`, zero heading.
pub fn spawn_robots<R: Rng>(config: &PcpConfig, rng: &mut R) -> Result<Vec<Pose>> {
    let b = &config.bounds;
    let locations = sample_locations(
        rng,
        config.num_robots(),
        (config.robot_init_right_thresh, b.right),
        (b.up, b.down),
        config.start_dist,
    )?;
    Ok(locations.into_iter().map(Pose::at).collect())
}

/// Prey locations, left of `prey_init_left_thresh`.
pub fn spawn_prey<R: Rng>(config: &PcpConfig, rng: &mut R) -> Result<Vec<Position>> {
    let b = &config.bounds;
    sample_locations(
        rng,
        config.num_prey,
        (b.left, config.prey_init_left_thresh),
        (b.up, b.down),
        config.start_dist,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn robots_spawn_right_prey_left() {
        let config = PcpConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let robots = spawn_robots(&config, &mut rng).unwrap();
        let prey = spawn_prey(&config, &mut rng).unwrap();
        assert_eq!(robots.len(), config.num_robots());
        assert_eq!(prey.len(), config.num_prey);
        assert!(robots
            .iter()
            .all(|p| p.x >= config.robot_init_right_thresh && p.theta == 0.0));
        assert!(prey.iter().all(|p| p.x <= config.prey_init_left_thresh));
        assert!(prey.iter().all(|p| config.bounds.contains(p)));
    }

    #[test]
    fn spacing_respected() {
        let mut rng = StdRng::seed_from_u64(1);
        let locs = sample_locations(&mut rng, 8, (0.0, 2.0), (0.0, 2.0), 0.3).unwrap();
        for (i, a) in locs.iter().enumerate() {
            for b in &locs[i + 1..] {
                assert!(a.distance_to(b) >= 0.3);
            }
        }
    }

    #[test]
    fn impossible_spacing_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = sample_locations(&mut rng, 3, (0.0, 0.1), (0.0, 0.1), 1.0);
        assert!(matches!(result, Err(EnvError::PlacementFailed { .. })));
    }

    #[test]
    fn same_seed_same_layout() {
        let config = PcpConfig::default();
        let a = spawn_prey(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = spawn_prey(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }
}
