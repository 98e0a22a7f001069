//! Action and observation space descriptors.
//!
//! Gym-style descriptions of what a single robot may do and observe.

use rand::Rng;

/// Discrete space with `n` possible values: `{0, 1, ..., n-1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discrete {
    /// Number of possible values.
    pub n: usize,
}

impl Discrete {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn contains(&self, value: usize) -> bool {
        value < self.n
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.n)
    }
}

/// Continuous box with one uniform bound pair for every element.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpace {
    pub low: f64,
    pub high: f64,
    pub shape: Vec<usize>,
}

impl BoxSpace {
    pub fn uniform(shape: &[usize], low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            shape: shape.to_vec(),
        }
    }

    /// Total number of elements in a sample.
    pub fn num_elements(&self) -> usize {
        self.shape.iter().product()
    }

    /// True if `value` has the right length and every element is in bounds.
    pub fn contains(&self, value: &[f64]) -> bool {
        value.len() == self.num_elements()
            && value.iter().all(|v| *v >= self.low && *v <= self.high)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.num_elements())
            .map(|_| rng.gen_range(self.low..=self.high))
            .collect()
    }
}
