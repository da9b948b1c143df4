//! Arm model for the bandit simulation.
//!
//! An [`ArmSet`] holds the ground-truth mean reward of every arm. The true
//! means are hidden from the strategies: they only ever see the rewards
//! sampled from here, never the means themselves.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{Result, SimulationError};

/// Standard deviation of the Normal reward noise around each arm's true mean.
pub const REWARD_STD: f64 = 0.1;

/// The set of arms available to a single simulation run.
///
/// True means are fixed at construction and immutable for the lifetime of
/// the run. Rewards are sampled as `mean + Normal(0, 0.1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArmSet {
    means: Vec<f64>,
}

impl ArmSet {
    /// Draws `k` arms with true means sampled uniformly from [0, 1).
    pub fn draw<R: Rng + ?Sized>(k: usize, rng: &mut R) -> Self {
        let means = (0..k).map(|_| rng.random::<f64>()).collect();
        Self { means }
    }

    /// Creates an arm set from explicit true means.
    ///
    /// Intended for tests and reproducible comparisons. Every mean must be
    /// a finite value in [0, 1] and at least two arms are required.
    pub fn from_means(means: Vec<f64>) -> Result<Self> {
        if means.len() < 2 {
            return Err(SimulationError::InvalidArmCount { got: means.len() });
        }
        for &mean in &means {
            if !mean.is_finite() || !(0.0..=1.0).contains(&mean) {
                return Err(SimulationError::InvalidArmMean { got: mean });
            }
        }
        Ok(Self { means })
    }

    /// Samples a reward for the given arm: its true mean plus Normal noise.
    pub fn sample_reward<R: Rng + ?Sized>(&self, arm: usize, rng: &mut R) -> f64 {
        let noise: f64 = rng.sample(StandardNormal);
        self.means[arm] + REWARD_STD * noise
    }

    /// Number of arms.
    pub fn len(&self) -> usize {
        self.means.len()
    }

    /// Whether the set holds no arms.
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// The true means, in arm order.
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Index of the arm with the highest true mean (lowest index on ties).
    pub fn best_arm(&self) -> usize {
        let mut best = 0;
        for (i, &mean) in self.means.iter().enumerate() {
            if mean > self.means[best] {
                best = i;
            }
        }
        best
    }

    /// The highest true mean, i.e. the per-step reward of the oracle.
    pub fn best_mean(&self) -> f64 {
        self.means[self.best_arm()]
    }
}
