use rand::Rng;

use super::{argmax, Strategy};
use crate::belief::BeliefState;
use crate::error::{Result, SimulationError};

/// Epsilon-greedy strategy: explores a uniformly random arm with
/// probability `epsilon`, otherwise exploits the arm with the highest
/// running reward estimate (lowest index on ties).
#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Creates a new epsilon-greedy strategy.
    ///
    /// `epsilon` must be a finite value in `(0, 1]`.
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 || epsilon > 1.0 {
            return Err(SimulationError::InvalidEpsilon { got: epsilon });
        }
        Ok(Self { epsilon })
    }

    /// The exploration probability.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Strategy for EpsilonGreedy {
    fn select(&self, belief: &BeliefState, _round: usize, rng: &mut dyn rand::RngCore) -> usize {
        if rng.random::<f64>() < self.epsilon {
            // Explore: any arm, uniformly.
            rng.random_range(0..belief.arms())
        } else {
            // Exploit: best running estimate.
            argmax(belief.estimates().iter().copied())
        }
    }
}
