use rand_distr::{Beta, Distribution};

use super::{argmax, Strategy};
use crate::belief::BeliefState;

/// Thompson sampling strategy.
///
/// Draws one sample from each arm's Beta posterior and pulls the arg-max.
/// Rewards are binarized against a 0.5 threshold to drive a Beta-Bernoulli
/// update even though the rewards themselves are Normal-distributed; that
/// approximation is deliberate and matches the simulation this engine
/// reproduces.
#[derive(Clone, Debug, Default)]
pub struct ThompsonSampling;

impl ThompsonSampling {
    /// Creates a new Thompson sampling strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn sample_posterior(
        &self,
        belief: &BeliefState,
        arm: usize,
        rng: &mut dyn rand::RngCore,
    ) -> f64 {
        let (alpha, beta) = belief.posterior(arm);
        match Beta::new(alpha, beta) {
            Ok(dist) => dist.sample(rng),
            // Parameters start at 1 and only ever grow by 1, so this arm
            // of the match is unreachable in practice; fall back to the
            // posterior mean rather than panic.
            Err(_) => alpha / (alpha + beta),
        }
    }
}

impl Strategy for ThompsonSampling {
    fn select(&self, belief: &BeliefState, _round: usize, rng: &mut dyn rand::RngCore) -> usize {
        let samples: Vec<f64> = (0..belief.arms())
            .map(|arm| self.sample_posterior(belief, arm, rng))
            .collect();
        argmax(samples)
    }

    fn observe(&self, belief: &mut BeliefState, arm: usize, reward: f64) {
        belief.record_outcome(arm, reward);
    }
}
