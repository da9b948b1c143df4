use super::{argmax, Strategy};
use crate::belief::BeliefState;

/// Small count offset that keeps the exploration bonus finite for arms
/// that have never been pulled.
const PULL_COUNT_EPS: f64 = 1e-5;

/// Upper Confidence Bound strategy.
///
/// Scores each arm as `estimate + sqrt(2 * ln(t) / (pulls + 1e-5))` and
/// picks the arg-max. Under-sampled arms get an exploration bonus that
/// shrinks as their pull count grows, so the strategy front-loads
/// exploration and settles on the best-looking arm as confidence matures.
#[derive(Clone, Debug, Default)]
pub struct Ucb;

impl Ucb {
    /// Creates a new UCB strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn score(&self, belief: &BeliefState, arm: usize, round: usize) -> f64 {
        let ln_t = (round as f64).ln();
        let bonus = (2.0 * ln_t / (belief.pulls(arm) as f64 + PULL_COUNT_EPS)).sqrt();
        belief.estimate(arm) + bonus
    }
}

impl Strategy for Ucb {
    fn select(&self, belief: &BeliefState, round: usize, _rng: &mut dyn rand::RngCore) -> usize {
        argmax((0..belief.arms()).map(|arm| self.score(belief, arm, round)))
    }
}
