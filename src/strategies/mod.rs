//! Action-selection strategies.
//!
//! Each strategy decides which arm to pull from the current
//! [`BeliefState`](crate::BeliefState) and owns the matching statistics
//! update: the default `observe` folds the reward into the running mean,
//! and Thompson sampling overrides it with the Beta posterior update.

mod epsilon_greedy;
mod gradient;
mod thompson;
mod ucb;

pub use epsilon_greedy::EpsilonGreedy;
pub use gradient::GradientBandit;
pub use thompson::ThompsonSampling;
pub use ucb::Ucb;

use crate::belief::BeliefState;
use crate::error::Result;

/// Core trait for bandit action-selection strategies.
///
/// Note: this trait uses `dyn rand::RngCore` instead of a generic parameter
/// to maintain object-safety, allowing `Box<dyn Strategy>` to be built once
/// per run. The slight cost of dynamic dispatch is acceptable for the
/// flexibility it provides in the simulation loop.
pub trait Strategy {
    /// Select an arm in `[0, belief.arms())` for the 1-based iteration
    /// `round`. Must be deterministic given the same rng state.
    fn select(&self, belief: &BeliefState, round: usize, rng: &mut dyn rand::RngCore) -> usize;

    /// Fold the observed reward into the belief state.
    ///
    /// The default is the incremental running-mean update shared by UCB,
    /// epsilon-greedy, and the gradient bandit.
    fn observe(&self, belief: &mut BeliefState, arm: usize, reward: f64) {
        belief.record_mean(arm, reward);
    }
}

/// Strategy selector carried by a simulation config.
///
/// Strategies are constructed once per run from this tag; parameters
/// (epsilon) travel as variant data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrategyKind {
    /// Upper Confidence Bound.
    Ucb,
    /// Softmax selection over running reward estimates.
    GradientBandit,
    /// Explore uniformly with probability `epsilon`, exploit otherwise.
    EpsilonGreedy { epsilon: f64 },
    /// Beta-Bernoulli posterior sampling.
    ThompsonSampling,
}

impl StrategyKind {
    /// Builds the concrete strategy, validating any parameters.
    pub fn build(&self) -> Result<Box<dyn Strategy>> {
        match *self {
            StrategyKind::Ucb => Ok(Box::new(Ucb::new())),
            StrategyKind::GradientBandit => Ok(Box::new(GradientBandit::new())),
            StrategyKind::EpsilonGreedy { epsilon } => {
                Ok(Box::new(EpsilonGreedy::new(epsilon)?))
            }
            StrategyKind::ThompsonSampling => Ok(Box::new(ThompsonSampling::new())),
        }
    }
}

/// Index of the largest score, with ties broken by the lowest index.
///
/// `max_by` on iterators returns the last maximum, so the strategies use
/// this stable variant instead.
pub(crate) fn argmax(scores: impl IntoIterator<Item = f64>) -> usize {
    let mut best = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (i, score) in scores.into_iter().enumerate() {
        if score > best_score {
            best = i;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_picks_largest() {
        assert_eq!(argmax([0.1, 0.9, 0.5]), 1);
        assert_eq!(argmax([2.0, -1.0, 0.0]), 0);
    }

    #[test]
    fn test_argmax_breaks_ties_low() {
        assert_eq!(argmax([0.0, 0.0, 0.0]), 0);
        assert_eq!(argmax([0.3, 0.7, 0.7]), 1);
    }

    #[test]
    fn test_kind_builds_and_validates() {
        assert!(StrategyKind::Ucb.build().is_ok());
        assert!(StrategyKind::ThompsonSampling.build().is_ok());
        assert!(StrategyKind::EpsilonGreedy { epsilon: 0.1 }.build().is_ok());
        assert!(StrategyKind::EpsilonGreedy { epsilon: 0.0 }.build().is_err());
    }
}
