//! Per-arm belief state maintained across a simulation run.
//!
//! This is the only mutable state the strategies see. It tracks the running
//! reward estimate and pull count of every arm, plus the Beta posterior
//! parameters used by Thompson sampling.

/// Mutable per-arm statistics, updated once per iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct BeliefState {
    estimates: Vec<f64>,
    pulls: Vec<u64>,
    alphas: Vec<f64>,
    betas: Vec<f64>,
}

impl BeliefState {
    /// Creates a fresh belief over `k` arms: zero estimates, zero pulls,
    /// uniform Beta(1, 1) priors.
    pub fn new(k: usize) -> Self {
        Self {
            estimates: vec![0.0; k],
            pulls: vec![0; k],
            alphas: vec![1.0; k],
            betas: vec![1.0; k],
        }
    }

    /// Number of arms tracked.
    pub fn arms(&self) -> usize {
        self.estimates.len()
    }

    /// Running reward estimate for one arm.
    pub fn estimate(&self, arm: usize) -> f64 {
        self.estimates[arm]
    }

    /// All running estimates, in arm order.
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    /// Pull count for one arm.
    pub fn pulls(&self, arm: usize) -> u64 {
        self.pulls[arm]
    }

    /// All pull counts, in arm order.
    pub fn pull_counts(&self) -> &[u64] {
        &self.pulls
    }

    /// Total pulls across all arms. Equals the current iteration index.
    pub fn total_pulls(&self) -> u64 {
        self.pulls.iter().sum()
    }

    /// Beta posterior parameters `(alpha, beta)` for one arm.
    pub fn posterior(&self, arm: usize) -> (f64, f64) {
        (self.alphas[arm], self.betas[arm])
    }

    /// Records a pull and folds the reward into the running mean:
    /// `estimate += (reward - estimate) / pulls`.
    ///
    /// After `n` pulls of an arm, its estimate equals the arithmetic mean
    /// of the `n` rewards observed for it.
    pub fn record_mean(&mut self, arm: usize, reward: f64) {
        self.pulls[arm] += 1;
        let estimate = &mut self.estimates[arm];
        *estimate += (reward - *estimate) / self.pulls[arm] as f64;
    }

    /// Records a pull and updates the Beta posterior: rewards above 0.5
    /// count as a success (`alpha += 1`), everything else as a failure
    /// (`beta += 1`). The running estimate is left untouched.
    pub fn record_outcome(&mut self, arm: usize, reward: f64) {
        self.pulls[arm] += 1;
        if reward > 0.5 {
            self.alphas[arm] += 1.0;
        } else {
            self.betas[arm] += 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::abs_diff_eq;

    #[test]
    fn test_new_belief_is_uninformed() {
        let belief = BeliefState::new(4);

        assert_eq!(belief.arms(), 4);
        assert_eq!(belief.total_pulls(), 0);
        for arm in 0..4 {
            assert_eq!(belief.estimate(arm), 0.0);
            assert_eq!(belief.pulls(arm), 0);
            assert_eq!(belief.posterior(arm), (1.0, 1.0));
        }
    }

    #[test]
    fn test_record_mean_tracks_running_average() {
        let mut belief = BeliefState::new(2);
        let rewards = [0.4, 0.8, 0.6, 0.2, 1.0];

        for &r in &rewards {
            belief.record_mean(0, r);
        }

        let mean = rewards.iter().sum::<f64>() / rewards.len() as f64;
        assert!(abs_diff_eq!(belief.estimate(0), mean, epsilon = 1e-12));
        assert_eq!(belief.pulls(0), 5);
        assert_eq!(belief.pulls(1), 0);
    }

    #[test]
    fn test_record_outcome_updates_posterior_only() {
        let mut belief = BeliefState::new(2);

        belief.record_outcome(1, 0.9); // success
        belief.record_outcome(1, 0.3); // failure
        belief.record_outcome(1, 0.5); // boundary counts as failure

        assert_eq!(belief.posterior(1), (2.0, 3.0));
        assert_eq!(belief.pulls(1), 3);
        assert_eq!(belief.estimate(1), 0.0);
    }

    #[test]
    fn test_posterior_evidence_matches_pull_count() {
        let mut belief = BeliefState::new(3);

        for i in 0..30 {
            let arm = i % 3;
            belief.record_outcome(arm, (i as f64) / 30.0);
            let (alpha, beta) = belief.posterior(arm);
            assert_eq!((alpha + beta - 2.0) as u64, belief.pulls(arm));
        }
    }
}
