//! Cumulative regret accounting against an oracle that always pulls the
//! best arm at its true mean.

/// Accumulates total reward and the per-iteration cumulative regret series.
///
/// Regret at iteration `t` is `best_mean * t - total_reward`, an
/// upper-bound-style measure: the oracle is credited the best arm's mean
/// while the agent collects noisy samples, so the series can fluctuate
/// step-to-step and is non-decreasing only in expectation.
#[derive(Clone, Debug)]
pub struct RegretTracker {
    best_mean: f64,
    total_reward: f64,
    series: Vec<f64>,
}

impl RegretTracker {
    /// Creates a tracker against an oracle earning `best_mean` per step.
    pub fn new(best_mean: f64, iterations: usize) -> Self {
        Self {
            best_mean,
            total_reward: 0.0,
            series: Vec::with_capacity(iterations),
        }
    }

    /// Folds in the reward observed at 1-based iteration `t` and appends
    /// the cumulative regret entry for that iteration.
    pub fn record(&mut self, t: usize, reward: f64) {
        self.total_reward += reward;
        self.series.push(self.best_mean * t as f64 - self.total_reward);
    }

    /// Total reward collected so far.
    pub fn total_reward(&self) -> f64 {
        self.total_reward
    }

    /// The cumulative regret series, one entry per recorded iteration.
    pub fn series(&self) -> &[f64] {
        &self.series
    }

    /// Consumes the tracker, returning the regret series.
    pub fn into_series(self) -> Vec<f64> {
        self.series
    }
}
