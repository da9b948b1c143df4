//! Simulation orchestration: configuration, the iteration loop, and the
//! final report.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::arms::ArmSet;
use crate::belief::BeliefState;
use crate::error::{Result, SimulationError};
use crate::regret::RegretTracker;
use crate::strategies::{Strategy, StrategyKind};

/// Configuration for a single simulation run.
///
/// A run is a pure function of this config: the same strategy, arm count,
/// iteration count, and seed always produce bit-identical results.
/// Independent runs share no state and may execute concurrently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Which action-selection strategy to run.
    pub strategy: StrategyKind,
    /// Number of arms `k`. Must be at least 2; [2, 20] is the intended range.
    pub arms: usize,
    /// Number of iterations `T`. Must be at least 1; [100, 500] is the
    /// intended range.
    pub iterations: usize,
    /// Seed for the run's random source. `None` draws OS entropy, making
    /// the run nondeterministic.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates an unseeded config.
    #[must_use]
    pub fn new(strategy: StrategyKind, arms: usize, iterations: usize) -> Self {
        Self {
            strategy,
            arms,
            iterations,
            seed: None,
        }
    }

    /// Pins the run to a fixed seed for reproducibility.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.arms < 2 {
            return Err(SimulationError::InvalidArmCount { got: self.arms });
        }
        if self.iterations < 1 {
            return Err(SimulationError::InvalidIterations {
                got: self.iterations,
            });
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Final state of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationReport {
    /// True mean reward of each arm, hidden from the strategy during the run.
    pub true_rewards: Vec<f64>,
    /// Final running reward estimate per arm. Stays at its initial zeros
    /// under Thompson sampling, whose belief lives in the Beta posteriors.
    pub estimated_rewards: Vec<f64>,
    /// How often each arm was pulled. Sums to the iteration count.
    pub pull_counts: Vec<u64>,
    /// Cumulative regret after each iteration, length == iterations.
    pub regret_series: Vec<f64>,
    /// Sum of all observed rewards.
    pub total_reward: f64,
}

impl SimulationReport {
    /// Final cumulative regret, i.e. the last entry of the series.
    pub fn final_regret(&self) -> f64 {
        // regret_series is never empty: iterations >= 1 is validated.
        self.regret_series[self.regret_series.len() - 1]
    }
}

/// Runs a simulation with freshly drawn arms.
///
/// True means are sampled uniformly from [0, 1) using the run's own random
/// source, then the strategy plays `iterations` rounds against them.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationReport> {
    config.validate()?;
    let strategy = config.strategy.build()?;
    let mut rng = config.rng();
    let arms = ArmSet::draw(config.arms, &mut rng);
    Ok(simulate(strategy.as_ref(), &arms, config.iterations, &mut rng))
}

/// Runs a simulation against explicitly supplied arms.
///
/// The arm count comes from `arms`, not from `config.arms`. Useful for
/// tests and strategy comparisons that need fixed ground truth.
pub fn run_with_arms(config: &SimulationConfig, arms: &ArmSet) -> Result<SimulationReport> {
    if config.iterations < 1 {
        return Err(SimulationError::InvalidIterations {
            got: config.iterations,
        });
    }
    let strategy = config.strategy.build()?;
    let mut rng = config.rng();
    Ok(simulate(strategy.as_ref(), arms, config.iterations, &mut rng))
}

/// The core loop: select, sample, observe, account — once per iteration.
fn simulate(
    strategy: &dyn Strategy,
    arms: &ArmSet,
    iterations: usize,
    rng: &mut StdRng,
) -> SimulationReport {
    let mut belief = BeliefState::new(arms.len());
    let mut regret = RegretTracker::new(arms.best_mean(), iterations);

    for t in 1..=iterations {
        let action = strategy.select(&belief, t, rng);
        let reward = arms.sample_reward(action, rng);
        strategy.observe(&mut belief, action, reward);
        regret.record(t, reward);
    }

    SimulationReport {
        true_rewards: arms.means().to_vec(),
        estimated_rewards: belief.estimates().to_vec(),
        pull_counts: belief.pull_counts().to_vec(),
        total_reward: regret.total_reward(),
        regret_series: regret.into_series(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let bad_arms = SimulationConfig::new(StrategyKind::Ucb, 1, 100);
        assert!(matches!(
            run_simulation(&bad_arms),
            Err(SimulationError::InvalidArmCount { got: 1 })
        ));

        let bad_iterations = SimulationConfig::new(StrategyKind::Ucb, 5, 0);
        assert!(matches!(
            run_simulation(&bad_iterations),
            Err(SimulationError::InvalidIterations { got: 0 })
        ));

        let bad_epsilon =
            SimulationConfig::new(StrategyKind::EpsilonGreedy { epsilon: 2.0 }, 5, 100);
        assert!(matches!(
            run_simulation(&bad_epsilon),
            Err(SimulationError::InvalidEpsilon { .. })
        ));
    }

    #[test]
    fn test_report_shapes() {
        let config = SimulationConfig::new(StrategyKind::Ucb, 7, 150).with_seed(42);
        let report = run_simulation(&config).unwrap();

        assert_eq!(report.true_rewards.len(), 7);
        assert_eq!(report.estimated_rewards.len(), 7);
        assert_eq!(report.pull_counts.len(), 7);
        assert_eq!(report.regret_series.len(), 150);
        assert_eq!(report.pull_counts.iter().sum::<u64>(), 150);
        assert_eq!(report.final_regret(), report.regret_series[149]);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let config =
            SimulationConfig::new(StrategyKind::EpsilonGreedy { epsilon: 0.1 }, 5, 200)
                .with_seed(7);

        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_with_arms_uses_supplied_means() {
        let arms = ArmSet::from_means(vec![0.9, 0.1, 0.5]).unwrap();
        let config = SimulationConfig::new(StrategyKind::Ucb, 3, 100).with_seed(42);

        let report = run_with_arms(&config, &arms).unwrap();
        assert_eq!(report.true_rewards, vec![0.9, 0.1, 0.5]);
    }
}
