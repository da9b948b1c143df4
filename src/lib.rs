//! banditsim: a multi-armed bandit simulation engine.
//!
//! An agent repeatedly chooses among `k` arms with unknown, fixed reward
//! distributions and must balance exploring uncertain arms against
//! exploiting the best-known one. This crate implements the four classic
//! action-selection strategies (UCB, gradient bandit, epsilon-greedy,
//! Thompson sampling), their per-step statistics updates, and cumulative
//! regret accounting against an always-best-arm oracle.
//!
//! A run is a pure function of its configuration: seed it and the outputs
//! are bit-identical across runs, which also makes independent runs
//! trivially parallel.
//!
//! # Quick Start
//!
//! ```
//! use banditsim::{run_simulation, SimulationConfig, StrategyKind};
//!
//! let config = SimulationConfig::new(StrategyKind::Ucb, 10, 300).with_seed(42);
//! let report = run_simulation(&config).unwrap();
//!
//! assert_eq!(report.regret_series.len(), 300);
//! assert_eq!(report.pull_counts.iter().sum::<u64>(), 300);
//! ```

mod arms;
mod belief;
mod error;
mod regret;
mod simulation;
pub mod strategies;

// Re-export main types
pub use arms::{ArmSet, REWARD_STD};
pub use belief::BeliefState;
pub use error::{Result, SimulationError};
pub use regret::RegretTracker;
pub use simulation::{run_simulation, run_with_arms, SimulationConfig, SimulationReport};
pub use strategies::{Strategy, StrategyKind};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use banditsim::prelude::*;
/// ```
pub mod prelude {
    pub use crate::strategies::{
        EpsilonGreedy, GradientBandit, Strategy, StrategyKind, ThompsonSampling, Ucb,
    };
    pub use crate::{
        run_simulation, run_with_arms, ArmSet, BeliefState, Result, SimulationConfig,
        SimulationError, SimulationReport,
    };
}
