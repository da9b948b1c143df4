//! Error types for the banditsim library.

use thiserror::Error;

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors that can occur when configuring a simulation.
///
/// All errors are raised at construction time. Once a run starts it is a
/// pure, deterministic-given-seed computation and cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Fewer than two arms requested.
    #[error("invalid arm count: {got} (need at least 2 arms)")]
    InvalidArmCount { got: usize },

    /// Zero iterations requested.
    #[error("invalid iteration count: {got} (need at least 1 iteration)")]
    InvalidIterations { got: usize },

    /// Epsilon outside the half-open interval (0, 1].
    #[error("invalid epsilon: {got} (must be in (0, 1])")]
    InvalidEpsilon { got: f64 },

    /// A supplied true arm mean outside [0, 1].
    #[error("invalid arm mean: {got} (must be a finite value in [0, 1])")]
    InvalidArmMean { got: f64 },
}
