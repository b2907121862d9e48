//! Error types for board-stats.

use board_core::BoardError;
use board_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error(transparent)]
    Config(#[from] BoardError),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Sample standard deviation and the confidence interval need at least
    /// two trials; reported instead of dividing by zero or emitting NaN.
    #[error("insufficient sample: {got} trial(s), need at least 2 for std/CI")]
    InsufficientSample { got: usize },

    /// The Student-t distribution rejected its parameters (non-positive or
    /// non-finite degrees of freedom).
    #[error("degenerate statistic: {0}")]
    Degenerate(String),

    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Alias for `Result<T, StatsError>`.
pub type StatsResult<T> = Result<T, StatsError>;
