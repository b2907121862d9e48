//! Engine error type.

use board_core::Seat;
use thiserror::Error;

/// Errors raised by the boarding engines.
///
/// All variants are ordering-contract violations: a strategy handed the
/// engine something other than a permutation of the cabin's seats.  They are
/// detected up front, before any time is accumulated.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("boarding order has {got} seats, expected {expected}")]
    OrderLength { expected: usize, got: usize },

    #[error("boarding order lists seat {0} more than once")]
    DuplicateSeat(Seat),

    #[error("boarding order contains seat {0} that is not in the cabin")]
    ForeignSeat(Seat),
}

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;
