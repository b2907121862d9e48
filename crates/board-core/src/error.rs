//! Workspace base error type.
//!
//! Sub-crates define their own error enums and either convert `BoardError`
//! in via a `#[from]` variant or keep it separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `board-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `board-*` crates.
pub type BoardResult<T> = Result<T, BoardError>;
