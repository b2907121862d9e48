//! `board-order` — boarding-order strategies for the boardsim workspace.
//!
//! A strategy converts a cabin layout into one total ordering of its seats —
//! the order passengers enter the aisle.  Strategies are a closed enum
//! ([`BoardingStrategy`]) rather than an open trait: the simulator compares a
//! fixed set of published policies, and a tagged variant keeps configuration,
//! CSV labels, and reports in one place.
//!
//! All strategies are pure: they read the layout, draw any randomness from
//! the caller's [`TrialRng`][board_core::TrialRng], and return a fresh
//! permutation.  Re-calling with a fresh RNG per trial gives independent
//! shuffles; re-calling with the same seed reproduces the ordering exactly.

pub mod strategy;


pub use strategy::BoardingStrategy;
