//! `board-stats` — Monte Carlo trial runner and summary statistics.
//!
//! # One run, per strategy
//!
//! ```text
//! for trial in 0..num_trials:
//!   ① fresh TrialRng seeded from (config.seed, trial)
//!   ② strategy.generate_order(layout, rng)      — fresh shuffle
//!   ③ run_boarding(layout, mode, rule, order)   — one total-time scalar
//! collect totals → running-mean sequence → Summary (mean/std/stderr/CI)
//! ```
//!
//! Every trial owns its RNG, so trials are independent and the run is
//! reproducible from the master seed alone — sequentially or, with the
//! `parallel` Cargo feature, on Rayon's thread pool with identical output.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs trials on Rayon's thread pool.                    |

pub mod error;
pub mod observer;
pub mod runner;
pub mod summary;

#[cfg(test)]
mod tests;

pub use error::{StatsError, StatsResult};
pub use observer::{NoopObserver, TrialObserver};
pub use runner::{StrategyReport, TrialRunner};
pub use summary::{Summary, running_mean, summarize};
