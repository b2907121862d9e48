//! `board-engine` — converts a boarding order into a total boarding time.
//!
//! Two interchangeable engine shapes:
//!
//! | Engine                | Models                                           |
//! |-----------------------|--------------------------------------------------|
//! | [`SequentialEngine`]  | one passenger settles at a time; delay grows with the number of seated blockers in their row |
//! | [`BatchEngine`]       | concurrent overhead-bin loading; time advances by the slowest bag in each batch |
//!
//! Both validate the ordering contract (a permutation of every cabin seat)
//! before accumulating anything, so a buggy strategy fails loudly instead of
//! producing a silently wrong total.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the contract duplicate check (faster on seats). |

pub mod batch;
pub mod conflict;
pub mod contract;
pub mod driver;
pub mod error;
pub mod passenger;
pub mod sequential;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use batch::BatchEngine;
pub use conflict::SeatedSet;
pub use contract::validate_order;
pub use driver::run_boarding;
pub use error::{EngineError, EngineResult};
pub use passenger::{DelayModel, Passenger};
pub use sequential::{BoardingPhase, SequentialEngine};
