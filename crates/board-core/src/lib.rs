//! `board-core` — foundational types for the `boardsim` cabin-boarding
//! simulator.
//!
//! This crate is a dependency of every other `board-*` crate.  It has no
//! `board-*` dependencies and minimal external ones (only `rand`,
//! `rand_distr`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`seat`]    | `Row`, `Col`, `TrialId`, `Seat`, `Side`               |
//! | [`layout`]  | `CabinConfig`, `CabinLayout` (validated geometry)     |
//! | [`config`]  | `TrialConfig`, `EngineMode`, `ConflictRule`           |
//! | [`rng`]     | `TrialRng` (per-trial deterministic RNG)              |
//! | [`error`]   | `BoardError`, `BoardResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod layout;
pub mod rng;
pub mod seat;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ConflictRule, EngineMode, TrialConfig};
pub use error::{BoardError, BoardResult};
pub use layout::{CabinConfig, CabinLayout};
pub use rng::TrialRng;
pub use seat::{Col, Row, Seat, Side, TrialId};
