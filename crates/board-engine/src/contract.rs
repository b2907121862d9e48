//! Ordering-contract validation.
//!
//! A conforming strategy returns a permutation of every seat in the cabin.
//! The engines re-check this before accumulating any time, so a duplicate,
//! missing, or foreign seat surfaces as an error rather than a subtly wrong
//! total.

use board_core::{CabinLayout, Seat};

use crate::error::{EngineError, EngineResult};

#[cfg(feature = "fx-hash")]
type SeatSet = rustc_hash::FxHashSet<Seat>;
#[cfg(not(feature = "fx-hash"))]
type SeatSet = std::collections::HashSet<Seat>;

/// Verify that `order` is a permutation of `layout.seats()`.
///
/// Checks, in order: length, foreign seats, duplicates.  Length plus
/// no-duplicates plus no-foreign-seats together imply every seat is covered
/// exactly once, so no separate missing-seat pass is needed.
pub fn validate_order(layout: &CabinLayout, order: &[Seat]) -> EngineResult<()> {
    let expected = layout.seat_count();
    if order.len() != expected {
        return Err(EngineError::OrderLength {
            expected,
            got: order.len(),
        });
    }

    let mut seen = SeatSet::default();
    seen.reserve(expected);
    for &seat in order {
        if !layout.contains(seat) {
            return Err(EngineError::ForeignSeat(seat));
        }
        if !seen.insert(seat) {
            return Err(EngineError::DuplicateSeat(seat));
        }
    }
    Ok(())
}
