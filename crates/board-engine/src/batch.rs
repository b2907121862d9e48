//! The parallel-batch engine: concurrent overhead-bin loading.
//!
//! Models only bag stowage — blocking and aisle-entry delays are ignored.
//! The queue is split into batches of passengers who stow simultaneously;
//! each batch costs the MAXIMUM of its members' bag delays (concurrent
//! completion), and batches run back to back.
//!
//! # Batching rule
//!
//! A batch is the maximal run of consecutive passengers bound for the same
//! row: they stand abreast of that row and load its bins (both aisle sides)
//! at once, while the next passenger in the queue — bound for a different
//! row — cannot get past them until the whole group finishes.  So for queue
//! rows `[1, 1, 2, 2]` with bag draws `[3, 5, 2, 4]` the total is
//! `max(3, 5) + max(2, 4) = 9`.

use board_core::{CabinLayout, Seat, TrialRng};

use crate::contract::validate_order;
use crate::error::EngineResult;
use crate::passenger::DelayModel;

/// Batched bag-stowage driver.
pub struct BatchEngine<'a> {
    layout: &'a CabinLayout,
    model: DelayModel,
}

impl<'a> BatchEngine<'a> {
    pub fn new(layout: &'a CabinLayout) -> Self {
        Self {
            layout,
            model: DelayModel::from_layout(layout),
        }
    }

    /// Load every bag in the given queue order and return the elapsed time.
    ///
    /// Validates the ordering contract, draws one bag delay per passenger in
    /// queue order, then folds the draws batch by batch.
    pub fn run(&self, order: &[Seat], rng: &mut TrialRng) -> EngineResult<f64> {
        validate_order(self.layout, order)?;
        let draws: Vec<f64> = order
            .iter()
            .map(|_| self.model.draw_bag_time(rng))
            .collect();
        Ok(total_from_draws(order, &draws))
    }
}

/// Fold pre-drawn bag delays into a total elapsed time.
///
/// Split out from [`BatchEngine::run`] so the batching arithmetic is testable
/// with hand-picked delays.  `draws[i]` is the bag delay of `order[i]`;
/// the slices must be the same length.
pub fn total_from_draws(order: &[Seat], draws: &[f64]) -> f64 {
    debug_assert_eq!(order.len(), draws.len());
    let mut total = 0.0;
    let mut i = 0;
    while i < order.len() {
        let row = order[i].row;
        let mut slowest = 0.0f64;
        while i < order.len() && order[i].row == row {
            slowest = slowest.max(draws[i]);
            i += 1;
        }
        total += slowest;
    }
    total
}
