//! Engine-mode dispatch: one entry point for running a single trial.

use board_core::{CabinLayout, ConflictRule, EngineMode, Seat, TrialRng};

use crate::batch::BatchEngine;
use crate::error::EngineResult;
use crate::sequential::SequentialEngine;

/// Run one complete boarding of `order` under the selected engine shape.
///
/// `rule` only affects [`EngineMode::Sequential`]; the batch engine models
/// bag stowage alone and never consults the conflict resolver.
pub fn run_boarding(
    layout: &CabinLayout,
    mode:   EngineMode,
    rule:   ConflictRule,
    order:  &[Seat],
    rng:    &mut TrialRng,
) -> EngineResult<f64> {
    match mode {
        EngineMode::Sequential => SequentialEngine::new(layout, rule).run(order, rng),
        EngineMode::ParallelBatch => BatchEngine::new(layout).run(order, rng),
    }
}
