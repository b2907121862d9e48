//! The sequential-settle engine.
//!
//! Processes the boarding order one passenger at a time.  Each passenger's
//! aisle-entry delay depends on how many already-seated passengers block
//! their row under the configured [`ConflictRule`].

use board_core::{CabinLayout, ConflictRule, Seat, TrialRng};

use crate::conflict::SeatedSet;
use crate::contract::validate_order;
use crate::error::EngineResult;
use crate::passenger::{DelayModel, Passenger};

// ── BoardingPhase ─────────────────────────────────────────────────────────────

/// Where the engine is in its run.
///
/// `NotStarted → Seating` on the first passenger processed; `Seating → Done`
/// when the order is exhausted.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum BoardingPhase {
    #[default]
    NotStarted,
    Seating,
    Done,
}

// ── SequentialEngine ──────────────────────────────────────────────────────────

/// One-passenger-at-a-time boarding driver.
///
/// [`run`](Self::run) resets all per-trial state first, so a single engine
/// value can replay many orderings; note that statistical independence
/// between trials comes from giving each trial a fresh
/// [`TrialRng`][board_core::TrialRng], not from the engine.
pub struct SequentialEngine<'a> {
    layout: &'a CabinLayout,
    model: DelayModel,
    rule: ConflictRule,
    phase: BoardingPhase,
    seated: SeatedSet,
    passengers: Vec<Passenger>,
    total: f64,
}

impl<'a> SequentialEngine<'a> {
    pub fn new(layout: &'a CabinLayout, rule: ConflictRule) -> Self {
        Self {
            layout,
            model: DelayModel::from_layout(layout),
            rule,
            phase: BoardingPhase::NotStarted,
            seated: SeatedSet::new(layout),
            passengers: Vec::with_capacity(layout.seat_count()),
            total: 0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> BoardingPhase {
        self.phase
    }

    /// Accumulated boarding time so far (final total once `phase` is `Done`).
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Passengers in seating order, with their recorded delay components.
    /// Empty until the first passenger of a run has settled.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Board the whole cabin in the given order and return the total time.
    ///
    /// Validates the ordering contract before the first passenger moves.
    pub fn run(&mut self, order: &[Seat], rng: &mut TrialRng) -> EngineResult<f64> {
        validate_order(self.layout, order)?;
        self.reset();
        for &seat in order {
            self.step(seat, rng);
        }
        self.phase = BoardingPhase::Done;
        Ok(self.total)
    }

    fn reset(&mut self) {
        self.phase = BoardingPhase::NotStarted;
        self.seated = SeatedSet::new(self.layout);
        self.passengers.clear();
        self.total = 0.0;
    }

    /// Seat one passenger: resolve blockers, draw delays, accumulate.
    fn step(&mut self, seat: Seat, rng: &mut TrialRng) {
        self.phase = BoardingPhase::Seating;
        let blocking = self.seated.blocking_count(self.layout, seat, self.rule);
        let mut passenger = Passenger::new(seat);
        self.total += passenger.settle(blocking, &self.model, rng);
        self.seated.insert(seat);
        self.passengers.push(passenger);
    }
}
