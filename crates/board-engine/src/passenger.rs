//! Per-passenger state and the stochastic delay model.

use board_core::{CabinLayout, Seat, TrialRng};

// ── DelayModel ────────────────────────────────────────────────────────────────

/// Draws the two delay components of a passenger's settle time.
///
/// Both are exponentially distributed:
/// - bag stowage with mean `bag_mean` (default 5 time units),
/// - aisle entry with mean `base_pass_mean + blocking` — one extra unit of
///   expected delay per seated blocker.  Zero blockers still costs a full
///   baseline draw, reflecting the time to step out of the aisle.
#[derive(Copy, Clone, Debug)]
pub struct DelayModel {
    bag_mean: f64,
    base_pass_mean: f64,
}

impl DelayModel {
    /// Take the (already validated) means from a cabin layout.
    pub fn from_layout(layout: &CabinLayout) -> Self {
        Self {
            bag_mean: layout.bag_mean(),
            base_pass_mean: layout.base_pass_mean(),
        }
    }

    /// Time to stow luggage in the overhead bin.
    #[inline]
    pub fn draw_bag_time(&self, rng: &mut TrialRng) -> f64 {
        rng.sample_exp(self.bag_mean)
    }

    /// Time to get past `blocking` seated passengers and into the seat.
    #[inline]
    pub fn draw_pass_time(&self, blocking: u32, rng: &mut TrialRng) -> f64 {
        rng.sample_exp(self.base_pass_mean + f64::from(blocking))
    }
}

// ── Passenger ─────────────────────────────────────────────────────────────────

/// One passenger in one trial.
///
/// Created fresh for every trial (stochastic draws never leak between
/// independent trials) and mutated exactly once, by [`settle`](Self::settle),
/// when the passenger reaches their seat.
#[derive(Clone, Debug)]
pub struct Passenger {
    pub seat: Seat,
    /// Seated same-row blockers at the moment this passenger entered the row.
    pub blocking: u32,
    pub bag_time: f64,
    pub pass_time: f64,
    /// `bag_time + pass_time`; zero until seated.
    pub settle_time: f64,
}

impl Passenger {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            blocking: 0,
            bag_time: 0.0,
            pass_time: 0.0,
            settle_time: 0.0,
        }
    }

    /// Stow the bag, pass the blockers, and sit down.
    ///
    /// Records both delay components and their sum on the passenger, and
    /// returns the total settle time.  Must be called at most once.
    pub fn settle(&mut self, blocking: u32, model: &DelayModel, rng: &mut TrialRng) -> f64 {
        debug_assert!(self.settle_time == 0.0, "passenger seated twice");
        self.blocking = blocking;
        self.bag_time = model.draw_bag_time(rng);
        self.pass_time = model.draw_pass_time(blocking, rng);
        self.settle_time = self.bag_time + self.pass_time;
        self.settle_time
    }
}
