//! The four built-in boarding policies.

use std::fmt;

use board_core::{CabinLayout, Col, Row, Seat, TrialRng};

/// A boarding policy: produces one total ordering of every seat in the cabin.
///
/// | Variant             | Row order        | Within-row order        |
/// |---------------------|------------------|-------------------------|
/// | `Random`            | —                | full uniform shuffle    |
/// | `FrontToBack`       | 1..R ascending   | uniform shuffle         |
/// | `BackToFront`       | R..1 descending  | uniform shuffle         |
/// | `WindowMiddleAisle` | R..1 per column  | none (deterministic)    |
///
/// `WindowMiddleAisle` is the Steffen-style policy: outermost (window)
/// columns board first, innermost (aisle) columns last, each column walked
/// back-to-front.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardingStrategy {
    Random,
    FrontToBack,
    BackToFront,
    WindowMiddleAisle,
}

impl BoardingStrategy {
    /// All built-in strategies, in the order reports list them.
    pub const ALL: [BoardingStrategy; 4] = [
        BoardingStrategy::Random,
        BoardingStrategy::FrontToBack,
        BoardingStrategy::BackToFront,
        BoardingStrategy::WindowMiddleAisle,
    ];

    /// Stable label for CSV output and report tables.
    pub fn label(&self) -> &'static str {
        match self {
            BoardingStrategy::Random => "random",
            BoardingStrategy::FrontToBack => "front_to_back",
            BoardingStrategy::BackToFront => "back_to_front",
            BoardingStrategy::WindowMiddleAisle => "window_middle_aisle",
        }
    }

    /// Produce the boarding order for one trial.
    ///
    /// Always returns a permutation of `layout.seats()` — every seat exactly
    /// once.  The engine re-validates this contract for orderings it did not
    /// produce itself.
    pub fn generate_order(&self, layout: &CabinLayout, rng: &mut TrialRng) -> Vec<Seat> {
        match self {
            BoardingStrategy::Random => {
                let mut seats: Vec<Seat> = layout.seats().collect();
                rng.shuffle(&mut seats);
                seats
            }
            BoardingStrategy::FrontToBack => {
                rows_with_shuffled_cols(layout, (1..=layout.rows()).collect(), rng)
            }
            BoardingStrategy::BackToFront => {
                rows_with_shuffled_cols(layout, (1..=layout.rows()).rev().collect(), rng)
            }
            BoardingStrategy::WindowMiddleAisle => window_middle_aisle(layout),
        }
    }
}

impl fmt::Display for BoardingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Order builders ────────────────────────────────────────────────────────────

/// Fixed row order, uniformly shuffled column order within each row.
fn rows_with_shuffled_cols(
    layout: &CabinLayout,
    rows:   Vec<u16>,
    rng:    &mut TrialRng,
) -> Vec<Seat> {
    let mut order = Vec::with_capacity(layout.seat_count());
    let mut cols: Vec<Col> = (0..layout.num_cols()).map(Col).collect();
    for row in rows {
        rng.shuffle(&mut cols);
        order.extend(cols.iter().map(|&col| Seat::new(Row(row), col)));
    }
    order
}

/// Steffen-style ordering, generalized to any column alphabet.
///
/// Columns pair up walking inward from both ends of the alphabet: depth 0 is
/// the window pair (`A`,`F` in the default layout), depth 1 the middle pair,
/// and so on.  Each column is emitted back-to-front before moving to the next
/// column in the pair, matching the published boarding call sequence.  Fully
/// deterministic — no shuffle step.
fn window_middle_aisle(layout: &CabinLayout) -> Vec<Seat> {
    let n = layout.num_cols();
    let mut order = Vec::with_capacity(layout.seat_count());
    for depth in 0..n.div_ceil(2) {
        let left = Col(depth);
        let right = Col(n - 1 - depth);
        order.extend(column_back_to_front(layout, left));
        if right != left {
            // Odd alphabets have an unpaired center column at max depth.
            order.extend(column_back_to_front(layout, right));
        }
    }
    order
}

fn column_back_to_front(layout: &CabinLayout, col: Col) -> impl Iterator<Item = Seat> + '_ {
    (1..=layout.rows()).rev().map(move |row| Seat::new(Row(row), col))
}
