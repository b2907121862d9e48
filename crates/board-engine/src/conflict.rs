//! Seat-conflict resolver: who blocks whom inside a row.

use board_core::{CabinLayout, Col, ConflictRule, Seat};

/// The set of passengers who have completed seating so far in one trial.
///
/// Append-only within a trial; insertion order is the strategy's boarding
/// order.  Stored per row, because both conflict rules only ever look at the
/// candidate's own row.
#[derive(Clone, Debug)]
pub struct SeatedSet {
    /// Seated columns per row, indexed by `row - 1`.
    by_row: Vec<Vec<Col>>,
    len: usize,
}

impl SeatedSet {
    /// Empty set for a cabin with `layout.rows()` rows.
    pub fn new(layout: &CabinLayout) -> Self {
        Self {
            by_row: vec![Vec::new(); layout.rows() as usize],
            len: 0,
        }
    }

    /// How many seated passengers block `candidate` from entering their row.
    ///
    /// - [`ConflictRule::RowOrder`]: same row, strictly smaller column.
    /// - [`ConflictRule::SameSide`]: same row, same aisle side, strictly
    ///   smaller column within that side.
    ///
    /// Column comparison is index order over the layout alphabet.
    pub fn blocking_count(
        &self,
        layout:    &CabinLayout,
        candidate: Seat,
        rule:      ConflictRule,
    ) -> u32 {
        let seated = &self.by_row[candidate.row.0 as usize - 1];
        let count = match rule {
            ConflictRule::RowOrder => {
                seated.iter().filter(|&&col| col < candidate.col).count()
            }
            ConflictRule::SameSide => {
                let side = layout.side(candidate.col);
                seated
                    .iter()
                    .filter(|&&col| col < candidate.col && layout.side(col) == side)
                    .count()
            }
        };
        count as u32
    }

    /// Mark `seat` as occupied.  The seat must not already be in the set
    /// (the engine's ordering-contract check guarantees this).
    pub fn insert(&mut self, seat: Seat) {
        let row = &mut self.by_row[seat.row.0 as usize - 1];
        debug_assert!(!row.contains(&seat.col), "seat seated twice");
        row.push(seat.col);
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
