//! Cabin geometry: user-facing [`CabinConfig`] and validated [`CabinLayout`].
//!
//! # Design
//!
//! `CabinConfig` is the loose, serializable form an application fills in (or
//! takes from `Default`).  [`CabinConfig::build`] validates it once and
//! produces a `CabinLayout` with a precomputed column→side table, so the hot
//! simulation path never re-checks the partition or searches symbol lists.

use crate::error::{BoardError, BoardResult};
use crate::seat::{Col, Row, Seat, Side};

// ── CabinConfig ───────────────────────────────────────────────────────────────

/// User-facing cabin description.
///
/// The default matches the classic single-aisle narrow-body: 50 rows of six
/// seats `A..F`, with `A,B,C` left of the aisle and `D,E,F` right of it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabinConfig {
    /// Number of seat rows.  Must be positive.
    pub rows: u16,

    /// Ordered, distinct column symbols.  Index order is the column ordering
    /// used for blocking comparisons (alphabetical for the default `A..F`).
    pub columns: Vec<char>,

    /// Columns left of the aisle.  Together with `right` this must partition
    /// `columns` exactly.
    pub left: Vec<char>,

    /// Columns right of the aisle.
    pub right: Vec<char>,

    /// Mean of the exponential bag-stow delay.  Default: 5.0 time units.
    pub bag_mean: f64,

    /// Baseline mean of the exponential aisle-entry delay with zero blockers.
    /// Each blocker adds one unit to the mean.  Default: 1.0.
    pub base_pass_mean: f64,
}

impl Default for CabinConfig {
    fn default() -> Self {
        Self {
            rows:           50,
            columns:        vec!['A', 'B', 'C', 'D', 'E', 'F'],
            left:           vec!['A', 'B', 'C'],
            right:          vec!['D', 'E', 'F'],
            bag_mean:       5.0,
            base_pass_mean: 1.0,
        }
    }
}

impl CabinConfig {
    /// Validate the configuration and produce an immutable [`CabinLayout`].
    ///
    /// Fails fast on: zero rows, an empty or duplicated column alphabet,
    /// side groups that do not partition the alphabet, or non-positive /
    /// non-finite delay means.
    pub fn build(self) -> BoardResult<CabinLayout> {
        if self.rows == 0 {
            return Err(BoardError::Config("cabin must have at least one row".into()));
        }
        if self.columns.is_empty() {
            return Err(BoardError::Config("column alphabet is empty".into()));
        }
        if self.columns.len() > u8::MAX as usize {
            return Err(BoardError::Config(format!(
                "{} columns exceeds the supported maximum of {}",
                self.columns.len(),
                u8::MAX
            )));
        }
        for (i, &c) in self.columns.iter().enumerate() {
            if self.columns[..i].contains(&c) {
                return Err(BoardError::Config(format!("duplicate column symbol {c:?}")));
            }
        }
        if !(self.bag_mean.is_finite() && self.bag_mean > 0.0) {
            return Err(BoardError::Config(format!(
                "bag_mean must be positive and finite, got {}",
                self.bag_mean
            )));
        }
        if !(self.base_pass_mean.is_finite() && self.base_pass_mean > 0.0) {
            return Err(BoardError::Config(format!(
                "base_pass_mean must be positive and finite, got {}",
                self.base_pass_mean
            )));
        }

        // Column → side table.  Every column must appear in exactly one group,
        // and the groups may not name symbols outside the alphabet.
        let mut sides: Vec<Option<Side>> = vec![None; self.columns.len()];
        for (group, side) in [(&self.left, Side::Left), (&self.right, Side::Right)] {
            for &c in group {
                let idx = self
                    .columns
                    .iter()
                    .position(|&col| col == c)
                    .ok_or_else(|| {
                        BoardError::Config(format!("side group names unknown column {c:?}"))
                    })?;
                if sides[idx].is_some() {
                    return Err(BoardError::Config(format!(
                        "column {c:?} appears in both side groups"
                    )));
                }
                sides[idx] = Some(side);
            }
        }
        let sides: Vec<Side> = sides
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                s.ok_or_else(|| {
                    BoardError::Config(format!(
                        "column {:?} belongs to neither side group",
                        self.columns[i]
                    ))
                })
            })
            .collect::<BoardResult<_>>()?;

        Ok(CabinLayout {
            rows: self.rows,
            columns: self.columns,
            sides,
            bag_mean: self.bag_mean,
            base_pass_mean: self.base_pass_mean,
        })
    }
}

// ── CabinLayout ───────────────────────────────────────────────────────────────

/// Validated cabin geometry.  Construct via [`CabinConfig::build`].
///
/// Fields are private so the invariants established at build time (distinct
/// columns, total side partition, positive means) hold for the layout's whole
/// lifetime.
#[derive(Clone, Debug)]
pub struct CabinLayout {
    rows: u16,
    columns: Vec<char>,
    sides: Vec<Side>,
    bag_mean: f64,
    base_pass_mean: f64,
}

impl CabinLayout {
    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns per row.
    #[inline]
    pub fn num_cols(&self) -> u8 {
        self.columns.len() as u8
    }

    /// Total seats: `rows × columns` (e.g. 300 for the default 50 × 6).
    #[inline]
    pub fn seat_count(&self) -> usize {
        self.rows as usize * self.columns.len()
    }

    #[inline]
    pub fn bag_mean(&self) -> f64 {
        self.bag_mean
    }

    #[inline]
    pub fn base_pass_mean(&self) -> f64 {
        self.base_pass_mean
    }

    /// Which side of the aisle `col` sits on.
    ///
    /// # Panics
    /// Panics if `col` is out of range for this layout; use
    /// [`contains`](Self::contains) first for untrusted seats.
    #[inline]
    pub fn side(&self, col: Col) -> Side {
        self.sides[usize::from(col)]
    }

    /// The symbol for a column index (`Col(2)` → `'C'` in the default layout).
    #[inline]
    pub fn symbol(&self, col: Col) -> char {
        self.columns[usize::from(col)]
    }

    /// Look up the column index for a symbol, if present.
    pub fn col_of(&self, symbol: char) -> Option<Col> {
        self.columns
            .iter()
            .position(|&c| c == symbol)
            .map(|i| Col(i as u8))
    }

    /// Whether `seat` is a real seat in this cabin.
    #[inline]
    pub fn contains(&self, seat: Seat) -> bool {
        (1..=self.rows).contains(&seat.row.0) && usize::from(seat.col) < self.columns.len()
    }

    /// Dense zero-based index of a seat, row-major.  Valid only for seats
    /// where [`contains`](Self::contains) is true.
    #[inline]
    pub fn seat_index(&self, seat: Seat) -> usize {
        (seat.row.0 as usize - 1) * self.columns.len() + usize::from(seat.col)
    }

    /// All seats in canonical row-major order (row 1 first, columns in
    /// alphabet order).
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        (1..=self.rows).flat_map(move |row| {
            (0..self.columns.len() as u8).map(move |col| Seat::new(Row(row), Col(col)))
        })
    }

    /// Human-readable seat label, e.g. `"12C"`.
    pub fn label(&self, seat: Seat) -> String {
        format!("{}{}", seat.row.0, self.symbol(seat.col))
    }
}
