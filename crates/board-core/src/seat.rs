//! Strongly typed seat coordinates and trial identifiers.
//!
//! All wrappers are `Copy + Ord + Hash` so they can be used as map keys and
//! sorted collection elements without ceremony.  The inner integer is `pub`
//! to allow direct arithmetic (`seat.row.0`), but callers should prefer the
//! helpers on [`CabinLayout`][crate::CabinLayout] for index math.

use std::fmt;

/// Generate a typed wrapper around a primitive integer.
macro_rules! typed_unit {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl From<$name> for usize {
            #[inline(always)]
            fn from(v: $name) -> usize {
                v.0 as usize
            }
        }
    };
}

typed_unit! {
    /// One-based cabin row number.  Row 1 is at the front of the cabin.
    pub struct Row(u16);
}

typed_unit! {
    /// Zero-based index into the cabin's ordered column alphabet.
    ///
    /// `Col(0)` is the first symbol (`A` in the default layout); index order
    /// is the column ordering used for blocking comparisons.
    pub struct Col(u8);
}

typed_unit! {
    /// Index of one Monte Carlo trial within a run.  Mixes into the per-trial
    /// RNG seed, so each trial draws from an independent stream.
    pub struct TrialId(u32);
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.0)
    }
}

impl fmt::Display for TrialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trial {}", self.0)
    }
}

// ── Seat ──────────────────────────────────────────────────────────────────────

/// An immutable seat coordinate: row number plus column index.
///
/// Exactly one passenger is assigned to each seat.  Ordering is row-major
/// (row first, then column), which matches the layout's canonical seat
/// enumeration.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    pub row: Row,
    pub col: Col,
}

impl Seat {
    #[inline]
    pub fn new(row: Row, col: Col) -> Self {
        Seat { row, col }
    }
}

impl fmt::Display for Seat {
    /// Displays the raw column index; use
    /// [`CabinLayout::label`][crate::CabinLayout::label] for the `"12C"` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.row.0, self.col.0)
    }
}

// ── Side ──────────────────────────────────────────────────────────────────────

/// Which side of the single aisle a column sits on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}
