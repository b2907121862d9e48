//! Run-level configuration: how many trials, which engine, which conflict
//! rule, and how to derive randomness.

use crate::error::{BoardError, BoardResult};

// ── EngineMode ────────────────────────────────────────────────────────────────

/// Which simulation engine converts a boarding order into a total time.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineMode {
    /// One passenger settles at a time; delay depends on seated blockers.
    #[default]
    Sequential,
    /// Batched bag stowage: time advances by the maximum bag delay within
    /// each concurrent batch.  Ignores blocking entirely.
    ParallelBatch,
}

// ── ConflictRule ──────────────────────────────────────────────────────────────

/// How the seat-conflict resolver counts blockers for a candidate passenger.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictRule {
    /// Same row, strictly smaller column, aisle side ignored.  The default
    /// for every built-in strategy.
    #[default]
    RowOrder,
    /// Same row AND same aisle side, strictly smaller column within that
    /// side's ordering.
    SameSide,
}

// ── TrialConfig ───────────────────────────────────────────────────────────────

/// Configuration for one Monte Carlo run of a boarding strategy.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialConfig {
    /// Independent trials per strategy.  Must be positive; statistics need
    /// at least 2 (see `board-stats`).  Default: 100.
    pub num_trials: u32,

    /// Two-sided confidence level for the Student-t interval, in (0, 1).
    /// Default: 0.95.
    pub confidence_level: f64,

    /// Engine shape used for every trial.
    pub engine_mode: EngineMode,

    /// Blocker-counting rule used by the sequential engine.
    pub conflict_rule: ConflictRule,

    /// Master RNG seed.  The same seed always produces identical orderings
    /// and trial totals.
    pub seed: u64,

    /// Worker thread count for the `parallel` feature.  `None` uses all
    /// logical cores.
    pub num_threads: Option<usize>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            num_trials:       100,
            confidence_level: 0.95,
            engine_mode:      EngineMode::Sequential,
            conflict_rule:    ConflictRule::RowOrder,
            seed:             0,
            num_threads:      None,
        }
    }
}

impl TrialConfig {
    /// Fail fast on values no trial should ever run with.
    pub fn validate(&self) -> BoardResult<()> {
        if self.num_trials == 0 {
            return Err(BoardError::Config("num_trials must be positive".into()));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(BoardError::Config(format!(
                "confidence_level must be in (0, 1), got {}",
                self.confidence_level
            )));
        }
        Ok(())
    }
}
