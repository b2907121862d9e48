//! Run observer trait for progress reporting and data collection.

use board_core::TrialId;

use crate::runner::StrategyReport;

/// Callbacks invoked by [`TrialRunner`][crate::TrialRunner] as a strategy's
/// run is assembled.
///
/// Trials may execute out of order on a worker pool, so callbacks fire after
/// collection, in ascending trial order, with the running mean already
/// resolved.  All methods have default no-op implementations.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl TrialObserver for ProgressPrinter {
///     fn on_trial_end(&mut self, trial: TrialId, total: f64, running_mean: f64) {
///         println!("{trial}: total {total:.1}, running mean {running_mean:.1}");
///     }
/// }
/// ```
pub trait TrialObserver {
    /// Called once per trial, in trial order, after all totals are collected.
    fn on_trial_end(&mut self, _trial: TrialId, _total: f64, _running_mean: f64) {}

    /// Called once with the finished report before the runner returns it.
    fn on_run_end(&mut self, _report: &StrategyReport) {}
}

/// A [`TrialObserver`] that does nothing.  Use when you need to call a run
/// method but don't want progress callbacks.
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}
