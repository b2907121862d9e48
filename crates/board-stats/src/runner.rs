//! The Monte Carlo trial runner.

use board_core::{CabinLayout, TrialConfig, TrialId, TrialRng};
use board_engine::{EngineResult, run_boarding};
use board_order::BoardingStrategy;

use crate::error::StatsResult;
use crate::observer::{NoopObserver, TrialObserver};
use crate::summary::{Summary, running_mean, summarize};

// ── StrategyReport ────────────────────────────────────────────────────────────

/// Everything one strategy's run produces: the raw per-trial totals (for
/// external plotting), the convergence curve, and the scalar summary.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyReport {
    pub strategy: BoardingStrategy,
    /// Total boarding time per trial, in trial order.  Length `num_trials`.
    pub totals: Vec<f64>,
    /// Mean of `totals[..=i]` for each `i`.  Length `num_trials`.
    pub running_mean: Vec<f64>,
    pub summary: Summary,
}

// ── TrialRunner ───────────────────────────────────────────────────────────────

/// Runs `num_trials` independent boardings per strategy and aggregates them.
///
/// Each trial gets a fresh [`TrialRng`] derived from the master seed and its
/// trial index, a fresh boarding order, and fresh passengers — nothing leaks
/// between trials, and the whole run is a pure function of the configuration.
///
/// With the `parallel` Cargo feature, trials execute on Rayon's thread pool
/// (`config.num_threads` bounds the pool; `None` uses all logical cores).
/// Totals are collected in trial-index order either way, so the output is
/// bitwise identical to a sequential run.
pub struct TrialRunner<'a> {
    layout: &'a CabinLayout,
    config: TrialConfig,
}

impl<'a> TrialRunner<'a> {
    /// Validate `config` and build a runner.  Fails fast on zero trials or a
    /// confidence level outside (0, 1) — before any trial executes.
    pub fn new(layout: &'a CabinLayout, config: TrialConfig) -> StatsResult<Self> {
        config.validate()?;
        Ok(Self { layout, config })
    }

    #[inline]
    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Run one strategy without progress callbacks.
    pub fn run(&self, strategy: BoardingStrategy) -> StatsResult<StrategyReport> {
        self.run_with_observer(strategy, &mut NoopObserver)
    }

    /// Run every built-in strategy for a side-by-side comparison, in
    /// [`BoardingStrategy::ALL`] order.
    pub fn run_all(&self) -> StatsResult<Vec<StrategyReport>> {
        BoardingStrategy::ALL
            .iter()
            .map(|&strategy| self.run(strategy))
            .collect()
    }

    /// Run one strategy, reporting per-trial progress to `observer`.
    pub fn run_with_observer<O: TrialObserver>(
        &self,
        strategy: BoardingStrategy,
        observer: &mut O,
    ) -> StatsResult<StrategyReport> {
        let totals = self.collect_totals(strategy)?;
        let running_mean = running_mean(&totals);
        let summary = summarize(&totals, self.config.confidence_level)?;

        for (i, (&total, &mean)) in totals.iter().zip(&running_mean).enumerate() {
            observer.on_trial_end(TrialId(i as u32), total, mean);
        }

        let report = StrategyReport {
            strategy,
            totals,
            running_mean,
            summary,
        };
        observer.on_run_end(&report);
        Ok(report)
    }

    /// One complete boarding: fresh RNG, fresh order, one scalar total.
    fn one_trial(&self, strategy: BoardingStrategy, trial: TrialId) -> EngineResult<f64> {
        let mut rng = TrialRng::new(self.config.seed, trial);
        let order = strategy.generate_order(self.layout, &mut rng);
        run_boarding(
            self.layout,
            self.config.engine_mode,
            self.config.conflict_rule,
            &order,
            &mut rng,
        )
    }

    #[cfg(not(feature = "parallel"))]
    fn collect_totals(&self, strategy: BoardingStrategy) -> StatsResult<Vec<f64>> {
        let totals = (0..self.config.num_trials)
            .map(|i| self.one_trial(strategy, TrialId(i)))
            .collect::<EngineResult<Vec<f64>>>()?;
        Ok(totals)
    }

    #[cfg(feature = "parallel")]
    fn collect_totals(&self, strategy: BoardingStrategy) -> StatsResult<Vec<f64>> {
        use rayon::prelude::*;

        use crate::error::StatsError;

        let trials = || {
            (0..self.config.num_trials)
                .into_par_iter()
                .map(|i| self.one_trial(strategy, TrialId(i)))
                .collect::<EngineResult<Vec<f64>>>()
        };

        let totals = match self.config.num_threads {
            None => trials()?,
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| StatsError::ThreadPool(e.to_string()))?;
                pool.install(trials)?
            }
        };
        Ok(totals)
    }
}
