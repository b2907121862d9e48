//! Unit tests for the trial runner and summary statistics.

use board_core::{CabinConfig, CabinLayout, EngineMode, TrialConfig, TrialId};
use board_order::BoardingStrategy;

use crate::error::StatsError;
use crate::observer::TrialObserver;
use crate::runner::{StrategyReport, TrialRunner};
use crate::summary::{running_mean, summarize};

fn small_layout() -> CabinLayout {
    CabinConfig { rows: 6, ..CabinConfig::default() }.build().unwrap()
}

fn small_config(num_trials: u32) -> TrialConfig {
    TrialConfig {
        num_trials,
        seed: 42,
        num_threads: Some(2),
        ..TrialConfig::default()
    }
}

// ── Summary statistics ────────────────────────────────────────────────────────

mod summary {
    use super::*;

    #[test]
    fn known_sample() {
        // [1..5]: mean 3, sample variance 2.5.
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
        let s = summarize(&samples, 0.95).unwrap();
        assert!((s.mean - 3.0).abs() < 1e-12);
        assert!((s.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
        assert!((s.std_err - (2.5f64 / 5.0).sqrt()).abs() < 1e-12);
        assert!(s.ci_low < s.mean && s.mean < s.ci_high);
    }

    #[test]
    fn ci_width_matches_t_critical_at_n_100() {
        // Synthetic sample: 50 values at μ+d, 50 at μ−d → mean exactly μ.
        let (mu, d) = (30.0, 2.0);
        let mut samples = Vec::with_capacity(100);
        for i in 0..100 {
            samples.push(if i % 2 == 0 { mu + d } else { mu - d });
        }
        let s = summarize(&samples, 0.95).unwrap();
        assert!((s.mean - mu).abs() < 1e-12);
        assert!(s.ci_low < mu && mu < s.ci_high);

        // Expected width: 2 × t(0.975, df=99) × σ/√100, t ≈ 1.98422.
        let sigma = (100.0 / 99.0f64).sqrt() * d; // sample std of the ±d pattern
        let expected_width = 2.0 * 1.98422 * sigma / 10.0;
        let width = s.ci_high - s.ci_low;
        assert!((width - expected_width).abs() < 1e-3, "width {width}");
    }

    #[test]
    fn higher_confidence_widens_the_interval() {
        let samples: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let s95 = summarize(&samples, 0.95).unwrap();
        let s99 = summarize(&samples, 0.99).unwrap();
        assert!(s99.ci_high - s99.ci_low > s95.ci_high - s95.ci_low);
    }

    #[test]
    fn single_sample_is_insufficient() {
        match summarize(&[17.0], 0.95) {
            Err(StatsError::InsufficientSample { got: 1 }) => {}
            other => panic!("expected InsufficientSample, got {other:?}"),
        }
        assert!(matches!(
            summarize(&[], 0.95),
            Err(StatsError::InsufficientSample { got: 0 })
        ));
    }

    #[test]
    fn bad_confidence_level_rejected() {
        assert!(summarize(&[1.0, 2.0], 0.0).is_err());
        assert!(summarize(&[1.0, 2.0], 1.0).is_err());
    }

    #[test]
    fn running_mean_converges_to_sample_mean() {
        let samples = [4.0, 8.0, 6.0, 2.0];
        let rm = running_mean(&samples);
        assert_eq!(rm.len(), 4);
        assert_eq!(rm[0], 4.0);
        assert_eq!(rm[1], 6.0);
        assert!((rm[3] - 5.0).abs() < 1e-12);
    }
}

// ── Trial runner ──────────────────────────────────────────────────────────────

mod runner {
    use super::*;

    #[test]
    fn invalid_config_fails_before_any_trial() {
        let layout = small_layout();
        assert!(TrialRunner::new(&layout, small_config(0)).is_err());
        let bad_ci = TrialConfig { confidence_level: 1.5, ..small_config(10) };
        assert!(TrialRunner::new(&layout, bad_ci).is_err());
    }

    #[test]
    fn report_shape_and_finiteness() {
        let layout = small_layout();
        let runner = TrialRunner::new(&layout, small_config(25)).unwrap();
        let report = runner.run(BoardingStrategy::Random).unwrap();

        assert_eq!(report.totals.len(), 25);
        assert_eq!(report.running_mean.len(), 25);
        assert!(report.totals.iter().all(|t| t.is_finite() && *t >= 0.0));

        let mean = report.totals.iter().sum::<f64>() / 25.0;
        assert!((report.running_mean[24] - mean).abs() < 1e-9);
        assert!((report.summary.mean - mean).abs() < 1e-9);
        assert!(report.summary.ci_low <= report.summary.mean);
        assert!(report.summary.mean <= report.summary.ci_high);
    }

    #[test]
    fn fixed_seed_reproduces_trial_totals() {
        let layout = small_layout();
        for strategy in BoardingStrategy::ALL {
            let a = TrialRunner::new(&layout, small_config(10))
                .unwrap()
                .run(strategy)
                .unwrap();
            let b = TrialRunner::new(&layout, small_config(10))
                .unwrap()
                .run(strategy)
                .unwrap();
            assert_eq!(a.totals, b.totals, "{strategy}");
        }
    }

    #[test]
    fn different_seeds_differ() {
        let layout = small_layout();
        let a = TrialRunner::new(&layout, small_config(10))
            .unwrap()
            .run(BoardingStrategy::Random)
            .unwrap();
        let other_seed = TrialConfig { seed: 7, ..small_config(10) };
        let b = TrialRunner::new(&layout, other_seed)
            .unwrap()
            .run(BoardingStrategy::Random)
            .unwrap();
        assert_ne!(a.totals, b.totals);
    }

    #[test]
    fn trials_are_independent_of_run_order() {
        // Trial k's total depends only on (seed, k), not on earlier trials.
        let layout = small_layout();
        let long = TrialRunner::new(&layout, small_config(10))
            .unwrap()
            .run(BoardingStrategy::FrontToBack)
            .unwrap();
        let short = TrialRunner::new(&layout, small_config(3))
            .unwrap()
            .run(BoardingStrategy::FrontToBack)
            .unwrap();
        assert_eq!(&long.totals[..3], &short.totals[..]);
    }

    #[test]
    fn single_trial_reports_insufficient_sample() {
        let layout = small_layout();
        let runner = TrialRunner::new(&layout, small_config(1)).unwrap();
        assert!(matches!(
            runner.run(BoardingStrategy::Random),
            Err(StatsError::InsufficientSample { got: 1 })
        ));
    }

    #[test]
    fn batch_mode_runs_through_the_same_pipeline() {
        let layout = small_layout();
        let config = TrialConfig {
            engine_mode: EngineMode::ParallelBatch,
            ..small_config(10)
        };
        let report = TrialRunner::new(&layout, config)
            .unwrap()
            .run(BoardingStrategy::BackToFront)
            .unwrap();
        assert_eq!(report.totals.len(), 10);
        assert!(report.totals.iter().all(|t| t.is_finite() && *t >= 0.0));
    }

    #[test]
    fn run_all_covers_every_strategy_in_order() {
        let layout = small_layout();
        let reports = TrialRunner::new(&layout, small_config(5))
            .unwrap()
            .run_all()
            .unwrap();
        let strategies: Vec<BoardingStrategy> = reports.iter().map(|r| r.strategy).collect();
        assert_eq!(strategies, BoardingStrategy::ALL.to_vec());
    }

    #[test]
    fn observer_sees_every_trial_and_the_report() {
        #[derive(Default)]
        struct Recorder {
            trials: Vec<(u32, f64, f64)>,
            runs: usize,
        }
        impl TrialObserver for Recorder {
            fn on_trial_end(&mut self, trial: TrialId, total: f64, running_mean: f64) {
                self.trials.push((trial.0, total, running_mean));
            }
            fn on_run_end(&mut self, report: &StrategyReport) {
                assert_eq!(report.totals.len(), self.trials.len());
                self.runs += 1;
            }
        }

        let layout = small_layout();
        let runner = TrialRunner::new(&layout, small_config(8)).unwrap();
        let mut recorder = Recorder::default();
        let report = runner
            .run_with_observer(BoardingStrategy::WindowMiddleAisle, &mut recorder)
            .unwrap();

        assert_eq!(recorder.runs, 1);
        assert_eq!(recorder.trials.len(), 8);
        // Callbacks arrive in trial order with the resolved running mean.
        for (i, &(trial, total, mean)) in recorder.trials.iter().enumerate() {
            assert_eq!(trial, i as u32);
            assert_eq!(total.to_bits(), report.totals[i].to_bits());
            assert_eq!(mean.to_bits(), report.running_mean[i].to_bits());
        }
    }
}
