//! compare — run all four boarding policies on the default 50 × 6 cabin and
//! print a side-by-side table.
//!
//! Writes `boarding_trials.csv` and `strategy_summaries.csv` to `./out` for
//! external plotting of the convergence curves.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use board_core::{CabinConfig, TrialConfig};
use board_output::CsvReportWriter;
use board_stats::TrialRunner;

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_TRIALS: u32 = 100;
const SEED:       u64 = 42;
const OUT_DIR:    &str = "out";

fn main() -> Result<()> {
    let layout = CabinConfig::default().build()?;
    let config = TrialConfig {
        num_trials: NUM_TRIALS,
        seed: SEED,
        ..TrialConfig::default()
    };
    let runner = TrialRunner::new(&layout, config)?;

    let started = Instant::now();
    let reports = runner.run_all()?;
    let elapsed = started.elapsed();

    println!(
        "{} trials × {} strategies, {} passengers each, in {elapsed:.2?}\n",
        NUM_TRIALS,
        reports.len(),
        layout.seat_count(),
    );
    println!(
        "{:<22} {:>10} {:>10} {:>9} {:>12}",
        "strategy", "mean", "std_dev", "std_err", "95% CI"
    );
    for report in &reports {
        let s = &report.summary;
        println!(
            "{:<22} {:>10.2} {:>10.2} {:>9.3} [{:.2}, {:.2}]",
            report.strategy.label(),
            s.mean,
            s.std_dev,
            s.std_err,
            s.ci_low,
            s.ci_high,
        );
    }

    fs::create_dir_all(OUT_DIR)?;
    let mut writer = CsvReportWriter::new(Path::new(OUT_DIR))?;
    for report in &reports {
        writer.write_report(report)?;
    }
    writer.finish()?;
    println!("\nwrote per-trial series and summaries to {OUT_DIR}/");

    Ok(())
}
