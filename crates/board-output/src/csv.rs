//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `boarding_trials.csv` — one row per (strategy, trial)
//! - `strategy_summaries.csv` — one row per strategy

use std::fs::File;
use std::path::Path;

use csv::Writer;

use board_stats::StrategyReport;

use crate::error::OutputResult;

/// Writes boarding reports to two CSV files.
pub struct CsvReportWriter {
    trials:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvReportWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trials = Writer::from_path(dir.join("boarding_trials.csv"))?;
        trials.write_record(["strategy", "trial", "total_time", "running_mean"])?;

        let mut summaries = Writer::from_path(dir.join("strategy_summaries.csv"))?;
        summaries.write_record([
            "strategy",
            "num_trials",
            "mean",
            "std_dev",
            "std_err",
            "ci_low",
            "ci_high",
        ])?;

        Ok(Self {
            trials,
            summaries,
            finished: false,
        })
    }

    /// Append one strategy's trial series and summary row.
    pub fn write_report(&mut self, report: &StrategyReport) -> OutputResult<()> {
        let label = report.strategy.label();
        for (i, (&total, &mean)) in report.totals.iter().zip(&report.running_mean).enumerate() {
            self.trials.write_record(&[
                label.to_string(),
                i.to_string(),
                total.to_string(),
                mean.to_string(),
            ])?;
        }

        let s = &report.summary;
        self.summaries.write_record(&[
            label.to_string(),
            report.totals.len().to_string(),
            s.mean.to_string(),
            s.std_dev.to_string(),
            s.std_err.to_string(),
            s.ci_low.to_string(),
            s.ci_high.to_string(),
        ])?;
        Ok(())
    }

    /// Flush both files.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trials.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
