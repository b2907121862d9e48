//! `board-output` — CSV export of Monte Carlo boarding reports.
//!
//! Writes the per-trial series (for external plotting of convergence curves)
//! and the per-strategy summary table.  No plotting lives here; the CSV is
//! the hand-off point to whatever draws the charts.

pub mod csv;
pub mod error;


pub use csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
