//! Summary statistics over a sequence of trial totals.

use board_core::BoardError;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{StatsError, StatsResult};

/// Final scalar summary for one strategy's Monte Carlo run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Sample mean of the trial totals.
    pub mean: f64,
    /// Sample standard deviation (N−1 denominator).
    pub std_dev: f64,
    /// Standard error of the mean: `std_dev / √N`.
    pub std_err: f64,
    /// Lower bound of the two-sided Student-t confidence interval.
    pub ci_low: f64,
    /// Upper bound of the two-sided Student-t confidence interval.
    pub ci_high: f64,
}

/// Compute the summary for `samples` at the given two-sided confidence level.
///
/// Uses the Student-t critical value with `N−1` degrees of freedom, matching
/// the small-sample interval `mean ± t·std_err`.  Fails with
/// [`StatsError::InsufficientSample`] for fewer than two samples (the sample
/// standard deviation is undefined) rather than producing NaN.
pub fn summarize(samples: &[f64], confidence_level: f64) -> StatsResult<Summary> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(BoardError::Config(format!(
            "confidence_level must be in (0, 1), got {confidence_level}"
        ))
        .into());
    }
    let n = samples.len();
    if n < 2 {
        return Err(StatsError::InsufficientSample { got: n });
    }

    let nf = n as f64;
    let mean = samples.iter().sum::<f64>() / nf;
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (nf - 1.0);
    let std_dev = var.sqrt();
    let std_err = std_dev / nf.sqrt();

    let critical = t_critical(confidence_level, nf - 1.0)?;
    let margin = critical * std_err;

    Ok(Summary {
        mean,
        std_dev,
        std_err,
        ci_low: mean - margin,
        ci_high: mean + margin,
    })
}

/// Two-tailed Student-t critical value for the given confidence level and
/// degrees of freedom.
fn t_critical(confidence_level: f64, df: f64) -> StatsResult<f64> {
    let alpha = 1.0 - confidence_level;
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| StatsError::Degenerate(e.to_string()))?;
    Ok(dist.inverse_cdf(1.0 - alpha / 2.0))
}

/// Mean of `samples[..=i]` for every `i` — the convergence curve plotted
/// against trial count.  Same length as the input; the final element equals
/// the overall sample mean.
pub fn running_mean(samples: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(samples.len());
    let mut sum = 0.0;
    for (i, &x) in samples.iter().enumerate() {
        sum += x;
        out.push(sum / (i + 1) as f64);
    }
    out
}
