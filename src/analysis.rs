use crate::error::Result;
use crate::filter::smooth_signal;
use crate::signal::Signal;
use crate::stats::PeriodReport;
use serde::{Deserialize, Serialize};

/// Results of estimating the period of a signal before and after smoothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Summary of the periods of the unfiltered signal.
    pub raw: PeriodReport,
    /// Summary of the periods of the smoothed signal.
    pub filtered: PeriodReport,

    pub raw_periods: Vec<f64>,
    pub filtered_periods: Vec<f64>,

    /// Smoothed signal, kept for plotting.
    pub filtered_signal: Signal,
}

/// Estimate the period of `signal` directly and after a moving-average filter.
///
/// # Errors
/// Fails if either signal is too short for its window
/// or if no periods are detected in either of them.
pub fn analyze(
    signal: &Signal,
    peak_half_width: usize,
    filter_half_width: usize,
) -> Result<Analysis> {
    let raw_periods = signal.periods(peak_half_width)?;
    let raw = PeriodReport::new(&raw_periods)?;

    let filtered_signal = smooth_signal(signal, filter_half_width)?;
    let filtered_periods = filtered_signal.periods(peak_half_width)?;
    let filtered = PeriodReport::new(&filtered_periods)?;

    Ok(Analysis {
        raw,
        filtered,
        raw_periods,
        filtered_periods,
        filtered_signal,
    })
}
