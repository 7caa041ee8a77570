use crate::error::{Error, Result};
use crate::peak::is_peak;
use crate::window::{check_width, window};

/// Half-width of the peak detection window used by default.
pub const DEFAULT_PEAK_HALF_WIDTH: usize = 11;

/// Estimate the periods of `values` using `times` as the time axis.
///
/// Scans every index in `[size, n - size)`, tests the window of half-width `size`
/// centered there with [`is_peak`], and returns the time deltas between
/// consecutive peaks. The result has one element less than the number of peaks
/// found and is empty if fewer than two peaks were found.
///
/// Since ties count as peaks, equal neighbouring values inside one window can
/// both be reported, yielding short deltas.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `times` and `values` differ in length
/// or if the sequence is too short to hold a single window.
pub fn estimate_periods(times: &[f64], values: &[f64], size: usize) -> Result<Vec<f64>> {
    let n = values.len();
    if times.len() != n {
        return Err(Error::InvalidArgument(format!(
            "times and values must have the same length, but have {} and {n}",
            times.len()
        )));
    }
    check_width(n, size)?;

    let mut last_time = None;
    let mut periods = Vec::new();
    let mut n_peaks = 0;

    for i in size..n - size {
        if !is_peak(window(values, i, size)?)? {
            continue;
        }
        n_peaks += 1;
        if let Some(last_time) = last_time {
            periods.push(times[i] - last_time);
        }
        last_time = Some(times[i]);
    }

    log::debug!("detected {n_peaks} peaks over {n} samples");

    Ok(periods)
}

/// Compute the mean of a list of periods.
///
/// # Errors
/// Returns [`Error::InvalidState`] if `periods` is empty.
pub fn mean_period(periods: &[f64]) -> Result<f64> {
    if periods.is_empty() {
        return Err(Error::InvalidState(
            "cannot compute the mean of an empty period list".into(),
        ));
    }
    Ok(periods.iter().sum::<f64>() / periods.len() as f64)
}
