use crate::error::{Error, Result};

/// Check whether the midpoint of `window` is a peak.
///
/// The midpoint is a peak if no element of the window is strictly greater than it,
/// so ties and plateaus count as peaks.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the window is empty or has even length.
pub fn is_peak(window: &[f64]) -> Result<bool> {
    let len = window.len();
    if len == 0 {
        return Err(Error::InvalidArgument("window must not be empty".into()));
    }
    if len % 2 == 0 {
        return Err(Error::InvalidArgument(format!(
            "window length must be odd, but is {len}"
        )));
    }

    let mp = window[len / 2];
    Ok(!window.iter().any(|&val| val > mp))
}
