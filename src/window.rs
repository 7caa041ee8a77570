use crate::error::{Error, Result};

/// Get the window of `values` centered at `index`, spanning `index - size` to `index + size` inclusive.
///
/// The returned slice always has length `2 * size + 1`.
///
/// # Errors
/// Returns [`Error::OutOfRange`] if the window does not fit inside `values`.
/// No clamping is performed.
pub fn window(values: &[f64], index: usize, size: usize) -> Result<&[f64]> {
    let len = values.len();
    let out_of_range = Error::OutOfRange { index, size, len };

    let start = index.checked_sub(size).ok_or(out_of_range.clone())?;
    let end = index.checked_add(size).ok_or(out_of_range.clone())?;
    if end >= len {
        return Err(out_of_range);
    }

    Ok(&values[start..=end])
}

/// Check that a sequence of length `n` holds at least one window of half-width `size`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `n <= 2 * size`.
pub(crate) fn check_width(n: usize, size: usize) -> Result<()> {
    if size >= n.div_ceil(2) {
        return Err(Error::InvalidArgument(format!(
            "sequence length must exceed twice the half-width {size}, but is {n}"
        )));
    }
    Ok(())
}
