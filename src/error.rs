//! Error type shared by the signal-processing core.

use thiserror::Error;

/// Errors raised by the windowing, peak detection, filtering and period estimation routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed parameters, e.g. mismatched lengths or a window wider than the sequence.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A window centered at `index` with half-width `size` does not fit in `len` values.
    #[error("window at index {index} with half-width {size} is out of range for length {len}")]
    OutOfRange {
        index: usize,
        size: usize,
        len: usize,
    },

    /// A reduction was requested over data that does not allow it.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, Error>;
