use crate::error::Result;
use crate::signal::Signal;
use crate::window::{check_width, window};

/// Half-width of the moving-average window used by default.
pub const DEFAULT_FILTER_HALF_WIDTH: usize = 29;

/// Smooth `values` with a centered moving average of half-width `size`.
///
/// Each value at index `i` in `[size, n - size)` is replaced by the mean of the
/// input values in its window. The boundary regions, where the window does not
/// fit, are dropped, so the result has length `n - 2 * size`.
///
/// # Errors
/// Returns [`crate::Error::InvalidArgument`] if `values` has `2 * size` elements or fewer.
pub fn smooth(values: &[f64], size: usize) -> Result<Vec<f64>> {
    let n = values.len();
    check_width(n, size)?;

    let width = (2 * size + 1) as f64;
    let mut smoothed = Vec::with_capacity(n - 2 * size);
    for i in size..n - size {
        let sum: f64 = window(values, i, size)?.iter().sum();
        smoothed.push(sum / width);
    }

    Ok(smoothed)
}

/// Smooth the values of `signal` and pair them with the matching trimmed times.
pub fn smooth_signal(signal: &Signal, size: usize) -> Result<Signal> {
    let values = smooth(signal.values(), size)?;
    let n = signal.len();
    let times = signal.times()[size..n - size].to_vec();
    Signal::new(times, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn moving_average() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(smooth(&values, 1).unwrap(), vec![2.0, 3.0, 4.0]);
        assert_eq!(smooth(&values, 2).unwrap(), vec![3.0]);
        assert_eq!(smooth(&values, 0).unwrap(), values.to_vec());
    }

    #[test]
    fn averages_input_not_output() {
        // A running filter would feed 2.0 back into the next window.
        let values = [0.0, 6.0, 0.0, 0.0];
        assert_eq!(smooth(&values, 1).unwrap(), vec![2.0, 2.0]);
    }

    #[test]
    fn output_length() {
        let values: Vec<f64> = (0..100).map(|i| (i as f64).sin()).collect();
        for size in 0..50 {
            assert_eq!(smooth(&values, size).unwrap().len(), values.len() - 2 * size);
        }
    }

    #[test]
    fn too_wide() {
        assert!(matches!(
            smooth(&[1.0, 2.0, 3.0, 4.0], 2),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(smooth(&[], 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn huge_half_width() {
        assert!(matches!(
            smooth(&[0.0, 1.0], usize::MAX / 2 + 1),
            Err(Error::InvalidArgument(_))
        ));
        let signal = Signal::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
        assert!(matches!(
            smooth_signal(&signal, usize::MAX),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn trimmed_times() {
        let signal = Signal::new(
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5],
            vec![3.0, 0.0, 3.0, 0.0, 3.0, 0.0],
        )
        .unwrap();
        let smoothed = smooth_signal(&signal, 1).unwrap();
        assert_eq!(smoothed.times(), &[0.1, 0.2, 0.3, 0.4]);
        assert_eq!(smoothed.values(), &[2.0, 1.0, 2.0, 1.0]);
    }
}
