use crate::error::Result;
use crate::period::mean_period;
use serde::{Deserialize, Serialize};

/// Running mean and variance of a stream of values.
pub struct Accumulator {
    n_vals: usize,
    mean: f64,
    diff_2_sum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccumulatorReport {
    pub n_vals: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            n_vals: 0,
            mean: 0.0,
            diff_2_sum: 0.0,
        }
    }

    pub fn add(&mut self, val: f64) {
        self.n_vals += 1;

        let diff_a = val - self.mean;
        self.mean += diff_a / self.n_vals as f64;

        let diff_b = val - self.mean;
        self.diff_2_sum += diff_a * diff_b;
    }

    pub fn report(&self) -> AccumulatorReport {
        AccumulatorReport {
            n_vals: self.n_vals,
            mean: if self.n_vals > 0 { self.mean } else { f64::NAN },
            std_dev: if self.n_vals > 1 {
                (self.diff_2_sum / (self.n_vals as f64 - 1.0)).sqrt()
            } else {
                f64::NAN
            },
        }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of a list of periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub n_periods: usize,
    pub mean: f64,
    /// Sample standard deviation, `NaN` with fewer than two periods.
    pub std_dev: f64,
    /// Inverse of the mean period.
    pub frequency: f64,
}

impl PeriodReport {
    /// Reduce a list of periods to its summary.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidState`] if `periods` is empty.
    pub fn new(periods: &[f64]) -> Result<Self> {
        let mean = mean_period(periods)?;

        let mut acc = Accumulator::new();
        periods.iter().for_each(|&period| acc.add(period));
        let report = acc.report();

        Ok(Self {
            n_periods: report.n_vals,
            mean,
            std_dev: report.std_dev,
            frequency: 1.0 / mean,
        })
    }
}
