//! Sampled signals and the synthetic sine-wave source.

use crate::error::{Error, Result};
use crate::period::estimate_periods;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Sequence of samples with strictly increasing times.
///
/// `times` and `values` always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSignal")]
pub struct Signal {
    times: Vec<f64>,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawSignal {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl TryFrom<RawSignal> for Signal {
    type Error = Error;

    fn try_from(raw: RawSignal) -> Result<Self> {
        Signal::new(raw.times, raw.values)
    }
}

impl Signal {
    /// Create a new `Signal` from paired times and values.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the lengths differ
    /// or the times are not finite and strictly increasing.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(Error::InvalidArgument(format!(
                "times and values must have the same length, but have {} and {}",
                times.len(),
                values.len()
            )));
        }
        if let Some(t) = times.iter().find(|t| !t.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "times must be finite, but contain {t}"
            )));
        }
        if let Some(i) = times.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(Error::InvalidArgument(format!(
                "times must be strictly increasing, but time {} is followed by {}",
                times[i],
                times[i + 1]
            )));
        }
        Ok(Self { times, values })
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Estimate the periods of the signal with a peak window of half-width `size`.
    pub fn periods(&self, size: usize) -> Result<Vec<f64>> {
        estimate_periods(&self.times, &self.values, size)
    }
}

/// Sine wave with additive Gaussian noise.
#[derive(Debug, Clone, PartialEq)]
pub struct SineWave {
    /// Frequency in hertz.
    pub frequency: f64,
    pub amplitude: f64,
    /// Number of samples per second.
    pub sampling_rate: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Standard deviation of the noise.
    pub noise_amplitude: f64,
}

impl SineWave {
    /// Number of samples the wave is generated with.
    pub fn n_samples(&self) -> usize {
        (self.sampling_rate * self.duration) as usize
    }

    /// Sample the wave over `[0, duration)` and add noise drawn from `rng`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the wave would have no samples.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Signal> {
        let n_samples = self.n_samples();
        if n_samples == 0 {
            return Err(Error::InvalidArgument(format!(
                "sampling rate {} over duration {} yields no samples",
                self.sampling_rate, self.duration
            )));
        }

        let times: Vec<f64> = (0..n_samples)
            .map(|i| i as f64 * self.duration / n_samples as f64)
            .collect();

        let mut values: Vec<f64> = times
            .iter()
            .map(|&t| self.amplitude * (2.0 * PI * self.frequency * t).sin())
            .collect();

        if self.noise_amplitude > 0.0 {
            for val in &mut values {
                let noise: f64 = rng.sample(StandardNormal);
                *val += self.noise_amplitude * noise;
            }
        }

        Signal::new(times, values)
    }
}
