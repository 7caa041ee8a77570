use crate::signal::SineWave;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Run configuration parameters.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    pub signal: SignalConfig,
    pub analysis: AnalysisConfig,
}

/// Parameters of the generated noisy sine wave.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Frequency in hertz.
    pub frequency: f64,
    /// Amplitude of the wave.
    pub amplitude: f64,
    /// Number of samples per second.
    pub sampling_rate: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Standard deviation of the Gaussian noise.
    pub noise_amplitude: f64,

    /// Seed of the random number generator (drawn from the OS if absent).
    pub seed: Option<u64>,
}

/// Parameters of the period estimation.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Half-width of the peak detection window.
    pub peak_half_width: usize,
    /// Half-width of the moving-average filter.
    pub filter_half_width: usize,
}

impl SignalConfig {
    pub fn sine_wave(&self) -> SineWave {
        SineWave {
            frequency: self.frequency,
            amplitude: self.amplitude,
            sampling_rate: self.sampling_rate,
            duration: self.duration,
            noise_amplitude: self.noise_amplitude,
        }
    }
}

impl Config {
    /// Load a [`Config`] from a file.
    ///
    /// The file must be TOML-encoded and contain a serialized [`Config`].
    /// Performs validation on all parameters before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let sig = &self.signal;
        check_num(sig.sampling_rate, 1e-6..1e7).context("invalid sampling rate")?;
        check_num(sig.frequency, 1e-9..sig.sampling_rate / 2.0).context("invalid frequency")?;
        check_num(sig.amplitude, 0.0..1e6).context("invalid amplitude")?;
        check_num(sig.duration, 1e-9..1e4).context("invalid duration")?;
        check_num(sig.noise_amplitude, 0.0..1e6).context("invalid noise amplitude")?;

        let ana = &self.analysis;
        check_num(ana.peak_half_width, 1..10_000).context("invalid peak half-width")?;
        check_num(ana.filter_half_width, 0..10_000).context("invalid filter half-width")?;

        // The smoothed signal must still hold at least one peak window.
        let n_samples = sig.sine_wave().n_samples();
        let min_samples = 2 * ana.filter_half_width + 2 * ana.peak_half_width + 1;
        if n_samples < min_samples {
            bail!("number of samples must be at least {min_samples}, but is {n_samples}");
        }

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
[signal]
frequency = 5.0
amplitude = 1.0
sampling_rate = 1000.0
duration = 2.0
noise_amplitude = 0.3

[analysis]
peak_half_width = 11
filter_half_width = 29
"#;

    #[test]
    fn parse_config() {
        let config: Config = toml::from_str(CONFIG).unwrap();
        assert_eq!(config.signal.seed, None);
        assert_eq!(config.analysis.peak_half_width, 11);
        assert_eq!(config.signal.sine_wave().n_samples(), 2000);
        config.validate().unwrap();
    }

    #[test]
    fn reject_aliased_frequency() {
        let mut config: Config = toml::from_str(CONFIG).unwrap();
        config.signal.frequency = 600.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_short_signal() {
        let mut config: Config = toml::from_str(CONFIG).unwrap();
        config.signal.duration = 0.05;
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_zero_peak_half_width() {
        let mut config: Config = toml::from_str(CONFIG).unwrap();
        config.analysis.peak_half_width = 0;
        assert!(config.validate().is_err());
    }
}
