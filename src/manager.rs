use crate::analysis::analyze;
use crate::config::Config;
use crate::signal::Signal;
use anyhow::{Context, Result};
use glob::glob;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use rmp_serde::{decode, encode};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Handles the signal and results files of a run directory.
pub struct Manager {
    run_dir: PathBuf,
    cfg: Config,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(run_dir: P) -> Result<Self> {
        let run_dir = run_dir.as_ref().to_path_buf();

        let cfg =
            Config::from_file(run_dir.join("config.toml")).context("failed to construct cfg")?;
        log::info!("{cfg:#?}");

        Ok(Self { run_dir, cfg })
    }

    /// Generate a new noisy signal and save it under the next free index.
    pub fn create_signal(&self) -> Result<()> {
        let sig_idx = self
            .signal_files()
            .context("failed to list signal files")?
            .last()
            .map_or(0, |&(last_idx, _)| last_idx + 1);

        let mut rng = match self.cfg.signal.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed.wrapping_add(sig_idx as u64)),
            None => ChaCha12Rng::try_from_os_rng()?,
        };

        let signal = self
            .cfg
            .signal
            .sine_wave()
            .generate(&mut rng)
            .context("failed to generate signal")?;

        let signal_file = self.signal_file(sig_idx);
        write_msgpack(&signal_file, &signal)
            .with_context(|| format!("failed to save {signal_file:?}"))?;
        log::info!("created {signal_file:?} ({} samples)", signal.len());

        Ok(())
    }

    /// Analyze every signal file and save the results next to it.
    pub fn analyze_signals(&self) -> Result<()> {
        let signal_files = self.signal_files().context("failed to list signal files")?;
        for (sig_idx, signal_file) in signal_files {
            let signal: Signal = read_msgpack(&signal_file)
                .with_context(|| format!("failed to load {signal_file:?}"))?;

            let analysis = analyze(
                &signal,
                self.cfg.analysis.peak_half_width,
                self.cfg.analysis.filter_half_width,
            )
            .with_context(|| format!("failed to analyze {signal_file:?}"))?;

            log::info!(
                "signal {sig_idx:04}: raw period {:.6} ({} periods), filtered period {:.6} ({} periods)",
                analysis.raw.mean,
                analysis.raw.n_periods,
                analysis.filtered.mean,
                analysis.filtered.n_periods
            );

            let results_file = self.results_file(sig_idx);
            write_msgpack(&results_file, &analysis)
                .with_context(|| format!("failed to save {results_file:?}"))?;
        }

        Ok(())
    }

    /// Remove all signal and results files.
    pub fn clean_run(&self) -> Result<()> {
        for name in ["signal-*.msgpack", "results-*.msgpack"] {
            for file in self.glob_files(name)? {
                fs::remove_file(&file).with_context(|| format!("failed to remove {file:?}"))?;
                log::info!("removed {file:?}");
            }
        }
        Ok(())
    }

    fn glob_files(&self, name: &str) -> Result<Vec<PathBuf>> {
        let pattern = self.run_dir.join(name);
        let pattern = pattern.to_str().context("pattern is not valid UTF-8")?;
        let files = glob(pattern)
            .context("failed to glob files")?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        Ok(files)
    }

    /// Existing signal files with their indices, sorted by index.
    fn signal_files(&self) -> Result<Vec<(usize, PathBuf)>> {
        let mut signal_files: Vec<_> = self
            .glob_files("signal-*.msgpack")?
            .into_iter()
            .filter_map(|file| Some((parse_signal_idx(&file)?, file)))
            .collect();
        signal_files.sort_unstable_by_key(|&(sig_idx, _)| sig_idx);
        Ok(signal_files)
    }

    fn signal_file(&self, sig_idx: usize) -> PathBuf {
        self.run_dir.join(format!("signal-{sig_idx:04}.msgpack"))
    }

    fn results_file(&self, sig_idx: usize) -> PathBuf {
        self.run_dir.join(format!("results-{sig_idx:04}.msgpack"))
    }
}

fn parse_signal_idx(file: &Path) -> Option<usize> {
    let stem = file.file_stem()?.to_str()?;
    let idx = stem.strip_prefix("signal-")?.parse().ok();
    if idx.is_none() {
        log::warn!("ignoring {file:?}");
    }
    idx
}

fn write_msgpack<T: Serialize>(file: &Path, value: &T) -> Result<()> {
    let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
    let mut writer = BufWriter::new(file);
    encode::write(&mut writer, value).context("failed to serialize value")?;
    writer.flush().context("failed to flush writer stream")?;
    Ok(())
}

fn read_msgpack<T: DeserializeOwned>(file: &Path) -> Result<T> {
    let file = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
    let mut reader = BufReader::new(file);
    let value = decode::from_read(&mut reader).context("failed to deserialize value")?;
    Ok(value)
}
