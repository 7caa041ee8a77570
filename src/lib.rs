//! Period estimation of sampled signals by peak detection, with a moving-average noise filter.
//!
//! The core consists of four pure functions: [`window()`], [`is_peak`],
//! [`estimate_periods`] and [`smooth`]. The remaining modules build the
//! noisy sine-wave source, the period summaries and the run-directory
//! handling used by the `sinepeak` binary around them.

pub mod analysis;
pub mod config;
pub mod error;
pub mod filter;
pub mod manager;
pub mod peak;
pub mod period;
pub mod signal;
pub mod stats;
pub mod window;

pub use analysis::{Analysis, analyze};
pub use error::{Error, Result};
pub use filter::{DEFAULT_FILTER_HALF_WIDTH, smooth, smooth_signal};
pub use peak::is_peak;
pub use period::{DEFAULT_PEAK_HALF_WIDTH, estimate_periods, mean_period};
pub use signal::{Signal, SineWave};
pub use stats::PeriodReport;
pub use window::window;
