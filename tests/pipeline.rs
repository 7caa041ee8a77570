use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use sinepeak::{
    DEFAULT_FILTER_HALF_WIDTH, DEFAULT_PEAK_HALF_WIDTH, Error, SineWave, analyze,
    estimate_periods, mean_period, smooth_signal,
};

fn sine_wave(noise_amplitude: f64) -> SineWave {
    SineWave {
        frequency: 5.0,
        amplitude: 1.0,
        sampling_rate: 1000.0,
        duration: 2.0,
        noise_amplitude,
    }
}

#[test]
fn clean_sine_periods() {
    let signal = sine_wave(0.0)
        .generate(&mut ChaCha12Rng::seed_from_u64(0))
        .expect("failed to generate signal");

    let periods = signal
        .periods(DEFAULT_PEAK_HALF_WIDTH)
        .expect("failed to estimate periods");

    assert_eq!(periods.len(), 9);
    for period in &periods {
        assert!((period - 0.2).abs() < 1e-9, "unexpected period {period}");
    }
    assert!((mean_period(&periods).unwrap() - 0.2).abs() < 1e-9);
}

#[test]
fn filtering_recovers_period() {
    let signal = sine_wave(0.05)
        .generate(&mut ChaCha12Rng::seed_from_u64(42))
        .expect("failed to generate signal");

    let analysis = analyze(&signal, DEFAULT_PEAK_HALF_WIDTH, DEFAULT_FILTER_HALF_WIDTH)
        .expect("failed to analyze signal");

    assert_eq!(
        analysis.filtered_signal.len(),
        signal.len() - 2 * DEFAULT_FILTER_HALF_WIDTH
    );
    assert_eq!(analysis.filtered.n_periods, 9);
    assert!((analysis.filtered.mean - 0.2).abs() < 0.01);
    assert!((analysis.filtered.frequency - 5.0).abs() < 0.25);
}

#[test]
fn filtering_removes_spurious_peaks() {
    let signal = sine_wave(0.3)
        .generate(&mut ChaCha12Rng::seed_from_u64(1))
        .expect("failed to generate signal");

    let raw = signal.periods(DEFAULT_PEAK_HALF_WIDTH).unwrap();
    let filtered = smooth_signal(&signal, DEFAULT_FILTER_HALF_WIDTH)
        .and_then(|filtered| filtered.periods(DEFAULT_PEAK_HALF_WIDTH))
        .unwrap();

    assert!(raw.len() > filtered.len());
    assert!(mean_period(&raw).unwrap() < mean_period(&filtered).unwrap());
}

#[test]
fn monotonic_signal_has_no_mean_period() {
    let times: Vec<f64> = (0..100).map(|i| i as f64 * 0.001).collect();
    let values: Vec<f64> = times.iter().map(|t| t * t).collect();

    let periods = estimate_periods(&times, &values, DEFAULT_PEAK_HALF_WIDTH).unwrap();
    assert!(periods.is_empty());
    assert!(matches!(mean_period(&periods), Err(Error::InvalidState(_))));
}
