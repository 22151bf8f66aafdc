//! Autocorrelation-based tempo estimation
//!
//! Finds the dominant periodicity of the onset detection function and
//! converts it to beats per minute.
//!
//! # Algorithm
//!
//! 1. Autocorrelate the ODF over non-negative lags,
//!    `R[k] = Σ_i odf[i] · odf[i-k]`, using FFT acceleration:
//!    `ACF = IFFT(|FFT(x)|²)` with zero padding to the next power of two
//!    >= 2N, real part taken. Equivalent to the direct sum up to float
//!    rounding, in O(N log N) instead of O(N · lag range).
//! 2. Restrict candidate lags to `[min_delay, max_delay)` samples, derived
//!    from the configured delay bounds. The defaults (0.3 s and 1.0 s)
//!    bound the detectable tempo to 60-200 BPM.
//! 3. `k* = argmax R[k]` over that range, exact ties to the smallest lag.
//! 4. `BPM = 60 * sample_rate / k*`.
//!
//! # Example
//!
//! ```no_run
//! use cadence_dsp::features::tempo::estimate_tempo;
//!
//! let odf: Vec<f32> = vec![]; // normalized onset detection function
//! let estimate = estimate_tempo(&odf, 44100, 0.3, 1.0)?;
//! println!("{:.1} BPM", estimate.bpm);
//! # Ok::<(), cadence_dsp::AnalysisError>(())
//! ```

use super::TempoEstimate;
use crate::error::AnalysisError;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Estimate tempo from an onset detection function
///
/// # Arguments
///
/// * `odf` - Onset detection function values
/// * `sample_rate` - Sample rate in Hz
/// * `min_delay_seconds` - Shortest beat period to consider
/// * `max_delay_seconds` - Longest beat period to consider
///
/// # Returns
///
/// The tempo estimate for the winning lag; `bpm` is always > 0
///
/// # Errors
///
/// - `AnalysisError::InvalidInput` for an empty ODF, zero sample rate, or
///   negative delay bounds
/// - `AnalysisError::InvalidLagRange` when
///   `floor(sample_rate * min_delay) >= floor(sample_rate * max_delay)`,
///   or when the lag window lies entirely beyond the ODF length. A
///   `max_delay` reaching past the signal is clamped to the ODF length,
///   matching slice semantics of the lag window; only a fully empty window
///   errors.
pub fn estimate_tempo(
    odf: &[f32],
    sample_rate: u32,
    min_delay_seconds: f32,
    max_delay_seconds: f32,
) -> Result<TempoEstimate, AnalysisError> {
    if odf.is_empty() {
        return Err(AnalysisError::InvalidInput("Empty ODF".to_string()));
    }

    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Invalid sample rate: 0".to_string(),
        ));
    }

    if min_delay_seconds < 0.0 || max_delay_seconds < 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Negative delay bounds: [{}, {}]",
            min_delay_seconds, max_delay_seconds
        )));
    }

    // Lag 0 is the trivial self-correlation and can never be a beat
    // period, so the window starts at 1 even for a zero lower bound.
    let min_delay = ((sample_rate as f32 * min_delay_seconds).floor() as usize).max(1);
    let max_delay = (sample_rate as f32 * max_delay_seconds).floor() as usize;

    if min_delay >= max_delay {
        return Err(AnalysisError::InvalidLagRange(format!(
            "Delay window [{}, {}) samples is inverted or empty",
            min_delay, max_delay
        )));
    }

    let max_delay = max_delay.min(odf.len());
    if min_delay >= max_delay {
        return Err(AnalysisError::InvalidLagRange(format!(
            "Minimum delay {} samples is beyond the ODF length {}",
            min_delay,
            odf.len()
        )));
    }

    log::debug!(
        "Estimating tempo: {} ODF samples at {} Hz, lag window [{}, {})",
        odf.len(),
        sample_rate,
        min_delay,
        max_delay
    );

    let acf = compute_autocorrelation(odf);
    let (lag, _value) = argmax_lag(&acf, min_delay, max_delay);

    let period_seconds = lag as f32 / sample_rate as f32;
    let bpm = 60.0 / period_seconds;

    log::debug!("Tempo: lag={} samples ({:.3} s) -> {:.2} BPM", lag, period_seconds, bpm);

    Ok(TempoEstimate {
        bpm,
        period_seconds,
        lag_samples: lag,
    })
}

/// Autocorrelation over non-negative lags via `IFFT(|FFT(x)|²)`
///
/// Zero-pads to the next power of two >= 2N so the circular correlation
/// equals the linear one, then keeps the first N real values.
fn compute_autocorrelation(signal: &[f32]) -> Vec<f32> {
    let n = signal.len();
    let fft_size = (2 * n).next_power_of_two();

    let mut buffer: Vec<Complex<f32>> =
        signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);
    fft.process(&mut buffer);

    for x in &mut buffer {
        *x = *x * x.conj();
    }

    let ifft = planner.plan_fft_inverse(fft_size);
    ifft.process(&mut buffer);

    let scale = 1.0 / fft_size as f32;
    buffer[..n].iter().map(|x| x.re * scale).collect()
}

/// Index and value of the maximum over `acf[lo..hi]`
///
/// The scan runs in increasing lag order with a strict comparison, so an
/// exact tie resolves to the smallest lag. Caller guarantees `lo < hi <=
/// acf.len()`.
fn argmax_lag(acf: &[f32], lo: usize, hi: usize) -> (usize, f32) {
    let mut best_lag = lo;
    let mut best_value = acf[lo];
    for (offset, &value) in acf[lo..hi].iter().enumerate().skip(1) {
        if value > best_value {
            best_lag = lo + offset;
            best_value = value;
        }
    }
    (best_lag, best_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Impulse train with the given period, `count` impulses
    fn impulse_train(period: usize, count: usize) -> Vec<f32> {
        let mut signal = vec![0.0f32; period * count];
        for i in 0..count {
            signal[i * period] = 1.0;
        }
        signal
    }

    #[test]
    fn test_impulse_train_120_bpm() {
        // Period 500 samples at 1 kHz = 0.5 s per beat = 120 BPM
        let odf = impulse_train(500, 10);
        let estimate = estimate_tempo(&odf, 1000, 0.3, 1.0).unwrap();

        assert_eq!(estimate.lag_samples, 500);
        assert_relative_eq!(estimate.bpm, 120.0, epsilon = 1e-3);
        assert_relative_eq!(estimate.period_seconds, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_impulse_train_90_bpm() {
        // Period 667 samples at 1 kHz ~= 89.96 BPM
        let odf = impulse_train(667, 8);
        let estimate = estimate_tempo(&odf, 1000, 0.3, 1.0).unwrap();

        assert_eq!(estimate.lag_samples, 667);
        assert!((estimate.bpm - 90.0).abs() < 0.1);
    }

    #[test]
    fn test_bpm_always_positive() {
        let odf = impulse_train(400, 6);
        let estimate = estimate_tempo(&odf, 1000, 0.3, 1.0).unwrap();
        assert!(estimate.bpm > 0.0);
    }

    #[test]
    fn test_inverted_window_rejected() {
        let odf = impulse_train(500, 10);
        let result = estimate_tempo(&odf, 1000, 1.0, 0.3);
        assert!(matches!(result, Err(AnalysisError::InvalidLagRange(_))));
    }

    #[test]
    fn test_window_beyond_signal_rejected() {
        // 100 ODF samples at 44.1 kHz: min delay 13230 samples is far past
        // the end of the ACF
        let odf = vec![0.5f32; 100];
        let result = estimate_tempo(&odf, 44100, 0.3, 1.0);
        assert!(matches!(result, Err(AnalysisError::InvalidLagRange(_))));
    }

    #[test]
    fn test_window_partially_clamped() {
        // max_delay (1000) reaches past the 800-sample ODF; the window
        // clamps to [300, 800) and the 400-lag periodicity still wins
        let odf = impulse_train(400, 2);
        let estimate = estimate_tempo(&odf, 1000, 0.3, 1.0).unwrap();
        assert_eq!(estimate.lag_samples, 400);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let odf = impulse_train(500, 4);

        assert!(matches!(
            estimate_tempo(&[], 1000, 0.3, 1.0),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            estimate_tempo(&odf, 0, 0.3, 1.0),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            estimate_tempo(&odf, 1000, -0.3, 1.0),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_lower_bound_excludes_lag_zero() {
        // A lower bound that floors to lag 0 must not let the trivial
        // self-correlation win (it would mean infinite BPM)
        let odf = impulse_train(5, 8);
        let estimate = estimate_tempo(&odf, 10, 0.0, 1.0).unwrap();
        assert!(estimate.lag_samples >= 1);
        assert!(estimate.bpm.is_finite());
    }

    #[test]
    fn test_argmax_exact_tie_takes_smallest_lag() {
        let acf = vec![9.0, 0.0, 3.0, 7.0, 2.0, 7.0, 1.0];
        let (lag, value) = argmax_lag(&acf, 2, 7);
        assert_eq!(lag, 3);
        assert_eq!(value, 7.0);
    }

    #[test]
    fn test_argmax_single_lag_window() {
        let acf = vec![5.0, 4.0, 3.0];
        let (lag, value) = argmax_lag(&acf, 1, 2);
        assert_eq!(lag, 1);
        assert_eq!(value, 4.0);
    }

    #[test]
    fn test_autocorrelation_matches_direct_sum() {
        let signal: Vec<f32> = (0..64).map(|i| ((i as f32) * 0.7).sin()).collect();
        let acf = compute_autocorrelation(&signal);
        assert_eq!(acf.len(), signal.len());

        for lag in [0usize, 1, 7, 32, 63] {
            let direct: f32 = (lag..signal.len())
                .map(|i| signal[i] * signal[i - lag])
                .sum();
            assert_relative_eq!(acf[lag], direct, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_deterministic() {
        let odf = impulse_train(441, 12);
        let a = estimate_tempo(&odf, 1000, 0.3, 1.0).unwrap();
        let b = estimate_tempo(&odf, 1000, 0.3, 1.0).unwrap();
        assert_eq!(a, b);
    }
}
