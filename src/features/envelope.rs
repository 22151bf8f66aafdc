//! Amplitude envelope extraction
//!
//! Turns a raw waveform into a smooth amplitude-over-time curve:
//! 1. Full-wave rectify every sample (absolute value)
//! 2. Smooth with a centered moving average of `w` samples
//!
//! The smoothing is a same-length centered convolution with implicit zero
//! padding: positions outside the signal contribute zero, and for even `w`
//! the window is biased one sample to the left (it covers
//! `[i - w/2, i + w/2 - 1]`). Downstream stages rely on this exact
//! boundary convention, so it is locked in by conformance tests rather
//! than treated as an implementation detail.
//!
//! # Example
//!
//! ```
//! use cadence_dsp::features::envelope::extract_envelope;
//! use cadence_dsp::signal::AudioSignal;
//!
//! let signal = AudioSignal::new(vec![0.0, 1.0, 0.0, -1.0], 200)?;
//! let envelope = extract_envelope(&signal, 0.02)?;
//! assert_eq!(envelope.len(), 4);
//! # Ok::<(), cadence_dsp::AnalysisError>(())
//! ```

use crate::error::AnalysisError;
use crate::signal::AudioSignal;

/// Extract the amplitude envelope of a signal
///
/// Rectifies the waveform and applies a centered moving-average filter of
/// `max(1, floor(window_seconds * sample_rate))` samples, producing an
/// output the same length as the input. Boundary windows are zero-extended,
/// never shrunk or edge-replicated.
///
/// # Arguments
///
/// * `signal` - Input audio signal
/// * `window_seconds` - Moving-average window length in seconds
///
/// # Returns
///
/// Envelope values, same length as the input, all >= 0
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `window_seconds` is negative.
/// A window that rounds down to zero samples is clamped to one, so any
/// non-negative window is usable.
pub fn extract_envelope(
    signal: &AudioSignal,
    window_seconds: f32,
) -> Result<Vec<f32>, AnalysisError> {
    if window_seconds < 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Negative envelope window: {}",
            window_seconds
        )));
    }

    let window =
        ((window_seconds * signal.sample_rate() as f32).floor() as usize).max(1);

    log::debug!(
        "Extracting envelope: {} samples at {} Hz, window={} samples",
        signal.len(),
        signal.sample_rate(),
        window
    );

    Ok(smooth_rectified(signal.samples(), window))
}

/// Rectify and smooth samples with a centered `window`-sample average
///
/// Output index `i` averages the rectified samples in
/// `[i - window/2, i + (window - 1) - window/2]`; indices outside the
/// signal contribute zero. The per-window sums run left to right so the
/// result is reproducible bit for bit.
fn smooth_rectified(samples: &[f32], window: usize) -> Vec<f32> {
    let n = samples.len();
    let reach_left = (window / 2) as isize;
    let mut envelope = Vec::with_capacity(n);

    for i in 0..n {
        let start = i as isize - reach_left;
        let end = start + window as isize; // exclusive

        let mut sum = 0.0f32;
        for j in start.max(0)..end.min(n as isize) {
            sum += samples[j as usize].abs();
        }

        envelope.push(sum / window as f32);
    }

    envelope
}
