//! # Cadence DSP
//!
//! Offline onset and tempo estimation for single-channel audio, providing
//! amplitude-envelope extraction, onset detection, and autocorrelation
//! BPM estimation.
//!
//! ## Features
//!
//! - **Envelope extraction**: full-wave rectification + centered moving
//!   average with an exact same-length boundary convention
//! - **Onset detection**: normalized envelope differencing with spaced
//!   peak picking
//! - **Tempo estimation**: FFT-accelerated autocorrelation over a bounded
//!   lag window
//!
//! ## Quick Start
//!
//! ```no_run
//! use cadence_dsp::{analyze_audio, AnalysisConfig};
//!
//! // Mono samples from any decoder (or io::wav::read_wav)
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 44100;
//!
//! let result = analyze_audio(&samples, sample_rate, &AnalysisConfig::default())?;
//!
//! println!("BPM: {:.2}", result.tempo.bpm);
//! println!("Onsets: {:?}", result.onset_times_seconds());
//! # Ok::<(), cadence_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! A strict forward pipeline with one branch at the end:
//!
//! ```text
//! signal -> envelope -> ODF -> { onset peaks, tempo }
//! ```
//!
//! Every stage is a pure function over its predecessor's output and is
//! independently callable from the [`features`] modules; `analyze_audio`
//! only composes them. Nothing feeds back, nothing blocks, nothing does
//! I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod signal;

// Re-export main types
pub use analysis::result::{AnalysisMetadata, AnalysisResult};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::{OnsetPeak, TempoEstimate};
pub use signal::AudioSignal;

use rayon::prelude::*;

/// Analyze raw samples
///
/// Convenience wrapper that builds the [`AudioSignal`] ingestion contract
/// and runs [`analyze_signal`].
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Analysis configuration parameters
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an empty sample slice or zero
/// sample rate, plus any error of [`analyze_signal`].
pub fn analyze_audio(
    samples: &[f32],
    sample_rate: u32,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let signal = AudioSignal::new(samples.to_vec(), sample_rate)?;
    analyze_signal(&signal, config)
}

/// Run the full analysis pipeline on a signal
///
/// Extracts the amplitude envelope, computes the onset detection function,
/// then branches into peak picking and tempo estimation. No partial
/// results: any failing stage fails the run.
///
/// # Errors
///
/// - `AnalysisError::InvalidInput` for invalid configuration parameters
/// - `AnalysisError::DegenerateSignal` if the envelope never rises
///   (silence or a non-increasing envelope)
/// - `AnalysisError::InvalidLagRange` if the tempo lag window is empty for
///   the signal's sample rate
///
/// # Example
///
/// ```no_run
/// use cadence_dsp::{analyze_signal, AnalysisConfig, AudioSignal};
///
/// let signal = AudioSignal::new(vec![0.0; 44100], 44100)?;
/// let result = analyze_signal(&signal, &AnalysisConfig::default())?;
/// # Ok::<(), cadence_dsp::AnalysisError>(())
/// ```
pub fn analyze_signal(
    signal: &AudioSignal,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting analysis: {} samples at {} Hz",
        signal.len(),
        signal.sample_rate()
    );

    let envelope = features::envelope::extract_envelope(signal, config.envelope_window_seconds)?;

    let odf = features::odf::compute_odf(&envelope)?;

    let onsets = features::peaks::pick_peaks(
        &odf,
        config.peak_threshold,
        config.min_peak_spacing_samples(signal.sample_rate()),
    )?;

    let tempo = features::tempo::estimate_tempo(
        &odf,
        signal.sample_rate(),
        config.min_tempo_delay_seconds,
        config.max_tempo_delay_seconds,
    )?;

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Analysis done in {:.2} ms: {} onsets, {:.2} BPM",
        processing_time_ms,
        onsets.len(),
        tempo.bpm
    );

    Ok(AnalysisResult {
        envelope,
        odf,
        onsets,
        tempo,
        metadata: AnalysisMetadata {
            duration_seconds: signal.duration_seconds(),
            sample_rate: signal.sample_rate(),
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}

/// Analyze many signals in parallel
///
/// Fans independent analyses out across the rayon thread pool, one result
/// per input in input order. Each analysis is still single-threaded; the
/// parallelism is purely across signals, which share no state.
pub fn analyze_batch(
    signals: &[AudioSignal],
    config: &AnalysisConfig,
) -> Vec<Result<AnalysisResult, AnalysisError>> {
    log::debug!("Batch analysis of {} signals", signals.len());

    signals
        .par_iter()
        .map(|signal| analyze_signal(signal, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_samples_rejected() {
        let result = analyze_audio(&[], 44100, &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let result = analyze_audio(&[0.5], 0, &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_silence_is_degenerate() {
        let samples = vec![0.0f32; 44100];
        let result = analyze_audio(&samples, 44100, &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::DegenerateSignal(_))));
    }
}
