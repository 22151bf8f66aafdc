//! WAV decoding via hound
//!
//! Decodes integer and float PCM WAV files and downmixes multi-channel
//! audio to mono by per-frame averaging, yielding an `AudioSignal` ready
//! for analysis. Whatever decoded the audio, the pipeline sees the same
//! contract.

use crate::error::AnalysisError;
use crate::signal::AudioSignal;
use std::path::Path;

/// Read a WAV file into a mono `AudioSignal`
///
/// Integer samples are scaled to [-1.0, 1.0] by their bit depth; float
/// samples pass through unscaled. Multi-channel files are downmixed by
/// averaging each frame across channels.
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` if the file cannot be opened or
/// decoded, and `AnalysisError::InvalidInput` if the decoded signal is
/// empty or reports a zero sample rate.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<AudioSignal, AnalysisError> {
    let path = path.as_ref();
    log::debug!("Decoding WAV file: {}", path.display());

    let mut reader = hound::WavReader::open(path)
        .map_err(|e| AnalysisError::DecodingError(format!("{}: {}", path.display(), e)))?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AnalysisError::DecodingError(format!("{}: {}", path.display(), e)))?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_value))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| AnalysisError::DecodingError(format!("{}: {}", path.display(), e)))?
        }
    };

    let mono = downmix(&samples, spec.channels as usize);
    AudioSignal::new(mono, spec.sample_rate)
}

/// Average interleaved frames across channels
fn downmix(samples: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }

    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}
