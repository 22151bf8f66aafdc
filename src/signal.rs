//! Audio signal ingestion contract
//!
//! `AudioSignal` is the single way into the analysis pipeline. Decoders
//! (the built-in WAV adapter or any external one) produce it; the DSP
//! stages consume it. Invariants are checked once at construction so the
//! stages never re-validate the signal itself.

use crate::error::AnalysisError;

/// A buffered single-channel audio signal
///
/// Invariants, enforced by [`AudioSignal::new`]:
/// - at least one sample
/// - sample rate > 0
///
/// The signal is immutable once constructed; there are no mutating
/// accessors.
#[derive(Debug, Clone)]
pub struct AudioSignal {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioSignal {
    /// Create a signal from owned samples and a sample rate
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `samples` is empty or
    /// `sample_rate` is zero.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, AnalysisError> {
        if samples.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "Empty audio samples".to_string(),
            ));
        }

        if sample_rate == 0 {
            return Err(AnalysisError::InvalidInput(
                "Invalid sample rate: 0".to_string(),
            ));
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Sample data
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples (always >= 1)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept so `len` satisfies the usual pairing lint
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Signal duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}
