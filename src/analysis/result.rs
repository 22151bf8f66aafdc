//! Analysis result and metadata structures

use crate::features::{OnsetPeak, TempoEstimate};
use serde::{Deserialize, Serialize};

/// Full result of one analysis run
///
/// Carries every intermediate the pipeline produced, not just the final
/// tempo: external collaborators plot the envelope and ODF, and convert
/// onset indices to timestamps for playback cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Smoothed amplitude envelope, same length as the input signal
    pub envelope: Vec<f32>,

    /// Normalized onset detection function, same length as the envelope
    pub odf: Vec<f32>,

    /// Detected onsets, strictly increasing sample indices
    pub onsets: Vec<OnsetPeak>,

    /// Tempo estimate from the dominant ODF periodicity
    pub tempo: TempoEstimate,

    /// Run metadata
    pub metadata: AnalysisMetadata,
}

impl AnalysisResult {
    /// Onset positions in seconds
    pub fn onset_times_seconds(&self) -> Vec<f32> {
        self.onsets
            .iter()
            .map(|peak| peak.time_seconds(self.metadata.sample_rate))
            .collect()
    }
}

/// Metadata about an analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Input duration in seconds
    pub duration_seconds: f32,

    /// Input sample rate in Hz
    pub sample_rate: u32,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,
}
