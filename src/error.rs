//! Error types for the onset/tempo analysis pipeline

use std::fmt;

/// Errors that can occur during analysis
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters (empty signal, zero sample rate, negative
    /// thresholds or durations)
    InvalidInput(String),

    /// Audio decoding error (WAV boundary adapter)
    DecodingError(String),

    /// The onset detection function cannot be normalized: the maximum
    /// envelope difference is not positive (silence or a non-increasing
    /// envelope)
    DegenerateSignal(String),

    /// The tempo estimator's lag window is empty or inverted for the given
    /// sample rate and delay bounds
    InvalidLagRange(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            AnalysisError::DegenerateSignal(msg) => write!(f, "Degenerate signal: {}", msg),
            AnalysisError::InvalidLagRange(msg) => write!(f, "Invalid lag range: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
