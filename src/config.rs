//! Configuration parameters for onset and tempo analysis

/// Analysis configuration parameters
///
/// Every tunable constant of the pipeline lives here; the stage functions
/// take the derived per-stage values, so callers can also bypass this
/// struct entirely and drive the stages directly.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Envelope extraction
    /// Moving-average window length in seconds (default: 0.02)
    ///
    /// The effective window is `max(1, floor(window * sample_rate))`
    /// samples, so any non-negative value yields a usable window.
    pub envelope_window_seconds: f32,

    // Peak picking
    /// Minimum normalized ODF value for a peak candidate (default: 0.05)
    pub peak_threshold: f32,

    /// Minimum spacing between onset peaks in seconds (default: 0.1)
    pub min_peak_spacing_seconds: f32,

    // Tempo estimation
    /// Shortest beat period to consider, in seconds (default: 0.3 = 200 BPM)
    pub min_tempo_delay_seconds: f32,

    /// Longest beat period to consider, in seconds (default: 1.0 = 60 BPM)
    pub max_tempo_delay_seconds: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            envelope_window_seconds: 0.02,
            peak_threshold: 0.05,
            min_peak_spacing_seconds: 0.1,
            min_tempo_delay_seconds: 0.3,
            max_tempo_delay_seconds: 1.0,
        }
    }
}

impl AnalysisConfig {
    /// Envelope window length in samples for the given sample rate
    pub fn envelope_window_samples(&self, sample_rate: u32) -> usize {
        ((self.envelope_window_seconds * sample_rate as f32).floor() as usize).max(1)
    }

    /// Minimum peak spacing in samples for the given sample rate
    pub fn min_peak_spacing_samples(&self, sample_rate: u32) -> usize {
        (self.min_peak_spacing_seconds * sample_rate as f32).floor() as usize
    }
}
