//! Peak picking over the onset detection function
//!
//! Two passes, both deterministic:
//! 1. Candidate generation: interior local maxima at or above a threshold.
//!    Comparisons use `>=` on both sides so plateau edges qualify; the
//!    first and last indices never do.
//! 2. Spacing resolution: scan candidates in index order and merge any two
//!    closer than `min_distance` samples, keeping the larger ODF value.
//!    Exact ties keep the earlier index.
//!
//! # Example
//!
//! ```
//! use cadence_dsp::features::peaks::pick_peaks;
//!
//! let odf = vec![0.0, 0.2, 1.0, 0.3, 0.1, 0.8, 0.0];
//! let peaks = pick_peaks(&odf, 0.05, 2)?;
//! assert_eq!(peaks.len(), 2);
//! assert_eq!(peaks[0].index, 2);
//! assert_eq!(peaks[1].index, 5);
//! # Ok::<(), cadence_dsp::AnalysisError>(())
//! ```

use super::OnsetPeak;
use crate::error::AnalysisError;

/// Pick spaced onset peaks from an onset detection function
///
/// # Arguments
///
/// * `odf` - Onset detection function values
/// * `threshold` - Minimum ODF value for a candidate (>= comparison)
/// * `min_distance` - Minimum gap between kept peaks, in samples; 0
///   disables merging entirely
///
/// # Returns
///
/// Peaks with strictly increasing indices and consecutive gaps of at least
/// `min_distance` samples. An empty result is valid (quiet or short input).
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for a negative threshold.
pub fn pick_peaks(
    odf: &[f32],
    threshold: f32,
    min_distance: usize,
) -> Result<Vec<OnsetPeak>, AnalysisError> {
    if threshold < 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Negative peak threshold: {}",
            threshold
        )));
    }

    if odf.len() < 3 {
        // No interior index exists, so no candidates
        return Ok(Vec::new());
    }

    // Pass 1: interior local maxima at or above the threshold
    let mut candidates = Vec::new();
    for i in 1..odf.len() - 1 {
        let value = odf[i];
        if value >= odf[i - 1] && value >= odf[i + 1] && value >= threshold {
            candidates.push(OnsetPeak { index: i, value });
        }
    }

    // Pass 2: enforce minimum spacing, scanning in index order. Replacing
    // the last kept peak with a later, larger one can only widen the gap to
    // the peak before it, so a single forward scan suffices.
    let mut peaks: Vec<OnsetPeak> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match peaks.last_mut() {
            Some(last) if candidate.index - last.index < min_distance => {
                if candidate.value > last.value {
                    *last = candidate;
                }
                // tie or smaller: earlier peak wins
            }
            _ => peaks.push(candidate),
        }
    }

    log::debug!(
        "Picked {} peaks from ODF of {} samples (threshold={:.3}, min_distance={})",
        peaks.len(),
        odf.len(),
        threshold,
        min_distance
    );

    Ok(peaks)
}
