//! Onset detection function
//!
//! Differentiates the amplitude envelope and normalizes it so the largest
//! rise equals 1.0. Peaks in the result mark the instants where the
//! envelope grows fastest, i.e. likely note or drum-hit onsets.
//!
//! The first difference uses a prepend-first-value convention: the
//! difference at index 0 is taken against the value itself, so `odf[0]` is
//! always 0 and no spurious jump appears at the start of the signal.

use crate::error::AnalysisError;

/// Compute the normalized onset detection function of an envelope
///
/// `diff[0] = 0`, `diff[i] = envelope[i] - envelope[i-1]`, then every
/// element is divided by the signed maximum difference `M`. The output has
/// the same length as the input and its maximum value is exactly 1.0 at
/// the steepest rise.
///
/// # Errors
///
/// - `AnalysisError::InvalidInput` if the envelope is empty
/// - `AnalysisError::DegenerateSignal` if `M <= 0`, i.e. the envelope never
///   rises (all-silent input or a non-increasing envelope). Since
///   `diff[0] = 0` the maximum is never negative, so this fires exactly
///   when no positive difference exists. The condition is a hard error by
///   contract: normalizing by a non-positive maximum would either divide
///   by zero or flip the sign of every sample.
pub fn compute_odf(envelope: &[f32]) -> Result<Vec<f32>, AnalysisError> {
    if envelope.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty envelope".to_string(),
        ));
    }

    let mut diff = Vec::with_capacity(envelope.len());
    diff.push(0.0f32);
    for i in 1..envelope.len() {
        diff.push(envelope[i] - envelope[i - 1]);
    }

    let max_diff = diff.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    if max_diff <= 0.0 {
        log::warn!(
            "Envelope never rises over {} samples, ODF undefined",
            envelope.len()
        );
        return Err(AnalysisError::DegenerateSignal(format!(
            "Maximum envelope difference is {} (expected > 0)",
            max_diff
        )));
    }

    for v in &mut diff {
        *v /= max_diff;
    }

    log::debug!(
        "Computed ODF: {} samples, normalizer={:.6}",
        diff.len(),
        max_diff
    );

    Ok(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn test_basic_normalization() {
        // diff = [0, 1, 2, -1], signed max = 2
        let odf = compute_odf(&[0.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(odf, vec![0.0, 0.5, 1.0, -0.5]);
    }

    #[test]
    fn test_first_element_is_zero() {
        let odf = compute_odf(&[5.0, 6.0, 7.0]).unwrap();
        assert_eq!(odf[0], 0.0);
    }

    #[test]
    fn test_max_is_exactly_one() {
        let odf = compute_odf(&[0.0, 0.25, 0.125, 0.75, 0.5]).unwrap();
        let max = odf.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(max, 1.0);
    }

    #[test]
    fn test_same_length_as_input() {
        let envelope = vec![0.0, 0.1, 0.3, 0.2, 0.4];
        let odf = compute_odf(&envelope).unwrap();
        assert_eq!(odf.len(), envelope.len());
    }

    #[test]
    fn test_all_zero_envelope_degenerate() {
        let result = compute_odf(&[0.0; 100]);
        assert!(matches!(result, Err(AnalysisError::DegenerateSignal(_))));
    }

    #[test]
    fn test_non_increasing_envelope_degenerate() {
        let result = compute_odf(&[3.0, 2.0, 1.0, 1.0, 0.5]);
        assert!(matches!(result, Err(AnalysisError::DegenerateSignal(_))));
    }

    #[test]
    fn test_single_sample_degenerate() {
        // One sample has only the prepended zero difference
        let result = compute_odf(&[5.0]);
        assert!(matches!(result, Err(AnalysisError::DegenerateSignal(_))));
    }

    #[test]
    fn test_empty_envelope_invalid() {
        let result = compute_odf(&[]);
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_negative_values_preserved() {
        // Falls are kept as negative values, scaled by the same normalizer
        let odf = compute_odf(&[0.0, 2.0, 0.0]).unwrap();
        assert_eq!(odf, vec![0.0, 1.0, -1.0]);
    }
}
