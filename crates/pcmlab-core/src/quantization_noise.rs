//! Quantization Error and SNR
//!
//! Computes the per-sample quantization error and the signal-to-noise ratio
//! of a pipeline run. The error sequence shares the sample grid's time axis
//! exactly: it is derived index-by-index from the sampled and quantized
//! sequences, never recomputed from timing.
//!
//! ## Guarded SNR
//!
//! `SNR = 10·log10(signal_power / noise_power)` is undefined at the edges,
//! and a naive division produces `NaN` or `Infinity` inconsistently across
//! platforms. Both powers are therefore checked against a `1e-12` floor,
//! in this order:
//!
//! 1. vanishing noise → `+∞` dB (quantization was effectively perfect);
//! 2. vanishing signal → `−∞` dB (nothing but noise);
//! 3. otherwise the ratio in dB.
//!
//! The result is an ordinary `f64` carrying `f64::INFINITY` /
//! `f64::NEG_INFINITY` as the sentinel values; it is never `NaN`.
//!
//! ## Rule-of-thumb check
//!
//! For a full-scale sinusoid through an N-bit quantizer the classic
//! approximation is `SNR ≈ 6.02·N + 1.76 dB`: one extra bit buys about
//! 6 dB. [`theoretical_snr_db`] and [`effective_bits`] expose the formula
//! and its inverse so measured results can be compared against it.
//!
//! # Example
//!
//! ```rust
//! use pcmlab_core::quantization_noise::theoretical_snr_db;
//!
//! assert!((theoretical_snr_db(8) - 49.92).abs() < 0.01);
//! ```

use crate::types::{TimedSample, POWER_EPS};

/// Per-sample quantization error, `sampled - quantized`, on the sample
/// time axis.
///
/// Both sequences must come from the same pipeline run, so they share
/// length and timing by construction.
pub fn error_sequence(sampled: &[TimedSample], quantized: &[TimedSample]) -> Vec<TimedSample> {
    debug_assert_eq!(sampled.len(), quantized.len());
    sampled
        .iter()
        .zip(quantized.iter())
        .map(|(s, q)| TimedSample::new(s.time, s.value - q.value))
        .collect()
}

/// Mean of the squared values of a sequence. Zero for an empty sequence.
pub fn mean_power(samples: &[TimedSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|s| s.value * s.value).sum::<f64>() / samples.len() as f64
}

/// Guarded signal-to-noise ratio in dB over a pipeline run.
///
/// See the module docs for the three-branch rule. The branch order matters:
/// when both powers vanish the result is `+∞`, since zero error means the
/// reconstruction is exact no matter how weak the signal was.
pub fn snr_db(sampled: &[TimedSample], error: &[TimedSample]) -> f64 {
    let signal_power = mean_power(sampled);
    let noise_power = mean_power(error);

    if noise_power < POWER_EPS {
        f64::INFINITY
    } else if signal_power < POWER_EPS {
        f64::NEG_INFINITY
    } else {
        10.0 * (signal_power / noise_power).log10()
    }
}

/// Theoretical SNR of an N-bit quantizer driven by a full-scale sinusoid:
/// `6.02·N + 1.76 dB`.
pub fn theoretical_snr_db(bits: usize) -> f64 {
    6.02 * bits as f64 + 1.76
}

/// Effective number of bits implied by a measured SNR, the inverse of
/// [`theoretical_snr_db`]. Not meaningful for the infinite sentinels.
pub fn effective_bits(snr_db: f64) -> f64 {
    (snr_db - 1.76) / 6.02
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(values: &[f64]) -> Vec<TimedSample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| TimedSample::new(i as f64 * 0.1, v))
            .collect()
    }

    #[test]
    fn test_error_is_exact_difference() {
        let sampled = ts(&[1.0, -0.5, 0.25]);
        let quantized = ts(&[0.75, -0.25, 0.25]);
        let error = error_sequence(&sampled, &quantized);

        assert_eq!(error.len(), 3);
        for i in 0..3 {
            assert_eq!(error[i].time, sampled[i].time);
            assert!((error[i].value - (sampled[i].value - quantized[i].value)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mean_power() {
        assert_eq!(mean_power(&ts(&[1.0, -1.0, 1.0, -1.0])), 1.0);
        assert_eq!(mean_power(&ts(&[3.0])), 9.0);
        assert_eq!(mean_power(&[]), 0.0);
    }

    #[test]
    fn test_snr_plain_ratio() {
        // signal power 1.0, noise power 0.01 -> exactly 20 dB
        let sampled = ts(&[1.0, -1.0, 1.0, -1.0]);
        let error = ts(&[0.1, -0.1, 0.1, -0.1]);
        assert!((snr_db(&sampled, &error) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_snr_zero_noise_is_positive_infinity() {
        let sampled = ts(&[0.5, -0.5]);
        let error = ts(&[0.0, 0.0]);
        let snr = snr_db(&sampled, &error);
        assert!(snr.is_infinite() && snr > 0.0);
        assert!(!snr.is_nan());
    }

    #[test]
    fn test_snr_zero_signal_is_negative_infinity() {
        let sampled = ts(&[0.0, 0.0]);
        let error = ts(&[0.5, -0.5]);
        let snr = snr_db(&sampled, &error);
        assert!(snr.is_infinite() && snr < 0.0);
    }

    #[test]
    fn test_snr_both_zero_prefers_positive_infinity() {
        // zero error wins: perfect reconstruction of a silent signal
        let snr = snr_db(&ts(&[0.0, 0.0]), &ts(&[0.0, 0.0]));
        assert_eq!(snr, f64::INFINITY);
    }

    #[test]
    fn test_rule_of_thumb() {
        assert!((theoretical_snr_db(16) - 98.08).abs() < 1e-9);
        let enob = effective_bits(theoretical_snr_db(12));
        assert!((enob - 12.0).abs() < 1e-9);
    }
}
