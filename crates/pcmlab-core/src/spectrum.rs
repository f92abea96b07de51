//! Magnitude Spectrum
//!
//! Single-shot, Hann-windowed magnitude spectrum of a real-valued sequence,
//! used by the workshop demos to make aliasing visible: sample a sinusoid
//! below the Nyquist rate and its spectral peak appears where it belongs;
//! sample below it and the peak folds to a lower frequency.
//!
//! This is a display aid. The PCM pipeline itself never consumes it.
//!
//! # Example
//!
//! ```rust
//! use pcmlab_core::spectrum::magnitude_spectrum;
//! use pcmlab_core::types::TimedSample;
//!
//! // 10 Hz tone sampled at 64 Hz
//! let samples: Vec<TimedSample> = (0..64)
//!     .map(|i| {
//!         let t = i as f64 / 64.0;
//!         TimedSample::new(t, (2.0 * std::f64::consts::PI * 10.0 * t).sin())
//!     })
//!     .collect();
//!
//! let spectrum = magnitude_spectrum(&samples, 64.0);
//! let peak = spectrum
//!     .iter()
//!     .max_by(|a, b| a.value.total_cmp(&b.value))
//!     .unwrap();
//! assert!((peak.time - 10.0).abs() < 1.1); // bin spacing is 1 Hz
//! ```

use num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;

use crate::types::TimedSample;

/// Magnitude spectrum of a real sequence, one point per FFT bin up to the
/// Nyquist frequency.
///
/// The result reuses [`TimedSample`] with `time` carrying the bin frequency
/// and `value` the window-corrected linear magnitude, so a display host can
/// plot it with the same machinery as the time-domain traces. Returns an
/// empty vector for sequences shorter than two samples.
pub fn magnitude_spectrum(samples: &[TimedSample], sampling_rate: f64) -> Vec<TimedSample> {
    let n = samples.len();
    if n < 2 {
        return Vec::new();
    }

    // Hann window tames the leakage a finite observation window causes
    let mut buf: Vec<Complex64> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let w = 0.5 * (1.0 - (2.0 * PI * i as f64 / (n - 1) as f64).cos());
            Complex64::new(s.value * w, 0.0)
        })
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(n).process(&mut buf);

    // coherent gain of the Hann window is 0.5; factor 2 folds the negative
    // frequencies onto the positive half of a real signal's spectrum
    let scale = 2.0 / (0.5 * n as f64);
    let bin_width = sampling_rate / n as f64;

    buf.iter()
        .take(n / 2 + 1)
        .enumerate()
        .map(|(k, c)| TimedSample::new(k as f64 * bin_width, c.norm() * scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(frequency: f64, sampling_rate: f64, n: usize) -> Vec<TimedSample> {
        (0..n)
            .map(|i| {
                let t = i as f64 / sampling_rate;
                TimedSample::new(t, (2.0 * PI * frequency * t).sin())
            })
            .collect()
    }

    fn peak_frequency(spectrum: &[TimedSample]) -> f64 {
        spectrum
            .iter()
            .max_by(|a, b| a.value.total_cmp(&b.value))
            .unwrap()
            .time
    }

    #[test]
    fn test_peak_at_tone_frequency() {
        let samples = tone(100.0, 1000.0, 1000);
        let spectrum = magnitude_spectrum(&samples, 1000.0);
        assert_eq!(spectrum.len(), 501);
        assert!((peak_frequency(&spectrum) - 100.0).abs() < 1.5);
    }

    #[test]
    fn test_undersampling_folds_the_peak() {
        // 90 Hz tone sampled at 100 Hz folds to 100 - 90 = 10 Hz
        let samples = tone(90.0, 100.0, 500);
        let spectrum = magnitude_spectrum(&samples, 100.0);
        assert!((peak_frequency(&spectrum) - 10.0).abs() < 1.0);
    }

    #[test]
    fn test_peak_magnitude_near_unity() {
        let samples = tone(50.0, 1000.0, 2000);
        let spectrum = magnitude_spectrum(&samples, 1000.0);
        let peak = spectrum
            .iter()
            .map(|s| s.value)
            .fold(0.0f64, f64::max);
        // unit-amplitude tone, window-corrected
        assert!(peak > 0.8 && peak < 1.2, "peak magnitude {}", peak);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(magnitude_spectrum(&[], 100.0).is_empty());
        assert!(magnitude_spectrum(&[TimedSample::new(0.0, 1.0)], 100.0).is_empty());
    }
}
