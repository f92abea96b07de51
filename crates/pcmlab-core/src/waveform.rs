//! Analog Waveform Evaluator
//!
//! Evaluates the continuous sinusoid `A · sin(2π·f·t + φ)` at arbitrary
//! time. This is the single definition of the analog signal: the dense
//! display trace and the uniform sample grid both call into it, so the two
//! can never drift apart.
//!
//! # Example
//!
//! ```rust
//! use pcmlab_core::waveform::SineWave;
//!
//! // 1 Hz unit sine, no phase offset
//! let wave = SineWave::new(1.0, 1.0, 0.0);
//!
//! assert!((wave.eval(0.0) - 0.0).abs() < 1e-12);
//! assert!((wave.eval(0.25) - 1.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;

use crate::params::SignalParameters;
use crate::types::Sample;

/// A continuous sinusoid, total on all real `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWave {
    /// Cycles per time unit.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Phase offset in radians.
    pub phase_radians: f64,
}

impl SineWave {
    /// Create a sinusoid from raw parts. Phase is in radians; degree input
    /// is converted once at the parameter boundary, not here.
    pub fn new(frequency: f64, amplitude: f64, phase_radians: f64) -> Self {
        Self {
            frequency,
            amplitude,
            phase_radians,
        }
    }

    /// Build the sinusoid described by a validated parameter set.
    pub fn from_params(params: &SignalParameters) -> Self {
        Self::new(params.frequency, params.amplitude, params.phase_radians())
    }

    /// Instantaneous value at time `t`.
    pub fn eval(&self, t: f64) -> Sample {
        self.amplitude * (2.0 * PI * self.frequency * t + self.phase_radians).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_cycle_values() {
        let wave = SineWave::new(1.0, 2.0, 0.0);
        assert!((wave.eval(0.0)).abs() < 1e-12);
        assert!((wave.eval(0.25) - 2.0).abs() < 1e-12);
        assert!((wave.eval(0.5)).abs() < 1e-9);
        assert!((wave.eval(0.75) + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_phase_shift() {
        // 90° lead turns sine into cosine
        let wave = SineWave::new(1.0, 1.0, PI / 2.0);
        assert!((wave.eval(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_params_converts_degrees() {
        let params = SignalParameters {
            phase_degrees: 90.0,
            ..Default::default()
        };
        let wave = SineWave::from_params(&params);
        assert!((wave.phase_radians - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_on_negative_and_large_t() {
        let wave = SineWave::new(3.0, 1.0, 0.3);
        for &t in &[-1e6, -1.0, 0.0, 1.0, 1e6] {
            assert!(wave.eval(t).is_finite());
        }
    }
}
