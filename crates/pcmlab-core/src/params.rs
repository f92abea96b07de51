//! Signal Parameters and Validation
//!
//! This module defines the configurable parameters for one pipeline run:
//! the analog sinusoid (frequency, amplitude, phase), the digitizer
//! (sampling rate, quantization level count), and the observation window
//! (start/end time).
//!
//! ## Understanding the parameters
//!
//! | Parameter           | Effect                                          |
//! |---------------------|-------------------------------------------------|
//! | `frequency`         | Cycles per time unit of the analog sinusoid     |
//! | `amplitude`         | Peak value; quantizer range is `[-A, A)`        |
//! | `phase_degrees`     | Phase offset, converted to radians internally   |
//! | `sampling_rate`     | Samples per time unit of the uniform grid       |
//! | `quantization_levels` | Discrete amplitude levels (≥ 2, any integer)  |
//! | `start_time`/`end_time` | Observation window, bounded duration        |
//!
//! Sampling below the Nyquist rate (`2 · frequency`) aliases the signal.
//! That is a legitimate thing to demonstrate, so it is never rejected here;
//! the pipeline only logs a warning.
//!
//! # Example
//!
//! ```rust
//! use pcmlab_core::params::SignalParameters;
//!
//! let params = SignalParameters::builder()
//!     .frequency(2.0)
//!     .amplitude(1.5)
//!     .sampling_rate(40.0)
//!     .quantization_levels(16)
//!     .time_span(0.0, 1.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.duration(), 1.0);
//! assert_eq!(params.sampling_interval(), 0.025);
//! assert_eq!(params.nyquist_rate(), 4.0);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::types::{PcmError, PcmResult};

/// Default ceiling on `end_time - start_time`, in time units.
///
/// Overridable through [`crate::config::LimitsConfig`]; keeps a display host
/// from asking for an absurdly long trace.
pub const MAX_DURATION: f64 = 20.0;

/// Immutable input to a single pipeline run.
///
/// Construct via [`SignalParameters::builder`] to get validation for free,
/// or fill the fields directly and call [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalParameters {
    /// Sinusoid frequency in cycles per time unit. Must be positive.
    pub frequency: f64,
    /// Peak amplitude. Must be positive.
    pub amplitude: f64,
    /// Phase offset in degrees.
    pub phase_degrees: f64,
    /// Uniform sampling rate in samples per time unit. Must be positive.
    pub sampling_rate: f64,
    /// Number of quantization levels. Must be at least 2; need not be a
    /// power of two.
    pub quantization_levels: usize,
    /// Window start. Must be non-negative.
    pub start_time: f64,
    /// Window end. Must exceed `start_time`.
    pub end_time: f64,
}

impl SignalParameters {
    /// Start building a parameter set from teaching-friendly defaults.
    pub fn builder() -> SignalParametersBuilder {
        SignalParametersBuilder::default()
    }

    /// Window length in time units.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Time between two adjacent samples of the uniform grid.
    pub fn sampling_interval(&self) -> f64 {
        1.0 / self.sampling_rate
    }

    /// Phase offset converted to radians. The conversion happens exactly
    /// once, here, at the parameter boundary.
    pub fn phase_radians(&self) -> f64 {
        self.phase_degrees * PI / 180.0
    }

    /// Twice the signal frequency: the minimum alias-free sampling rate.
    pub fn nyquist_rate(&self) -> f64 {
        2.0 * self.frequency
    }

    /// Check every field against the preconditions of the pipeline, using
    /// the default [`MAX_DURATION`] ceiling.
    pub fn validate(&self) -> PcmResult<()> {
        self.validate_with_ceiling(MAX_DURATION)
    }

    /// Check every field, with an explicit duration ceiling.
    ///
    /// Fails fast on the first offending field; the error names it.
    pub fn validate_with_ceiling(&self, max_duration: f64) -> PcmResult<()> {
        if !(self.frequency > 0.0) {
            return Err(PcmError::InvalidFrequency(self.frequency));
        }
        if !(self.amplitude > 0.0) {
            return Err(PcmError::InvalidAmplitude(self.amplitude));
        }
        if !(self.sampling_rate > 0.0) {
            return Err(PcmError::InvalidSamplingRate(self.sampling_rate));
        }
        if self.quantization_levels < 2 {
            return Err(PcmError::InvalidLevelCount(self.quantization_levels));
        }
        if self.start_time < 0.0 {
            return Err(PcmError::InvalidStartTime(self.start_time));
        }
        if !(self.end_time > self.start_time) {
            return Err(PcmError::InvalidTimeSpan {
                start: self.start_time,
                end: self.end_time,
            });
        }
        if self.duration() > max_duration {
            return Err(PcmError::DurationTooLong {
                duration: self.duration(),
                max: max_duration,
            });
        }
        Ok(())
    }
}

impl Default for SignalParameters {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            amplitude: 1.0,
            phase_degrees: 0.0,
            sampling_rate: 10.0,
            quantization_levels: 8,
            start_time: 0.0,
            end_time: 2.0,
        }
    }
}

/// Builder for [`SignalParameters`].
///
/// `build` runs the full validation, so a successfully built parameter set
/// satisfies every pipeline precondition.
#[derive(Debug, Clone, Default)]
pub struct SignalParametersBuilder {
    params: SignalParameters,
}

impl SignalParametersBuilder {
    pub fn frequency(mut self, hz: f64) -> Self {
        self.params.frequency = hz;
        self
    }

    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.params.amplitude = amplitude;
        self
    }

    pub fn phase_degrees(mut self, degrees: f64) -> Self {
        self.params.phase_degrees = degrees;
        self
    }

    pub fn sampling_rate(mut self, rate: f64) -> Self {
        self.params.sampling_rate = rate;
        self
    }

    pub fn quantization_levels(mut self, levels: usize) -> Self {
        self.params.quantization_levels = levels;
        self
    }

    pub fn time_span(mut self, start: f64, end: f64) -> Self {
        self.params.start_time = start;
        self.params.end_time = end;
        self
    }

    /// Validate and return the finished parameter set.
    pub fn build(self) -> PcmResult<SignalParameters> {
        self.params.validate()?;
        Ok(self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SignalParameters::default().validate().is_ok());
    }

    #[test]
    fn test_builder_rejects_bad_fields() {
        let err = SignalParameters::builder().frequency(0.0).build();
        assert_eq!(err, Err(PcmError::InvalidFrequency(0.0)));

        let err = SignalParameters::builder().amplitude(-1.0).build();
        assert_eq!(err, Err(PcmError::InvalidAmplitude(-1.0)));

        let err = SignalParameters::builder().quantization_levels(1).build();
        assert_eq!(err, Err(PcmError::InvalidLevelCount(1)));

        let err = SignalParameters::builder().time_span(1.0, 1.0).build();
        assert_eq!(
            err,
            Err(PcmError::InvalidTimeSpan {
                start: 1.0,
                end: 1.0
            })
        );
    }

    #[test]
    fn test_duration_ceiling() {
        let err = SignalParameters::builder().time_span(0.0, 25.0).build();
        assert!(matches!(err, Err(PcmError::DurationTooLong { .. })));

        let params = SignalParameters {
            end_time: 25.0,
            ..Default::default()
        };
        assert!(params.validate_with_ceiling(30.0).is_ok());
    }

    #[test]
    fn test_phase_conversion() {
        let params = SignalParameters {
            phase_degrees: 180.0,
            ..Default::default()
        };
        assert!((params.phase_radians() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_nan_fields_rejected() {
        let err = SignalParameters::builder().frequency(f64::NAN).build();
        assert!(matches!(err, Err(PcmError::InvalidFrequency(_))));
    }
}
