//! Core types for the PCM teaching pipeline
//!
//! This module defines the fundamental types shared by every pipeline stage,
//! chiefly the timestamped sample and the fixed-width binary PCM code.
//!
//! ## Understanding the PCM chain
//!
//! Pulse Code Modulation turns a continuous waveform into binary words in
//! three steps: sample at a uniform rate, quantize each sample to one of a
//! finite set of levels, and encode each level index as a fixed-width code.
//!
//! ```text
//!  amplitude
//!      ^        .-.                     level 3 ── 10 11 11 ...
//!      |       /   \      sample        level 2 ──
//!      |      /     \    *   *   *      level 1 ──
//!      +-----/-------\--------------->  level 0 ──
//!      |    /         \ /       t
//!      |_.-'           '
//!    continuous       discrete in time   discrete in time AND amplitude
//! ```
//!
//! Every stage exchanges [`TimedSample`] values ordered by non-decreasing
//! time, so the display host can plot any stage without special cases.

use serde::{Deserialize, Serialize};

/// A floating point amplitude value.
pub type Sample = f64;

/// Result type for pipeline operations.
pub type PcmResult<T> = Result<T, PcmError>;

/// Absolute time tolerance used when comparing grid positions.
///
/// Accumulated floating point error across a few thousand grid steps stays
/// far below this, while real off-by-one-sample differences are far above it.
pub const TIME_EPS: f64 = 1e-9;

/// Power floor below which signal or noise power is treated as zero
/// when forming an SNR ratio.
pub const POWER_EPS: f64 = 1e-12;

/// Errors that can occur when building or running a pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PcmError {
    #[error("Invalid frequency: {0} Hz. Must be positive")]
    InvalidFrequency(f64),

    #[error("Invalid amplitude: {0}. Must be positive")]
    InvalidAmplitude(f64),

    #[error("Invalid sampling rate: {0} Hz. Must be positive")]
    InvalidSamplingRate(f64),

    #[error("Invalid quantization level count: {0}. Must be at least 2")]
    InvalidLevelCount(usize),

    #[error("Invalid start time: {0}. Must be non-negative")]
    InvalidStartTime(f64),

    #[error("Invalid time span: start {start}, end {end}. End must be after start")]
    InvalidTimeSpan { start: f64, end: f64 },

    #[error("Duration too long: {duration} exceeds the configured ceiling {max}")]
    DurationTooLong { duration: f64, max: f64 },
}

/// A single point of a signal: an amplitude observed at a moment in time.
///
/// Every pipeline stage (analog trace, sampled, quantized, reconstructed,
/// error) produces a sequence of these, ordered by non-decreasing `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedSample {
    /// Time in the same unit the parameters use (seconds for Hz inputs).
    pub time: f64,
    /// Amplitude at that time.
    pub value: Sample,
}

impl TimedSample {
    pub fn new(time: f64, value: Sample) -> Self {
        Self { time, value }
    }
}

/// A fixed-width binary PCM word for one sample.
///
/// The `bits` string is the unsigned binary representation of the
/// quantization level index, left-zero-padded to the code width of the run.
/// The index is carried alongside so table displays do not have to re-parse
/// the string.
///
/// # Example
///
/// ```rust
/// use pcmlab_core::types::PcmCode;
///
/// let code = PcmCode::new(2, 2);
/// assert_eq!(code.bits, "10");
/// assert_eq!(code.decode(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcmCode {
    /// Quantization level index this code represents.
    pub index: usize,
    /// Left-zero-padded unsigned binary representation of `index`.
    pub bits: String,
}

impl PcmCode {
    /// Encode `index` as a binary word of exactly `width` bits.
    pub fn new(index: usize, width: usize) -> Self {
        Self {
            index,
            bits: format!("{:0width$b}", index, width = width),
        }
    }

    /// Code width in bits.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Parse the binary string back to the level index.
    pub fn decode(&self) -> usize {
        usize::from_str_radix(&self.bits, 2).unwrap_or(self.index)
    }
}

impl std::fmt::Display for PcmCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_zero_padding() {
        let code = PcmCode::new(1, 4);
        assert_eq!(code.bits, "0001");
        assert_eq!(code.width(), 4);
    }

    #[test]
    fn test_code_roundtrip() {
        for index in 0..16 {
            let code = PcmCode::new(index, 4);
            assert_eq!(code.decode(), index, "code {} failed roundtrip", code);
        }
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = PcmError::InvalidLevelCount(1);
        assert!(format!("{}", err).contains("quantization level count"));

        let err = PcmError::DurationTooLong {
            duration: 25.0,
            max: 20.0,
        };
        assert!(format!("{}", err).contains("25"));
        assert!(format!("{}", err).contains("20"));
    }
}
