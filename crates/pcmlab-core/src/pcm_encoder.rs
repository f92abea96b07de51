//! PCM Binary Encoder
//!
//! Turns quantization level indices into fixed-width binary words. The
//! width is the minimum able to represent the largest index,
//! `ceil(log2(levels))`, computed in integer arithmetic as the bit length
//! of `levels - 1`, so a power-of-two level count can never pick up an extra
//! bit from `log2` overshooting (e.g. `log2(8)` evaluating to
//! `3.0000000001` and ceiling to 4).
//!
//! When `levels` is not a power of two, some codes of the chosen width
//! represent indices that no sample can produce. That is expected: the code
//! space is simply larger than the level set, a point worth showing rather
//! than hiding.
//!
//! # Example
//!
//! ```rust
//! use pcmlab_core::pcm_encoder::{bits_per_sample, PcmEncoder};
//!
//! assert_eq!(bits_per_sample(4), 2);
//! assert_eq!(bits_per_sample(5), 3); // 5 levels need 3 bits; codes 101..111 go unused
//!
//! let enc = PcmEncoder::new(4);
//! assert_eq!(enc.encode(2).bits, "10");
//! ```

use crate::types::PcmCode;

/// Minimum code width for `levels` quantization levels,
/// `ceil(log2(levels))`.
///
/// Closed-form bit length of `levels - 1`; no floating point involved.
pub fn bits_per_sample(levels: usize) -> usize {
    debug_assert!(levels >= 2);
    (usize::BITS - (levels - 1).leading_zeros()) as usize
}

/// Encodes level indices as fixed-width binary words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmEncoder {
    width: usize,
}

impl PcmEncoder {
    /// Create an encoder for `levels` quantization levels.
    pub fn new(levels: usize) -> Self {
        Self {
            width: bits_per_sample(levels),
        }
    }

    /// Code width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Encode one level index.
    pub fn encode(&self, index: usize) -> PcmCode {
        PcmCode::new(index, self.width)
    }

    /// Bits emitted per time unit at the given sampling rate.
    pub fn bit_rate(&self, sampling_rate: f64) -> f64 {
        self.width as f64 * sampling_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_at_powers_of_two() {
        assert_eq!(bits_per_sample(2), 1);
        assert_eq!(bits_per_sample(4), 2);
        assert_eq!(bits_per_sample(8), 3);
        assert_eq!(bits_per_sample(256), 8);
        assert_eq!(bits_per_sample(65536), 16);
    }

    #[test]
    fn test_width_between_powers_of_two() {
        assert_eq!(bits_per_sample(3), 2);
        assert_eq!(bits_per_sample(5), 3);
        assert_eq!(bits_per_sample(7), 3);
        assert_eq!(bits_per_sample(9), 4);
        assert_eq!(bits_per_sample(1000), 10);
    }

    #[test]
    fn test_codes_are_fixed_width() {
        let enc = PcmEncoder::new(10); // 4 bits
        for index in 0..10 {
            let code = enc.encode(index);
            assert_eq!(code.width(), 4);
            assert_eq!(code.decode(), index);
        }
        assert_eq!(enc.encode(0).bits, "0000");
        assert_eq!(enc.encode(9).bits, "1001");
    }

    #[test]
    fn test_bit_rate() {
        let enc = PcmEncoder::new(256);
        assert_eq!(enc.bit_rate(8000.0), 64_000.0);
    }
}
