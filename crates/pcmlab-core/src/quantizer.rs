//! Uniform Midpoint Quantizer
//!
//! Maps each sampled amplitude onto one of `levels` equal-width bins
//! spanning `[-amplitude, amplitude)` and represents the bin by its
//! midpoint. The level count is any integer ≥ 2; it does not have to be a
//! power of two, which is exactly what makes the "unused code" case worth
//! teaching (see [`crate::pcm_encoder`]).
//!
//! ## Level geometry
//!
//! ```text
//!  -A        -A+Δ       -A+2Δ                A-Δ         A
//!   |----x----|----x----|----x----| ... |----x----|
//!        ^ representative value = bin midpoint = -A + (k + 0.5)·Δ
//!   Δ = 2A / levels
//! ```
//!
//! The input clamp is `[-A, A - 1e-9]`: the upper bound is exclusive by
//! design, so a sample exactly at `+A` maps to the top bin instead of one
//! index past it. That is an off-by-one guard, not a rounding nicety.
//!
//! # Example
//!
//! ```rust
//! use pcmlab_core::quantizer::UniformQuantizer;
//!
//! let q = UniformQuantizer::new(1.0, 4);
//! assert_eq!(q.step(), 0.5);
//!
//! // 0.0 lands in bin 2 of [-1, 1), whose midpoint is 0.25
//! assert_eq!(q.index_of(0.0), 2);
//! assert_eq!(q.quantize(0.0), 0.25);
//! ```

/// Clamp margin keeping the top of the range exclusive.
const CLAMP_EPS: f64 = 1e-9;

/// A uniform quantizer over `[-amplitude, amplitude)` with midpoint
/// representative values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformQuantizer {
    amplitude: f64,
    levels: usize,
    step: f64,
}

impl UniformQuantizer {
    /// Create a quantizer for the given peak amplitude and level count.
    ///
    /// Both values are assumed pre-validated (`amplitude > 0`,
    /// `levels ≥ 2`); the clamps below tolerate floating point boundary
    /// noise, not invalid parameters.
    pub fn new(amplitude: f64, levels: usize) -> Self {
        Self {
            amplitude,
            levels,
            step: 2.0 * amplitude / levels as f64,
        }
    }

    // ------------------------------------------------------------------ accessors

    /// Quantization step size (Δ), the amplitude width of one level.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of levels.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Peak amplitude; the input range is `[-amplitude, amplitude)`.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// All representative (midpoint) values, indexed by level.
    pub fn reconstruction_levels(&self) -> Vec<f64> {
        (0..self.levels).map(|k| self.level_value(k)).collect()
    }

    // ------------------------------------------------------------------ core quantize

    /// Map an amplitude to its level index in `[0, levels - 1]`.
    pub fn index_of(&self, value: f64) -> usize {
        let clamped = value.max(-self.amplitude).min(self.amplitude - CLAMP_EPS);
        let raw = ((clamped + self.amplitude) / self.step).floor();
        // the clamp above already bounds the index; this one absorbs any
        // remaining floating point edge at the bin borders
        (raw as i64).clamp(0, self.levels as i64 - 1) as usize
    }

    /// Representative value of level `index`: the bin midpoint.
    pub fn level_value(&self, index: usize) -> f64 {
        -self.amplitude + (index as f64 + 0.5) * self.step
    }

    /// Quantize a single amplitude to its representative value.
    pub fn quantize(&self, value: f64) -> f64 {
        self.level_value(self.index_of(value))
    }
}
