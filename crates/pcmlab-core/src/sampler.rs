//! Uniform Sampler
//!
//! Evaluates the waveform on the uniform time grid
//! `start_time + i / sampling_rate`. The grid this module produces is the
//! single source of truth for the quantizer, encoder, reconstructor, and
//! error stages: none of them re-derive timing, so the per-sample channels
//! can never drift against each other.
//!
//! ## Stopping rule
//!
//! `floor(duration · sampling_rate) + 1` bounds the loop as a safety cap,
//! but the actual exit is tolerance based: generation stops as soon as
//! `start_time + i·interval` would exceed `end_time` by more than `1e-9`.
//! Reproducing both rules keeps the sample count stable at boundary
//! durations where `duration / interval` lands on (or a few ulps off) an
//! integer.
//!
//! # Example
//!
//! ```rust
//! use pcmlab_core::sampler::UniformSampler;
//! use pcmlab_core::waveform::SineWave;
//!
//! let wave = SineWave::new(1.0, 1.0, 0.0);
//! let samples = UniformSampler::new(10.0).sample(&wave, 0.0, 1.0);
//!
//! // 10 intervals fit in [0, 1], so 11 fence posts
//! assert_eq!(samples.len(), 11);
//! assert_eq!(samples[0].time, 0.0);
//! ```

use crate::types::{TimedSample, TIME_EPS};
use crate::waveform::SineWave;

/// Samples a waveform on a uniform grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSampler {
    interval: f64,
}

impl UniformSampler {
    /// Create a sampler running at `sampling_rate` samples per time unit.
    pub fn new(sampling_rate: f64) -> Self {
        Self {
            interval: 1.0 / sampling_rate,
        }
    }

    /// Time between adjacent samples.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Upper bound on the number of samples in a window of `duration`.
    pub fn max_samples(&self, duration: f64) -> usize {
        (duration / self.interval).floor() as usize + 1
    }

    /// Sample the waveform over `[start_time, end_time]`.
    ///
    /// Sample `i` sits at `start_time + i · interval`; times are computed by
    /// multiplication, not accumulation, so grid positions do not collect
    /// rounding error.
    pub fn sample(&self, wave: &SineWave, start_time: f64, end_time: f64) -> Vec<TimedSample> {
        let cap = self.max_samples(end_time - start_time);
        let mut samples = Vec::with_capacity(cap);
        for i in 0..cap {
            let t = start_time + i as f64 * self.interval;
            if t > end_time + TIME_EPS {
                break;
            }
            samples.push(TimedSample::new(t, wave.eval(t)));
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_post_count() {
        let wave = SineWave::new(1.0, 1.0, 0.0);
        let samples = UniformSampler::new(10.0).sample(&wave, 0.0, 1.0);
        assert_eq!(samples.len(), 11);
    }

    #[test]
    fn test_partial_final_interval() {
        let wave = SineWave::new(1.0, 1.0, 0.0);
        // 0.95 / 0.1 = 9.5 -> samples at 0.0 .. 0.9, 10 total
        let samples = UniformSampler::new(10.0).sample(&wave, 0.0, 0.95);
        assert_eq!(samples.len(), 10);
        assert!((samples.last().unwrap().time - 0.9).abs() <= TIME_EPS);
    }

    #[test]
    fn test_window_shorter_than_interval() {
        let wave = SineWave::new(1.0, 1.0, 0.0);
        let samples = UniformSampler::new(1.0).sample(&wave, 0.0, 0.5);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].time, 0.0);
    }

    #[test]
    fn test_nonzero_start_time() {
        let wave = SineWave::new(2.0, 1.0, 0.0);
        let samples = UniformSampler::new(4.0).sample(&wave, 1.0, 2.0);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].time, 1.0);
        for (i, s) in samples.iter().enumerate() {
            assert!((s.time - (1.0 + i as f64 * 0.25)).abs() <= TIME_EPS);
        }
    }

    #[test]
    fn test_values_come_from_evaluator() {
        let wave = SineWave::new(3.0, 0.8, 0.4);
        let samples = UniformSampler::new(25.0).sample(&wave, 0.0, 1.0);
        for s in &samples {
            assert_eq!(s.value, wave.eval(s.time));
        }
    }

    #[test]
    fn test_awkward_rate_boundary() {
        let wave = SineWave::new(1.0, 1.0, 0.0);
        // 3 Hz over 1 time unit: grid 0, 1/3, 2/3, 1. The last point sits
        // within tolerance of end_time and must be kept
        let samples = UniformSampler::new(3.0).sample(&wave, 0.0, 1.0);
        assert_eq!(samples.len(), 4);
    }
}
