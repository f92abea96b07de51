//! The PCM Pipeline
//!
//! Composes the five processing stages into the single entry point,
//! [`generate`], and defines the aggregate [`PipelineResult`] record a
//! display host consumes.
//!
//! ## Signal flow
//!
//! ```text
//! SignalParameters
//!       │
//!       ▼
//!   SineWave ────────────► AnalogTrace ──► analog (display only)
//!       │
//!       ▼
//!  UniformSampler ──► sampled ─┬─► UniformQuantizer ──► quantized
//!                              │          │
//!                              │          ├─► PcmEncoder ──► codes
//!                              │          ▼
//!                              │   zero_order_hold ──► reconstructed
//!                              │          │
//!                              └──────────┴─► error, SNR
//! ```
//!
//! Each invocation is synchronous, pure, and independent: identical
//! parameters produce bit-identical results, and nothing is cached between
//! runs. Hosts that recompute on every parameter change simply replace the
//! previous result value.
//!
//! # Example
//!
//! ```rust
//! use pcmlab_core::params::SignalParameters;
//! use pcmlab_core::pipeline::generate;
//!
//! let params = SignalParameters::builder()
//!     .sampling_rate(10.0)
//!     .quantization_levels(4)
//!     .time_span(0.0, 1.0)
//!     .build()
//!     .unwrap();
//!
//! let result = generate(&params).unwrap();
//! assert_eq!(result.sampled.len(), 11);
//! assert_eq!(result.codes[0].bits, "10");
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::analog_trace::AnalogTrace;
use crate::params::SignalParameters;
use crate::pcm_encoder::PcmEncoder;
use crate::quantization_noise::{error_sequence, snr_db};
use crate::quantizer::UniformQuantizer;
use crate::sampler::UniformSampler;
use crate::types::{PcmCode, PcmResult, TimedSample};
use crate::waveform::SineWave;
use crate::zero_order_hold::hold;

/// Everything one pipeline run produces, consumed read-only by the display
/// host and discarded on the next parameter change.
///
/// Alignment guarantee: `sampled[i]`, `quantized[i]`, `error[i]` and
/// `codes[i]` all describe the same logical sample, on the same time axis.
/// The `analog` and `reconstructed` traces are display geometry and follow
/// their own point layouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    /// Dense trace of the continuous waveform (display only).
    pub analog: Vec<TimedSample>,
    /// Uniform-grid samples of the waveform.
    pub sampled: Vec<TimedSample>,
    /// Midpoint-quantized samples, same time axis as `sampled`.
    pub quantized: Vec<TimedSample>,
    /// Zero-order-hold staircase built from `quantized`.
    pub reconstructed: Vec<TimedSample>,
    /// Per-sample quantization error, same time axis as `sampled`.
    pub error: Vec<TimedSample>,
    /// Fixed-width binary word per sample, parallel to `sampled`.
    pub codes: Vec<PcmCode>,
    /// Signal-to-noise ratio in dB; `±∞` sentinels for the degenerate
    /// cases, never `NaN`.
    pub snr_db: f64,
    /// Code width used for this run.
    pub bits_per_sample: usize,
    /// Echo of the input amplitude, for axis scaling.
    pub amplitude: f64,
    /// Echo of the window start.
    pub start_time: f64,
    /// Echo of the window end.
    pub end_time: f64,
}

/// Run the full PCM pipeline for one parameter set.
///
/// Validates the parameters first and fails fast with an error naming the
/// offending field; no partial result is ever returned. Within a successful
/// run every numeric edge (range clamping, boundary sample counts, terminal
/// points) is resolved by the specified policies of the individual stages
/// and never surfaces as an error.
pub fn generate(params: &SignalParameters) -> PcmResult<PipelineResult> {
    params.validate()?;

    if params.sampling_rate < params.nyquist_rate() {
        warn!(
            sampling_rate = params.sampling_rate,
            nyquist_rate = params.nyquist_rate(),
            "sampling below the Nyquist rate; the sampled signal will alias"
        );
    }

    let wave = SineWave::from_params(params);
    let analog = AnalogTrace::default().render(&wave, params.start_time, params.end_time);

    let sampler = UniformSampler::new(params.sampling_rate);
    let sampled = sampler.sample(&wave, params.start_time, params.end_time);

    let quantizer = UniformQuantizer::new(params.amplitude, params.quantization_levels);
    let encoder = PcmEncoder::new(params.quantization_levels);

    let mut quantized = Vec::with_capacity(sampled.len());
    let mut codes = Vec::with_capacity(sampled.len());
    for s in &sampled {
        let index = quantizer.index_of(s.value);
        quantized.push(TimedSample::new(s.time, quantizer.level_value(index)));
        codes.push(encoder.encode(index));
    }

    let error = error_sequence(&sampled, &quantized);
    let reconstructed = hold(
        &quantized,
        params.start_time,
        params.end_time,
        sampler.interval(),
    );
    let snr = snr_db(&sampled, &error);

    debug!(
        analog_points = analog.len(),
        samples = sampled.len(),
        levels = params.quantization_levels,
        bits_per_sample = encoder.width(),
        snr_db = snr,
        "pipeline run complete"
    );

    Ok(PipelineResult {
        analog,
        sampled,
        quantized,
        reconstructed,
        error,
        codes,
        snr_db: snr,
        bits_per_sample: encoder.width(),
        amplitude: params.amplitude,
        start_time: params.start_time,
        end_time: params.end_time,
    })
}
