//! # PCM Teaching Pipeline
//!
//! This crate implements the classic Pulse Code Modulation chain as a pure,
//! deterministic pipeline, built for teaching: every intermediate stage is
//! returned as plottable data, so a display host can show how a continuous
//! sinusoid becomes a sampled, quantized, binary-coded digital signal, and
//! how well a zero-order hold reconstructs it.
//!
//! ## Signal Flow
//!
//! ```text
//! parameters → sine evaluator ─┬→ dense analog trace        (display)
//!                              └→ uniform sampler
//!                                       │
//!                                       ▼
//!                              midpoint quantizer → binary encoder
//!                                       │
//!                                       ▼
//!                     ZOH reconstruction, error trace, SNR
//! ```
//!
//! The whole run is synchronous and free of shared state: identical
//! parameters give bit-identical results, and concurrent runs for different
//! parameters are independent.
//!
//! ## Example
//!
//! ```rust
//! use pcmlab_core::{generate, SignalParameters};
//!
//! let params = SignalParameters::builder()
//!     .frequency(1.0)
//!     .amplitude(1.0)
//!     .sampling_rate(10.0)
//!     .quantization_levels(4)
//!     .time_span(0.0, 1.0)
//!     .build()
//!     .unwrap();
//!
//! let result = generate(&params).unwrap();
//!
//! assert_eq!(result.sampled.len(), 11);
//! assert_eq!(result.bits_per_sample, 2);
//! println!("SNR: {:.1} dB, first code: {}", result.snr_db, result.codes[0]);
//! ```

pub mod analog_trace;
pub mod config;
pub mod observe;
pub mod params;
pub mod pcm_encoder;
pub mod pipeline;
pub mod quantization_noise;
pub mod quantizer;
pub mod sampler;
pub mod spectrum;
pub mod types;
pub mod waveform;
pub mod zero_order_hold;

pub use params::SignalParameters;
pub use pipeline::{generate, PipelineResult};
pub use types::{PcmCode, PcmError, PcmResult, TimedSample};
