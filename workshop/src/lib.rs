//! # PCM Workshop
//!
//! Educational exercises for learning Pulse Code Modulation with pcmlab.
//!
//! ## Getting Started Track
//!
//! - `pcm_basics`: one full pipeline run, with the sampled values,
//!   quantized values, and binary codes printed side by side
//! - `quantization_tradeoff`: measured SNR versus the 6.02·N + 1.76 dB
//!   rule of thumb as the level count grows
//! - `sampling_and_aliasing`: what the spectrum of a sampled sinusoid
//!   looks like above and below the Nyquist rate
//!
//! ## Running Exercises
//!
//! ```bash
//! cargo run -p pcmlab-workshop --example pcm_basics
//! cargo run -p pcmlab-workshop --example quantization_tradeoff
//! cargo run -p pcmlab-workshop --example sampling_and_aliasing
//! ```

pub use pcmlab_core;
