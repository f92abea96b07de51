//! # Sampling and Aliasing Example
//!
//! Samples the same 9 Hz sinusoid well above and just below the Nyquist
//! rate and prints the spectral peak of each sampled sequence. Below
//! Nyquist the tone folds to a different frequency: aliasing made visible.
//!
//! Run with: cargo run -p pcmlab-workshop --example sampling_and_aliasing

use pcmlab_core::spectrum::magnitude_spectrum;
use pcmlab_core::{generate, SignalParameters};

fn peak_frequency(spectrum: &[pcmlab_core::TimedSample]) -> f64 {
    spectrum
        .iter()
        .max_by(|a, b| a.value.total_cmp(&b.value))
        .map(|s| s.time)
        .unwrap_or(0.0)
}

fn main() {
    println!("=== Sampling and Aliasing ===");
    println!("Signal: 9 Hz sine. Nyquist rate: 18 Hz.");
    println!();

    for sampling_rate in [100.0, 48.0, 12.0] {
        let params = SignalParameters::builder()
            .frequency(9.0)
            .amplitude(1.0)
            .sampling_rate(sampling_rate)
            .quantization_levels(256)
            .time_span(0.0, 4.0)
            .build()
            .expect("parameters are valid");

        let result = generate(&params).expect("pipeline run");
        let spectrum = magnitude_spectrum(&result.sampled, sampling_rate);
        let peak = peak_frequency(&spectrum);

        let verdict = if sampling_rate >= params.nyquist_rate() {
            "ok"
        } else {
            "ALIASED"
        };
        println!(
            "sampled at {:>5.1} Hz -> spectral peak at {:>5.2} Hz  [{}]",
            sampling_rate, peak, verdict
        );
    }

    println!();
    println!("At 12 Hz the 9 Hz tone shows up at 12 - 9 = 3 Hz: once the");
    println!("rate drops below twice the signal frequency, the samples are");
    println!("indistinguishable from a slower sinusoid's.");
}
