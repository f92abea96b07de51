//! # PCM Basics Example
//!
//! Runs the full pipeline once and prints every stage of the conversion:
//! sampled value, quantized value, error, and the binary PCM word.
//!
//! Run with: cargo run -p pcmlab-workshop --example pcm_basics

use pcmlab_core::observe::{init_logging, LogConfig};
use pcmlab_core::{generate, SignalParameters};

fn main() {
    init_logging(&LogConfig::default());

    let params = SignalParameters::builder()
        .frequency(1.0)
        .amplitude(1.0)
        .phase_degrees(0.0)
        .sampling_rate(10.0)
        .quantization_levels(8)
        .time_span(0.0, 1.0)
        .build()
        .expect("parameters are valid");

    println!("=== PCM Basics ===");
    println!("Signal: {} Hz sine, amplitude {}", params.frequency, params.amplitude);
    println!("Sampling rate: {} Hz (Nyquist rate is {} Hz)", params.sampling_rate, params.nyquist_rate());
    println!("Quantization levels: {}", params.quantization_levels);
    println!();

    let result = generate(&params).expect("pipeline run");

    println!("Analog trace points: {}", result.analog.len());
    println!("Samples: {}", result.sampled.len());
    println!("Bits per sample: {}", result.bits_per_sample);
    println!();

    println!("{:>6} {:>9} {:>10} {:>9} {:>7}", "t", "sampled", "quantized", "error", "code");
    for i in 0..result.sampled.len() {
        println!(
            "{:>6.2} {:>9.4} {:>10.4} {:>9.4} {:>7}",
            result.sampled[i].time,
            result.sampled[i].value,
            result.quantized[i].value,
            result.error[i].value,
            result.codes[i],
        );
    }
    println!();

    let stream: Vec<String> = result.codes.iter().map(|c| c.bits.clone()).collect();
    println!("PCM bit stream: {}", stream.join(" "));
    println!("SNR: {:.2} dB", result.snr_db);
}
