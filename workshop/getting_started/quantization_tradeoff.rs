//! # Quantization Trade-off Example
//!
//! More levels mean longer codes and a higher bit rate, but finer amplitude
//! resolution. This exercise measures the SNR of the same signal at growing
//! level counts and compares it against the 6.02·N + 1.76 dB rule of thumb.
//!
//! Run with: cargo run -p pcmlab-workshop --example quantization_tradeoff

use pcmlab_core::quantization_noise::theoretical_snr_db;
use pcmlab_core::{generate, SignalParameters};

fn main() {
    println!("=== Quantization Trade-off ===");
    println!("Full-scale 1 Hz sine, sampled at 1 kHz for 1 s");
    println!();
    println!(
        "{:>7} {:>5} {:>13} {:>15} {:>10}",
        "levels", "bits", "measured dB", "theoretical dB", "bit rate"
    );

    for bits in 1..=12 {
        let levels = 1usize << bits;
        let params = SignalParameters::builder()
            .frequency(1.0)
            .amplitude(1.0)
            .sampling_rate(1000.0)
            .quantization_levels(levels)
            .time_span(0.0, 1.0)
            .build()
            .expect("parameters are valid");

        let result = generate(&params).expect("pipeline run");

        println!(
            "{:>7} {:>5} {:>13.2} {:>15.2} {:>10.0}",
            levels,
            result.bits_per_sample,
            result.snr_db,
            theoretical_snr_db(bits),
            result.bits_per_sample as f64 * params.sampling_rate,
        );
    }

    println!();
    println!("Each extra bit buys roughly 6 dB of SNR and costs");
    println!("one more bit per sample on the wire.");
}
