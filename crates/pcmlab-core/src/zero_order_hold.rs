//! Zero-Order Hold Reconstruction
//!
//! Builds the staircase trace a DAC would produce from the quantized
//! samples: each value is held constant until the next sample arrives. The
//! trace is emitted as point pairs so that a display host drawing straight
//! lines between consecutive points gets the characteristic vertical step:
//! at each sample time the previous value closes its hold and the new value
//! opens the next one.
//!
//! ```text
//!  value
//!    ^           ┌──────x
//!    |    ┌──────┘
//!    x────┘      .
//!    |    .      .      . ── final hold extended toward end_time
//!    +----+------+------+------->  t
//!    t0   t1     t2
//! ```
//!
//! # Example
//!
//! ```rust
//! use pcmlab_core::types::TimedSample;
//! use pcmlab_core::zero_order_hold::hold;
//!
//! let quantized = vec![
//!     TimedSample::new(0.0, 0.25),
//!     TimedSample::new(0.1, 0.75),
//! ];
//! let trace = hold(&quantized, 0.0, 0.3, 0.1);
//!
//! // opening pair, step pair at t=0.1, extension of the final hold
//! assert_eq!(trace.len(), 5);
//! assert_eq!(trace[2].value, 0.25); // previous value closes at t=0.1
//! assert_eq!(trace[3].value, 0.75); // new value opens at t=0.1
//! assert_eq!(trace[4].time, 0.2);
//! ```

use crate::types::{TimedSample, TIME_EPS};

/// Build the ZOH staircase over the quantized sequence.
///
/// First-segment policy: the uniform sampler always places sample 0 at
/// `start_time`, in which case the opening emits two identical points (a
/// harmless degenerate step, kept so every sample time carries exactly two
/// trace points). If a caller supplies a grid whose first sample sits after
/// `start_time`, only the single opening point is emitted and the trace
/// starts at that sample; the window before it is left unreconstructed.
///
/// After the last sample the final hold is extended to
/// `min(end_time, last_time + sampling_interval)` when that lies more than
/// [`TIME_EPS`] past the last sample, so the staircase visually spans to
/// (or toward) the end of the window instead of stopping mid-air.
pub fn hold(
    quantized: &[TimedSample],
    start_time: f64,
    end_time: f64,
    sampling_interval: f64,
) -> Vec<TimedSample> {
    let mut trace = Vec::with_capacity(quantized.len() * 2 + 1);

    for (i, sample) in quantized.iter().enumerate() {
        if i == 0 {
            if (sample.time - start_time).abs() <= TIME_EPS {
                trace.push(*sample);
            }
            trace.push(*sample);
        } else {
            trace.push(TimedSample::new(sample.time, quantized[i - 1].value));
            trace.push(*sample);
        }
    }

    if let Some(last) = quantized.last() {
        let final_time = end_time.min(last.time + sampling_interval);
        if final_time - last.time > TIME_EPS {
            trace.push(TimedSample::new(final_time, last.value));
        }
    }

    trace
}
