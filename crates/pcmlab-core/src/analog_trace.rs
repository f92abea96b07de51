//! Analog Display Trace
//!
//! Renders a dense sequence of points approximating the continuous waveform
//! over the observation window. The trace exists purely so a display host
//! can draw a smooth curve; no later pipeline stage reads it, and it never
//! shares timing with the sample grid.
//!
//! The density targets ~200 points per signal cycle with a floor of 500
//! points, so low-frequency or short-window inputs still plot smoothly.
//!
//! # Example
//!
//! ```rust
//! use pcmlab_core::analog_trace::AnalogTrace;
//! use pcmlab_core::waveform::SineWave;
//!
//! let wave = SineWave::new(1.0, 1.0, 0.0);
//! let trace = AnalogTrace::default().render(&wave, 0.0, 1.0);
//!
//! assert!(trace.len() >= 500);
//! assert_eq!(trace.first().unwrap().time, 0.0);
//! assert!((trace.last().unwrap().time - 1.0).abs() <= 1e-9);
//! ```

use crate::types::{TimedSample, TIME_EPS};
use crate::waveform::SineWave;

/// Default floor on the number of trace points.
pub const MIN_TRACE_POINTS: usize = 500;

/// Default point density per signal cycle.
pub const POINTS_PER_CYCLE: f64 = 200.0;

/// Dense-trace renderer with configurable density.
///
/// The defaults match the standard teaching display; a host with a wider
/// canvas can raise them without touching the point-count formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogTrace {
    /// Minimum number of points regardless of frequency and duration.
    pub min_points: usize,
    /// Target points per signal cycle.
    pub points_per_cycle: f64,
}

impl Default for AnalogTrace {
    fn default() -> Self {
        Self {
            min_points: MIN_TRACE_POINTS,
            points_per_cycle: POINTS_PER_CYCLE,
        }
    }
}

impl AnalogTrace {
    /// Number of points rendered for a window of `duration` at `frequency`.
    pub fn point_count(&self, frequency: f64, duration: f64) -> usize {
        let per_cycles = (duration * frequency * self.points_per_cycle).ceil() as usize;
        per_cycles.max(self.min_points)
    }

    /// Render the dense trace over `[start_time, end_time]`.
    ///
    /// Points are evenly spaced by `duration / (point_count - 1)`. The final
    /// point is patched by [`append_terminal_point`] so the curve visually
    /// reaches `end_time` even when step arithmetic falls short of it.
    pub fn render(&self, wave: &SineWave, start_time: f64, end_time: f64) -> Vec<TimedSample> {
        let duration = end_time - start_time;
        let count = self.point_count(wave.frequency, duration);
        let step = duration / (count - 1) as f64;

        let mut points = Vec::with_capacity(count + 1);
        for i in 0..count {
            let t = start_time + i as f64 * step;
            points.push(TimedSample::new(t, wave.eval(t)));
        }
        append_terminal_point(&mut points, wave, end_time);
        points
    }
}

/// Append an explicit point at `end_time` if the trace stops short of it by
/// more than [`TIME_EPS`]. Guards against visual truncation of the curve;
/// the sampling grid is unaffected.
fn append_terminal_point(points: &mut Vec<TimedSample>, wave: &SineWave, end_time: f64) {
    if let Some(last) = points.last() {
        if end_time - last.time > TIME_EPS {
            points.push(TimedSample::new(end_time, wave.eval(end_time)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_applies_to_short_windows() {
        let trace = AnalogTrace::default();
        // 0.01 cycles worth of window would be 2 points without the floor
        assert_eq!(trace.point_count(1.0, 0.01), MIN_TRACE_POINTS);
    }

    #[test]
    fn test_density_scales_with_cycles() {
        let trace = AnalogTrace::default();
        // 10 cycles at 200 points/cycle
        assert_eq!(trace.point_count(5.0, 2.0), 2000);
    }

    #[test]
    fn test_trace_spans_window() {
        let wave = SineWave::new(3.0, 1.0, 0.0);
        let points = AnalogTrace::default().render(&wave, 0.5, 2.5);

        assert_eq!(points.first().unwrap().time, 0.5);
        assert!((points.last().unwrap().time - 2.5).abs() <= TIME_EPS);

        // strictly non-decreasing time axis
        for pair in points.windows(2) {
            assert!(pair[1].time >= pair[0].time);
        }
    }

    #[test]
    fn test_values_match_evaluator() {
        let wave = SineWave::new(2.0, 1.5, 0.7);
        let points = AnalogTrace::default().render(&wave, 0.0, 1.0);
        for p in &points {
            assert_eq!(p.value, wave.eval(p.time));
        }
    }

    #[test]
    fn test_no_duplicate_terminal_point() {
        // duration 1.0 over 500 points lands the last point on end_time
        // exactly or within tolerance, so no patch point should be added
        let wave = SineWave::new(1.0, 1.0, 0.0);
        let points = AnalogTrace::default().render(&wave, 0.0, 1.0);
        let n = points.len();
        assert!(n == 500 || n == 501);
        if n == 501 {
            assert!(points[500].time - points[499].time > TIME_EPS);
        }
    }
}
