//! Dense trail paths from sparse per-tick samples.
//!
//! The trail holds one point per simulation tick, which looks faceted when
//! drawn directly during a fast swing. Resampling runs a clamped
//! Catmull-Rom spline through the recorded positions (parameterised by
//! index) and emits a fixed number of evenly spaced parameter samples.

use crate::trail::TrailBuffer;
use ember_core::spline::sample_open_clamped;
use ember_core::Vec2;

/// Resampler with a reusable scratch buffer for the control points.
#[derive(Debug, Default)]
pub struct SplineResampler {
    controls: Vec<Vec2>,
}

impl SplineResampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resample the trail's positions into `output_count` points, oldest
    /// first. The trail must hold at least two points; callers check
    /// `len() >= 2` and skip drawing otherwise.
    pub fn resample(&mut self, trail: &TrailBuffer, output_count: usize) -> Vec<Vec2> {
        let mut out = Vec::with_capacity(output_count);
        self.resample_into(trail, output_count, &mut out);
        out
    }

    /// Like `resample`, writing into a caller-owned buffer.
    pub fn resample_into(&mut self, trail: &TrailBuffer, output_count: usize, out: &mut Vec<Vec2>) {
        trail.positions_into(&mut self.controls);
        resample_points_into(&self.controls, output_count, out);
    }
}

/// Resample a polyline of at least two points into `output_count` points.
pub fn resample_points(points: &[Vec2], output_count: usize) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(output_count);
    resample_points_into(points, output_count, &mut out);
    out
}

/// Resample into `out` (cleared first).
///
/// Fewer than two input points is a caller error: it asserts in debug
/// builds and yields an empty path otherwise. An `output_count` of 1
/// yields the oldest point.
pub fn resample_points_into(points: &[Vec2], output_count: usize, out: &mut Vec<Vec2>) {
    out.clear();
    debug_assert!(
        points.len() >= 2,
        "resampling needs at least 2 trail points, got {}",
        points.len()
    );
    if points.len() < 2 || output_count == 0 {
        return;
    }
    if output_count == 1 {
        out.push(points[0]);
        return;
    }

    let span = (points.len() - 1) as f32;
    let last = (output_count - 1) as f32;
    out.extend((0..output_count).map(|i| sample_open_clamped(points, i as f32 / last * span)));
}
