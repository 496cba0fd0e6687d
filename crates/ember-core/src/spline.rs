//! Pure spline math: Catmull-Rom evaluation over index-parameterised paths.
//!
//! Open paths use clamped control points: the endpoints are duplicated, so
//! the curve never extrapolates beyond the first or last recorded point.

use crate::Vec2;

/// Catmull-Rom spline interpolation between four points.
///
/// Evaluates the segment between `p1` and `p2`; `p0` and `p3` only shape
/// the tangents.
pub fn catmull_rom(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Gather the four control points around `segment` with indices clamped to
/// the valid range.
pub fn clamped_controls(points: &[Vec2], segment: usize) -> [Vec2; 4] {
    let last = points.len() - 1;
    let at = |i: isize| points[i.clamp(0, last as isize) as usize];
    let s = segment as isize;
    [at(s - 1), at(s), at(s + 1), at(s + 2)]
}

/// Evaluate an open, clamped Catmull-Rom path at index parameter `t`,
/// where `t = 0` is the first point and `t = len - 1` is the last.
///
/// `points` must hold at least two entries.
pub fn sample_open_clamped(points: &[Vec2], t: f32) -> Vec2 {
    let max_segment = points.len() - 2;
    let t = t.clamp(0.0, (points.len() - 1) as f32);
    // The final sample stays on the last segment with local t = 1 so it lands
    // exactly on the last point.
    let segment = (t.floor() as usize).min(max_segment);
    let local_t = t - segment as f32;
    let [p0, p1, p2, p3] = clamped_controls(points, segment);
    catmull_rom(p0, p1, p2, p3, local_t)
}

/// Unit direction from `a` towards `b`, or `fallback` when they coincide.
pub fn direction_or(a: Vec2, b: Vec2, fallback: Vec2) -> Vec2 {
    (b - a).try_normalize().unwrap_or(fallback)
}
