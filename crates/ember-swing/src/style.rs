//! Trail appearance as pure functions of path progress.
//!
//! Nothing here draws. `build_strip` turns a resampled path into vertices
//! carrying width, colour and a normal, ready for an external renderer to
//! extrude into a triangle strip.

use ember_core::spline::direction_or;
use ember_core::{lerp_color, lerp_f32, Color, Vec2};
use serde::Serialize;

/// Width and colour along a trail. `progress` is 0 at the oldest end of the
/// path and 1 at the newest, and is always inside [0, 1].
pub trait TrailStyle {
    fn width(&self, progress: f32) -> f32;
    fn color(&self, progress: f32) -> Color;
}

/// Linear ramps from tail to head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientTrailStyle {
    pub width_start: f32,
    pub width_end: f32,
    pub color_start: Color,
    pub color_end: Color,
}

impl Default for GradientTrailStyle {
    fn default() -> Self {
        Self {
            width_start: 0.0,
            width_end: 12.0,
            color_start: Color::TRANSPARENT,
            color_end: Color::new(1.0, 0.8, 0.4, 1.0),
        }
    }
}

impl TrailStyle for GradientTrailStyle {
    fn width(&self, progress: f32) -> f32 {
        lerp_f32(self.width_start, self.width_end, progress)
    }

    fn color(&self, progress: f32) -> Color {
        lerp_color(self.color_start, self.color_end, progress)
    }
}

/// Style backed by two caller-supplied closures.
pub struct FnTrailStyle<W, C> {
    pub width: W,
    pub color: C,
}

impl<W, C> FnTrailStyle<W, C>
where
    W: Fn(f32) -> f32,
    C: Fn(f32) -> Color,
{
    pub fn new(width: W, color: C) -> Self {
        Self { width, color }
    }
}

impl<W, C> TrailStyle for FnTrailStyle<W, C>
where
    W: Fn(f32) -> f32,
    C: Fn(f32) -> Color,
{
    fn width(&self, progress: f32) -> f32 {
        (self.width)(progress)
    }

    fn color(&self, progress: f32) -> Color {
        (self.color)(progress)
    }
}

/// One vertex of a renderable trail strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StripVertex {
    pub position: Vec2,
    /// Unit direction of travel at this vertex
    pub forward: Vec2,
    /// Unit normal (forward rotated a quarter turn counter-clockwise)
    pub normal: Vec2,
    pub progress: f32,
    pub width: f32,
    pub color: Color,
}

impl StripVertex {
    /// The two strip edges, offset by half the width on either side.
    pub fn edges(&self) -> (Vec2, Vec2) {
        let half = self.normal * (self.width * 0.5);
        (self.position + half, self.position - half)
    }
}

/// Evaluate `style` once per path vertex.
pub fn build_strip<S: TrailStyle + ?Sized>(path: &[Vec2], style: &S) -> Vec<StripVertex> {
    let n = path.len();
    let mut forward = Vec2::X;
    let mut strip = Vec::with_capacity(n);

    for (i, &position) in path.iter().enumerate() {
        let progress = if n > 1 {
            (i as f32 / (n - 1) as f32).clamp(0.0, 1.0)
        } else {
            1.0
        };
        forward = if i + 1 < n {
            direction_or(position, path[i + 1], forward)
        } else if i > 0 {
            direction_or(path[i - 1], position, forward)
        } else {
            forward
        };

        strip.push(StripVertex {
            position,
            forward,
            normal: forward.perp(),
            progress,
            width: style.width(progress),
            color: style.color(progress),
        });
    }
    strip
}
