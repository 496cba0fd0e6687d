//! Piecewise eased curves over [0, 1].
//!
//! A curve is an ordered table of segments. Segment `i` covers
//! `[start_x[i], start_x[i + 1])` and the last one runs to 1. Inside a
//! segment the output is `start_y + lift * ease(local_t)`.

use crate::easing::EasingKind;
use ember_core::{EmberError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Progress is clamped to `1 - PROGRESS_EPSILON` before segment lookup so a
/// value of exactly 1 never searches past the last segment.
pub const PROGRESS_EPSILON: f32 = 1e-4;

/// Largest polynomial power accepted from data files.
pub const MAX_POWER: f32 = 16.0;

fn default_power() -> f32 {
    1.0
}

/// One piece of a piecewise curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    /// Easing shape applied to the segment-local progress
    #[serde(default)]
    pub easing: EasingKind,
    /// Progress at which this segment begins
    pub start_x: f32,
    /// Output value at the start of the segment
    pub start_y: f32,
    /// Output change across the segment (may be negative)
    pub lift: f32,
    /// Exponent for the polynomial easings
    #[serde(default = "default_power")]
    pub power: f32,
}

impl CurveSegment {
    pub const fn new(easing: EasingKind, start_x: f32, start_y: f32, lift: f32) -> Self {
        Self {
            easing,
            start_x,
            start_y,
            lift,
            power: 1.0,
        }
    }

    pub const fn with_power(mut self, power: f32) -> Self {
        self.power = power;
        self
    }

    /// Output value at the end of the segment.
    pub fn end_y(&self) -> f32 {
        self.start_y + self.lift
    }

    /// Output at segment-local progress `local_t`.
    #[inline]
    pub fn evaluate_local(&self, local_t: f32) -> f32 {
        self.start_y + self.lift * self.easing.evaluate(local_t, self.power)
    }
}

/// An immutable, named, ordered list of curve segments.
///
/// Built either from a `'static` table (stock curves, no allocation) or from
/// owned segments loaded at runtime. Neither is mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PiecewiseCurve {
    name: Cow<'static, str>,
    segments: Cow<'static, [CurveSegment]>,
}

impl PiecewiseCurve {
    /// Build and validate a curve from owned segments.
    pub fn new(name: impl Into<String>, segments: Vec<CurveSegment>) -> Result<Self> {
        let curve = Self {
            name: Cow::Owned(name.into()),
            segments: Cow::Owned(segments),
        };
        curve.validate()?;
        Ok(curve)
    }

    /// Wrap a static segment table. Not validated here; stock tables are
    /// checked by unit tests.
    pub const fn from_static(name: &'static str, segments: &'static [CurveSegment]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            segments: Cow::Borrowed(segments),
        }
    }

    /// Check the ordering and range invariants.
    pub fn validate(&self) -> Result<()> {
        let Some(first) = self.segments.first() else {
            return Err(EmberError::Curve(format!("curve '{}' has no segments", self.name)));
        };
        if first.start_x != 0.0 {
            return Err(EmberError::Curve(format!(
                "curve '{}' must start at x = 0, first segment starts at {}",
                self.name, first.start_x
            )));
        }

        let mut prev_x = 0.0;
        for (i, seg) in self.segments.iter().enumerate() {
            let finite = [seg.start_x, seg.start_y, seg.lift, seg.power]
                .iter()
                .all(|v| v.is_finite());
            if !finite {
                return Err(EmberError::Curve(format!(
                    "curve '{}' segment {} has a non-finite value",
                    self.name, i
                )));
            }
            if !(0.0..1.0).contains(&seg.start_x) {
                return Err(EmberError::out_of_range(
                    format!("{}.segments[{}].start_x", self.name, i),
                    0.0,
                    1.0,
                    seg.start_x as f64,
                ));
            }
            if seg.start_x < prev_x {
                return Err(EmberError::Curve(format!(
                    "curve '{}' segment {} starts at {} before the previous segment ({})",
                    self.name, i, seg.start_x, prev_x
                )));
            }
            if !(1.0..=MAX_POWER).contains(&seg.power) {
                return Err(EmberError::out_of_range(
                    format!("{}.segments[{}].power", self.name, i),
                    1.0,
                    MAX_POWER as f64,
                    seg.power as f64,
                ));
            }
            prev_x = seg.start_x;
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// Output at progress 0.
    pub fn initial_value(&self) -> f32 {
        self.evaluate(0.0)
    }

    /// Output at progress ≥ 1: the last segment's `start_y + lift`, or 0
    /// for an empty curve.
    pub fn terminal_value(&self) -> f32 {
        self.segments.last().map_or(0.0, CurveSegment::end_y)
    }

    /// The x-range `[start, end)` covered by segment `index`.
    pub fn segment_range(&self, index: usize) -> Option<(f32, f32)> {
        let seg = self.segments.get(index)?;
        let end = self.segments.get(index + 1).map_or(1.0, |next| next.start_x);
        Some((seg.start_x, end))
    }

    /// Index of the segment that `progress` falls in, after clamping.
    /// `None` for progress ≥ 1 (terminal value) or an empty curve.
    pub fn segment_index(&self, progress: f32) -> Option<usize> {
        if progress >= 1.0 {
            return None;
        }
        self.locate(clamp_progress(progress)).map(|(index, _)| index)
    }

    /// Evaluate the curve at `progress`. Out-of-range input is clamped;
    /// progress ≥ 1 returns `terminal_value()` without easing.
    pub fn evaluate(&self, progress: f32) -> f32 {
        if progress >= 1.0 {
            return self.terminal_value();
        }
        match self.locate(clamp_progress(progress)) {
            Some((index, local_t)) => self.segments[index].evaluate_local(local_t),
            None => self.terminal_value(),
        }
    }

    /// Find the active segment and the local progress inside it. Zero-width
    /// segments (repeated `start_x`) are skipped.
    fn locate(&self, progress: f32) -> Option<(usize, f32)> {
        for (index, seg) in self.segments.iter().enumerate() {
            let end = self.segments.get(index + 1).map_or(1.0, |next| next.start_x);
            let width = end - seg.start_x;
            if width <= 0.0 {
                continue;
            }
            if progress >= seg.start_x && progress < end {
                return Some((index, (progress - seg.start_x) / width));
            }
        }
        None
    }
}

/// Clamp into [0, 1 - ε]. NaN maps to 0.
fn clamp_progress(progress: f32) -> f32 {
    progress.max(0.0).min(1.0 - PROGRESS_EPSILON)
}
