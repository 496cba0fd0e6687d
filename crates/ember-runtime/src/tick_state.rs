//! Previous/current double buffer for sub-tick presentation.
//!
//! Simulation writes `current` once per fixed tick after shifting the old
//! value into `previous`. Rendering never reads `current` directly; it asks
//! for a blend at the presentation alpha supplied by the frame loop.

use ember_core::{lerp_color, lerp_f32, Color, Vec2};
use std::f32::consts::{PI, TAU};

/// Types that can be blended between two consecutive tick values.
pub trait Interpolate: Clone {
    /// Blend from `self` (alpha = 0) towards `other` (alpha = 1).
    fn interpolate(&self, other: &Self, alpha: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, alpha: f32) -> Self {
        lerp_f32(*self, *other, alpha)
    }
}

impl Interpolate for Vec2 {
    fn interpolate(&self, other: &Self, alpha: f32) -> Self {
        self.lerp(*other, alpha)
    }
}

impl Interpolate for Color {
    fn interpolate(&self, other: &Self, alpha: f32) -> Self {
        lerp_color(*self, *other, alpha)
    }
}

/// Wrap an angle in radians into (−π, π].
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// An angle in radians that interpolates along the shortest arc.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angle(pub f32);

impl Angle {
    pub fn radians(&self) -> f32 {
        self.0
    }
}

impl Interpolate for Angle {
    fn interpolate(&self, other: &Self, alpha: f32) -> Self {
        let delta = wrap_angle(other.0 - self.0);
        Angle(wrap_angle(self.0 + delta * alpha))
    }
}

impl From<f32> for Angle {
    fn from(radians: f32) -> Self {
        Angle(radians)
    }
}

/// Double-buffered value holding the two most recent simulation ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct TickState<T> {
    previous: T,
    current: T,
}

impl<T: Interpolate> TickState<T> {
    /// Both buffers start equal so the first rendered frame cannot pop.
    pub fn new(initial: T) -> Self {
        Self {
            previous: initial.clone(),
            current: initial,
        }
    }

    /// Shift `current` into `previous`. Call exactly once at the start of a
    /// tick, before computing the new `current`.
    pub fn commit(&mut self) {
        self.previous = self.current.clone();
    }

    /// Replace the current value without touching `previous`.
    pub fn set(&mut self, value: T) {
        self.current = value;
    }

    /// `commit` followed by `set`.
    pub fn advance(&mut self, value: T) {
        self.commit();
        self.set(value);
    }

    /// Set both buffers to `value` (session start, teleports).
    pub fn reset(&mut self, value: T) {
        self.previous = value.clone();
        self.current = value;
    }

    pub fn previous(&self) -> &T {
        &self.previous
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    /// Blend between the last two ticks. Alpha is clamped to [0, 1]; the
    /// endpoints return the stored values exactly.
    pub fn interpolate(&self, alpha: f32) -> T {
        if alpha.is_nan() || alpha <= 0.0 {
            self.previous.clone()
        } else if alpha >= 1.0 {
            self.current.clone()
        } else {
            self.previous.interpolate(&self.current, alpha)
        }
    }
}

impl<T: Interpolate + Default> Default for TickState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
