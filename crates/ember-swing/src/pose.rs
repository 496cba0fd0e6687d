//! Pose derived from eased progress, and the anchor it hangs off.

use ember_core::{lerp_f32, Vec2};
use ember_runtime::{wrap_angle, Angle, Interpolate};
use serde::{Deserialize, Serialize};

/// What a renderer needs to place a weapon sprite for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pose {
    /// Orientation in radians, in (−π, π]
    pub angle: f32,
    pub scale: f32,
    /// Tip position in world space
    pub position: Vec2,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        angle: 0.0,
        scale: 1.0,
        position: Vec2::ZERO,
    };
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Interpolate for Pose {
    fn interpolate(&self, other: &Self, alpha: f32) -> Self {
        Self {
            angle: Angle(self.angle).interpolate(&Angle(other.angle), alpha).0,
            scale: lerp_f32(self.scale, other.scale, alpha),
            position: self.position.lerp(other.position, alpha),
        }
    }
}

/// Where the swing is held from, supplied by gameplay every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    pub position: Vec2,
    /// Base facing in radians; the swing arc is relative to this
    pub orientation: f32,
    /// Swing the arc in the opposite direction (actor facing left)
    pub mirrored: bool,
}

impl Anchor {
    pub fn new(position: Vec2, orientation: f32) -> Self {
        Self {
            position,
            orientation,
            mirrored: false,
        }
    }

    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }
}

/// Geometry of one swing: the arc swept relative to the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwingArc {
    /// Angle offset at eased progress 0
    pub start_angle: f32,
    /// Angle offset at eased progress 1
    pub end_angle: f32,
    /// Distance from anchor to tip at scale 1
    pub reach: f32,
    pub base_scale: f32,
}

impl Default for SwingArc {
    fn default() -> Self {
        Self {
            start_angle: -2.0,
            end_angle: 2.0,
            reach: 48.0,
            base_scale: 1.0,
        }
    }
}

impl SwingArc {
    /// Pose at `eased` progress. Eased values outside [0, 1] (anticipation,
    /// overshoot) extend the arc past its ends.
    pub fn pose(&self, anchor: &Anchor, eased: f32, scale_multiplier: f32) -> Pose {
        let mut offset = lerp_f32(self.start_angle, self.end_angle, eased);
        if anchor.mirrored {
            offset = -offset;
        }
        let angle = wrap_angle(anchor.orientation + offset);
        let scale = self.base_scale * scale_multiplier;
        Pose {
            angle,
            scale,
            position: anchor.position + Vec2::from_angle(angle) * self.reach * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn pose_at_start_and_end_of_arc() {
        let arc = SwingArc {
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
            reach: 10.0,
            base_scale: 1.0,
        };
        let anchor = Anchor::new(Vec2::new(5.0, 5.0), 0.0);

        let start = arc.pose(&anchor, 0.0, 1.0);
        assert!((start.position - Vec2::new(15.0, 5.0)).length() < 1e-4);

        let end = arc.pose(&anchor, 1.0, 1.0);
        assert!((end.angle - FRAC_PI_2).abs() < 1e-6);
        assert!((end.position - Vec2::new(5.0, 15.0)).length() < 1e-4);
    }

    #[test]
    fn mirrored_anchor_flips_the_arc() {
        let arc = SwingArc::default();
        let anchor = Anchor::new(Vec2::ZERO, 0.0);
        let right = arc.pose(&anchor, 0.25, 1.0);
        let left = arc.pose(&anchor.mirrored(true), 0.25, 1.0);
        assert!((right.angle + left.angle).abs() < 1e-6);
    }

    #[test]
    fn scale_multiplier_extends_reach() {
        let arc = SwingArc {
            base_scale: 2.0,
            ..SwingArc::default()
        };
        let anchor = Anchor::default();
        let pose = arc.pose(&anchor, 0.5, 1.5);
        assert!((pose.scale - 3.0).abs() < 1e-6);
        assert!((pose.position.length() - arc.reach * 3.0).abs() < 1e-3);
    }

    #[test]
    fn pose_interpolation_uses_short_arc() {
        let a = Pose {
            angle: 3.0,
            scale: 1.0,
            position: Vec2::ZERO,
        };
        let b = Pose {
            angle: -3.0,
            scale: 2.0,
            position: Vec2::new(2.0, 0.0),
        };
        let mid = a.interpolate(&b, 0.5);
        assert!(mid.angle.abs() > 3.0);
        assert!((mid.scale - 1.5).abs() < 1e-6);
        assert_eq!(mid.position, Vec2::new(1.0, 0.0));
    }
}
