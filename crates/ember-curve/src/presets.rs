//! Stock swing curves.
//!
//! Each table reads left to right as the phases of one swing. Adjacent
//! segments join without a jump: every `start_y` equals the previous
//! segment's `start_y + lift`.

use crate::easing::EasingKind::*;
use crate::piecewise::{CurveSegment, PiecewiseCurve};

/// Slow wind-up, accelerating snap, fast linear sweep, braking, settle.
pub const STANDARD_SWING_SEGMENTS: [CurveSegment; 5] = [
    CurveSegment::new(SineIn, 0.0, 0.0, 0.05),
    CurveSegment::new(PolyIn, 0.15, 0.05, 0.15).with_power(3.0),
    CurveSegment::new(Linear, 0.30, 0.20, 0.55),
    CurveSegment::new(PolyOut, 0.60, 0.75, 0.18).with_power(2.0),
    CurveSegment::new(SineOut, 0.80, 0.93, 0.07),
];

/// Long anticipation pull-back, then a hard snap that overshoots and settles.
pub const HEAVY_SWING_SEGMENTS: [CurveSegment; 4] = [
    CurveSegment::new(SineOut, 0.0, 0.0, -0.08),
    CurveSegment::new(PolyIn, 0.25, -0.08, 0.48).with_power(4.0),
    CurveSegment::new(PolyOut, 0.50, 0.40, 0.66).with_power(3.0),
    CurveSegment::new(SineIn, 0.80, 1.06, -0.06),
];

/// Almost no wind-up; most of the arc is covered in the first half.
pub const QUICK_SLASH_SEGMENTS: [CurveSegment; 3] = [
    CurveSegment::new(PolyIn, 0.0, 0.0, 0.10).with_power(2.0),
    CurveSegment::new(ExpOut, 0.10, 0.10, 0.85),
    CurveSegment::new(SineOut, 0.55, 0.95, 0.05),
];

const LINEAR_SEGMENTS: [CurveSegment; 1] = [CurveSegment::new(Linear, 0.0, 0.0, 1.0)];

pub const STANDARD_SWING: PiecewiseCurve =
    PiecewiseCurve::from_static("standard_swing", &STANDARD_SWING_SEGMENTS);
pub const HEAVY_SWING: PiecewiseCurve =
    PiecewiseCurve::from_static("heavy_swing", &HEAVY_SWING_SEGMENTS);
pub const QUICK_SLASH: PiecewiseCurve =
    PiecewiseCurve::from_static("quick_slash", &QUICK_SLASH_SEGMENTS);
pub const LINEAR: PiecewiseCurve = PiecewiseCurve::from_static("linear", &LINEAR_SEGMENTS);

/// All stock curves, in display order.
pub fn all() -> [PiecewiseCurve; 4] {
    [STANDARD_SWING, HEAVY_SWING, QUICK_SLASH, LINEAR]
}

/// Look up a stock curve by name.
pub fn preset(name: &str) -> Option<PiecewiseCurve> {
    all().into_iter().find(|curve| curve.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn presets_are_valid() {
        for curve in all() {
            curve.validate().unwrap();
        }
    }

    #[test]
    fn preset_boundaries() {
        for curve in all() {
            let first = curve.segments()[0];
            let last = curve.segments()[curve.segments().len() - 1];
            assert!((curve.evaluate(0.0) - first.start_y).abs() < EPS, "{}", curve.name());
            assert!(
                (curve.evaluate(1.0 - 1e-6) - (last.start_y + last.lift)).abs() < 1e-3,
                "{}",
                curve.name()
            );
            assert!((curve.evaluate(1.0) - curve.terminal_value()).abs() < 1e-6);
        }
    }

    #[test]
    fn presets_are_continuous_at_joins() {
        for curve in all() {
            for pair in curve.segments().windows(2) {
                assert!(
                    (pair[0].end_y() - pair[1].start_y).abs() < 1e-5,
                    "{} jumps at x = {}",
                    curve.name(),
                    pair[1].start_x
                );
            }
        }
    }

    #[test]
    fn standard_swing_reference_values() {
        let c = STANDARD_SWING;
        assert!(c.evaluate(0.0).abs() < 1e-6);
        assert!((c.evaluate(0.30) - 0.20).abs() < 1e-5);
        assert!((c.evaluate(0.60) - 0.75).abs() < 1e-5);
        assert!((c.evaluate(1.0 - 1e-6) - 1.0).abs() < 1e-3);
        assert!((c.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn heavy_swing_pulls_back_then_overshoots() {
        assert!(HEAVY_SWING.evaluate(0.2) < 0.0);
        assert!(HEAVY_SWING.evaluate(0.85) > 1.0);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(preset("quick_slash").map(|c| c.name().to_string()), Some("quick_slash".into()));
        assert!(preset("nope").is_none());
    }
}
