//! Animation session: everything one actor needs to swing.
//!
//! The session is owned directly by the actor that swings; there is no
//! global lookup. Simulation calls `start` / `advance` / `trigger_boost`
//! once per fixed tick, and rendering reads `pose(alpha)` and the trail
//! helpers without mutating simulation state.

use crate::clock::{ClockSample, StartOutcome, SwingClock, SwingState};
use crate::config::TrailConfig;
use crate::pose::{Anchor, Pose, SwingArc};
use crate::resample::SplineResampler;
use crate::style::{build_strip, StripVertex, TrailStyle};
use crate::trail::{TrailBuffer, TrailPoint};
use ember_core::Vec2;
use ember_curve::CurveHandle;
use ember_runtime::TickState;

pub struct AnimationSession {
    clock: SwingClock,
    arc: SwingArc,
    pose: TickState<Pose>,
    trail: TrailBuffer,
    resampler: SplineResampler,
    /// Tick of the last `advance` that produced a pose
    last_tick: Option<u64>,
}

impl AnimationSession {
    pub fn new(trail: &TrailConfig) -> Self {
        Self {
            clock: SwingClock::new(),
            arc: SwingArc::default(),
            pose: TickState::new(Pose::IDENTITY),
            trail: TrailBuffer::new(trail.max_points, trail.max_age_ticks),
            resampler: SplineResampler::new(),
            last_tick: None,
        }
    }

    /// Start a swing at `tick`. On success the trail is cleared and the pose
    /// buffer is reset to the opening pose, so the first frame cannot pop.
    pub fn start(
        &mut self,
        tick: u64,
        anchor: &Anchor,
        duration_ticks: u32,
        curve: CurveHandle,
        arc: SwingArc,
    ) -> StartOutcome {
        let curve_name = curve.name().to_string();
        let outcome = self.clock.start(tick, duration_ticks, curve);
        if !outcome.is_started() {
            log::trace!("swing '{}' already running, start ignored", curve_name);
            return outcome;
        }

        self.arc = arc;
        self.trail.clear();
        self.last_tick = None;
        self.pose
            .reset(self.arc.pose(anchor, self.clock.eased_progress(), 1.0));
        log::debug!(
            "swing {:?}: curve '{}', {} ticks from tick {}",
            outcome,
            curve_name,
            self.clock.duration_ticks(),
            tick
        );
        outcome
    }

    /// Simulate one tick: shift the pose buffer, derive the new pose from
    /// eased progress, and record the tip into the trail. No-op while Idle.
    ///
    /// Advancing twice within the same tick replaces the current pose
    /// without shifting it into `previous`, matching the trail's rule.
    pub fn advance(&mut self, tick: u64, anchor: &Anchor) -> Option<ClockSample> {
        let sample = self.clock.advance(tick)?;

        let pose = self
            .arc
            .pose(anchor, sample.eased_progress, sample.scale_multiplier);
        if self.last_tick == Some(tick) {
            self.pose.set(pose);
        } else {
            self.pose.advance(pose);
        }
        self.last_tick = Some(tick);
        self.trail.record(TrailPoint {
            position: pose.position,
            orientation: pose.angle,
            progress: sample.linear_progress,
            tick,
        });

        if sample.finished {
            self.trail.clear();
            log::debug!("swing finished at tick {}", tick);
        }
        Some(sample)
    }

    /// Overlay a decaying scale boost. Returns false while Idle.
    pub fn trigger_boost(&mut self, tick: u64, multiplier: f32, decay_ticks: u32) -> bool {
        let boosted = self.clock.trigger_boost(tick, multiplier, decay_ticks);
        if boosted {
            log::debug!(
                "boost x{} over {} ticks at tick {}",
                multiplier,
                decay_ticks,
                tick
            );
        }
        boosted
    }

    /// Follow a different curve without restarting the swing.
    pub fn swap_curve(&mut self, curve: CurveHandle) {
        log::debug!(
            "curve swap '{}' -> '{}'",
            self.clock.curve().name(),
            curve.name()
        );
        self.clock.set_curve(curve);
    }

    /// Abort the swing and drop its trail.
    pub fn cancel(&mut self) {
        self.clock.stop();
        self.trail.clear();
    }

    /// Pose to present, blended between the last two ticks.
    pub fn pose(&self, alpha: f32) -> Pose {
        self.pose.interpolate(alpha)
    }

    /// Dense trail path, oldest first. `None` while Idle or with fewer than
    /// two recorded points; there is nothing to draw in either case.
    pub fn trail_path(&mut self, output_count: usize) -> Option<Vec<Vec2>> {
        if !self.clock.is_active() || self.trail.len() < 2 {
            return None;
        }
        Some(self.resampler.resample(&self.trail, output_count))
    }

    /// Dense trail path with per-vertex width and colour from `style`.
    pub fn trail_strip<S: TrailStyle + ?Sized>(
        &mut self,
        output_count: usize,
        style: &S,
    ) -> Option<Vec<StripVertex>> {
        let path = self.trail_path(output_count)?;
        Some(build_strip(&path, style))
    }

    pub fn state(&self) -> SwingState {
        self.clock.state()
    }

    pub fn is_active(&self) -> bool {
        self.clock.is_active()
    }

    pub fn clock(&self) -> &SwingClock {
        &self.clock
    }

    pub fn arc(&self) -> &SwingArc {
        &self.arc
    }

    pub fn pose_state(&self) -> &TickState<Pose> {
        &self.pose
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_curve::presets::{HEAVY_SWING, LINEAR, STANDARD_SWING};
    use std::sync::Arc;

    fn session() -> AnimationSession {
        AnimationSession::new(&TrailConfig {
            max_points: 16,
            max_age_ticks: 16,
            output_points: 32,
        })
    }

    #[test]
    fn start_resets_pose_without_pop() {
        let mut s = session();
        let anchor = Anchor::new(Vec2::new(10.0, 0.0), 0.0);
        let outcome = s.start(0, &anchor, 10, Arc::new(STANDARD_SWING), SwingArc::default());
        assert_eq!(outcome, StartOutcome::Started);
        assert_eq!(s.pose_state().previous(), s.pose_state().current());
        assert!(s.trail().is_empty());
    }

    #[test]
    fn advance_records_one_point_per_tick() {
        let mut s = session();
        let anchor = Anchor::default();
        s.start(0, &anchor, 10, Arc::new(LINEAR), SwingArc::default());
        for tick in 1..=5 {
            s.advance(tick, &anchor);
        }
        assert_eq!(s.trail().len(), 5);
        assert_eq!(s.trail().back().unwrap().tick, 5);
        assert!((s.trail().back().unwrap().progress - 0.5).abs() < 1e-6);
    }

    #[test]
    fn previous_and_current_are_consecutive_ticks() {
        let mut s = session();
        let anchor = Anchor::default();
        let arc = SwingArc::default();
        s.start(0, &anchor, 8, Arc::new(LINEAR), arc);
        s.advance(1, &anchor);
        s.advance(2, &anchor);
        let expected_prev = arc.pose(&anchor, 1.0 / 8.0, 1.0);
        let expected_cur = arc.pose(&anchor, 2.0 / 8.0, 1.0);
        assert!((s.pose_state().previous().angle - expected_prev.angle).abs() < 1e-6);
        assert!((s.pose_state().current().angle - expected_cur.angle).abs() < 1e-6);
        assert_eq!(s.pose(0.0), *s.pose_state().previous());
        assert_eq!(s.pose(1.0), *s.pose_state().current());
    }

    #[test]
    fn finishing_clears_trail_and_goes_idle() {
        let mut s = session();
        let anchor = Anchor::default();
        s.start(0, &anchor, 3, Arc::new(STANDARD_SWING), SwingArc::default());
        for tick in 1..=3 {
            s.advance(tick, &anchor);
        }
        assert_eq!(s.state(), SwingState::Idle);
        assert!(s.trail().is_empty());
        assert!(s.trail_path(10).is_none());
        assert!(s.advance(4, &anchor).is_none());
    }

    #[test]
    fn trail_path_needs_two_points() {
        let mut s = session();
        let anchor = Anchor::default();
        s.start(0, &anchor, 20, Arc::new(STANDARD_SWING), SwingArc::default());
        assert!(s.trail_path(10).is_none());
        s.advance(1, &anchor);
        assert!(s.trail_path(10).is_none());
        s.advance(2, &anchor);
        assert_eq!(s.trail_path(10).map(|p| p.len()), Some(10));
    }

    #[test]
    fn retrigger_clears_trail() {
        let mut s = session();
        let anchor = Anchor::default();
        s.start(0, &anchor, 20, Arc::new(STANDARD_SWING), SwingArc::default());
        for tick in 1..=4 {
            s.advance(tick, &anchor);
        }
        let outcome = s.start(4, &anchor, 20, Arc::new(HEAVY_SWING), SwingArc::default());
        assert_eq!(outcome, StartOutcome::Retriggered);
        assert!(s.trail().is_empty());

        let ignored = s.start(5, &anchor, 20, Arc::new(HEAVY_SWING), SwingArc::default());
        assert_eq!(ignored, StartOutcome::Ignored);
    }

    #[test]
    fn repeated_tick_keeps_previous_pose() {
        let mut s = session();
        let anchor = Anchor::default();
        let arc = SwingArc::default();
        s.start(0, &anchor, 8, Arc::new(LINEAR), arc);
        s.advance(1, &anchor);
        s.advance(2, &anchor);
        s.advance(2, &anchor);
        let expected_prev = arc.pose(&anchor, 1.0 / 8.0, 1.0);
        let expected_cur = arc.pose(&anchor, 2.0 / 8.0, 1.0);
        assert!((s.pose_state().previous().angle - expected_prev.angle).abs() < 1e-6);
        assert!((s.pose_state().current().angle - expected_cur.angle).abs() < 1e-6);
        assert_eq!(s.trail().len(), 2);
    }

    #[test]
    fn held_start_after_boost_swap_keeps_swing() {
        let mut s = session();
        let anchor = Anchor::default();
        s.start(0, &anchor, 20, Arc::new(STANDARD_SWING), SwingArc::default());
        for tick in 1..=5 {
            s.advance(tick, &anchor);
        }
        assert!(s.trigger_boost(5, 2.3, 20));
        s.swap_curve(Arc::new(HEAVY_SWING));

        let outcome = s.start(6, &anchor, 20, Arc::new(STANDARD_SWING), SwingArc::default());
        assert_eq!(outcome, StartOutcome::Ignored);
        assert!((s.clock().linear_progress() - 0.25).abs() < 1e-6);
        assert!(s.clock().boost().is_some());
        assert_eq!(s.trail().len(), 5);
    }

    #[test]
    fn cancel_goes_idle() {
        let mut s = session();
        let anchor = Anchor::default();
        s.start(0, &anchor, 20, Arc::new(STANDARD_SWING), SwingArc::default());
        s.advance(1, &anchor);
        s.advance(2, &anchor);
        s.cancel();
        assert!(!s.is_active());
        assert!(s.trail().is_empty());
        assert!(!s.trigger_boost(3, 2.0, 5));
    }

    #[test]
    fn swap_curve_mid_swing() {
        let mut s = session();
        let anchor = Anchor::default();
        s.start(0, &anchor, 10, Arc::new(STANDARD_SWING), SwingArc::default());
        s.advance(1, &anchor);
        s.swap_curve(Arc::new(HEAVY_SWING));
        let sample = s.advance(2, &anchor).unwrap();
        assert!((sample.eased_progress - HEAVY_SWING.evaluate(0.2)).abs() < 1e-6);
        assert_eq!(s.clock().curve().name(), "heavy_swing");
    }
}
