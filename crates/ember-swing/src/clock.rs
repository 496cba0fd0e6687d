//! Swing clock: per-actor Idle/Active state machine.
//!
//! Progress is a pure function of the tick counter:
//! `linear = clamp((tick - start_tick) / duration_ticks, 0, 1)`, so a clock
//! driven from the same ticks always produces the same samples.

use ember_core::lerp_f32;
use ember_curve::{presets, CurveHandle};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingState {
    Idle,
    Active,
}

/// Temporary scale multiplier that decays linearly back to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boost {
    pub multiplier: f32,
    pub start_tick: u64,
    pub decay_ticks: u32,
}

impl Boost {
    /// Multiplier at `tick`: `multiplier` at the start tick, exactly 1.0 once
    /// `decay_ticks` have elapsed, linear in between.
    pub fn multiplier_at(&self, tick: u64) -> f32 {
        let elapsed = tick.saturating_sub(self.start_tick);
        if elapsed >= self.decay_ticks as u64 {
            return 1.0;
        }
        let t = elapsed as f32 / self.decay_ticks as f32;
        lerp_f32(self.multiplier, 1.0, t)
    }

    pub fn is_expired(&self, tick: u64) -> bool {
        tick.saturating_sub(self.start_tick) >= self.decay_ticks as u64
    }
}

/// Result of advancing an active clock by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockSample {
    pub tick: u64,
    pub linear_progress: f32,
    pub eased_progress: f32,
    pub scale_multiplier: f32,
    /// This tick completed the swing; the clock is Idle again
    pub finished: bool,
}

/// What `SwingClock::start` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Started from Idle
    Started,
    /// Interrupted an active swing that used a different curve
    Retriggered,
    /// Already running the same curve; nothing changed
    Ignored,
}

impl StartOutcome {
    pub fn is_started(self) -> bool {
        !matches!(self, StartOutcome::Ignored)
    }
}

/// Smallest boost multiplier accepted; keeps the pose scale positive.
pub const MIN_BOOST_MULTIPLIER: f32 = 0.05;

pub struct SwingClock {
    state: SwingState,
    /// Curve name the swing was started with. Survives `set_curve`, so a
    /// repeated start of the same swing is recognised after a curve swap.
    started_as: String,
    linear_progress: f32,
    eased_progress: f32,
    curve: CurveHandle,
    duration_ticks: u32,
    start_tick: u64,
    boost: Option<Boost>,
}

impl SwingClock {
    pub fn new() -> Self {
        Self {
            state: SwingState::Idle,
            started_as: String::new(),
            linear_progress: 0.0,
            eased_progress: 0.0,
            curve: Arc::new(presets::LINEAR),
            duration_ticks: 1,
            start_tick: 0,
            boost: None,
        }
    }

    /// Begin a swing at `tick`. Valid from Idle, or from Active when `curve`
    /// differs from the running one. A zero duration is treated as one tick.
    pub fn start(&mut self, tick: u64, duration_ticks: u32, curve: CurveHandle) -> StartOutcome {
        let outcome = match self.state {
            SwingState::Idle => StartOutcome::Started,
            SwingState::Active if curve.name() != self.started_as => StartOutcome::Retriggered,
            SwingState::Active => return StartOutcome::Ignored,
        };

        self.state = SwingState::Active;
        self.started_as.clear();
        self.started_as.push_str(curve.name());
        self.duration_ticks = duration_ticks.max(1);
        self.start_tick = tick;
        self.linear_progress = 0.0;
        self.eased_progress = curve.evaluate(0.0);
        self.curve = curve;
        self.boost = None;
        outcome
    }

    /// Advance to `tick`. Idle clocks return `None` so a driver can tick
    /// every actor unconditionally.
    pub fn advance(&mut self, tick: u64) -> Option<ClockSample> {
        if self.state == SwingState::Idle {
            return None;
        }

        let elapsed = tick.saturating_sub(self.start_tick) as f32;
        self.linear_progress = (elapsed / self.duration_ticks as f32).clamp(0.0, 1.0);
        self.eased_progress = self.curve.evaluate(self.linear_progress);

        let scale_multiplier = self.boost.map_or(1.0, |b| b.multiplier_at(tick));
        if self.boost.is_some_and(|b| b.is_expired(tick)) {
            self.boost = None;
        }

        let finished = self.linear_progress >= 1.0;
        if finished {
            self.state = SwingState::Idle;
            self.boost = None;
        }

        Some(ClockSample {
            tick,
            linear_progress: self.linear_progress,
            eased_progress: self.eased_progress,
            scale_multiplier,
            finished,
        })
    }

    /// Start or refresh the scale boost. Only valid while Active; progress
    /// and curve are untouched. Non-finite multipliers are treated as 1 and
    /// the rest are clamped to at least `MIN_BOOST_MULTIPLIER`.
    pub fn trigger_boost(&mut self, tick: u64, multiplier: f32, decay_ticks: u32) -> bool {
        if self.state != SwingState::Active {
            return false;
        }
        let multiplier = if multiplier.is_finite() {
            multiplier.max(MIN_BOOST_MULTIPLIER)
        } else {
            1.0
        };
        self.boost = Some(Boost {
            multiplier,
            start_tick: tick,
            decay_ticks: decay_ticks.max(1),
        });
        true
    }

    /// Follow a different curve from the next tick on, keeping progress.
    pub fn set_curve(&mut self, curve: CurveHandle) {
        self.curve = curve;
    }

    /// Return to Idle immediately.
    pub fn stop(&mut self) {
        self.state = SwingState::Idle;
        self.boost = None;
    }

    pub fn state(&self) -> SwingState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SwingState::Active
    }

    pub fn linear_progress(&self) -> f32 {
        self.linear_progress
    }

    pub fn eased_progress(&self) -> f32 {
        self.eased_progress
    }

    /// Name of the curve passed to the last successful `start`.
    pub fn started_curve(&self) -> &str {
        &self.started_as
    }

    pub fn curve(&self) -> &CurveHandle {
        &self.curve
    }

    pub fn duration_ticks(&self) -> u32 {
        self.duration_ticks
    }

    pub fn start_tick(&self) -> u64 {
        self.start_tick
    }

    pub fn boost(&self) -> Option<&Boost> {
        self.boost.as_ref()
    }
}

impl Default for SwingClock {
    fn default() -> Self {
        Self::new()
    }
}
