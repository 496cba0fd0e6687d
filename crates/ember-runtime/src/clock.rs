//! Game clock with fixed-timestep accumulator

use std::time::Instant;

/// Longest frame the accumulator will accept (avoids a spiral of death).
const MAX_FRAME_TIME: f64 = 0.25;

/// Slack when comparing the accumulator against one step. Summing frame
/// times in f64 lands a few ulps short of a whole step.
const STEP_TOLERANCE: f64 = 1e-9;

/// Largest f32 below 1.0.
const MAX_ALPHA: f32 = 1.0 - f32::EPSILON / 2.0;

/// Tracks game time and converts variable frame times into whole simulation
/// ticks plus a presentation alpha.
pub struct GameClock {
    /// Total elapsed game time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Fixed timestep interval (default: 1/60 second)
    pub fixed_timestep: f64,
    /// Number of simulation ticks consumed so far
    tick_count: u64,
    /// Accumulated time for fixed-step consumption
    accumulator: f64,
    /// Last wall-clock instant seen by `tick_instant`
    last_instant: Instant,
    /// Whether `tick_instant` has not been called yet
    first_tick: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            fixed_timestep: 1.0 / 60.0,
            tick_count: 0,
            accumulator: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl GameClock {
    /// Create a new game clock with default 60Hz fixed timestep
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game clock with a custom fixed timestep
    pub fn with_fixed_timestep(hz: f64) -> Self {
        Self {
            fixed_timestep: 1.0 / hz.max(1.0),
            ..Self::default()
        }
    }

    /// Advance the clock by a known frame duration in seconds.
    pub fn tick(&mut self, frame_dt: f64) {
        self.delta_time = frame_dt.clamp(0.0, MAX_FRAME_TIME);
        self.total_time += self.delta_time;
        self.accumulator += self.delta_time;
    }

    /// Advance the clock from the wall clock. Call once per frame.
    pub fn tick_instant(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.tick(elapsed);
    }

    /// Returns true if there's enough accumulated time for a fixed update step
    pub fn should_fixed_update(&self) -> bool {
        self.accumulator + STEP_TOLERANCE >= self.fixed_timestep
    }

    /// Consume one fixed timestep from the accumulator, returning the number
    /// of the tick that should now be simulated.
    pub fn consume_fixed_step(&mut self) -> u64 {
        self.accumulator -= self.fixed_timestep;
        self.tick_count += 1;
        self.tick_count
    }

    /// Number of simulation ticks consumed so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Fraction of the upcoming tick already elapsed, in [0, 1).
    pub fn interpolation_alpha(&self) -> f32 {
        ((self.accumulator / self.fixed_timestep) as f32).clamp(0.0, MAX_ALPHA)
    }

    /// Feed one frame into the clock, run `on_tick` once per whole simulation
    /// tick that became due, and return the alpha for presenting this frame.
    pub fn run_frame<F>(&mut self, frame_dt: f64, mut on_tick: F) -> f32
    where
        F: FnMut(u64),
    {
        self.tick(frame_dt);
        let mut steps = 0u32;
        while self.should_fixed_update() {
            let tick = self.consume_fixed_step();
            on_tick(tick);
            steps += 1;
        }
        if steps > 1 {
            log::trace!("frame of {:.4}s ran {} ticks", frame_dt, steps);
        }
        self.interpolation_alpha()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = GameClock::new();
        assert!((clock.fixed_timestep - 1.0 / 60.0).abs() < 1e-10);
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.tick_count(), 0);
    }

    #[test]
    fn test_custom_timestep() {
        let clock = GameClock::with_fixed_timestep(30.0);
        assert!((clock.fixed_timestep - 1.0 / 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_first_instant_tick_zero_delta() {
        let mut clock = GameClock::new();
        clock.tick_instant();
        assert_eq!(clock.delta_time, 0.0);
    }

    #[test]
    fn test_accumulator_logic() {
        let mut clock = GameClock::new();
        clock.accumulator = 1.0 / 30.0; // Two fixed steps worth

        assert!(clock.should_fixed_update());
        assert_eq!(clock.consume_fixed_step(), 1);
        assert!(clock.should_fixed_update());
        assert_eq!(clock.consume_fixed_step(), 2);
        assert!(!clock.should_fixed_update());
    }

    #[test]
    fn test_interpolation_alpha() {
        let mut clock = GameClock::new();
        clock.accumulator = clock.fixed_timestep * 0.5;
        let alpha = clock.interpolation_alpha();
        assert!((alpha - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_frame_time_is_clamped() {
        let mut clock = GameClock::new();
        clock.tick(10.0);
        assert!((clock.delta_time - MAX_FRAME_TIME).abs() < 1e-12);
    }

    #[test]
    fn run_frame_at_higher_refresh_rate() {
        // 60Hz simulation presented at 144Hz: ticks arrive on some frames only,
        // and alpha stays inside [0, 1).
        let mut clock = GameClock::with_fixed_timestep(60.0);
        let mut ticks = Vec::new();
        for _ in 0..144 {
            let alpha = clock.run_frame(1.0 / 144.0, |t| ticks.push(t));
            assert!((0.0..1.0).contains(&alpha));
        }
        assert!(ticks.len() >= 59 && ticks.len() <= 60);
        for pair in ticks.windows(2) {
            assert_eq!(pair[1], pair[0] + 1);
        }
    }

    #[test]
    fn accumulated_frames_land_on_whole_ticks() {
        // Twelve 144Hz frames are exactly five 60Hz ticks, even though the
        // summed frame times fall a few ulps short.
        let mut clock = GameClock::with_fixed_timestep(60.0);
        let mut alpha = 0.0;
        for _ in 0..12 {
            alpha = clock.run_frame(1.0 / 144.0, |_| {});
        }
        assert_eq!(clock.tick_count(), 5);
        assert!(alpha < 1e-6);

        for frame in 12..1440 {
            let alpha = clock.run_frame(1.0 / 144.0, |_| {});
            assert!(alpha < 1.0, "alpha reached 1 at frame {frame}");
        }
        assert_eq!(clock.tick_count(), 600);
    }

    #[test]
    fn run_frame_catches_up_multiple_ticks() {
        let mut clock = GameClock::with_fixed_timestep(60.0);
        let mut count = 0;
        clock.run_frame(3.5 / 60.0, |_| count += 1);
        assert_eq!(count, 3);
        assert!((clock.interpolation_alpha() - 0.5).abs() < 1e-3);
    }
}
