//! Tick system trait

use ember_core::Result;

/// Anything advanced by the fixed-step driver.
///
/// Systems are ticked in registration order, once per simulation tick.
/// Rendering reads their committed state afterwards and never calls back in.
pub trait TickSystem {
    /// Called once per simulation tick with the tick number
    fn fixed_tick(&mut self, tick: u64) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameClock;

    struct Counter {
        seen: Vec<u64>,
    }

    impl TickSystem for Counter {
        fn fixed_tick(&mut self, tick: u64) -> Result<()> {
            self.seen.push(tick);
            Ok(())
        }

        fn name(&self) -> &str {
            "counter"
        }
    }

    #[test]
    fn systems_are_ticked_by_the_clock() {
        let mut clock = GameClock::with_fixed_timestep(60.0);
        let mut systems: Vec<Box<dyn TickSystem>> = vec![Box::new(Counter { seen: vec![] })];
        clock.run_frame(2.0 / 60.0 + 1e-6, |tick| {
            for system in systems.iter_mut() {
                system.fixed_tick(tick).unwrap();
            }
        });
        assert_eq!(systems[0].name(), "counter");
        assert_eq!(clock.tick_count(), 2);
    }
}
