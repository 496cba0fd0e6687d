//! An actor that owns its swing session and is ticked by the driver.

use crate::config::TrailConfig;
use crate::pose::Anchor;
use crate::session::AnimationSession;
use ember_core::Result;
use ember_runtime::TickSystem;

/// A weapon holder: its anchor, updated by gameplay, and its own session.
pub struct SwingActor {
    name: String,
    pub anchor: Anchor,
    pub session: AnimationSession,
}

impl SwingActor {
    pub fn new(name: impl Into<String>, anchor: Anchor, trail: &TrailConfig) -> Self {
        Self {
            name: name.into(),
            anchor,
            session: AnimationSession::new(trail),
        }
    }
}

impl TickSystem for SwingActor {
    fn fixed_tick(&mut self, tick: u64) -> Result<()> {
        // Idle sessions ignore the tick, so every actor can be ticked blindly.
        self.session.advance(tick, &self.anchor);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
