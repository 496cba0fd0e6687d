//! Ember Runtime - Fixed-tick simulation infrastructure
//!
//! Provides the building blocks that decouple simulation from presentation:
//! - `GameClock`: fixed-timestep accumulator producing tick numbers and alpha
//! - `TickState` / `Interpolate`: previous/current double buffer blended at alpha
//! - `TickSystem`: trait for anything advanced once per simulation tick

mod clock;
mod system;
mod tick_state;

pub use clock::GameClock;
pub use system::TickSystem;
pub use tick_state::{wrap_angle, Angle, Interpolate, TickState};
