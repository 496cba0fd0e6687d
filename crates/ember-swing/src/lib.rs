//! Ember Swing - per-actor swing animation sessions
//!
//! Drives one animated swing per actor at a fixed tick rate and prepares the
//! data a renderer needs to show it smoothly at any refresh rate:
//! - `SwingClock`: Idle/Active state machine with a decaying scale boost
//! - `AnimationSession`: clock + interpolated `Pose` + recorded trail
//! - `TrailBuffer`: bounded, age-evicted history of tip positions
//! - `SplineResampler`: Catmull-Rom densification of the trail
//! - `TrailStyle` / `build_strip`: width and colour along the resampled path

pub mod actor;
pub mod clock;
pub mod config;
pub mod pose;
pub mod resample;
pub mod session;
pub mod style;
pub mod trail;

pub use actor::SwingActor;
pub use clock::{Boost, ClockSample, StartOutcome, SwingClock, SwingState};
pub use config::{BoostConfig, StyleConfig, SwingConfig, TrailConfig};
pub use pose::{Anchor, Pose, SwingArc};
pub use resample::{resample_points, SplineResampler};
pub use session::AnimationSession;
pub use style::{build_strip, FnTrailStyle, GradientTrailStyle, StripVertex, TrailStyle};
pub use trail::{TrailBuffer, TrailPoint};
