//! Motion curves for Ember
//!
//! A swing is authored as a handful of short eased segments rather than one
//! monolithic polynomial. This crate provides:
//! - `easing`: the named easing functions each segment delegates to
//! - `piecewise`: segment tables covering [0, 1) and their evaluation
//! - `presets`: the stock swing curves shipped with the engine
//! - `library` / `loader`: named curve registry and `.curves.toml` loading

pub mod easing;
pub mod library;
pub mod loader;
pub mod piecewise;
pub mod presets;

pub use easing::EasingKind;
pub use library::{CurveHandle, CurveLibrary};
pub use piecewise::{CurveSegment, PiecewiseCurve};
