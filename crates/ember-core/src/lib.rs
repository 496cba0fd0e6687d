//! Ember Core - Foundational types for the Ember motion engine
//!
//! This crate provides the types that all other Ember crates depend on:
//! - `Vec2`, `Color` - Spatial and colour types
//! - `spline` - Catmull-Rom interpolation
//! - `lerp_f32` / `lerp_color` - Scalar and colour blending
//! - Error types and Result alias

mod error;
pub mod spline;
mod types;

pub use error::{EmberError, Result};
pub use types::{lerp_color, lerp_f32, Color, Vec2};
