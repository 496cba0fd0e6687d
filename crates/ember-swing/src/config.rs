//! Swing settings loaded from TOML.
//!
//! Every field has a default, so an empty file is a valid configuration:
//! ```toml
//! curve = "standard_swing"
//! duration_ticks = 24
//! start_angle = -2.0
//! end_angle = 2.0
//!
//! [trail]
//! max_points = 30
//! max_age_ticks = 12
//!
//! [boost]
//! at_tick = 6
//! multiplier = 2.3
//! decay_ticks = 20
//! curve = "heavy_swing"
//! ```

use crate::pose::SwingArc;
use crate::style::GradientTrailStyle;
use ember_core::{Color, EmberError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwingConfig {
    /// Name of the curve in the curve library
    pub curve: String,
    /// Swing length in simulation ticks; values below 1 are treated as 1
    pub duration_ticks: i64,
    pub start_angle: f32,
    pub end_angle: f32,
    pub reach: f32,
    pub base_scale: f32,
    pub trail: TrailConfig,
    pub style: StyleConfig,
    pub boost: Option<BoostConfig>,
}

impl Default for SwingConfig {
    fn default() -> Self {
        let arc = SwingArc::default();
        Self {
            curve: "standard_swing".to_string(),
            duration_ticks: 24,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
            reach: arc.reach,
            base_scale: arc.base_scale,
            trail: TrailConfig::default(),
            style: StyleConfig::default(),
            boost: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub max_points: usize,
    pub max_age_ticks: u64,
    /// Points produced by the spline resampler per frame
    pub output_points: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_points: 30,
            max_age_ticks: 12,
            output_points: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub width_start: f32,
    pub width_end: f32,
    pub color_start: [f32; 4],
    pub color_end: [f32; 4],
}

impl Default for StyleConfig {
    fn default() -> Self {
        let style = GradientTrailStyle::default();
        Self {
            width_start: style.width_start,
            width_end: style.width_end,
            color_start: style.color_start.to_array(),
            color_end: style.color_end.to_array(),
        }
    }
}

impl StyleConfig {
    pub fn to_style(&self) -> GradientTrailStyle {
        GradientTrailStyle {
            width_start: self.width_start,
            width_end: self.width_end,
            color_start: Color::from_array(self.color_start),
            color_end: Color::from_array(self.color_end),
        }
    }
}

/// A scale boost fired partway through the swing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostConfig {
    /// Ticks after the swing starts
    pub at_tick: u64,
    pub multiplier: f32,
    pub decay_ticks: u32,
    /// Curve to switch to when the boost fires
    #[serde(default)]
    pub curve: Option<String>,
}

impl SwingConfig {
    /// Parse and validate a config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SwingConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EmberError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| EmberError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.curve.is_empty() {
            return Err(EmberError::Config("curve name is empty".into()));
        }
        if !(self.reach.is_finite() && self.reach >= 0.0) {
            return Err(EmberError::out_of_range("reach", 0.0, f64::MAX, self.reach as f64));
        }
        if !(self.base_scale.is_finite() && self.base_scale > 0.0) {
            return Err(EmberError::out_of_range(
                "base_scale",
                f64::MIN_POSITIVE,
                f64::MAX,
                self.base_scale as f64,
            ));
        }
        if self.trail.max_points < 2 {
            return Err(EmberError::out_of_range(
                "trail.max_points",
                2.0,
                usize::MAX as f64,
                self.trail.max_points as f64,
            ));
        }
        if self.trail.output_points < 2 {
            return Err(EmberError::out_of_range(
                "trail.output_points",
                2.0,
                usize::MAX as f64,
                self.trail.output_points as f64,
            ));
        }
        if let Some(boost) = &self.boost {
            if !(boost.multiplier.is_finite() && boost.multiplier > 0.0) {
                return Err(EmberError::out_of_range(
                    "boost.multiplier",
                    f64::MIN_POSITIVE,
                    f64::MAX,
                    boost.multiplier as f64,
                ));
            }
        }
        if self.duration_ticks < 1 {
            log::warn!(
                "duration_ticks = {} is below one tick, clamping to 1",
                self.duration_ticks
            );
        }
        Ok(())
    }

    /// Duration clamped to at least one tick.
    pub fn duration_ticks(&self) -> u32 {
        self.duration_ticks.clamp(1, u32::MAX as i64) as u32
    }

    pub fn arc(&self) -> SwingArc {
        SwingArc {
            start_angle: self.start_angle,
            end_angle: self.end_angle,
            reach: self.reach,
            base_scale: self.base_scale,
        }
    }
}
