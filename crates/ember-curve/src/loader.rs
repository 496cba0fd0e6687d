//! TOML-based curve loading

use crate::piecewise::{CurveSegment, PiecewiseCurve};
use ember_core::{EmberError, Result};
use serde::Deserialize;
use std::path::Path;

/// On-disk layout of a `.curves.toml` file.
#[derive(Debug, Deserialize)]
struct CurveFile {
    #[serde(default)]
    curves: Vec<CurveDef>,
}

#[derive(Debug, Deserialize)]
struct CurveDef {
    name: String,
    segments: Vec<CurveSegment>,
}

/// Load every curve from a `.curves.toml` file.
///
/// The file lists curves as an array of tables:
/// ```toml
/// [[curves]]
/// name = "big_swing"
///
/// [[curves.segments]]
/// easing = "sine_in"
/// start_x = 0.0
/// start_y = 0.0
/// lift = 0.1
///
/// [[curves.segments]]
/// easing = "poly_out"
/// start_x = 0.2
/// start_y = 0.1
/// lift = 0.9
/// power = 3.0
/// ```
pub fn load_curves_from_file(path: &Path) -> Result<Vec<PiecewiseCurve>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        EmberError::Curve(format!("Failed to read {}: {}", path.display(), e))
    })?;
    load_curves_from_str(&content, &path.display().to_string())
}

/// Parse curves from a TOML string. `origin` names the source in errors.
pub fn load_curves_from_str(content: &str, origin: &str) -> Result<Vec<PiecewiseCurve>> {
    let file: CurveFile = toml::from_str(content)
        .map_err(|e| EmberError::Curve(format!("Failed to parse {}: {}", origin, e)))?;

    let mut curves = Vec::with_capacity(file.curves.len());
    for def in file.curves {
        let name = def.name.clone();
        let curve = PiecewiseCurve::new(def.name, def.segments)
            .map_err(|e| EmberError::Curve(format!("{}: curve '{}': {}", origin, name, e)))?;
        curves.push(curve);
    }

    if curves.is_empty() {
        log::warn!("{} defines no curves", origin);
    }
    Ok(curves)
}
