//! CLI command implementations

pub mod curve;
pub mod simulate;
pub mod validate;

use anyhow::{Context, Result};
use ember_curve::loader::load_curves_from_file;
use ember_curve::CurveLibrary;
use std::path::Path;

/// Stock curves plus, optionally, everything defined in a `.curves.toml`.
pub(crate) fn load_library(curves: Option<&str>) -> Result<CurveLibrary> {
    let mut library = CurveLibrary::with_presets();
    if let Some(path) = curves {
        let loaded = load_curves_from_file(Path::new(path))
            .with_context(|| format!("Failed to load curves from {}", path))?;
        let count = library.extend(loaded);
        log::info!("loaded {} curve(s) from {}", count, path);
    }
    Ok(library)
}
