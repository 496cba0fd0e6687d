//! Curve file validation command

use anyhow::{Context, Result};
use ember_curve::loader::load_curves_from_file;
use ember_curve::presets;
use std::collections::HashSet;
use std::path::Path;

pub fn run(path: &str) -> Result<()> {
    if !Path::new(path).exists() {
        anyhow::bail!("Curve file not found: {}", path);
    }

    let curves = load_curves_from_file(Path::new(path))
        .with_context(|| format!("Validation failed for {}", path))?;

    if curves.is_empty() {
        println!("No curves found in {}", path);
        return Ok(());
    }

    let mut seen = HashSet::new();
    let mut duplicates = 0;
    for curve in &curves {
        let mut notes = Vec::new();
        if !seen.insert(curve.name()) {
            notes.push("duplicate name, later definition wins");
            duplicates += 1;
        }
        if presets::preset(curve.name()).is_some() {
            notes.push("overrides a stock curve");
        }
        if (curve.terminal_value() - 1.0).abs() > 1e-3 {
            notes.push("does not end at 1.0");
        }

        println!(
            "  ok {} ({} segment(s), {:.3} -> {:.3})",
            curve.name(),
            curve.segments().len(),
            curve.initial_value(),
            curve.terminal_value()
        );
        for note in notes {
            println!("     warning: {}", note);
        }
    }

    println!("");
    println!("{} curve(s) valid in {}", curves.len(), path);
    if duplicates > 0 {
        println!("{} duplicate name(s)", duplicates);
    }
    Ok(())
}
