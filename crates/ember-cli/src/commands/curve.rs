//! Curve inspection command

use super::load_library;
use anyhow::{Context, Result};

pub fn run(name: &str, curves: Option<&str>, samples: usize) -> Result<()> {
    let library = load_library(curves)?;
    let curve = library.require(name).with_context(|| {
        format!("Available curves: {}", library.names().join(", "))
    })?;

    println!("Curve: {}", curve.name());
    println!("");
    println!("Segments:");
    for (index, segment) in curve.segments().iter().enumerate() {
        let (start, end) = curve.segment_range(index).unwrap_or((segment.start_x, 1.0));
        print!(
            "  [{}] {:<12} x {:.3}..{:.3}  y {:.3} -> {:.3}",
            index,
            segment.easing.name(),
            start,
            end,
            segment.start_y,
            segment.end_y()
        );
        if segment.power != 1.0 {
            print!("  power {}", segment.power);
        }
        println!();
    }

    let samples = samples.max(2);
    println!("");
    println!("{:>8}  {:>8}  segment", "progress", "eased");
    for i in 0..samples {
        let progress = i as f32 / (samples - 1) as f32;
        let segment = curve
            .segment_index(progress)
            .map(|s| s.to_string())
            .unwrap_or_else(|| "end".to_string());
        println!(
            "{:>8.3}  {:>8.4}  {}",
            progress,
            curve.evaluate(progress),
            segment
        );
    }

    Ok(())
}
