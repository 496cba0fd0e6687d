//! Headless swing simulation: fixed ticks, variable presentation rate.
//!
//! Prints one JSON object per presented frame, carrying the interpolated
//! pose and the styled trail strip a renderer would draw.

use super::load_library;
use anyhow::{Context, Result};
use ember_runtime::{GameClock, TickSystem};
use ember_swing::{Anchor, Pose, StripVertex, SwingActor, SwingConfig, SwingState};
use serde::Serialize;
use std::path::Path;

pub struct SimulateArgs {
    pub config: Option<String>,
    pub curves: Option<String>,
    pub tick_hz: f64,
    pub refresh_hz: f64,
    pub frames: Option<usize>,
}

#[derive(Serialize)]
struct Frame<'a> {
    frame: usize,
    tick: u64,
    alpha: f32,
    state: &'static str,
    curve: &'a str,
    pose: Pose,
    #[serde(skip_serializing_if = "Option::is_none")]
    trail: Option<Vec<StripVertex>>,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => SwingConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load swing config {}", path))?,
        None => SwingConfig::default(),
    };
    if !(args.tick_hz > 0.0 && args.refresh_hz > 0.0) {
        anyhow::bail!("tick and refresh rates must be positive");
    }

    let library = load_library(args.curves.as_deref())?;
    let curve = library
        .require(&config.curve)
        .context("Swing config names an unknown curve")?;
    let boost_curve = match config.boost.as_ref().and_then(|b| b.curve.as_deref()) {
        Some(name) => Some(
            library
                .require(name)
                .context("Boost config names an unknown curve")?,
        ),
        None => None,
    };
    let style = config.style.to_style();

    let frame_dt = 1.0 / args.refresh_hz;
    let frames = args.frames.unwrap_or_else(|| {
        // Long enough to watch the swing finish and the trail disappear.
        let ticks = config.duration_ticks() as f64 + 4.0;
        (ticks / args.tick_hz * args.refresh_hz).ceil() as usize
    });

    let mut clock = GameClock::with_fixed_timestep(args.tick_hz);
    let mut actor = SwingActor::new("player", Anchor::default(), &config.trail);
    let start_tick = clock.tick_count();
    let anchor = actor.anchor;
    actor
        .session
        .start(start_tick, &anchor, config.duration_ticks(), curve, config.arc());

    log::info!(
        "simulating '{}' for {} frame(s): {} Hz ticks, {} Hz refresh",
        config.curve,
        frames,
        args.tick_hz,
        args.refresh_hz
    );

    for frame in 0..frames {
        let mut tick_error = None;
        let alpha = clock.run_frame(frame_dt, |tick| {
            if let Some(boost) = &config.boost {
                if tick == start_tick + boost.at_tick {
                    actor
                        .session
                        .trigger_boost(tick, boost.multiplier, boost.decay_ticks);
                    if let Some(curve) = &boost_curve {
                        actor.session.swap_curve(curve.clone());
                    }
                }
            }
            if let Err(e) = actor.fixed_tick(tick) {
                tick_error.get_or_insert(e);
            }
        });
        if let Some(e) = tick_error {
            return Err(e).with_context(|| format!("Tick failed in frame {}", frame));
        }

        let trail = actor
            .session
            .trail_strip(config.trail.output_points, &style);
        let record = Frame {
            frame,
            tick: clock.tick_count(),
            alpha,
            state: match actor.session.state() {
                SwingState::Idle => "idle",
                SwingState::Active => "active",
            },
            curve: actor.session.clock().curve().name(),
            pose: actor.session.pose(alpha),
            trail,
        };
        println!("{}", serde_json::to_string(&record)?);
    }

    Ok(())
}
