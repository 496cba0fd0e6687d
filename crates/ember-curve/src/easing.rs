//! Pure easing functions.
//!
//! `evaluate` is total: it never clamps and never fails. Callers
//! (`PiecewiseCurve`) are responsible for keeping `t` inside [0, 1].

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Back-easing tension shared by `Anticipate` and `Overshoot`.
const BACK_TENSION: f32 = 1.70158;

/// Named easing shapes a curve segment can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EasingKind {
    #[default]
    Linear,
    SineIn,
    SineOut,
    /// sin(tπ); rises and falls back to zero, used for pulses.
    SineBump,
    PolyIn,
    PolyOut,
    PolyInOut,
    ExpIn,
    ExpOut,
    CircIn,
    CircOut,
    /// Pulls back below zero before moving forward.
    Anticipate,
    /// Passes 1 before settling back onto it.
    Overshoot,
}

impl EasingKind {
    pub const ALL: [EasingKind; 13] = [
        EasingKind::Linear,
        EasingKind::SineIn,
        EasingKind::SineOut,
        EasingKind::SineBump,
        EasingKind::PolyIn,
        EasingKind::PolyOut,
        EasingKind::PolyInOut,
        EasingKind::ExpIn,
        EasingKind::ExpOut,
        EasingKind::CircIn,
        EasingKind::CircOut,
        EasingKind::Anticipate,
        EasingKind::Overshoot,
    ];

    /// Canonical snake_case name, as written in curve files.
    pub fn name(self) -> &'static str {
        match self {
            EasingKind::Linear => "linear",
            EasingKind::SineIn => "sine_in",
            EasingKind::SineOut => "sine_out",
            EasingKind::SineBump => "sine_bump",
            EasingKind::PolyIn => "poly_in",
            EasingKind::PolyOut => "poly_out",
            EasingKind::PolyInOut => "poly_in_out",
            EasingKind::ExpIn => "exp_in",
            EasingKind::ExpOut => "exp_out",
            EasingKind::CircIn => "circ_in",
            EasingKind::CircOut => "circ_out",
            EasingKind::Anticipate => "anticipate",
            EasingKind::Overshoot => "overshoot",
        }
    }

    /// Look up a kind by name, ignoring case, `_` and `-`.
    pub fn from_name(name: &str) -> Option<EasingKind> {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        EasingKind::ALL
            .into_iter()
            .find(|kind| kind.name().replace('_', "") == key)
    }

    /// Like `from_name`, but unknown names fall back to `Linear`.
    pub fn from_name_or_linear(name: &str) -> EasingKind {
        EasingKind::from_name(name).unwrap_or_else(|| {
            log::warn!("unknown easing '{}', using linear", name);
            EasingKind::Linear
        })
    }

    /// Evaluate this easing at `t`; see [`evaluate`].
    #[inline]
    pub fn evaluate(self, t: f32, power: f32) -> f32 {
        evaluate(self, t, power)
    }
}

impl From<String> for EasingKind {
    fn from(name: String) -> Self {
        EasingKind::from_name_or_linear(&name)
    }
}

impl From<EasingKind> for String {
    fn from(kind: EasingKind) -> Self {
        kind.name().to_string()
    }
}

/// Evaluate `kind` at `t`. `power` parameterises the polynomial kinds and
/// is ignored by the rest.
#[inline]
pub fn evaluate(kind: EasingKind, t: f32, power: f32) -> f32 {
    match kind {
        EasingKind::Linear => t,

        EasingKind::SineIn => 1.0 - (t * PI / 2.0).cos(),
        EasingKind::SineOut => (t * PI / 2.0).sin(),
        EasingKind::SineBump => (t * PI).sin(),

        EasingKind::PolyIn => t.powf(power),
        EasingKind::PolyOut => 1.0 - (1.0 - t).powf(power),
        EasingKind::PolyInOut => {
            if t < 0.5 {
                2.0_f32.powf(power - 1.0) * t.powf(power)
            } else {
                1.0 - (-2.0 * t + 2.0).powf(power) / 2.0
            }
        }

        EasingKind::ExpIn => 2.0_f32.powf(10.0 * (t - 1.0)),
        EasingKind::ExpOut => 1.0 - 2.0_f32.powf(-10.0 * t),

        EasingKind::CircIn => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
        EasingKind::CircOut => (1.0 - (t - 1.0) * (t - 1.0)).max(0.0).sqrt(),

        EasingKind::Anticipate => {
            let s = BACK_TENSION;
            t * t * ((s + 1.0) * t - s)
        }
        EasingKind::Overshoot => {
            let s = BACK_TENSION;
            let u = t - 1.0;
            u * u * ((s + 1.0) * u + s) + 1.0
        }
    }
}
