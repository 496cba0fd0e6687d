//! Curve registry: holds every known curve by name.

use crate::piecewise::PiecewiseCurve;
use crate::presets;
use ember_core::{EmberError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Shared, immutable reference to a curve. Switching which curve a session
/// follows means swapping the handle, never editing the curve.
pub type CurveHandle = Arc<PiecewiseCurve>;

/// Named curve registry.
pub struct CurveLibrary {
    curves: HashMap<String, CurveHandle>,
}

impl CurveLibrary {
    pub fn new() -> Self {
        Self {
            curves: HashMap::new(),
        }
    }

    /// A library pre-populated with the stock curves.
    pub fn with_presets() -> Self {
        let mut library = Self::new();
        for curve in presets::all() {
            library.add(curve);
        }
        library
    }

    /// Register a curve. Overwrites any existing curve with the same name.
    pub fn add(&mut self, curve: PiecewiseCurve) -> CurveHandle {
        let handle = Arc::new(curve);
        if self
            .curves
            .insert(handle.name().to_string(), handle.clone())
            .is_some()
        {
            log::debug!("curve '{}' replaced", handle.name());
        }
        handle
    }

    /// Register every curve from a list, returning how many were added.
    pub fn extend(&mut self, curves: impl IntoIterator<Item = PiecewiseCurve>) -> usize {
        let mut added = 0;
        for curve in curves {
            self.add(curve);
            added += 1;
        }
        added
    }

    /// Look up a curve by name.
    pub fn get(&self, name: &str) -> Option<CurveHandle> {
        self.curves.get(name).cloned()
    }

    /// Look up a curve by name, failing with `UnknownCurve`.
    pub fn require(&self, name: &str) -> Result<CurveHandle> {
        self.get(name)
            .ok_or_else(|| EmberError::UnknownCurve(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.curves.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for CurveLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EasingKind;
    use crate::piecewise::CurveSegment;

    #[test]
    fn presets_are_registered() {
        let library = CurveLibrary::with_presets();
        assert_eq!(library.len(), 4);
        assert!(library.contains("standard_swing"));
        assert_eq!(
            library.names(),
            vec!["heavy_swing", "linear", "quick_slash", "standard_swing"]
        );
    }

    #[test]
    fn add_overwrites_by_name() {
        let mut library = CurveLibrary::with_presets();
        let replacement = PiecewiseCurve::new(
            "linear",
            vec![CurveSegment::new(EasingKind::SineOut, 0.0, 0.0, 1.0)],
        )
        .unwrap();
        library.add(replacement);
        assert_eq!(library.len(), 4);
        let linear = library.get("linear").unwrap();
        assert_eq!(linear.segments()[0].easing, EasingKind::SineOut);
    }

    #[test]
    fn handles_share_the_same_curve() {
        let library = CurveLibrary::with_presets();
        let a = library.get("heavy_swing").unwrap();
        let b = library.get("heavy_swing").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn require_reports_unknown_curve() {
        let library = CurveLibrary::new();
        assert!(library.is_empty());
        assert!(matches!(
            library.require("ghost"),
            Err(EmberError::UnknownCurve(name)) if name == "ghost"
        ));
    }
}
