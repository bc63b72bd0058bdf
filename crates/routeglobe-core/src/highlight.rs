//! Highlight state machine mapping the current route onto globe markers.
//!
//! The engine owns an explicit marker registry (code -> position + appearance)
//! built once from the catalog, instead of walking a scene graph. Applying a
//! route restores markers that left the route, highlights the ones that
//! entered it, and keeps the great-circle path in sync. Repeated application
//! of the same route is a no-op: no appearance writes, no state churn.

use crate::catalog::AirportCatalog;
use crate::models::CurrentRoute;
use crate::spatial::{great_circle_arc, project, Vec3};
use std::collections::HashMap;

/// Default number of sample points on the route path.
pub const DEFAULT_PATH_SAMPLES: usize = 50;

/// Marker dot color before any highlighting.
const BASELINE_COLOR: [f32; 3] = [0.85, 0.1, 0.1];
/// Saturated accent color applied to route endpoints.
const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
/// Emissive boost for highlighted markers, relative to the accent color.
const HIGHLIGHT_EMISSIVE_GAIN: f32 = 2.0;

/// Visual material of a marker: base color plus emissive glow, both RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub color: [f32; 3],
    pub emissive: [f32; 3],
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: BASELINE_COLOR,
            emissive: [0.0, 0.0, 0.0],
        }
    }
}

impl Appearance {
    /// A fresh highlight material derived from this appearance. Never mutates
    /// `self`: the captured baseline must survive any number of
    /// highlight/restore cycles.
    pub fn highlighted(&self) -> Self {
        Self {
            color: HIGHLIGHT_COLOR,
            emissive: [
                HIGHLIGHT_COLOR[0] * HIGHLIGHT_EMISSIVE_GAIN,
                HIGHLIGHT_COLOR[1] * HIGHLIGHT_EMISSIVE_GAIN,
                HIGHLIGHT_COLOR[2] * HIGHLIGHT_EMISSIVE_GAIN,
            ],
        }
    }
}

/// A renderable airport marker on the globe.
#[derive(Debug, Clone)]
pub struct Marker {
    position: Vec3,
    baseline: Appearance,
    current: Appearance,
    revision: u64,
}

impl Marker {
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn appearance(&self) -> &Appearance {
        &self.current
    }

    pub fn baseline(&self) -> &Appearance {
        &self.baseline
    }

    /// Bumped on every appearance write; render surfaces use it to detect
    /// markers whose material needs re-upload.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn set_appearance(&mut self, appearance: Appearance) {
        self.current = appearance;
        self.revision += 1;
    }
}

/// Registry of markers keyed by IATA code, built once at startup.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    markers: HashMap<String, Marker>,
}

impl MarkerRegistry {
    /// Place one marker per cataloged airport on a sphere of `radius`,
    /// capturing the baseline appearance for later restoration.
    pub fn from_catalog(catalog: &AirportCatalog, radius: f64) -> Self {
        let markers = catalog
            .iter()
            .map(|airport| {
                (
                    airport.iata.clone(),
                    Marker {
                        position: project(airport.latitude, airport.longitude, radius),
                        baseline: Appearance::default(),
                        current: Appearance::default(),
                        revision: 0,
                    },
                )
            })
            .collect();
        Self { markers }
    }

    pub fn get(&self, code: &str) -> Option<&Marker> {
        self.markers.get(code)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Apply highlight styling to a marker. Returns false when no marker
    /// exists for the code.
    fn highlight(&mut self, code: &str) -> bool {
        match self.markers.get_mut(code) {
            Some(marker) => {
                let styled = marker.baseline.highlighted();
                marker.set_appearance(styled);
                true
            }
            None => false,
        }
    }

    /// Reset a marker to its captured baseline.
    fn restore(&mut self, code: &str) {
        if let Some(marker) = self.markers.get_mut(code) {
            let baseline = marker.baseline.clone();
            marker.set_appearance(baseline);
        }
    }
}

/// Snapshot of the engine's observable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightState {
    pub highlighted: Vec<String>,
    pub path_visible: bool,
}

/// Drives marker highlighting and path drawing from the current route.
#[derive(Debug)]
pub struct HighlightEngine {
    registry: MarkerRegistry,
    path_samples: usize,
    highlighted: Vec<String>,
    path: Vec<Vec3>,
    path_visible: bool,
}

impl HighlightEngine {
    pub fn new(registry: MarkerRegistry, path_samples: usize) -> Self {
        Self {
            registry,
            path_samples: path_samples.max(2),
            highlighted: Vec::new(),
            path: Vec::new(),
            path_visible: false,
        }
    }

    /// Apply the latest route, called once per observation cycle.
    ///
    /// Three phases: restore markers that left the route, highlight the ones
    /// that entered it, then show the great-circle path iff exactly two
    /// distinct markers resolved. Codes without a marker are skipped, not
    /// errors. The sentinel (empty) route restores everything.
    pub fn apply(&mut self, route: &CurrentRoute) {
        let mut changed = false;

        // Restore phase: only endpoints that actually left the route.
        let stale: Vec<String> = self
            .highlighted
            .iter()
            .filter(|code| *code != &route.departure && *code != &route.arrival)
            .cloned()
            .collect();
        for code in &stale {
            self.registry.restore(code);
            changed = true;
        }
        self.highlighted.retain(|code| !stale.contains(code));

        // Select phase: idempotent, duplicate endpoints collapse to one.
        for code in [&route.departure, &route.arrival] {
            if code.is_empty() || self.highlighted.contains(code) {
                continue;
            }
            if self.registry.highlight(code) {
                self.highlighted.push(code.clone());
                changed = true;
            }
        }

        // Path phase.
        if self.highlighted.len() == 2 {
            if changed {
                let ends: Vec<Vec3> = self
                    .highlighted
                    .iter()
                    .filter_map(|code| self.registry.get(code))
                    .map(Marker::position)
                    .collect();
                if let [a, b] = ends[..] {
                    self.path = great_circle_arc(a, b, self.path_samples);
                }
            }
            self.path_visible = true;
        } else {
            self.path_visible = false;
        }
    }

    pub fn state(&self) -> HighlightState {
        HighlightState {
            highlighted: self.highlighted.clone(),
            path_visible: self.path_visible,
        }
    }

    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    /// Path geometry; meaningful only while `path_visible`.
    pub fn path(&self) -> &[Vec3] {
        &self.path
    }

    pub fn path_visible(&self) -> bool {
        self.path_visible
    }
}
