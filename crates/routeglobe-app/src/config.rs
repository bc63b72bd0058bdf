//! Viewer configuration from environment.

use routeglobe_core::DEFAULT_PATH_SAMPLES;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    /// Flights requested per refresh.
    pub flight_limit: u32,
    pub airports_path: PathBuf,
    /// Radius of the globe the markers sit on, in scene units.
    pub globe_radius: f64,
    /// Sample points on the route path.
    pub path_samples: usize,
    /// Observation cycle period for the highlight engine.
    pub tick_interval_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("ROUTEGLOBE_API_URL")
                .unwrap_or_else(|_| "http://api.aviationstack.com/v1/flights".to_string()),
            api_key: env::var("ROUTEGLOBE_API_KEY").unwrap_or_default(),
            flight_limit: env::var("ROUTEGLOBE_FLIGHT_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
            airports_path: env::var("ROUTEGLOBE_AIRPORTS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/airports.json")),
            globe_radius: env::var("ROUTEGLOBE_GLOBE_RADIUS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(200.0),
            path_samples: env::var("ROUTEGLOBE_PATH_SAMPLES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PATH_SAMPLES),
            tick_interval_ms: env::var("ROUTEGLOBE_TICK_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
        }
    }
}
