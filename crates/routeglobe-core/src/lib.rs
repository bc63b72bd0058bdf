//! Route Globe core - flight route tracking and globe highlight logic
//!
//! This crate provides the airport catalog, the spherical projection math,
//! and the highlight state machine that maps the current route onto globe
//! markers. It performs no I/O; fetching lives in `routeglobe-feed`.

pub mod catalog;
pub mod highlight;
pub mod models;
pub mod spatial;

pub use catalog::{AirportCatalog, CatalogError};
pub use highlight::{
    Appearance, HighlightEngine, HighlightState, Marker, MarkerRegistry, DEFAULT_PATH_SAMPLES,
};
pub use models::{AirportRecord, CurrentRoute, FlightRecord, FlightSummary};
pub use spatial::{great_circle_arc, project, slerp};
