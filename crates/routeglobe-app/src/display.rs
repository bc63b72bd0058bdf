//! Display surface for flight text updates.
//!
//! Rendering is an external collaborator; the scheduler only pushes plain
//! strings through this trait.

use chrono::DateTime;
use routeglobe_core::FlightSummary;

pub trait DisplaySink: Send {
    /// Show the flight currently under the cursor.
    fn show_flight(&self, summary: &FlightSummary);
    /// Show a status or diagnostic line.
    fn show_message(&self, message: &str);
}

/// Display sink that writes through tracing. Stands in for a UI binding.
pub struct TracingDisplay;

impl DisplaySink for TracingDisplay {
    fn show_flight(&self, summary: &FlightSummary) {
        tracing::info!(
            route = %summary.route,
            flight_number = %summary.flight_number,
            airline = %summary.airline,
            scheduled = %format_scheduled(&summary.scheduled),
            "current flight"
        );
    }

    fn show_message(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Reformat an RFC 3339 scheduled time for display; anything else is shown
/// as received.
pub fn format_scheduled(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
