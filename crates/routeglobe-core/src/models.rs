//! Core data models for flight routes and airports.

use serde::{Deserialize, Serialize};

/// A known airport from the static dataset.
///
/// Field names mirror the dataset file, which spells them capitalized except
/// for the IATA code. The code is the unique key everywhere else in the
/// system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportRecord {
    #[serde(rename = "Name")]
    pub name: String,
    pub iata: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// A single flight as kept after fetching and filtering.
///
/// Endpoint codes are guaranteed to exist in the catalog once the record has
/// survived allow-list filtering; the display names may be empty since the
/// upstream API often omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRecord {
    pub departure_iata: String,
    pub arrival_iata: String,
    #[serde(default)]
    pub departure_name: String,
    #[serde(default)]
    pub arrival_name: String,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub airline: String,
    /// Scheduled departure time as reported upstream, usually RFC 3339.
    #[serde(default)]
    pub scheduled: String,
    #[serde(default)]
    pub status: String,
}

impl FlightRecord {
    /// Display strings for this flight. Airport display names are preferred
    /// for the route text, with IATA codes as the fallback when either name
    /// is missing.
    pub fn summary(&self) -> FlightSummary {
        let route = if !self.departure_name.is_empty() && !self.arrival_name.is_empty() {
            format!("{} to {}", self.departure_name, self.arrival_name)
        } else {
            format!("{} to {}", self.departure_iata, self.arrival_iata)
        };
        FlightSummary {
            route,
            flight_number: self.flight_number.clone(),
            airline: self.airline.clone(),
            scheduled: self.scheduled.clone(),
        }
    }
}

/// The route currently selected by the navigation cursor.
///
/// Both codes are empty when no flights are loaded; consumers treat that as
/// the "restore everything" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentRoute {
    pub departure: String,
    pub arrival: String,
}

impl CurrentRoute {
    pub fn new(departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        Self {
            departure: departure.into(),
            arrival: arrival.into(),
        }
    }

    /// True for the sentinel route (no flights loaded).
    pub fn is_empty(&self) -> bool {
        self.departure.is_empty() && self.arrival.is_empty()
    }
}

/// Plain-text flight info handed to the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSummary {
    pub route: String,
    pub flight_number: String,
    pub airline: String,
    pub scheduled: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FlightRecord {
        FlightRecord {
            departure_iata: "LAX".to_string(),
            arrival_iata: "JFK".to_string(),
            departure_name: "Los Angeles International".to_string(),
            arrival_name: "John F. Kennedy International".to_string(),
            flight_number: "100".to_string(),
            airline: "American Airlines".to_string(),
            scheduled: "2024-05-01T08:30:00+00:00".to_string(),
            status: "scheduled".to_string(),
        }
    }

    #[test]
    fn summary_prefers_airport_names() {
        let summary = record().summary();
        assert_eq!(
            summary.route,
            "Los Angeles International to John F. Kennedy International"
        );
    }

    #[test]
    fn summary_falls_back_to_iata_codes() {
        let mut flight = record();
        flight.arrival_name.clear();
        assert_eq!(flight.summary().route, "LAX to JFK");
    }

    #[test]
    fn sentinel_route_is_empty() {
        assert!(CurrentRoute::default().is_empty());
        assert!(!CurrentRoute::new("LAX", "JFK").is_empty());
    }
}
