//! Filtered flight set and navigation cursor.

use crate::client::{AviationClient, FeedError};
use routeglobe_core::{AirportCatalog, CurrentRoute, FlightRecord, FlightSummary};
use std::collections::HashSet;

/// Owns the ordered, filtered flight set and the cursor over it.
///
/// A refresh replaces the whole set atomically or not at all: readers never
/// see a half-updated set, and a failed fetch leaves both the set and the
/// cursor exactly as they were.
#[derive(Debug)]
pub struct FlightFeed {
    client: AviationClient,
    allowed: HashSet<String>,
    flights: Vec<FlightRecord>,
    active_index: usize,
}

impl FlightFeed {
    /// Build a feed whose allow-list is the set of cataloged airport codes.
    pub fn new(client: AviationClient, catalog: &AirportCatalog) -> Self {
        Self {
            client,
            allowed: catalog.codes().map(str::to_string).collect(),
            flights: Vec::new(),
            active_index: 0,
        }
    }

    pub fn client(&self) -> &AviationClient {
        &self.client
    }

    /// Fetch `limit` records and install the filtered result.
    pub async fn refresh(&mut self, limit: u32) -> Result<usize, FeedError> {
        let records = self.client.fetch_flights(limit).await?;
        self.accept(records)
    }

    /// Filter fetched records and install them all-or-nothing.
    ///
    /// A record survives iff both endpoint codes are in the allow-list;
    /// source order is preserved. When nothing survives the previous set and
    /// cursor stay untouched and [`FeedError::NoMatchingRoute`] is returned.
    /// On success the cursor resets to the first flight.
    pub fn accept(&mut self, records: Vec<FlightRecord>) -> Result<usize, FeedError> {
        let fetched = records.len();
        let filtered: Vec<FlightRecord> = records
            .into_iter()
            .filter(|flight| {
                self.allowed.contains(&flight.departure_iata)
                    && self.allowed.contains(&flight.arrival_iata)
            })
            .collect();

        if filtered.is_empty() {
            tracing::warn!(fetched, "no fetched flights match the allowed airports");
            return Err(FeedError::NoMatchingRoute);
        }

        tracing::info!(fetched, kept = filtered.len(), "flight set replaced");
        self.flights = filtered;
        self.active_index = 0;
        Ok(self.flights.len())
    }

    /// Advance the cursor, wrapping past the end. Silent no-op when empty.
    pub fn next(&mut self) {
        if self.flights.is_empty() {
            return;
        }
        self.active_index = (self.active_index + 1) % self.flights.len();
    }

    /// Step the cursor back, wrapping past the start. Silent no-op when empty.
    pub fn previous(&mut self) {
        if self.flights.is_empty() {
            return;
        }
        self.active_index = (self.active_index + self.flights.len() - 1) % self.flights.len();
    }

    /// The route under the cursor, or the empty sentinel when no flights are
    /// loaded.
    ///
    /// The departure/arrival slots are deliberately crossed relative to the
    /// underlying record: the viewer has always displayed the record's
    /// departure code in the arrival slot and vice versa, and downstream
    /// consumers rely on that ordering. Flagged in DESIGN.md rather than
    /// silently changed.
    pub fn current_route(&self) -> CurrentRoute {
        match self.flights.get(self.active_index) {
            Some(flight) => CurrentRoute::new(&flight.arrival_iata, &flight.departure_iata),
            None => CurrentRoute::default(),
        }
    }

    /// The record under the cursor.
    pub fn current_flight(&self) -> Option<&FlightRecord> {
        self.flights.get(self.active_index)
    }

    /// Display strings for the flight under the cursor.
    pub fn summary(&self) -> Option<FlightSummary> {
        self.current_flight().map(FlightRecord::summary)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "Airports": [
            {"Name": "Los Angeles International", "iata": "LAX", "Latitude": 33.9425, "Longitude": -118.408},
            {"Name": "John F. Kennedy International", "iata": "JFK", "Latitude": 40.6398, "Longitude": -73.7789},
            {"Name": "O'Hare International", "iata": "ORD", "Latitude": 41.9786, "Longitude": -87.9048}
        ]
    }"#;

    fn flight(departure: &str, arrival: &str) -> FlightRecord {
        FlightRecord {
            departure_iata: departure.to_string(),
            arrival_iata: arrival.to_string(),
            departure_name: String::new(),
            arrival_name: String::new(),
            flight_number: "100".to_string(),
            airline: "Test Air".to_string(),
            scheduled: String::new(),
            status: "scheduled".to_string(),
        }
    }

    fn feed() -> FlightFeed {
        let catalog = AirportCatalog::load_from_str(DATASET).unwrap();
        FlightFeed::new(AviationClient::new("http://localhost:0", "test-key"), &catalog)
    }

    #[test]
    fn filtering_drops_uncataloged_endpoints_and_preserves_order() {
        let mut feed = feed();
        let kept = feed
            .accept(vec![
                flight("LAX", "JFK"),
                flight("SFO", "ORD"),
                flight("JFK", "ORD"),
            ])
            .unwrap();

        assert_eq!(kept, 2);
        assert_eq!(feed.current_flight().unwrap().departure_iata, "LAX");
        feed.next();
        assert_eq!(feed.current_flight().unwrap().departure_iata, "JFK");
    }

    #[test]
    fn no_matching_flights_leaves_previous_state_untouched() {
        let mut feed = feed();
        feed.accept(vec![flight("LAX", "JFK"), flight("JFK", "ORD")])
            .unwrap();
        feed.next();

        let result = feed.accept(vec![flight("SFO", "SEA")]);
        assert!(matches!(result, Err(FeedError::NoMatchingRoute)));
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.active_index(), 1);
    }

    #[test]
    fn successful_replace_resets_the_cursor() {
        let mut feed = feed();
        feed.accept(vec![flight("LAX", "JFK"), flight("JFK", "ORD")])
            .unwrap();
        feed.next();
        assert_eq!(feed.active_index(), 1);

        feed.accept(vec![flight("ORD", "LAX")]).unwrap();
        assert_eq!(feed.active_index(), 0);
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn next_and_previous_are_cyclic_inverses() {
        let mut feed = feed();
        feed.accept(vec![
            flight("LAX", "JFK"),
            flight("JFK", "ORD"),
            flight("ORD", "LAX"),
        ])
        .unwrap();

        for start in 0..3 {
            while feed.active_index() != start {
                feed.next();
            }
            feed.next();
            feed.previous();
            assert_eq!(feed.active_index(), start);
            feed.previous();
            feed.next();
            assert_eq!(feed.active_index(), start);
        }
    }

    #[test]
    fn navigation_wraps_around_both_ends() {
        let mut feed = feed();
        feed.accept(vec![flight("LAX", "JFK"), flight("JFK", "ORD")])
            .unwrap();

        feed.previous();
        assert_eq!(feed.active_index(), 1);
        feed.next();
        assert_eq!(feed.active_index(), 0);
    }

    #[test]
    fn navigation_on_an_empty_feed_is_a_silent_noop() {
        let mut feed = feed();
        feed.next();
        feed.previous();
        assert_eq!(feed.active_index(), 0);
        assert!(feed.current_route().is_empty());
        assert!(feed.summary().is_none());
    }

    #[test]
    fn current_route_crosses_the_record_endpoints() {
        let mut feed = feed();
        feed.accept(vec![flight("LAX", "JFK")]).unwrap();

        let route = feed.current_route();
        assert_eq!(route.departure, "JFK");
        assert_eq!(route.arrival, "LAX");
    }

    #[test]
    fn scenario_catalog_filter_navigate() {
        // Catalog {LAX, JFK, ORD}; SFO record must be dropped.
        let mut feed = feed();
        feed.accept(vec![
            flight("LAX", "JFK"),
            flight("SFO", "ORD"),
            flight("JFK", "ORD"),
        ])
        .unwrap();

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.current_route(), CurrentRoute::new("JFK", "LAX"));
        feed.next();
        assert_eq!(feed.current_route(), CurrentRoute::new("ORD", "JFK"));
    }
}
