//! Static airport catalog loaded once at startup.

use crate::models::AirportRecord;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Failure to load the static airport dataset.
///
/// A load failure leaves callers with an empty catalog: every lookup misses
/// and every fetched flight is filtered out, but the process keeps running.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read airport dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse airport dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("airport dataset contains no airports")]
    Empty,
}

#[derive(Deserialize)]
struct AirportFile {
    #[serde(rename = "Airports")]
    airports: Vec<AirportRecord>,
}

/// Lookup table of allowed airports, keyed by IATA code.
///
/// Immutable after load; lives for the process lifetime.
#[derive(Debug, Default)]
pub struct AirportCatalog {
    airports: HashMap<String, AirportRecord>,
}

impl AirportCatalog {
    /// Parse the dataset document: `{"Airports": [{Name, iata, Latitude, Longitude}]}`.
    pub fn load_from_str(json: &str) -> Result<Self, CatalogError> {
        let file: AirportFile = serde_json::from_str(json)?;
        if file.airports.is_empty() {
            return Err(CatalogError::Empty);
        }
        let airports = file
            .airports
            .into_iter()
            .map(|airport| (airport.iata.clone(), airport))
            .collect();
        Ok(Self { airports })
    }

    /// Load the dataset from a file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::load_from_str(&text)
    }

    pub fn get(&self, iata: &str) -> Option<&AirportRecord> {
        self.airports.get(iata)
    }

    pub fn contains(&self, iata: &str) -> bool {
        self.airports.contains_key(iata)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AirportRecord> {
        self.airports.values()
    }

    /// All known IATA codes (the allow-list used by the feed).
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.airports.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
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

    #[test]
    fn loads_airports_by_code() {
        let catalog = AirportCatalog::load_from_str(DATASET).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("LAX"));
        assert_eq!(
            catalog.get("JFK").unwrap().name,
            "John F. Kennedy International"
        );
        assert!(catalog.get("SFO").is_none());
    }

    #[test]
    fn malformed_dataset_is_an_error() {
        assert!(matches!(
            AirportCatalog::load_from_str("not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            AirportCatalog::load_from_str(r#"{"Airports": []}"#),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            AirportCatalog::load("/nonexistent/airports.json"),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn empty_catalog_misses_every_lookup() {
        let catalog = AirportCatalog::default();
        assert!(catalog.is_empty());
        assert!(!catalog.contains("LAX"));
    }
}
