//! HTTP client for the remote flight API.

use routeglobe_core::FlightRecord;
use serde::Deserialize;
use std::time::Duration;

/// Failure of a single fetch attempt. All variants are recoverable: the
/// feed's state is untouched and the user can simply trigger another fetch.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("flight request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("flight request failed: HTTP {status}")]
    Status { status: u16, body: String },
    #[error("no flight data in the response")]
    EmptyResponse,
    #[error("no flights match the allowed airports")]
    NoMatchingRoute,
}

/// Wire types for the flight API payload:
/// `{"data": [{"departure": {...}, "arrival": {...}, "airline": {...}, "flight": {...}}]}`.
/// Everything defaults to empty because the trial tier of the API regularly
/// returns null fields.
#[derive(Debug, Deserialize)]
pub(crate) struct FlightResponse {
    #[serde(default)]
    pub data: Vec<ApiFlight>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiFlight {
    #[serde(default)]
    pub departure: Option<ApiEndpoint>,
    #[serde(default)]
    pub arrival: Option<ApiEndpoint>,
    #[serde(default)]
    pub airline: Option<ApiAirline>,
    #[serde(default)]
    pub flight: Option<ApiFlightNumber>,
    #[serde(default)]
    pub flight_status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiEndpoint {
    #[serde(default)]
    pub airport: Option<String>,
    #[serde(default)]
    pub iata: Option<String>,
    #[serde(default)]
    pub scheduled: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiAirline {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiFlightNumber {
    #[serde(default)]
    pub number: Option<String>,
}

impl ApiFlight {
    pub(crate) fn into_record(self) -> FlightRecord {
        let departure = self.departure.unwrap_or_default();
        let arrival = self.arrival.unwrap_or_default();
        FlightRecord {
            departure_iata: departure.iata.unwrap_or_default(),
            arrival_iata: arrival.iata.unwrap_or_default(),
            departure_name: departure.airport.unwrap_or_default(),
            arrival_name: arrival.airport.unwrap_or_default(),
            flight_number: self
                .flight
                .and_then(|flight| flight.number)
                .unwrap_or_default(),
            airline: self
                .airline
                .and_then(|airline| airline.name)
                .unwrap_or_default(),
            scheduled: departure.scheduled.unwrap_or_default(),
            status: self.flight_status.unwrap_or_default(),
        }
    }
}

/// HTTP client for the flight API.
#[derive(Debug, Clone)]
pub struct AviationClient {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl AviationClient {
    pub fn new(base_url: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            access_key: access_key.into(),
        }
    }

    /// Fetch up to `limit` flight records.
    ///
    /// Transport failures and non-2xx statuses map to [`FeedError`]; a
    /// well-formed response with zero records is [`FeedError::EmptyResponse`].
    pub async fn fetch_flights(&self, limit: u32) -> Result<Vec<FlightRecord>, FeedError> {
        tracing::debug!(limit, "fetching flights");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status { status, body });
        }

        let payload = response.json::<FlightResponse>().await?;
        if payload.data.is_empty() {
            return Err(FeedError::EmptyResponse);
        }

        Ok(payload
            .data
            .into_iter()
            .map(ApiFlight::into_record)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_nested_api_payload() {
        let json = r#"{
            "data": [{
                "departure": {"airport": "Los Angeles International", "iata": "LAX",
                              "scheduled": "2024-05-01T08:30:00+00:00"},
                "arrival": {"airport": "John F. Kennedy International", "iata": "JFK"},
                "airline": {"name": "American Airlines"},
                "flight": {"number": "100"},
                "flight_status": "scheduled"
            }]
        }"#;

        let payload: FlightResponse = serde_json::from_str(json).unwrap();
        let record = payload.data.into_iter().next().unwrap().into_record();

        assert_eq!(record.departure_iata, "LAX");
        assert_eq!(record.arrival_iata, "JFK");
        assert_eq!(record.departure_name, "Los Angeles International");
        assert_eq!(record.flight_number, "100");
        assert_eq!(record.airline, "American Airlines");
        assert_eq!(record.scheduled, "2024-05-01T08:30:00+00:00");
        assert_eq!(record.status, "scheduled");
    }

    #[test]
    fn null_fields_collapse_to_empty_strings() {
        let json = r#"{"data": [{"departure": {"iata": "LAX"},
                                 "arrival": {"iata": null},
                                 "airline": null,
                                 "flight": {"number": null},
                                 "flight_status": null}]}"#;

        let payload: FlightResponse = serde_json::from_str(json).unwrap();
        let record = payload.data.into_iter().next().unwrap().into_record();

        assert_eq!(record.departure_iata, "LAX");
        assert!(record.arrival_iata.is_empty());
        assert!(record.airline.is_empty());
        assert!(record.flight_number.is_empty());
    }

    #[test]
    fn missing_data_array_parses_as_empty() {
        let payload: FlightResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.data.is_empty());
    }
}
