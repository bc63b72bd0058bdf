//! Live flight API integration test.
//!
//! Run with: cargo test --test live_feed_test -- --ignored
//! Requires ROUTEGLOBE_API_KEY (and optionally ROUTEGLOBE_API_URL).

use routeglobe_feed::AviationClient;

fn api_url() -> String {
    std::env::var("ROUTEGLOBE_API_URL")
        .unwrap_or_else(|_| "http://api.aviationstack.com/v1/flights".to_string())
}

#[tokio::test]
#[ignore]
async fn fetches_real_flight_records() {
    let key = std::env::var("ROUTEGLOBE_API_KEY").expect("ROUTEGLOBE_API_KEY not set");
    let client = AviationClient::new(api_url(), key);

    let records = client.fetch_flights(5).await.unwrap();
    assert!(!records.is_empty());
    for record in &records {
        // IATA codes may be missing on some records; when present they are
        // three uppercase letters.
        for code in [&record.departure_iata, &record.arrival_iata] {
            if !code.is_empty() {
                assert_eq!(code.len(), 3, "unexpected IATA code {code:?}");
            }
        }
    }
}
