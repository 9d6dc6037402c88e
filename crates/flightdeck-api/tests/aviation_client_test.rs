#![allow(clippy::unwrap_used)]
// Integration tests for `AviationClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use flightdeck_api::{AviationClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, AviationClient) {
    let server = MockServer::start().await;
    let base_url = format!("{}/v1", server.uri());
    let client = AviationClient::with_client(
        reqwest::Client::new(),
        &base_url,
        SecretString::from("test-key".to_string()),
    )
    .unwrap();
    (server, client)
}

fn flight(number: &str, status: &str) -> serde_json::Value {
    json!({
        "flight_date": "2025-11-20",
        "flight_status": status,
        "departure": {
            "airport": "Winnipeg James Armstrong Richardson International",
            "iata": "YWG",
            "scheduled": "2025-11-20T06:00:00+00:00",
            "delay": 12
        },
        "arrival": {
            "airport": "Toronto Pearson International",
            "iata": "YYZ",
            "scheduled": "2025-11-20T09:35:00+00:00",
            "delay": null
        },
        "airline": { "name": "Air Canada", "iata": "AC" },
        "flight": { "number": "430", "iata": number }
    })
}

// ── Query tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_flights_by_number() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/flights"))
        .and(query_param("access_key", "test-key"))
        .and(query_param("flight_iata", "AC430"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": { "limit": 5, "offset": 0, "count": 1, "total": 1 },
            "data": [flight("AC430", "active")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let flights = client.flights_by_number("AC430", 5).await.unwrap();

    assert_eq!(flights.len(), 1);
    let f = &flights[0];
    assert_eq!(f.flight_status.as_deref(), Some("active"));
    assert_eq!(f.flight.as_ref().unwrap().iata.as_deref(), Some("AC430"));
    assert_eq!(f.airline.as_ref().unwrap().name.as_deref(), Some("Air Canada"));
    let dep = f.departure.as_ref().unwrap();
    assert_eq!(dep.iata.as_deref(), Some("YWG"));
    assert_eq!(dep.delay, Some(12));
    assert_eq!(f.arrival.as_ref().unwrap().delay, None);
}

#[tokio::test]
async fn test_flights_by_route_sends_both_codes() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/flights"))
        .and(query_param("dep_iata", "YWG"))
        .and(query_param("arr_iata", "YUL"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [flight("AC8620", "scheduled"), flight("WS7105", "landed")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let flights = client.flights_by_route("YWG", "YUL", 5).await.unwrap();

    let numbers: Vec<_> = flights
        .iter()
        .map(|f| f.flight.as_ref().unwrap().iata.clone().unwrap())
        .collect();
    assert_eq!(numbers, ["AC8620", "WS7105"]);
}

#[tokio::test]
async fn test_departures_and_arrivals_use_single_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/flights"))
        .and(query_param("dep_iata", "YWG"))
        .and(query_param_is_missing("arr_iata"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [flight("AC1", "active")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/flights"))
        .and(query_param("arr_iata", "YWG"))
        .and(query_param_is_missing("dep_iata"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [flight("WS2", "landed"), flight("WS3", "landed")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.departures_from("YWG", 10).await.unwrap().len(), 1);
    assert_eq!(client.arrivals_to("YWG", 10).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_null_data_is_empty_result() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/flights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&server)
        .await;

    let flights = client.flights_by_number("ZZ999", 5).await.unwrap();
    assert!(flights.is_empty());
}

#[tokio::test]
async fn test_sparse_records_decode() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/flights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "flight_status": null, "departure": null }]
        })))
        .mount(&server)
        .await;

    let flights = client.flights_by_number("AC1", 5).await.unwrap();
    assert_eq!(flights.len(), 1);
    assert!(flights[0].flight_status.is_none());
    assert!(flights[0].airline.is_none());
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_envelope_with_http_200() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/flights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {
                "code": "usage_limit_reached",
                "message": "Your monthly usage limit has been reached."
            }
        })))
        .mount(&server)
        .await;

    let result = client.flights_by_number("AC430", 5).await;

    match result {
        Err(Error::Provider { ref code, ref message }) => {
            assert_eq!(code, "usage_limit_reached");
            assert!(message.contains("usage limit"), "got: {message}");
        }
        other => panic!("expected Provider error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_access_key() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/flights"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "code": "invalid_access_key",
                "message": "You have not supplied a valid API Access Key."
            }
        })))
        .mount(&server)
        .await;

    let result = client.departures_from("YWG", 10).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let result = client.arrivals_to("YWG", 10).await;

    match &result {
        Err(err @ Error::Api { status, message }) => {
            assert_eq!(*status, 503);
            assert!(message.contains("upstream"));
            assert!(err.is_transient());
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_payload() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.flights_by_route("YWG", "YUL", 5).await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}
