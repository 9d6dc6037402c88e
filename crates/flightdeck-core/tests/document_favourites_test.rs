#![allow(clippy::unwrap_used)]
// Integration tests for `DocumentFavourites` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use flightdeck_api::DocumentClient;
use flightdeck_core::{CoreError, DocumentFavourites, FavouritesStore, SavedFlight, UserId};

const PREFIX: &str = "/v1/projects/demo/databases/(default)/documents";

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DocumentFavourites) {
    let server = MockServer::start().await;
    let base = format!("{}{PREFIX}/", server.uri());
    let client = DocumentClient::with_client(reqwest::Client::new(), &base).unwrap();
    (server, DocumentFavourites::new(client))
}

fn owner() -> UserId {
    UserId::new("u1").unwrap()
}

fn favourites_path() -> String {
    format!("{PREFIX}/users/u1/favourites")
}

fn stored(id: &str, number: &str, status: &str) -> serde_json::Value {
    json!({
        "name": format!("projects/demo/databases/(default)/documents/users/u1/favourites/{id}"),
        "fields": {
            "flightNumber": { "stringValue": number },
            "airlineName": { "stringValue": "Air Canada" },
            "departureIata": { "stringValue": "YWG" },
            "arrivalIata": { "stringValue": "YYZ" },
            "status": { "stringValue": status },
            "userId": { "stringValue": "u1" }
        }
    })
}

// ── Add ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_add_writes_camel_case_fields_and_returns_id() {
    let (server, store) = setup().await;

    Mock::given(method("POST"))
        .and(path(favourites_path()))
        .and(body_partial_json(json!({
            "fields": {
                "flightNumber": { "stringValue": "AC430" },
                "departureIata": { "stringValue": "YWG" },
                "userId": { "stringValue": "u1" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored("new-id", "AC430", "active")))
        .expect(1)
        .mount(&server)
        .await;

    let flight = SavedFlight {
        flight_number: "AC430".into(),
        departure_iata: "YWG".into(),
        user_id: "u1".into(),
        ..SavedFlight::default()
    };
    let id = store.add(&flight, Some(&owner())).await.unwrap();

    assert_eq!(id, "new-id");
}

#[tokio::test]
async fn test_add_without_owner_sends_nothing() {
    let (server, store) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = store.add(&SavedFlight::default(), None).await;
    assert_eq!(result, Err(CoreError::NotAuthenticated));
}

// ── List ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_reads_documents_with_ids() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path(favourites_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [stored("a", "AC430", "active"), stored("b", "WS7105", "landed")]
        })))
        .mount(&server)
        .await;

    let saved = store.list(Some(&owner())).await.unwrap();

    let got: Vec<_> = saved
        .iter()
        .map(|f| (f.id.as_str(), f.flight_number.as_str(), f.status.as_str()))
        .collect();
    assert_eq!(got, [("a", "AC430", "active"), ("b", "WS7105", "landed")]);
    assert_eq!(saved[0].departure_airport, "");
}

#[tokio::test]
async fn test_list_empty_collection() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path(favourites_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert!(store.list(Some(&owner())).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_permission_denied_is_not_authenticated() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "Missing or insufficient permissions.", "status": "PERMISSION_DENIED" }
        })))
        .mount(&server)
        .await;

    let result = store.list(Some(&owner())).await;
    assert_eq!(result, Err(CoreError::NotAuthenticated));
}

#[tokio::test]
async fn test_list_server_error_is_store_error() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = store.list(Some(&owner())).await;
    assert!(
        matches!(result, Err(CoreError::Store { .. })),
        "expected Store error, got: {result:?}"
    );
}

// ── Delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_by_id() {
    let (server, store) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/doc-1", favourites_path())))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    store.delete("doc-1", Some(&owner())).await.unwrap();
}

#[tokio::test]
async fn test_delete_already_gone_counts_as_success() {
    let (server, store) = setup().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "message": "No document to delete", "status": "NOT_FOUND" }
        })))
        .mount(&server)
        .await;

    store.delete("gone", Some(&owner())).await.unwrap();
}

#[tokio::test]
async fn test_delete_blank_id_is_invalid_reference() {
    let (server, store) = setup().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = store.delete("  ", Some(&owner())).await;
    assert!(
        matches!(result, Err(CoreError::InvalidReference { .. })),
        "expected InvalidReference, got: {result:?}"
    );
}

#[tokio::test]
async fn test_delete_without_owner() {
    let (_server, store) = setup().await;
    let result = store.delete("doc-1", None).await;
    assert_eq!(result, Err(CoreError::NotAuthenticated));
}
