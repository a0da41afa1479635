//! Integration tests for phonebook-api endpoints
//!
//! Runs the full router against the in-memory store backend; no network
//! or database required.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

use phonebook_api::{build_router, AppState};
use phonebook_common::MemoryStore;

/// Test helper: Create app over a fresh in-memory store
fn setup_app() -> axum::Router {
    let state = AppState::new(Arc::new(MemoryStore::new()));
    // Static dir need not exist; misses fall through to unknown_endpoint
    build_router(state, "test-static-dir-that-does-not-exist")
}

/// Test helper: Create request without body
fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create request with JSON body
fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract raw body bytes from response
async fn extract_bytes(body: Body) -> Vec<u8> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body")
        .to_vec()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    serde_json::from_slice(&extract_bytes(body).await).expect("Should parse JSON")
}

/// Test helper: Create one person and return its JSON representation
async fn create_person(app: &axum::Router, name: &str, number: &str) -> Value {
    let request = json_request(
        "POST",
        "/api/persons",
        json!({ "name": name, "number": number }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    extract_json(response.into_body()).await
}

// =============================================================================
// Health Endpoint
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "phonebook-api");
    assert!(body["version"].is_string());
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_then_fetch_round_trips() {
    let app = setup_app();

    let created = create_person(&app, "Arto Hellas", "040-123456").await;
    assert_eq!(created["name"], "Arto Hellas");
    assert_eq!(created["number"], "040-123456");

    let id = created["id"].as_str().expect("id is a string");
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

    let response = app
        .oneshot(test_request("GET", &format!("/api/persons/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = extract_json(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_missing_name() {
    let app = setup_app();

    let request = json_request("POST", "/api/persons", json!({ "number": "040-123456" }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "name missing");
}

#[tokio::test]
async fn test_create_missing_number() {
    let app = setup_app();

    let request = json_request("POST", "/api/persons", json!({ "name": "Arto Hellas" }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "number missing");
}

#[tokio::test]
async fn test_create_empty_name_rejected() {
    let app = setup_app();

    let request = json_request(
        "POST",
        "/api/persons",
        json!({ "name": "", "number": "040-123456" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "name missing");
}

#[tokio::test]
async fn test_create_type_mismatch_reports_validation_message() {
    let app = setup_app();

    let request = json_request(
        "POST",
        "/api/persons",
        json!({ "name": 42, "number": "040-123456" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    let message = body["error"].as_str().expect("error message is a string");
    assert!(!message.is_empty());
}

#[tokio::test]
async fn test_create_duplicate_name_is_accepted() {
    let app = setup_app();

    create_person(&app, "Arto Hellas", "040-123456").await;
    let second = create_person(&app, "Arto Hellas", "041-654321").await;
    assert_eq!(second["name"], "Arto Hellas");

    let response = app.oneshot(test_request("GET", "/api/persons")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn test_list_starts_empty() {
    let app = setup_app();

    let response = app.oneshot(test_request("GET", "/api/persons")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_fetch_absent_well_formed_id() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("GET", "/api/persons/65a1b2c3d4e5f6a7b8c9d0e1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "person not found");
}

#[tokio::test]
async fn test_fetch_malformed_id() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("GET", "/api/persons/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "malformatted id");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_absent_id() {
    let app = setup_app();

    let request = json_request(
        "PUT",
        "/api/persons/65a1b2c3d4e5f6a7b8c9d0e1",
        json!({ "name": "New Name", "number": "000" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Person not found");
}

#[tokio::test]
async fn test_update_malformed_id() {
    let app = setup_app();

    let request = json_request(
        "PUT",
        "/api/persons/not-an-id",
        json!({ "name": "New Name", "number": "000" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "malformatted id");
}

#[tokio::test]
async fn test_update_reflects_and_persists_new_values() {
    let app = setup_app();

    let created = create_person(&app, "Arto Hellas", "040-123456").await;
    let id = created["id"].as_str().unwrap();

    let request = json_request(
        "PUT",
        &format!("/api/persons/{}", id),
        json!({ "name": "Arto Vihavainen", "number": "045-999999" }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = extract_json(response.into_body()).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Arto Vihavainen");
    assert_eq!(updated["number"], "045-999999");

    let response = app
        .oneshot(test_request("GET", &format!("/api/persons/{}", id)))
        .await
        .unwrap();
    let fetched = extract_json(response.into_body()).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_partial_update_leaves_other_field_untouched() {
    let app = setup_app();

    let created = create_person(&app, "Arto Hellas", "040-123456").await;
    let id = created["id"].as_str().unwrap();

    let request = json_request(
        "PUT",
        &format!("/api/persons/{}", id),
        json!({ "number": "045-999999" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = extract_json(response.into_body()).await;
    assert_eq!(updated["name"], "Arto Hellas");
    assert_eq!(updated["number"], "045-999999");
}

#[tokio::test]
async fn test_update_empty_field_rejected() {
    let app = setup_app();

    let created = create_person(&app, "Arto Hellas", "040-123456").await;
    let id = created["id"].as_str().unwrap();

    let request = json_request(
        "PUT",
        &format!("/api/persons/{}", id),
        json!({ "number": "" }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "number missing");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_existing_then_fetch() {
    let app = setup_app();

    let created = create_person(&app, "Arto Hellas", "040-123456").await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(test_request("DELETE", &format!("/api/persons/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(extract_bytes(response.into_body()).await.is_empty());

    let response = app
        .oneshot(test_request("GET", &format!("/api/persons/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_absent_id_still_no_content() {
    let app = setup_app();

    let response = app
        .oneshot(test_request(
            "DELETE",
            "/api/persons/65a1b2c3d4e5f6a7b8c9d0e1",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(extract_bytes(response.into_body()).await.is_empty());
}

#[tokio::test]
async fn test_delete_malformed_id() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("DELETE", "/api/persons/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "malformatted id");
}

// =============================================================================
// Info Page
// =============================================================================

#[tokio::test]
async fn test_info_with_zero_records() {
    let app = setup_app();

    let response = app.oneshot(test_request("GET", "/info")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = String::from_utf8(extract_bytes(response.into_body()).await).unwrap();
    assert!(body.contains("<p>Phonebook has info for 0 people</p>"));
    // Second paragraph carries the formatted timestamp
    assert_eq!(body.matches("<p>").count(), 2);
}

#[tokio::test]
async fn test_info_counts_records() {
    let app = setup_app();

    create_person(&app, "a", "1").await;
    create_person(&app, "b", "2").await;
    create_person(&app, "c", "3").await;

    let response = app.oneshot(test_request("GET", "/info")).await.unwrap();
    let body = String::from_utf8(extract_bytes(response.into_body()).await).unwrap();
    assert!(body.contains("<p>Phonebook has info for 3 people</p>"));
}

// =============================================================================
// Routing and Static Files
// =============================================================================

#[tokio::test]
async fn test_unknown_route() {
    let app = setup_app();

    let response = app.oneshot(test_request("GET", "/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "unknown endpoint");
}

#[tokio::test]
async fn test_static_file_is_served() {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<html>phonebook</html>",
    )
    .unwrap();

    let state = AppState::new(Arc::new(MemoryStore::new()));
    let app = build_router(state, static_dir.path());

    let response = app.oneshot(test_request("GET", "/index.html")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = String::from_utf8(extract_bytes(response.into_body()).await).unwrap();
    assert_eq!(body, "<html>phonebook</html>");
}

#[tokio::test]
async fn test_cors_allows_cross_origin_requests() {
    let app = setup_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/persons")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
