//! Black-box HTTP tests driving the bank API through the real router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bank_registry_backend::domain::BankService;
use bank_registry_backend::rest::{create_app, AppState};
use bank_registry_backend::storage::InMemoryBankRepository;

/// Build an app over a freshly seeded store
fn make_app() -> Router {
    let bank_service = BankService::new(Arc::new(InMemoryBankRepository::new()));
    create_app(AppState::new(bank_service))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = make_app();

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_banks_returns_all_seeded_banks() {
    let app = make_app();

    let response = app.oneshot(get_request("/api/banks")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let banks = body_json(response).await;
    let banks = banks.as_array().unwrap();
    assert!(banks.len() >= 3);
    assert!(banks.iter().any(|b| b["accountNumber"] == "1234"));
}

#[tokio::test]
async fn test_get_bank_returns_the_record() {
    let app = make_app();

    let response = app.oneshot(get_request("/api/banks/1234")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bank = body_json(response).await;
    assert_eq!(bank["trust"], 3.14);
    assert_eq!(bank["transactionFee"], 17);
}

#[tokio::test]
async fn test_get_unknown_bank_is_not_found() {
    let app = make_app();

    let response = app
        .oneshot(get_request("/api/banks/does_not_exist"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_bank_creates_the_record() {
    let app = make_app();
    let new_bank = json!({"accountNumber": "4321", "trust": 10.0, "transactionFee": 6});

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/banks", &new_bank))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, new_bank);

    let response = app.oneshot(get_request("/api/banks/4321")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, new_bank);
}

#[tokio::test]
async fn test_post_duplicate_account_number_is_bad_request() {
    let app = make_app();
    let duplicate = json!({"accountNumber": "1234", "trust": 9.9, "transactionFee": 5});

    let response = app
        .oneshot(json_request("POST", "/api/banks", &duplicate))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_blank_account_number_is_bad_request() {
    let app = make_app();
    let blank = json!({"accountNumber": "", "trust": 1.0, "transactionFee": 1});

    let response = app
        .oneshot(json_request("POST", "/api/banks", &blank))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_bank_updates_the_record() {
    let app = make_app();
    let updated_bank = json!({"accountNumber": "1234", "trust": 7.7, "transactionFee": 7});

    let response = app
        .clone()
        .oneshot(json_request("PATCH", "/api/banks", &updated_bank))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, updated_bank);

    let response = app.oneshot(get_request("/api/banks/1234")).await.unwrap();
    assert_eq!(body_json(response).await, updated_bank);
}

#[tokio::test]
async fn test_patch_unknown_bank_is_not_found() {
    let app = make_app();
    let unknown = json!({"accountNumber": "not_existing_account", "trust": 0.1, "transactionFee": 1});

    let response = app
        .oneshot(json_request("PATCH", "/api/banks", &unknown))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_bank_removes_the_record() {
    let app = make_app();

    let response = app
        .clone()
        .oneshot(delete_request("/api/banks/1234"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());

    let response = app.oneshot(get_request("/api/banks/1234")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_bank_is_not_found() {
    let app = make_app();

    let response = app
        .oneshot(delete_request("/api/banks/does_not_exist"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
