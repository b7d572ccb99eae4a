//! Integration tests for `POST /api/leads`.

mod common;

use std::sync::Arc;

use agronet_db::{MemoryStore, SiteStore};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, post_json};
use serde_json::json;
use tower::ServiceExt;

fn error_fields(json: &serde_json::Value) -> Vec<String> {
    json["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn valid_lead_is_created() {
    let store = Arc::new(MemoryStore::with_fixtures());
    let app = common::build_test_app(store.clone());

    let response = post_json(
        app,
        "/api/leads",
        json!({ "name": "Maria Silva", "phone": "(65) 99999-1234", "planId": "2" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let id = json["id"].as_str().expect("lead id");
    assert!(!id.is_empty());
    assert_eq!(json["name"], "Maria Silva");
    assert_eq!(json["phone"], "(65) 99999-1234");
    assert_eq!(json["planId"], "2");
    assert_eq!(json["contacted"], false);
    assert_eq!(json["whatsappSent"], true);

    let stored = store.get_lead(id).await.unwrap().expect("stored lead");
    assert!(stored.created_at <= stored.updated_at);
}

#[tokio::test]
async fn short_name_is_rejected() {
    let response = post_json(
        common::memory_app(),
        "/api/leads",
        json!({ "name": "Jo", "phone": "(65) 99999-1234" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid lead data");
    assert_eq!(error_fields(&json), vec!["name"]);
}

#[tokio::test]
async fn malformed_phone_is_rejected() {
    let response = post_json(
        common::memory_app(),
        "/api/leads",
        json!({ "name": "Maria Silva", "phone": "999991234" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body_json(response).await), vec!["phone"]);
}

#[tokio::test]
async fn missing_fields_are_reported_together() {
    let response = post_json(common::memory_app(), "/api/leads", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body_json(response).await), vec!["name", "phone"]);
}

#[tokio::test]
async fn rejected_lead_is_not_stored() {
    let store = Arc::new(MemoryStore::with_fixtures());
    let app = common::build_test_app(store.clone());

    let response = post_json(app, "/api/leads", json!({ "name": "Jo", "phone": "1" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.list_leads().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_plan_is_rejected() {
    let store = Arc::new(MemoryStore::with_fixtures());
    let app = common::build_test_app(store.clone());

    let response = post_json(
        app,
        "/api/leads",
        json!({ "name": "Maria Silva", "phone": "(65) 99999-1234", "planId": "ghost" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid lead data");
    assert_eq!(error_fields(&json), vec!["planId"]);
    assert!(store.list_leads().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/leads")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = common::memory_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body_json(response).await), vec!["body"]);
}

#[tokio::test]
async fn referer_is_recorded_as_source() {
    let store = Arc::new(MemoryStore::with_fixtures());
    let app = common::build_test_app(store.clone());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/leads")
        .header("content-type", "application/json")
        .header("referer", "https://agronet.example/planos")
        .body(Body::from(
            json!({ "name": "Pedro Santos", "phone": "99991557588" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["source"], "https://agronet.example/planos");
    assert!(json["planId"].is_null());
}

#[tokio::test]
async fn storage_failure_returns_500() {
    let response = post_json(
        common::unreachable_pg_app(true),
        "/api/leads",
        json!({ "name": "Maria Silva", "phone": "99991557588" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "Error creating lead");
}
