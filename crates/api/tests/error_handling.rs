//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server is involved.

use agronet_api::error::AppError;
use agronet_core::error::CoreError;
use agronet_core::lead::{validate_lead, LeadInput};
use agronet_db::StoreError;
use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Plan",
        id: "42".to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Plan with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("zipCode is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "zipCode is required");
}

#[tokio::test]
async fn invalid_lead_lists_field_errors() {
    let input = LeadInput {
        name: "Jo".into(),
        phone: "123".into(),
        plan_id: None,
    };
    let err = AppError::from(CoreError::from(validate_lead(&input).unwrap_err()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid lead data");
    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "phone"]);
}

#[tokio::test]
async fn conflict_returns_409() {
    let err = AppError::store("Error creating lead")(StoreError::Conflict {
        entity: "Lead",
        id: "abc".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["message"], "Lead with id abc already exists");
}

#[tokio::test]
async fn persistence_error_shows_operation_message_only() {
    let err = AppError::store("Error fetching plans")(StoreError::Persistence(
        sqlx::Error::PoolTimedOut,
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "Error fetching plans");
}

#[tokio::test]
async fn unknown_plan_is_reported_on_plan_id() {
    let err = AppError::store("Error creating lead")(StoreError::UnknownPlan {
        id: "ghost".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"][0]["field"], "planId");
    assert_eq!(json["errors"][0]["message"], "Plan with id ghost does not exist");
}

#[test]
fn store_helper_keeps_the_source_error() {
    let err = AppError::store("Error fetching FAQs")(StoreError::Persistence(
        sqlx::Error::RowNotFound,
    ));

    assert_matches!(
        err,
        AppError::Store {
            message: "Error fetching FAQs",
            source: StoreError::Persistence(sqlx::Error::RowNotFound),
        }
    );
}
