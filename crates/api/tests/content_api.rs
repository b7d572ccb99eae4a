//! Integration tests for the read-only content endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn plans_are_listed() {
    let response = get(common::memory_app(), "/api/plans").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let plans = json.as_array().unwrap();
    assert_eq!(plans.len(), 3);
    assert_eq!(plans[1]["name"], "Fibra 400");
    assert_eq!(plans[1]["type"], "FIBRA");
    assert_eq!(plans[1]["price"], "119.90");
    assert_eq!(plans[1]["isPopular"], true);
}

#[tokio::test]
async fn banner_plans_follow_banner_order() {
    let json = body_json(get(common::memory_app(), "/api/plans/banners").await).await;

    let orders: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["bannerOrder"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[tokio::test]
async fn plan_is_fetched_by_id() {
    let response = get(common::memory_app(), "/api/plans/3").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Rádio 50");
}

#[tokio::test]
async fn unknown_plan_returns_404() {
    let response = get(common::memory_app(), "/api/plans/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn testimonials_are_listed() {
    let json = body_json(get(common::memory_app(), "/api/testimonials").await).await;

    let testimonials = json.as_array().unwrap();
    assert_eq!(testimonials.len(), 3);
    assert!(testimonials.iter().all(|t| t["isActive"] == true));
}

#[tokio::test]
async fn faqs_are_listed_in_order() {
    let json = body_json(get(common::memory_app(), "/api/faqs").await).await;

    let orders: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[tokio::test]
async fn faqs_survive_database_outage_with_fallback() {
    let response = get(common::unreachable_pg_app(true), "/api/faqs").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn faqs_are_empty_during_outage_without_fallback() {
    let response = get(common::unreachable_pg_app(false), "/api/faqs").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn coverage_areas_are_listed() {
    let json = body_json(get(common::memory_app(), "/api/coverage-areas").await).await;

    let areas = json.as_array().unwrap();
    assert_eq!(areas.len(), 3);
    assert_eq!(areas[0]["status"], "ACTIVE");
}

#[tokio::test]
async fn covered_zip_code_reports_fiber() {
    let response = get(common::memory_app(), "/api/coverage-areas/check?zipCode=65800-000").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["zipCode"], "65800000");
    assert_eq!(json["covered"], true);
    assert_eq!(json["hasFiber"], true);
    assert_eq!(json["hasRadio"], true);
}

#[tokio::test]
async fn rural_zip_code_is_radio_only() {
    let json = body_json(
        get(common::memory_app(), "/api/coverage-areas/check?zipCode=65810000").await,
    )
    .await;

    assert_eq!(json["covered"], true);
    assert_eq!(json["hasFiber"], false);
    assert_eq!(json["hasRadio"], true);
}

#[tokio::test]
async fn unknown_zip_code_is_not_covered() {
    let json = body_json(
        get(common::memory_app(), "/api/coverage-areas/check?zipCode=01001000").await,
    )
    .await;

    assert_eq!(json["covered"], false);
    assert!(json["areas"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_zip_code_returns_400() {
    let response = get(common::memory_app(), "/api/coverage-areas/check?zipCode=6580").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn missing_zip_code_returns_400() {
    let response = get(common::memory_app(), "/api/coverage-areas/check").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "zipCode is required");
}

#[tokio::test]
async fn setting_is_fetched_by_key() {
    let response = get(common::memory_app(), "/api/settings/whatsapp_number").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["key"], "whatsapp_number");
    assert_eq!(json["value"], "559991557588");
}

#[tokio::test]
async fn unknown_setting_returns_404() {
    let response = get(common::memory_app(), "/api/settings/missing").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
