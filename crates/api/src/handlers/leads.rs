//! Handler for the lead capture form.

use agronet_core::error::CoreError;
use agronet_core::lead::{phone_digits, validate_lead, LeadInput};
use agronet_db::models::lead::CreateLead;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::REFERER;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/leads
///
/// Validate the form, record the page it was sent from, and store the lead
/// as already handed off to WhatsApp. Returns 201 with the stored lead.
pub async fn create_lead(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LeadInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| AppError::invalid_lead_body(rejection.body_text()))?;

    validate_lead(&input).map_err(CoreError::from)?;

    let mut dto = CreateLead::from_input(&input);
    dto.source = headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    dto.contacted = Some(false);
    dto.whatsapp_sent = Some(true);

    let lead = state
        .store
        .create_lead(dto)
        .await
        .map_err(AppError::store("Error creating lead"))?;

    tracing::info!(
        lead_id = %lead.id,
        plan_id = ?lead.plan_id,
        phone = %phone_digits(&lead.phone),
        "Lead captured",
    );

    Ok((StatusCode::CREATED, Json(lead)))
}
