use agronet_core::error::CoreError;
use agronet_core::lead::{FieldError, LeadValidationError};
use agronet_db::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures. Implements [`IntoResponse`] to produce consistent JSON bodies:
/// `{ "message": ..., "code": ... }`, plus `errors` for rejected leads.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `agronet_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure. `message` is what the client sees.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a storage error with the message shown to the client.
    ///
    /// ```ignore
    /// state.store.list_plans().await.map_err(AppError::store("Error fetching plans"))?;
    /// ```
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { message, source }
    }

    /// A lead rejected before validation could run, e.g. malformed JSON.
    pub fn invalid_lead_body(detail: impl Into<String>) -> Self {
        AppError::Core(CoreError::InvalidLead(LeadValidationError {
            errors: vec![FieldError {
                field: "body".to_string(),
                message: detail.into(),
            }],
        }))
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// 400 body for a rejected lead, listing the failing fields.
fn invalid_lead(errors: &[FieldError]) -> (StatusCode, serde_json::Value) {
    (
        StatusCode::BAD_REQUEST,
        json!({
            "message": "Invalid lead data",
            "code": "VALIDATION_ERROR",
            "errors": errors,
        }),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "message": format!("{entity} with id {id} not found"),
                        "code": "NOT_FOUND",
                    }),
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "message": msg, "code": "VALIDATION_ERROR" }),
                ),
                CoreError::InvalidLead(err) => invalid_lead(&err.errors),
            },

            // --- Storage errors ---
            AppError::Store { message, source } => match source {
                StoreError::UnknownPlan { .. } => invalid_lead(&[FieldError {
                    field: "planId".to_string(),
                    message: source.to_string(),
                }]),
                StoreError::Conflict { .. } => (
                    StatusCode::CONFLICT,
                    json!({ "message": source.to_string(), "code": "CONFLICT" }),
                ),
                StoreError::Persistence(err) => {
                    tracing::error!(error = %err, "Storage error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "message": message, "code": "INTERNAL_ERROR" }),
                    )
                }
            },
        };

        (status, axum::Json(body)).into_response()
    }
}
