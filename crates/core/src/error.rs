use crate::lead::LeadValidationError;
use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    InvalidLead(#[from] LeadValidationError),
}
