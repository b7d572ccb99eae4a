//! Lead intake validation.
//!
//! A lead is the contact form submission from the landing page. Input is
//! checked here before anything reaches storage; every failing field is
//! reported, not just the first.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Minimum length of a lead's name, counted in characters after trimming.
pub const MIN_NAME_CHARS: usize = 3;

/// `(DD) DDDDD-DDDD` / `(DD) DDDD-DDDD`, or 10-11 bare digits.
const PHONE_PATTERN: &str = r"^(?:\(\d{2}\) \d{4,5}-\d{4}|\d{10,11})$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

/// Body of `POST /api/leads`.
///
/// `name` and `phone` default to empty strings when absent so a missing
/// field is reported as a field error rather than a body parse failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadInput {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[serde(default)]
    pub plan_id: Option<String>,
}

impl LeadInput {
    /// The referenced plan, with blank values treated as absent.
    pub fn plan_id(&self) -> Option<String> {
        self.plan_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All field errors for one lead submission, sorted by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Invalid lead data: {}", self.fields().join(", "))]
pub struct LeadValidationError {
    pub errors: Vec<FieldError>,
}

impl LeadValidationError {
    /// Names of the rejected fields.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

impl From<ValidationErrors> for LeadValidationError {
    fn from(errs: ValidationErrors) -> Self {
        let mut errors: Vec<FieldError> = errs
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errs)| {
                let field = field.to_string();
                field_errs.iter().map(move |e| FieldError {
                    field: field.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Self { errors }
    }
}

/// Validate a lead submission, collecting every failing field.
pub fn validate_lead(input: &LeadInput) -> Result<(), LeadValidationError> {
    input.validate().map_err(LeadValidationError::from)
}

/// Digits of a phone number, without punctuation or spaces.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("required").with_message("Name is required".into()));
    }
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::new("length").with_message(
            format!("Name must be at least {MIN_NAME_CHARS} characters").into(),
        ));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("Phone is required".into()));
    }
    if !PHONE_RE.is_match(phone) {
        return Err(ValidationError::new("format")
            .with_message("Phone must look like (00) 00000-0000 or 10-11 digits".into()));
    }
    Ok(())
}
